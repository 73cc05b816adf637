//! `export type` declaration recovery by brace balance.

use regex::Regex;
use std::sync::LazyLock;

use crate::types::ExportTypeDoc;

const EXPORT_TYPE_KEYWORD: &str = "export type ";

static RE_TYPE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^export type\s+([A-Za-z_][A-Za-z0-9_]*)").unwrap());

/// All exported type declarations, in source order.
///
/// A declaration spans from its keyword line to the first line after which
/// the running brace balance is `<= 0` and an `=` has been seen. Without an
/// `=` the span runs to end of file. Spans never overlap.
pub fn extract_export_types(source: &str) -> Vec<ExportTypeDoc> {
    let lines: Vec<&str> = source.split('\n').collect();
    let mut results = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        if !lines[i].trim_start().starts_with(EXPORT_TYPE_KEYWORD) {
            i += 1;
            continue;
        }

        let start = i;
        let end = declaration_end(&lines, start);
        let snippet = lines[start..=end].join("\n").trim().to_string();

        let name = RE_TYPE_NAME
            .captures(&snippet)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| format!("type_{}", results.len() + 1));

        results.push(ExportTypeDoc {
            name,
            signature: snippet,
        });
        i = end + 1;
    }

    results
}

fn declaration_end(lines: &[&str], start: usize) -> usize {
    let mut balance: i64 = 0;
    let mut saw_equals = false;

    for (end, line) in lines.iter().enumerate().skip(start) {
        for ch in line.chars() {
            match ch {
                '{' => balance += 1,
                '}' => balance -= 1,
                _ => {}
            }
        }
        if line.contains('=') {
            saw_equals = true;
        }
        if balance <= 0 && saw_equals {
            return end;
        }
    }

    lines.len() - 1
}
