//! Doc comment recovery for a declaration offset.
//!
//! Two styles are recognized directly above a declaration (blank lines in
//! between are skipped):
//!
//! ```text
//! --[==[            -- long-bracket block, any number of `=`
//!   Interior text
//! ]==]
//!
//! -- contiguous line comments,
//! -- joined in order
//! ```
//!
//! Anything else yields an empty string. This never fails.

use regex::Regex;
use std::sync::LazyLock;

static RE_BLOCK_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\](=*)\]\s*$").unwrap());

static RE_LINE_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*--\s?").unwrap());

/// Doc comment immediately preceding byte `offset` of `source`.
pub fn extract_doc_comment(source: &str, offset: usize) -> String {
    let mut end = offset.min(source.len());
    while !source.is_char_boundary(end) {
        end -= 1;
    }

    let lines: Vec<&str> = source[..end].split('\n').collect();
    let mut i = lines.len();
    while i > 0 && lines[i - 1].trim().is_empty() {
        i -= 1;
    }
    if i == 0 {
        return String::new();
    }

    let last = i - 1;
    if let Some(caps) = RE_BLOCK_CLOSE.captures(lines[last]) {
        let equals = caps.get(1).map_or(0, |m| m.len());
        return block_comment(&lines, last, equals);
    }

    let mut docs: Vec<&str> = lines[..i]
        .iter()
        .rev()
        .take_while(|line| line.trim().starts_with("--"))
        .map(|line| RE_LINE_MARKER.find(line).map_or(*line, |m| &line[m.end()..]))
        .collect();
    docs.reverse();
    docs.join("\n").trim().to_string()
}

/// Interior of the long-bracket comment closing on line `close`, or empty
/// when no opener with the same level exists above it.
fn block_comment(lines: &[&str], close: usize, equals: usize) -> String {
    let opener = format!("--[{}[", "=".repeat(equals));
    match (0..close).rev().find(|&j| lines[j].trim() == opener) {
        Some(open) => lines[open + 1..close].join("\n").trim().to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs_before(source: &str, needle: &str) -> String {
        let offset = source.find(needle).unwrap();
        extract_doc_comment(source, offset)
    }

    #[test]
    fn test_line_comments_joined_in_order() {
        let src = "local M = {}\n-- Adds two numbers.\n--Returns the sum.\nfunction M.Add(a, b)\nend\n";
        assert_eq!(
            docs_before(src, "function M.Add"),
            "Adds two numbers.\nReturns the sum."
        );
    }

    #[test]
    fn test_only_one_space_stripped() {
        let src = "--   indented example\nfunction M.F()\nend\n";
        assert_eq!(docs_before(src, "function"), "indented example");

        let src = "-- first\n--   code()\nfunction M.F()\nend\n";
        assert_eq!(docs_before(src, "function"), "first\n  code()");
    }

    #[test]
    fn test_blank_lines_between_comment_and_declaration_are_skipped() {
        let src = "-- Spawns a plot.\n\n\nfunction M.Spawn()\nend\n";
        assert_eq!(docs_before(src, "function"), "Spawns a plot.");
    }

    #[test]
    fn test_blank_line_inside_comment_run_stops_it() {
        let src = "-- unrelated header\n\n-- Real doc\nfunction M.F()\nend\n";
        assert_eq!(docs_before(src, "function"), "Real doc");
    }

    #[test]
    fn test_code_line_above_means_no_docs() {
        let src = "-- stale\nlocal x = 1\nfunction M.F()\nend\n";
        assert_eq!(docs_before(src, "function"), "");
    }

    #[test]
    fn test_long_bracket_block() {
        let src = "--[[\n  Creates a lease.\n  @param tenant Tenant\n]]\nfunction M.Create(tenant)\nend\n";
        assert_eq!(
            docs_before(src, "function"),
            "Creates a lease.\n  @param tenant Tenant"
        );
    }

    #[test]
    fn test_long_bracket_levels_must_match() {
        let src = "--[==[\nOuter ]] text\n]==]\nfunction M.F()\nend\n";
        assert_eq!(docs_before(src, "function"), "Outer ]] text");

        let src = "--[[\nwrong level\n]==]\nfunction M.F()\nend\n";
        assert_eq!(docs_before(src, "function"), "");
    }

    #[test]
    fn test_indented_declaration() {
        let src = "do\n    -- inner\n    function M.F()\n    end\nend\n";
        assert_eq!(docs_before(src, "function"), "inner");
    }

    #[test]
    fn test_start_of_file() {
        assert_eq!(extract_doc_comment("function M.F() end", 0), "");
        assert_eq!(extract_doc_comment("", 0), "");
    }

    #[test]
    fn test_offset_past_end_is_clamped() {
        assert_eq!(extract_doc_comment("-- tail\n", 999), "tail");
    }
}
