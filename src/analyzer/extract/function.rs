use regex::Regex;
use std::sync::LazyLock;

use super::doc_comment::extract_doc_comment;
use crate::types::FunctionDoc;

// function <owner><. or :><name>(<params>)[: <return type>]
static RE_MEMBER_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"function\s+([A-Za-z_][A-Za-z0-9_]*)\s*([.:])\s*([A-Za-z_][A-Za-z0-9_]*)",
        r"\s*\(([\s\S]*?)\)\s*(?::\s*([^\n]+))?",
    ))
    .unwrap()
});

static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

fn normalize_whitespace(value: &str) -> String {
    RE_WHITESPACE.replace_all(value, " ").trim().to_string()
}

/// Functions declared on `module_name` (`M.f` or `M:f`), in source order.
///
/// The owner must equal `module_name` exactly; declarations on any other
/// table are not part of the module's public surface.
pub fn extract_public_functions(source: &str, module_name: &str) -> Vec<FunctionDoc> {
    RE_MEMBER_FUNCTION
        .captures_iter(source)
        .filter(|caps| &caps[1] == module_name)
        .map(|caps| {
            let separator = &caps[2];
            let name = &caps[3];
            let params = normalize_whitespace(&caps[4]);
            let return_type = caps
                .get(5)
                .map(|m| normalize_whitespace(m.as_str()))
                .unwrap_or_default();

            let mut signature = format!("function {}{}{}({})", module_name, separator, name, params);
            if !return_type.is_empty() {
                signature.push_str(": ");
                signature.push_str(&return_type);
            }

            let offset = caps.get(0).map_or(0, |m| m.start());
            FunctionDoc {
                name: name.to_string(),
                signature,
                docs: extract_doc_comment(source, offset),
            }
        })
        .collect()
}
