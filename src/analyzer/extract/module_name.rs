use regex::Regex;
use std::sync::LazyLock;

static RE_TRAILING_RETURN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\A|\n)return\s+([A-Za-z_][A-Za-z0-9_]*)\s*\z").unwrap()
});

// ASCII word characters only; `\W` in the regex crate is Unicode-aware
static RE_NON_WORD_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]+").unwrap());

/// How a module's export identifier was determined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleNameSource {
    /// `return <identifier>` closes the file
    TrailingReturn,
    /// Derived from the file stem
    FileStem,
}

/// Identifier under which a module publishes its surface.
///
/// A top-level `return <identifier>` at end of file (trailing whitespace
/// ignored) wins; otherwise the file stem with each run of characters
/// outside `[A-Za-z0-9_]` collapsed to a single `_`.
pub fn resolve_module_name(source: &str, file_stem: &str) -> (String, ModuleNameSource) {
    if let Some(name) = RE_TRAILING_RETURN
        .captures(source)
        .and_then(|caps| caps.get(1))
    {
        return (name.as_str().to_string(), ModuleNameSource::TrailingReturn);
    }

    let sanitized = RE_NON_WORD_RUN.replace_all(file_stem, "_").into_owned();
    (sanitized, ModuleNameSource::FileStem)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_return() {
        let (name, source) = resolve_module_name("local Foo = {}\nreturn Foo\n", "Whatever");
        assert_eq!(name, "Foo");
        assert_eq!(source, ModuleNameSource::TrailingReturn);
    }

    #[test]
    fn test_trailing_whitespace_ignored() {
        let (name, _) = resolve_module_name("local M = {}\nreturn M   \n\n\t\n", "x");
        assert_eq!(name, "M");
    }

    #[test]
    fn test_filename_fallback() {
        let (name, source) = resolve_module_name("-- no return\nlocal x = 1\n", "my-module");
        assert_eq!(name, "my_module");
        assert_eq!(source, ModuleNameSource::FileStem);
    }

    #[test]
    fn test_non_word_runs_collapse_to_one_underscore() {
        let (name, _) = resolve_module_name("", "a--b.c d");
        assert_eq!(name, "a_b_c_d");
        let (name, _) = resolve_module_name("", "Plot (copy)");
        assert_eq!(name, "Plot_copy_");
        let (name, _) = resolve_module_name("", "Café");
        assert_eq!(name, "Caf_");
    }

    #[test]
    fn test_table_literal_return_falls_back() {
        let src = "local Service = {}\nreturn { Start = Service.Start }\n";
        let (name, source) = resolve_module_name(src, "LeaseService");
        assert_eq!(name, "LeaseService");
        assert_eq!(source, ModuleNameSource::FileStem);
    }

    #[test]
    fn test_indented_or_nested_return_is_not_top_level() {
        let src = "local M = {}\nfunction M.f()\n    return M\nend\n";
        let (name, _) = resolve_module_name(src, "Mod");
        assert_eq!(name, "Mod");
    }

    #[test]
    fn test_return_must_close_the_file() {
        let src = "local A = {}\nreturn A\nlocal unreachable = 1\n";
        let (name, _) = resolve_module_name(src, "file");
        assert_eq!(name, "file");
    }

    #[test]
    fn test_file_that_is_only_a_return() {
        let (name, _) = resolve_module_name("return Solo\n", "solo");
        assert_eq!(name, "Solo");
    }
}
