use tree_sitter::Parser as TsParser;

use crate::types::{DocError, Result};

/// Grammar-aware validity check for Luau source.
///
/// Only reports whether the tree holds recoverable error nodes; extraction
/// never depends on the result.
pub struct SyntaxValidator {
    parser: TsParser,
}

impl SyntaxValidator {
    pub fn new() -> Result<Self> {
        let mut parser = TsParser::new();
        parser
            .set_language(&tree_sitter_luau::LANGUAGE.into())
            .map_err(|e| DocError::Parse {
                message: format!("Failed to set Luau language: {}", e),
                path: String::new(),
            })?;
        Ok(Self { parser })
    }

    /// `true` when the syntax tree contains any error or missing node.
    /// A parse that produces no tree at all counts as erroneous.
    pub fn has_errors(&mut self, path: &str, content: &str) -> bool {
        match self.parser.parse(content, None) {
            Some(tree) => tree.root_node().has_error(),
            None => {
                tracing::debug!("tree-sitter produced no tree for {}", path);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_module() {
        let mut validator = SyntaxValidator::new().unwrap();
        let src = "local M = {}\n\nfunction M.Add(a: number, b: number): number\n\treturn a + b\nend\n\nreturn M\n";
        assert!(!validator.has_errors("M.luau", src));
    }

    #[test]
    fn test_broken_module() {
        let mut validator = SyntaxValidator::new().unwrap();
        let src = "local M = {\nfunction M.Add(a, b\n\treturn a +\nend\n";
        assert!(validator.has_errors("Broken.luau", src));
    }

    #[test]
    fn test_validator_is_reusable() {
        let mut validator = SyntaxValidator::new().unwrap();
        assert!(validator.has_errors("a.luau", "local = ="));
        assert!(!validator.has_errors("b.luau", "local x = 1\n"));
    }
}
