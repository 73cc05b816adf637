//! Extracted documentation facts
//!
//! Everything here is derived fresh on each run and never persisted.

use serde::Serialize;

/// An `export type` declaration recovered from source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportTypeDoc {
    /// Declared name, or `type_<ordinal>` when the name could not be recovered
    pub name: String,
    /// Full multi-line declaration text, trimmed
    pub signature: String,
}

/// A public function declared on the module's export identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionDoc {
    pub name: String,
    /// Canonical signature, e.g. `function M.Foo(a, b): boolean`
    pub signature: String,
    /// Preceding doc comment with markers stripped; empty when absent
    pub docs: String,
}

/// Structural summary of one source file within a scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleDoc {
    pub module_name: String,
    pub relative_path: String,
    pub feature: String,
    pub export_types: Vec<ExportTypeDoc>,
    pub functions: Vec<FunctionDoc>,
    /// The syntax tree contains at least one recoverable error node
    pub has_parse_errors: bool,
}

impl ModuleDoc {
    pub fn parse_status(&self) -> &'static str {
        if self.has_parse_errors {
            "tree-sitter parse has recoverable errors"
        } else {
            "ok"
        }
    }
}
