use tracing::{debug, warn};

use super::extract::{
    ModuleNameSource, extract_export_types, extract_public_functions, resolve_module_name,
};
use super::parser::SyntaxValidator;
use crate::types::{ModuleDoc, Result, SourceFile};

/// Builds one [`ModuleDoc`] per source file.
pub struct ModuleAnalyzer {
    validator: SyntaxValidator,
}

impl ModuleAnalyzer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            validator: SyntaxValidator::new()?,
        })
    }

    pub fn analyze(&mut self, file: &SourceFile, content: &str) -> ModuleDoc {
        let has_parse_errors = self.validator.has_errors(&file.relative_path, content);
        if has_parse_errors {
            warn!("{}: tree-sitter reported recoverable errors", file.relative_path);
        }

        let (module_name, name_source) = resolve_module_name(content, file.stem());
        if name_source == ModuleNameSource::FileStem {
            debug!(
                "{}: no trailing `return <identifier>`, using '{}' from the file name",
                file.relative_path, module_name
            );
        }

        let export_types = extract_export_types(content);
        let functions = extract_public_functions(content, &module_name);

        ModuleDoc {
            module_name,
            relative_path: file.relative_path.clone(),
            feature: file.feature.clone(),
            export_types,
            functions,
            has_parse_errors,
        }
    }
}
