//! Structural Extractors
//!
//! Line and pattern based recovery of module facts. None of these fail:
//! irregular source degrades to empty or placeholder output.

pub mod doc_comment;
pub mod export_type;
pub mod function;
pub mod module_name;

pub use doc_comment::extract_doc_comment;
pub use export_type::extract_export_types;
pub use function::extract_public_functions;
pub use module_name::{ModuleNameSource, resolve_module_name};
