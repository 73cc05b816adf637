pub mod doc;
pub mod error;
pub mod source;

pub use doc::{ExportTypeDoc, FunctionDoc, ModuleDoc};
pub use error::{DocError, ErrorCategory, Result, ResultExt};
pub use source::{Layer, SourceFile};
