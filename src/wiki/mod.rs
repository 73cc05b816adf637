//! Documentation Site Generation
//!
//! Deterministic full rebuild of the generated documentation tree:
//!
//! ```text
//! <output>/
//! ├── architecture/overview.md     layer counts
//! ├── features/<feature>.md        files per feature, grouped by layer
//! └── api/
//!     ├── <scope>.md               module docs for one scope glob
//!     └── index.md                 links to every scope page
//! ```

pub mod builder;
pub mod pages;

pub use builder::{BuildContext, BuildReport, DocBuilder, build_docs};
pub use pages::{LayerCounts, render_api_index, render_architecture, render_feature, render_scope};
