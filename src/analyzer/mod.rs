//! Code Analyzer Module
//!
//! - File collection and path classification (layer, feature area)
//! - Structural extraction (export identifier, types, public functions, doc comments)
//! - Tree-sitter validity check

pub mod classify;
pub mod extract;
pub mod module;
pub mod parser;
pub mod scanner;

pub use classify::{Feature, FeatureClassifier, FeatureMatcher, resolve_layer};
pub use module::ModuleAnalyzer;
pub use scanner::FileCollector;
