//! luaudoc - Architecture and API Reference Generator for Luau Codebases
//!
//! Scans a Luau source tree laid out by runtime layer (`src/Client`,
//! `src/Server`, `src/Shared`, `src/Network`) and regenerates a markdown
//! documentation tree from scratch on every run.
//!
//! ## Pipeline
//!
//! ```text
//! FileCollector ──► FeatureClassifier ──► architecture/overview.md
//!       │                                 features/<feature>.md
//!       └──► scope globs ──► ModuleAnalyzer ──► api/<scope>.md
//!                                              api/index.md
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use luaudoc::{BuildContext, Config, FsStorage, build_docs};
//!
//! let ctx = BuildContext::with_storage(Config::default(), FsStorage::new());
//! let report = build_docs(&ctx).await?;
//! ```
//!
//! ## Modules
//!
//! - [`analyzer`]: file collection, layer/feature classification, structural extraction
//! - [`wiki`]: page rendering and the rebuild pipeline
//! - [`storage`]: file-system capability (disk or in-memory)
//! - [`changelog`]: merged pull-request changelog updater
//! - [`config`]: layered configuration

pub mod analyzer;
pub mod changelog;
pub mod cli;
pub mod config;
pub mod storage;
pub mod types;
pub mod wiki;

// =============================================================================
// Core Re-exports
// =============================================================================

// Configuration
pub use config::{Config, ConfigLoader, ENV_PREFIX, PROJECT_CONFIG_FILE};

// Error Types
pub use types::error::{DocError, ErrorCategory, Result, ResultExt};

// Storage
pub use storage::{FsStorage, MemoryStorage, SharedStorage, Storage};

// =============================================================================
// Pipeline Re-exports
// =============================================================================

pub use analyzer::{FeatureClassifier, FileCollector, ModuleAnalyzer};
pub use changelog::{ChangelogUpdater, UpdateOutcome};
pub use wiki::{BuildContext, BuildReport, build_docs};
