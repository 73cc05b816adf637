//! Storage Capability
//!
//! Every file-system touch of the build goes through [`Storage`], so the
//! pipeline can run against the real disk ([`FsStorage`]) or an in-memory
//! tree ([`MemoryStorage`]) without code changes.

pub mod fs;
pub mod memory;

pub use fs::FsStorage;
pub use memory::MemoryStorage;

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::types::Result;

/// Shared storage handle
pub type SharedStorage = Arc<dyn Storage>;

#[async_trait]
pub trait Storage: Send + Sync {
    /// All files under `root` with the given extension (no dot), recursively,
    /// as root-joined paths sorted by their text.
    async fn list_files(&self, root: &Path, extension: &str) -> Result<Vec<PathBuf>>;

    async fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Write `contents`, creating parent directories as needed
    async fn write(&self, path: &Path, contents: &str) -> Result<()>;

    /// Remove a directory tree. A missing tree is not an error.
    async fn remove_tree(&self, path: &Path) -> Result<()>;

    /// Storage name for logging
    fn name(&self) -> &str;
}

pub(crate) fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(extension)
}

/// Sort by the path text, not component-wise: `Plot.luau` sorts before
/// `Plot/Zeta.luau` because `.` < `/`.
pub(crate) fn sort_by_path_text(paths: &mut [PathBuf]) {
    paths.sort_by(|a, b| a.to_string_lossy().cmp(&b.to_string_lossy()));
}
