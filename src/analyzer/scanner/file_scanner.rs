use std::path::{Component, Path, PathBuf};
use tracing::debug;

use crate::analyzer::classify::{FeatureClassifier, resolve_layer};
use crate::storage::Storage;
use crate::types::{Result, SourceFile};

/// Enumerates and classifies every source file under `<root>/<source_dir>`.
pub struct FileCollector<'a> {
    root: PathBuf,
    source_dir: String,
    extension: String,
    classifier: &'a FeatureClassifier,
}

impl<'a> FileCollector<'a> {
    pub fn new<P: AsRef<Path>>(root: P, classifier: &'a FeatureClassifier) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            source_dir: "src".to_string(),
            extension: "luau".to_string(),
            classifier,
        }
    }

    pub fn with_source_dir(mut self, source_dir: impl Into<String>) -> Self {
        self.source_dir = source_dir.into();
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Sorted source files with layer and feature assigned.
    pub async fn collect(&self, storage: &dyn Storage) -> Result<Vec<SourceFile>> {
        let source_root = self.root.join(&self.source_dir);
        let paths = storage.list_files(&source_root, &self.extension).await?;

        let mut files: Vec<SourceFile> = paths
            .into_iter()
            .map(|absolute_path| {
                let relative_path = relative_path(&self.root, &absolute_path);
                SourceFile {
                    layer: resolve_layer(&relative_path),
                    feature: self.classifier.classify(&relative_path).to_string(),
                    absolute_path,
                    relative_path,
                }
            })
            .collect();

        // Text order of the `/`-joined path, shared root prefix included
        files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        debug!(
            "Collected {} .{} files under {}",
            files.len(),
            self.extension,
            source_root.display()
        );
        Ok(files)
    }
}

/// `/`-joined path of `path` relative to `root`; falls back to the full path
/// when `path` is outside `root`.
pub fn relative_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
