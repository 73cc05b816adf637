use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use super::{Storage, has_extension, sort_by_path_text};
use crate::types::{DocError, Result};

/// In-memory file tree. Directories are implicit in the stored paths.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    files: Mutex<BTreeMap<PathBuf, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file synchronously (test and fixture setup)
    pub fn insert(&self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        if let Ok(mut files) = self.files.lock() {
            files.insert(path.into(), contents.into());
        }
    }

    /// Remove a single file, returning whether it existed
    pub fn remove(&self, path: &Path) -> bool {
        self.files
            .lock()
            .map(|mut files| files.remove(path).is_some())
            .unwrap_or(false)
    }

    /// Snapshot of every stored path under `root`
    pub fn paths_under(&self, root: &Path) -> Vec<PathBuf> {
        self.files
            .lock()
            .map(|files| {
                files
                    .keys()
                    .filter(|p| p.starts_with(root))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn get(&self, path: &Path) -> Option<String> {
        self.files.lock().ok()?.get(path).cloned()
    }

    fn lock(&self) -> Result<MutexGuard<'_, BTreeMap<PathBuf, String>>> {
        self.files
            .lock()
            .map_err(|e| DocError::Storage(format!("memory storage poisoned: {}", e)))
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn list_files(&self, root: &Path, extension: &str) -> Result<Vec<PathBuf>> {
        let mut paths: Vec<PathBuf> = self
            .lock()?
            .keys()
            .filter(|p| p.starts_with(root) && has_extension(p, extension))
            .cloned()
            .collect();
        // BTreeMap order is component-wise
        sort_by_path_text(&mut paths);
        Ok(paths)
    }

    async fn read_to_string(&self, path: &Path) -> Result<String> {
        self.lock()?.get(path).cloned().ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{} not found", path.display()),
            )
            .into()
        })
    }

    async fn write(&self, path: &Path, contents: &str) -> Result<()> {
        self.lock()?.insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    async fn remove_tree(&self, path: &Path) -> Result<()> {
        self.lock()?.retain(|p, _| !p.starts_with(path));
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_files_filters_by_root_and_extension() {
        let storage = MemoryStorage::new();
        storage.insert("/repo/src/Shared/B.luau", "");
        storage.insert("/repo/src/Client/A.luau", "");
        storage.insert("/repo/src/Client/readme.md", "");
        storage.insert("/repo/docs/C.luau", "");

        let files = storage
            .list_files(Path::new("/repo/src"), "luau")
            .await
            .unwrap();
        assert_eq!(
            files,
            vec![
                PathBuf::from("/repo/src/Client/A.luau"),
                PathBuf::from("/repo/src/Shared/B.luau"),
            ]
        );
    }

    #[tokio::test]
    async fn test_list_files_orders_by_path_text() {
        let storage = MemoryStorage::new();
        storage.insert("/repo/src/Server/Services/Plot/Zeta.luau", "");
        storage.insert("/repo/src/Server/Services/Plot.luau", "");
        storage.insert("/repo/src/Server/Services/Plot-Old.luau", "");

        let files = storage
            .list_files(Path::new("/repo/src"), "luau")
            .await
            .unwrap();
        assert_eq!(
            files,
            vec![
                PathBuf::from("/repo/src/Server/Services/Plot-Old.luau"),
                PathBuf::from("/repo/src/Server/Services/Plot.luau"),
                PathBuf::from("/repo/src/Server/Services/Plot/Zeta.luau"),
            ]
        );
    }

    #[tokio::test]
    async fn test_remove_tree_only_touches_prefix() {
        let storage = MemoryStorage::new();
        storage.insert("/out/api/index.md", "x");
        storage.insert("/out-other/keep.md", "y");

        storage.remove_tree(Path::new("/out")).await.unwrap();

        assert!(storage.get(Path::new("/out/api/index.md")).is_none());
        assert_eq!(storage.get(Path::new("/out-other/keep.md")).as_deref(), Some("y"));
    }

    #[tokio::test]
    async fn test_read_missing_is_io_error() {
        let storage = MemoryStorage::new();
        let err = storage.read_to_string(Path::new("/nope.luau")).await.unwrap_err();
        assert!(matches!(err, DocError::Io(_)));
    }
}
