use async_trait::async_trait;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::{Storage, has_extension, sort_by_path_text};
use crate::types::{Result, ResultExt};

/// Real file-system storage backed by tokio::fs
#[derive(Debug, Default, Clone)]
pub struct FsStorage;

impl FsStorage {
    pub fn new() -> Self {
        Self
    }
}

fn walk(root: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("source root {} is not a readable directory", root.display()),
        )
        .into());
    }

    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .hidden(true)
        .follow_links(false)
        .build();

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.with_context_fn(|| format!("walking {}", root.display()))?;
        let path = entry.path();
        if entry.file_type().is_some_and(|t| t.is_file()) && has_extension(path, extension) {
            files.push(path.to_path_buf());
        }
    }

    sort_by_path_text(&mut files);
    Ok(files)
}

#[async_trait]
impl Storage for FsStorage {
    async fn list_files(&self, root: &Path, extension: &str) -> Result<Vec<PathBuf>> {
        let root = root.to_path_buf();
        let extension = extension.to_string();
        tokio::task::spawn_blocking(move || walk(&root, &extension))
            .await
            .with_context("directory walk task")?
    }

    async fn read_to_string(&self, path: &Path) -> Result<String> {
        Ok(tokio::fs::read_to_string(path).await?)
    }

    async fn write(&self, path: &Path, contents: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, contents).await?;
        debug!("Wrote {} ({} bytes)", path.display(), contents.len());
        Ok(())
    }

    async fn remove_tree(&self, path: &Path) -> Result<()> {
        match tokio::fs::remove_dir_all(path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn name(&self) -> &str {
        "fs"
    }
}
