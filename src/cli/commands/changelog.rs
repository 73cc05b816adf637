//! Changelog Command
//!
//! Records the merged pull request described by the CI event payload.
//!
//! Usage:
//!   GITHUB_EVENT_PATH=event.json luaudoc changelog [--event <path>]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::changelog::{ChangelogUpdater, UpdateOutcome, event_path_from_env};
use crate::cli::ui::Output;
use crate::config::ConfigLoader;
use crate::storage::FsStorage;
use crate::types::Result;

pub async fn run(config_path: &Path, event: Option<PathBuf>, output: &Output) -> Result<()> {
    let config = ConfigLoader::load(config_path)?;
    let event_path = match event {
        Some(path) => path,
        None => event_path_from_env(&config.changelog.event_path_env)?,
    };

    let updater = ChangelogUpdater::new(Arc::new(FsStorage::new()), config.changelog_path());
    let changelog = updater.changelog_path().display().to_string();

    match updater.apply_event_file(&event_path).await? {
        UpdateOutcome::Inserted { number } => {
            output.success(&format!("Recorded PR #{} in {}", number, changelog));
        }
        UpdateOutcome::AlreadyPresent { number } => {
            output.info(&format!("PR #{} is already in {}", number, changelog));
        }
        UpdateOutcome::NotMerged => {
            output.info("Not a merged pull request, nothing to record");
        }
    }
    Ok(())
}
