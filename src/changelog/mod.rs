//! Changelog Updater
//!
//! Records a merged pull request in the project changelog:
//!
//! 1. Read the event payload from the path named by an environment variable
//! 2. Skip anything that is not a merged pull request
//! 3. Skip when a line for the same PR (`PR #<n>:`) is already present
//! 4. Insert the entry at the top of `## [Unreleased]` / `### Merged PRs`

pub mod document;
pub mod entry;
pub mod event;

pub use document::{Insertion, MERGED_PRS_HEADING, UNRELEASED_HEADING, insert_entry};
pub use entry::{ChangelogEntry, marker_for};
pub use event::{PullRequest, PullRequestEvent};

use chrono::Utc;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::storage::SharedStorage;
use crate::types::{DocError, Result};

/// What an update run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    Inserted { number: u64 },
    AlreadyPresent { number: u64 },
    NotMerged,
}

/// Resolve the event payload path from the value of `var`
pub fn event_path_from(var: &str, value: Option<OsString>) -> Result<PathBuf> {
    match value {
        Some(path) if !path.is_empty() => Ok(PathBuf::from(path)),
        _ => Err(DocError::Config(format!(
            "environment variable {} is not set; it must name the pull-request event file",
            var
        ))),
    }
}

/// Resolve the event payload path from the process environment
pub fn event_path_from_env(var: &str) -> Result<PathBuf> {
    event_path_from(var, std::env::var_os(var))
}

pub struct ChangelogUpdater {
    storage: SharedStorage,
    changelog_path: PathBuf,
}

impl ChangelogUpdater {
    pub fn new(storage: SharedStorage, changelog_path: impl Into<PathBuf>) -> Self {
        Self {
            storage,
            changelog_path: changelog_path.into(),
        }
    }

    pub fn changelog_path(&self) -> &Path {
        &self.changelog_path
    }

    /// Load the event payload at `event_path` and apply it
    pub async fn apply_event_file(&self, event_path: &Path) -> Result<UpdateOutcome> {
        let json = self
            .storage
            .read_to_string(event_path)
            .await
            .map_err(|e| match e {
                DocError::Io(io) if io.kind() == std::io::ErrorKind::NotFound => {
                    DocError::Config(format!("event file {} not found", event_path.display()))
                }
                other => other,
            })?;
        let event = PullRequestEvent::from_json(&json)?;
        self.apply(&event).await
    }

    pub async fn apply(&self, event: &PullRequestEvent) -> Result<UpdateOutcome> {
        let Some(pr) = event.merged_pull_request() else {
            info!("Event is not a merged pull request, changelog unchanged");
            return Ok(UpdateOutcome::NotMerged);
        };

        let path_label = self.changelog_path.display().to_string();
        let document = self
            .storage
            .read_to_string(&self.changelog_path)
            .await
            .map_err(|e| match e {
                DocError::Io(io) if io.kind() == std::io::ErrorKind::NotFound => {
                    DocError::Changelog(format!("{} does not exist", path_label))
                }
                other => other,
            })?;

        let entry = ChangelogEntry::from_pull_request(pr, Utc::now().date_naive());
        match insert_entry(&document, &entry, &path_label)? {
            Insertion::AlreadyPresent => {
                info!("PR #{} already recorded in {}", pr.number, path_label);
                Ok(UpdateOutcome::AlreadyPresent { number: pr.number })
            }
            Insertion::Inserted(updated) => {
                self.storage.write(&self.changelog_path, &updated).await?;
                debug!("Inserted: {}", entry.render());
                info!("Recorded PR #{} in {}", pr.number, path_label);
                Ok(UpdateOutcome::Inserted { number: pr.number })
            }
        }
    }
}
