//! Pull-request event payload
//!
//! Only the fields the changelog entry needs are modeled; everything else in
//! the webhook payload is ignored.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::types::Result;

#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestEvent {
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub pull_request: Option<PullRequest>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub html_url: String,
    #[serde(default)]
    pub merged: bool,
    #[serde(default)]
    pub merged_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub user: Option<PullRequestAuthor>,
    #[serde(default)]
    pub labels: Vec<PullRequestLabel>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestAuthor {
    pub login: String,
    #[serde(default)]
    pub html_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestLabel {
    pub name: String,
}

impl PullRequestEvent {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The pull request, only if it has been merged. The event action is not
    /// consulted: a `labeled` or `edited` delivery after the merge still counts.
    pub fn merged_pull_request(&self) -> Option<&PullRequest> {
        self.pull_request.as_ref().filter(|pr| pr.merged)
    }
}
