use chrono::NaiveDate;

use super::event::PullRequest;

const UNKNOWN_AUTHOR: &str = "unknown";
const UNTITLED: &str = "Untitled PR";

/// One rendered changelog line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogEntry {
    pub number: u64,
    pub title: String,
    pub author_login: String,
    pub author_url: String,
    pub merged_on: NaiveDate,
    /// Sorted alphabetically, case-insensitive
    pub labels: Vec<String>,
    pub url: String,
}

impl ChangelogEntry {
    /// Build from a merged pull request. `fallback_date` is used when the
    /// payload carries no merge timestamp.
    pub fn from_pull_request(pr: &PullRequest, fallback_date: NaiveDate) -> Self {
        let author_login = pr
            .user
            .as_ref()
            .map(|user| user.login.trim())
            .filter(|login| !login.is_empty())
            .unwrap_or(UNKNOWN_AUTHOR)
            .to_string();
        let author_url = pr
            .user
            .as_ref()
            .map(|user| user.html_url.trim())
            .filter(|url| !url.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("https://github.com/{}", author_login));

        let title = pr.title.split_whitespace().collect::<Vec<_>>().join(" ");
        let title = if title.is_empty() {
            UNTITLED.to_string()
        } else {
            title
        };

        let mut labels: Vec<String> = pr
            .labels
            .iter()
            .map(|l| l.name.clone())
            .filter(|name| !name.is_empty())
            .collect();
        labels.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b)));

        Self {
            number: pr.number,
            title,
            author_login,
            author_url,
            merged_on: pr
                .merged_at
                .map(|at| at.date_naive())
                .unwrap_or(fallback_date),
            labels,
            url: pr.html_url.clone(),
        }
    }

    /// Idempotence marker; the line itself starts with it
    pub fn marker(&self) -> String {
        marker_for(self.number)
    }

    pub fn render(&self) -> String {
        let labels = if self.labels.is_empty() {
            String::new()
        } else {
            format!(", labels: {}", self.labels.join(", "))
        };

        format!(
            "- {} {} ([@{}]({}), {}{}) ([link]({}))",
            self.marker(),
            self.title,
            self.author_login,
            self.author_url,
            self.merged_on.format("%Y-%m-%d"),
            labels,
            self.url
        )
    }
}

/// `PR #<n>:`. The colon keeps `PR #7:` from matching `PR #70:`.
pub fn marker_for(number: u64) -> String {
    format!("PR #{}:", number)
}
