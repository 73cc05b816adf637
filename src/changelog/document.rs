//! Changelog document editing
//!
//! Line-oriented: headings are recognized by prefix, everything else is kept
//! byte-for-byte, including the document's line ending (`\r\n` or `\n`).
//! Layout produced for a fresh section:
//!
//! ```text
//! # Changelog
//!
//! ## [Unreleased]
//!
//! ### Merged PRs
//!
//! - PR #12: ... ([link](...))
//! ```

use regex::Regex;
use std::sync::LazyLock;

use super::entry::ChangelogEntry;
use crate::types::{DocError, Result};

pub const UNRELEASED_HEADING: &str = "## [Unreleased]";
pub const MERGED_PRS_HEADING: &str = "### Merged PRs";

static RE_UNRELEASED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^##\s+(?:\[unreleased\]|unreleased)\s*$").unwrap());

static RE_MERGED_PRS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^###\s+merged\s+prs\s*$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Insertion {
    /// Updated document text
    Inserted(String),
    /// The entry's marker is already present
    AlreadyPresent,
}

/// Insert `entry` at the top of the Merged PRs list of the Unreleased section.
///
/// `path` only labels the error when no anchor can be found.
pub fn insert_entry(document: &str, entry: &ChangelogEntry, path: &str) -> Result<Insertion> {
    if document.contains(&entry.marker()) {
        return Ok(Insertion::AlreadyPresent);
    }

    let mut lines: Vec<String> = document.lines().map(str::to_string).collect();
    let line = entry.render();

    match lines.iter().position(|l| RE_UNRELEASED.is_match(l)) {
        Some(unreleased) => {
            let end = section_end(&lines, unreleased + 1);
            let merged = (unreleased + 1..end).find(|&i| RE_MERGED_PRS.is_match(&lines[i]));

            match merged {
                Some(heading) => {
                    let at = skip_blank(&lines, heading + 1, end);
                    if at < end && is_list_item(&lines[at]) {
                        lines.insert(at, line);
                    } else {
                        splice_block(&mut lines, at, vec![line]);
                    }
                }
                None => {
                    let at = skip_blank(&lines, unreleased + 1, end);
                    splice_block(
                        &mut lines,
                        at,
                        vec![MERGED_PRS_HEADING.to_string(), String::new(), line],
                    );
                }
            }
        }
        None => {
            let title = lines
                .iter()
                .position(|l| l.starts_with("# "))
                .ok_or_else(|| DocError::MissingAnchor {
                    anchor: UNRELEASED_HEADING.to_string(),
                    path: path.to_string(),
                })?;
            let at = section_end(&lines, title + 1);
            splice_block(
                &mut lines,
                at,
                vec![
                    UNRELEASED_HEADING.to_string(),
                    String::new(),
                    MERGED_PRS_HEADING.to_string(),
                    String::new(),
                    line,
                ],
            );
        }
    }

    let newline = if document.contains("\r\n") { "\r\n" } else { "\n" };
    let mut updated = lines.join(newline);
    updated.push_str(newline);
    Ok(Insertion::Inserted(updated))
}

/// Index of the next level-1 or level-2 heading at or after `from`
fn section_end(lines: &[String], from: usize) -> usize {
    (from..lines.len())
        .find(|&i| lines[i].starts_with("# ") || lines[i].starts_with("## "))
        .unwrap_or(lines.len())
}

fn skip_blank(lines: &[String], mut at: usize, end: usize) -> usize {
    while at < end && lines[at].trim().is_empty() {
        at += 1;
    }
    at
}

fn is_list_item(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with("- ") || trimmed.starts_with("* ")
}

/// Insert `block` at `at`, keeping one blank line on each side
fn splice_block(lines: &mut Vec<String>, at: usize, mut block: Vec<String>) {
    if at < lines.len() && !lines[at].trim().is_empty() {
        block.push(String::new());
    }
    if at > 0 && !lines[at - 1].trim().is_empty() {
        block.insert(0, String::new());
    }
    lines.splice(at..at, block);
}
