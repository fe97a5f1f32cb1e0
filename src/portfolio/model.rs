//! Display-ready model for the project gallery.

use chrono::DateTime;

use crate::github::types::{Commit, Repo};

/// Shown when a commit author has no avatar of their own.
pub const PLACEHOLDER_AVATAR: &str = "https://via.placeholder.com/40";

/// Shown when a commit carries no author identity at all.
const UNKNOWN_AUTHOR: &str = "Unknown";

/// Length of the abbreviated commit hash.
const SHORT_SHA_LEN: usize = 7;

/// One repository plus its recent commits, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositorySummary {
    pub name: String,
    pub description: Option<String>,
    pub url: String,
    pub language: Option<String>,
    pub stars: u32,
    pub forks: u32,
    pub topics: Vec<String>,
    /// At most three entries, newest first.
    pub commits: Vec<CommitSummary>,
}

impl RepositorySummary {
    pub fn from_api(repo: Repo, commits: Vec<CommitSummary>) -> Self {
        Self {
            name: repo.name,
            description: repo.description,
            url: repo.html_url,
            language: repo.language,
            stars: repo.stargazers_count,
            forks: repo.forks_count,
            topics: repo.topics,
            commits,
        }
    }
}

/// One commit row on a project card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitSummary {
    /// First seven characters of the commit hash.
    pub short_sha: String,
    /// First line of the commit message, unmodified.
    pub message: String,
    /// Calendar date, e.g. "May 2, 2024". Empty when the commit carries
    /// no author timestamp.
    pub date: String,
    pub author: String,
    pub avatar_url: String,
}

impl CommitSummary {
    pub fn from_api(raw: Commit) -> Self {
        let short_sha = raw.sha.chars().take(SHORT_SHA_LEN).collect();

        let message = raw
            .commit
            .message
            .lines()
            .next()
            .unwrap_or_default()
            .to_string();

        let (author, date) = match raw.commit.author {
            Some(identity) => (identity.name, format_commit_date(&identity.date)),
            None => (UNKNOWN_AUTHOR.to_string(), String::new()),
        };

        let avatar_url = raw
            .author
            .and_then(|a| a.avatar_url)
            .unwrap_or_else(|| PLACEHOLDER_AVATAR.to_string());

        Self {
            short_sha,
            message,
            date,
            author,
            avatar_url,
        }
    }
}

/// Formats an RFC 3339 timestamp as a calendar date.
/// Timestamps that fail to parse are passed through unchanged.
fn format_commit_date(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}
