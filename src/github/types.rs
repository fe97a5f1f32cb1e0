//! GitHub API response types.

use serde::Deserialize;

/// One entry of `GET /users/{account}/repos`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Repo {
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub forks_count: u32,
    #[serde(default)]
    pub topics: Vec<String>,
}

/// One entry of `GET /repos/{account}/{repo}/commits`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Commit {
    pub sha: String,
    pub commit: CommitDetail,
    /// The GitHub user who authored the commit. Null when the commit
    /// author has no associated account.
    pub author: Option<CommitAuthor>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct CommitDetail {
    pub message: String,
    pub author: Option<GitAuthor>,
}

/// Author identity recorded in the commit itself.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct GitAuthor {
    pub name: String,
    pub date: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct CommitAuthor {
    pub avatar_url: Option<String>,
}
