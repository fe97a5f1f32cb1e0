//! GitHub API client for the project gallery.

use anyhow::Result;
use async_trait::async_trait;
use log::debug;

use crate::http::HttpClient;

use super::types::{Commit, Repo};

/// Number of commits requested per repository.
pub const COMMITS_PER_REPO: usize = 3;

/// Read access to an account's public repositories and their commits.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectSource: Send + Sync {
    /// Fetches the account's public repository list in upstream order.
    async fn list_repos(&self, account: &str) -> Result<Vec<Repo>>;

    /// Fetches the most recent commits of one repository, newest first.
    async fn recent_commits(&self, account: &str, repo: &str) -> Result<Vec<Commit>>;
}

pub struct GitHubSource {
    http_client: HttpClient,
    api_url: String,
}

impl GitHubSource {
    /// Create from an existing HttpClient.
    pub fn from_http_client(http_client: HttpClient, api_url: &str) -> Self {
        Self {
            http_client,
            api_url: api_url.to_string(),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

#[async_trait]
impl ProjectSource for GitHubSource {
    #[tracing::instrument(skip(self))]
    async fn list_repos(&self, account: &str) -> Result<Vec<Repo>> {
        let url = format!("{}/users/{}/repos", self.api_url, account);
        debug!("Fetching repository list from {}...", url);
        self.http_client.get_json(&url).await
    }

    #[tracing::instrument(skip(self))]
    async fn recent_commits(&self, account: &str, repo: &str) -> Result<Vec<Commit>> {
        let url = format!("{}/repos/{}/{}/commits", self.api_url, account, repo);
        debug!("Fetching recent commits from {}...", url);
        self.http_client
            .get_json_with_query(&url, &[("per_page", &COMMITS_PER_REPO.to_string())])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::StatusError;
    use reqwest::Client;

    fn source_for(url: &str) -> GitHubSource {
        GitHubSource::from_http_client(HttpClient::new(Client::new()), url)
    }

    #[tokio::test]
    async fn test_list_repos() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("GET", "/users/octocat/repos")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[
                    {
                        "name": "widget",
                        "description": "A widget",
                        "html_url": "https://github.com/octocat/widget",
                        "language": "Rust",
                        "stargazers_count": 12,
                        "forks_count": 4,
                        "topics": ["gui", "tools"]
                    },
                    {
                        "name": "gadget",
                        "description": null,
                        "html_url": "https://github.com/octocat/gadget",
                        "language": null,
                        "stargazers_count": 0,
                        "forks_count": 0
                    }
                ]"#,
            )
            .create_async()
            .await;

        let repos = source_for(&url).list_repos("octocat").await.unwrap();

        mock.assert_async().await;
        assert_eq!(repos.len(), 2);
        assert_eq!(repos[0].name, "widget");
        assert_eq!(repos[0].language.as_deref(), Some("Rust"));
        assert_eq!(repos[0].topics, vec!["gui", "tools"]);
        assert_eq!(repos[1].name, "gadget");
        assert_eq!(repos[1].language, None);
        assert!(repos[1].topics.is_empty());
    }

    #[tokio::test]
    async fn test_list_repos_forbidden() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("GET", "/users/octocat/repos")
            .with_status(403)
            .create_async()
            .await;

        let result = source_for(&url).list_repos("octocat").await;

        mock.assert_async().await;
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<StatusError>(),
            Some(StatusError::RateLimited(_))
        ));
    }

    #[tokio::test]
    async fn test_recent_commits() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("GET", "/repos/octocat/widget/commits?per_page=3")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[
                    {
                        "sha": "aaaabbbbccccdddd",
                        "commit": {
                            "message": "Fix panel layout",
                            "author": {"name": "Octo Cat", "date": "2024-05-02T09:30:00Z"}
                        },
                        "author": {"avatar_url": "https://avatars.githubusercontent.com/u/1"}
                    },
                    {
                        "sha": "eeeeffff00001111",
                        "commit": {
                            "message": "Initial commit",
                            "author": {"name": "Octo Cat", "date": "2024-05-01T12:00:00Z"}
                        },
                        "author": null
                    }
                ]"#,
            )
            .create_async()
            .await;

        let commits = source_for(&url)
            .recent_commits("octocat", "widget")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(commits.len(), 2);
        assert_eq!(commits[0].sha, "aaaabbbbccccdddd");
        assert!(commits[1].author.is_none());
    }

    #[tokio::test]
    async fn test_recent_commits_server_error() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("GET", "/repos/octocat/widget/commits?per_page=3")
            .with_status(500)
            .create_async()
            .await;

        let result = source_for(&url).recent_commits("octocat", "widget").await;

        mock.assert_async().await;
        assert!(result.is_err());
    }

    #[test]
    fn test_api_url() {
        let source = source_for("https://custom.api");
        assert_eq!(source.api_url(), "https://custom.api");
    }
}
