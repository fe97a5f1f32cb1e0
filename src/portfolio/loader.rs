//! The fetch cycle: repository list, fan-out commit fetches, join.

use futures_util::future::join_all;
use log::{debug, error, warn};

use crate::github::ProjectSource;
use crate::github::client::COMMITS_PER_REPO;

use super::error::LoadError;
use super::fallback::fallback_projects;
use super::model::{CommitSummary, RepositorySummary};

/// The joined result of one fetch cycle.
///
/// `projects` is always populated: live data on success, the fixed
/// fallback dataset when `error` is set. The two are never mixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Portfolio {
    pub projects: Vec<RepositorySummary>,
    pub error: Option<LoadError>,
}

pub struct PortfolioLoader<S: ProjectSource> {
    source: S,
    account: String,
    credential_present: bool,
}

impl<S: ProjectSource> PortfolioLoader<S> {
    pub fn new(source: S, account: &str, credential_present: bool) -> Self {
        Self {
            source,
            account: account.to_string(),
            credential_present,
        }
    }

    /// Runs the fetch cycle once and returns the joined result.
    ///
    /// Output order matches the upstream repository list; no client-side
    /// sort is applied. Per-repository commit failures degrade to an
    /// empty commit list and do not fail the cycle.
    #[tracing::instrument(skip(self))]
    pub async fn load(&self) -> Portfolio {
        if !self.credential_present {
            warn!("No GitHub token configured; using fallback projects");
            return Portfolio {
                projects: fallback_projects(),
                error: Some(LoadError::MissingCredential),
            };
        }

        let repos = match self.source.list_repos(&self.account).await {
            Ok(repos) => repos,
            Err(e) => {
                error!("Failed to fetch repository list: {:#}", e);
                return Portfolio {
                    projects: fallback_projects(),
                    error: Some(LoadError::from_fetch_failure(&e)),
                };
            }
        };

        debug!("Fetched {} repositories for {}", repos.len(), self.account);

        // One commit fetch per repository, all in flight at once; join_all
        // keeps results in input order regardless of completion order.
        let commit_lists = join_all(
            repos
                .iter()
                .map(|repo| self.commits_or_empty(&repo.name)),
        )
        .await;

        let projects = repos
            .into_iter()
            .zip(commit_lists)
            .map(|(repo, commits)| RepositorySummary::from_api(repo, commits))
            .collect();

        Portfolio {
            projects,
            error: None,
        }
    }

    /// Best-effort commit fetch: failures are logged and absorbed into an
    /// empty list so a single repository can never block the gallery.
    async fn commits_or_empty(&self, repo: &str) -> Vec<CommitSummary> {
        match self.source.recent_commits(&self.account, repo).await {
            Ok(raw) => raw
                .into_iter()
                .take(COMMITS_PER_REPO)
                .map(CommitSummary::from_api)
                .collect(),
            Err(e) => {
                warn!("Failed to fetch commits for {}: {:#}", repo, e);
                Vec::new()
            }
        }
    }
}
