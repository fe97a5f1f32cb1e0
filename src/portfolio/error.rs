//! User-visible failures of the fetch cycle.

use crate::http::StatusError;

/// Why the gallery fell back to sample projects.
///
/// Carried next to the fallback dataset so the banner can explain the
/// degraded content; never fatal to the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// No credential configured; detected before any request.
    MissingCredential,
    /// The repository list fetch hit the API rate limit.
    RateLimited,
    /// Any other transport, HTTP, or parse failure on the list fetch.
    Fetch(String),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::MissingCredential => {
                write!(
                    f,
                    "GitHub token is not configured. Set the GITHUB_TOKEN environment variable to show live projects."
                )
            }
            LoadError::RateLimited => {
                write!(
                    f,
                    "GitHub API rate limit exceeded. Showing sample projects instead."
                )
            }
            LoadError::Fetch(msg) => {
                write!(f, "Could not load projects from GitHub: {}", msg)
            }
        }
    }
}

impl std::error::Error for LoadError {}

impl LoadError {
    /// Folds a list-fetch failure into the user-visible taxonomy.
    pub fn from_fetch_failure(error: &anyhow::Error) -> Self {
        match error.downcast_ref::<StatusError>() {
            Some(StatusError::RateLimited(_)) => LoadError::RateLimited,
            _ => LoadError::Fetch(format!("{}", error.root_cause())),
        }
    }
}
