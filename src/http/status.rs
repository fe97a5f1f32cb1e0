//! Classification of HTTP failures into the user-visible taxonomy.

use reqwest::StatusCode;

/// HTTP failures that warrant a distinct user-facing message.
#[derive(Debug)]
pub enum StatusError {
    /// Rate limit exceeded (HTTP 403 or 429)
    RateLimited(String),
    /// Authentication failed (HTTP 401)
    AuthenticationFailed(String),
    /// Resource not found (HTTP 404)
    NotFound(String),
    /// Any other non-success status
    Http(String),
}

impl std::fmt::Display for StatusError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusError::RateLimited(msg) => {
                write!(f, "Rate limit exceeded: {}", msg)
            }
            StatusError::AuthenticationFailed(msg) => {
                write!(f, "Authentication failed: {}. Check your GITHUB_TOKEN.", msg)
            }
            StatusError::NotFound(msg) => {
                write!(f, "Not found: {}", msg)
            }
            StatusError::Http(msg) => {
                write!(f, "Request failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for StatusError {}

/// Classifies a status-level failure from `error_for_status()`.
///
/// GitHub reports an exhausted rate limit as 403 on unauthenticated
/// requests and 429 on secondary limits; both map to `RateLimited`.
pub fn classify_status(error: reqwest::Error) -> anyhow::Error {
    let Some(status) = error.status() else {
        return anyhow::Error::from(error);
    };

    let classified = match status {
        StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS => {
            StatusError::RateLimited("GitHub API rate limit exceeded".to_string())
        }
        StatusCode::UNAUTHORIZED => {
            StatusError::AuthenticationFailed("Invalid or missing authentication token".to_string())
        }
        StatusCode::NOT_FOUND => {
            StatusError::NotFound("The requested resource was not found".to_string())
        }
        s => StatusError::Http(format!("HTTP {} error", s.as_u16())),
    };

    anyhow::Error::from(classified)
}
