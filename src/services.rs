//! Service factory for building application dependencies.
//!
//! Separates the construction of the HTTP client and the GitHub source from
//! the configuration values they are built from.

use anyhow::Result;
use log::debug;
use reqwest::{
    Client,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue},
};

use crate::{config::Config, github::GitHubSource, http::HttpClient};

/// Build an HTTP client with optional bearer authentication.
///
/// Every request carries the GitHub v3 Accept header; the Authorization
/// header is installed as a default header when a token is present.
pub fn build_http_client(token: Option<&str>) -> Result<HttpClient> {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("application/vnd.github.v3+json"),
    );

    if let Some(token) = token {
        let mut auth_value = HeaderValue::from_str(&format!("Bearer {}", token))?;
        auth_value.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth_value);
        debug!("HTTP client configured with authentication");
    }

    let client = Client::builder()
        .user_agent("devfolio")
        .default_headers(headers)
        .build()?;

    Ok(HttpClient::new(client))
}

/// Build the GitHub source from configuration.
pub fn build_source(config: &Config) -> Result<GitHubSource> {
    let http_client = build_http_client(config.token.as_deref())?;
    Ok(GitHubSource::from_http_client(http_client, &config.api_url))
}
