//! Thin HTTP client for JSON API requests.
//!
//! Every request is a single best-effort attempt; failed requests surface a
//! classified error and are never retried.

use anyhow::{Context, Result};
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;

use super::status::classify_status;

#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client wrapping the given reqwest Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Returns a reference to the underlying reqwest Client.
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Performs a GET request and deserializes the JSON response.
    #[tracing::instrument(skip(self))]
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("GET JSON from {}...", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to send request")?;

        let response = response.error_for_status().map_err(classify_status)?;

        let result = response
            .json::<T>()
            .await
            .context("Failed to parse JSON response")?;

        Ok(result)
    }

    /// Performs a GET request with query parameters and deserializes the
    /// JSON response.
    #[tracing::instrument(skip(self, query))]
    pub async fn get_json_with_query<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        debug!("GET JSON from {} with query {:?}...", url, query);

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .context("Failed to send request")?;

        let response = response.error_for_status().map_err(classify_status)?;

        let result = response
            .json::<T>()
            .await
            .context("Failed to parse JSON response")?;

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::StatusError;

    #[tokio::test]
    async fn test_get_json_success() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("GET", "/test")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"name": "test", "value": 42}"#)
            .create_async()
            .await;

        let client = HttpClient::new(Client::new());

        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct TestResponse {
            name: String,
            value: i32,
        }

        let result: TestResponse = client.get_json(&format!("{}/test", url)).await.unwrap();

        mock.assert_async().await;
        assert_eq!(result.name, "test");
        assert_eq!(result.value, 42);
    }

    #[tokio::test]
    async fn test_get_json_not_found() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("GET", "/test")
            .with_status(404)
            .create_async()
            .await;

        let client = HttpClient::new(Client::new());

        let result: Result<serde_json::Value> = client.get_json(&format!("{}/test", url)).await;

        mock.assert_async().await;
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<StatusError>(),
            Some(StatusError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_get_json_single_attempt_on_server_error() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        // expect(1) fails the test if the client retries
        let mock = server
            .mock("GET", "/test")
            .with_status(500)
            .expect(1)
            .create_async()
            .await;

        let client = HttpClient::new(Client::new());
        let result: Result<serde_json::Value> = client.get_json(&format!("{}/test", url)).await;

        mock.assert_async().await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_get_json_malformed_payload() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("GET", "/test")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("not json")
            .create_async()
            .await;

        let client = HttpClient::new(Client::new());

        #[derive(serde::Deserialize, Debug)]
        struct TestResponse {
            #[allow(dead_code)]
            name: String,
        }

        let result: Result<TestResponse> = client.get_json(&format!("{}/test", url)).await;

        mock.assert_async().await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_get_json_with_query_success() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("GET", "/test?page=1&per_page=10")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"["item1", "item2"]"#)
            .create_async()
            .await;

        let client = HttpClient::new(Client::new());
        let result: Vec<String> = client
            .get_json_with_query(
                &format!("{}/test", url),
                &[("page", "1"), ("per_page", "10")],
            )
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(result, vec!["item1", "item2"]);
    }
}
