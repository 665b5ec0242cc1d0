//! Platform API client: versioned JSON requests and raw file retrieval.

use anyhow::{Context, Result};
use log::debug;
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// Versioned JSON media type of the platform API.
pub const JSON_MEDIA_TYPE: &str = "application/vnd.github.v3+json";

/// Preview media type that enables topic qualifiers in repository search.
pub const TOPICS_MEDIA_TYPE: &str = "application/vnd.github.mercy-preview+json";

/// Media type that returns file contents as-is instead of a JSON envelope.
pub const RAW_MEDIA_TYPE: &str = "application/vnd.github.v3.raw";

/// Client for the platform REST API rooted at a configurable base address.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client that issues requests relative to `base_url`.
    ///
    /// The reqwest client is expected to carry the User-Agent header.
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns a reference to the underlying reqwest Client.
    pub fn inner(&self) -> &Client {
        &self.client
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    /// Performs a GET request against `endpoint` and deserializes the JSON response.
    ///
    /// Use `serde_json::Value` as `T` to get an untyped document.
    #[tracing::instrument(skip(self, query))]
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let url = self.endpoint_url(endpoint);
        debug!("GET JSON from {} with query {:?}...", url, query);

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, format!("{}, {}", JSON_MEDIA_TYPE, TOPICS_MEDIA_TYPE))
            .query(query)
            .send()
            .await
            .with_context(|| format!("Failed to send request to {}", url))?;

        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await.into());
        }

        let result = response
            .json::<T>()
            .await
            .with_context(|| format!("Failed to parse JSON response from {}", url))?;

        Ok(result)
    }

    /// Fetches the raw contents of `endpoint`.
    ///
    /// A 404 means the file does not exist and yields `Ok(None)`.
    #[tracing::instrument(skip(self))]
    pub async fn get_raw_file(&self, endpoint: &str) -> Result<Option<String>> {
        let url = self.endpoint_url(endpoint);
        debug!("GET raw file from {}...", url);

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, RAW_MEDIA_TYPE)
            .send()
            .await
            .with_context(|| format!("Failed to send request to {}", url))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            debug!("No file at {}", url);
            return Ok(None);
        }
        if !status.is_success() {
            return Err(ApiError::from_response(response).await.into());
        }

        let content = response
            .text()
            .await
            .with_context(|| format!("Failed to read file contents from {}", url))?;

        Ok(Some(content))
    }
}
