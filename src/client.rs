use anyhow::{Context, Result};
use reqwest::{header, Client, Response};
use tracing::warn;
use url::Url;

use crate::twitter::API_ENDPOINT_BASE;

/// A reusable client for all API calls.
///
/// Owns a single long-lived `reqwest::Client` so connections are reused
/// across calls; safe to share between concurrent requests. The base URL
/// is injectable so tests can point the client at a local server.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(Url::parse(API_ENDPOINT_BASE).expect("invalid api base url"))
    }

    pub fn with_base_url(base_url: Url) -> Self {
        Self {
            http: Client::new(),
            base_url,
        }
    }

    /// Resolves a path (with optional query) against the base URL.
    /// Already percent-encoded sequences in `path_and_query` are kept as is.
    pub(crate) fn endpoint(&self, path_and_query: &str) -> Result<Url> {
        Url::options()
            .base_url(Some(&self.base_url))
            .parse(path_and_query)
            .with_context(|| format!("Failed to parse endpoint url from {path_and_query:?}"))
    }

    pub(crate) async fn get(&self, url: Url, bearer_token: &str) -> Result<Option<String>> {
        let response = self
            .http
            .get(url)
            .bearer_auth(bearer_token)
            .send()
            .await
            .with_context(|| "Request failed")?;
        Self::read_response(response).await
    }

    pub(crate) async fn post_form(
        &self,
        url: Url,
        authorization: &str,
        body: &'static str,
    ) -> Result<Option<String>> {
        let response = self
            .http
            .post(url)
            .header(header::AUTHORIZATION, authorization)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await
            .with_context(|| "Request failed")?;
        Self::read_response(response).await
    }

    /// Any non-success status collapses to `None`; callers get no detail
    /// beyond the warn log. Transport errors while reading the body still
    /// surface as errors.
    async fn read_response(response: Response) -> Result<Option<String>> {
        let status = response.status();
        if !status.is_success() {
            warn!(
                "request not successful, got response status: {} and body: {}",
                status,
                response.text().await.unwrap_or_else(|_| "".to_string())
            );
            return Ok(None);
        }
        response
            .text()
            .await
            .map(Some)
            .with_context(|| "Failed to read response body")
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
