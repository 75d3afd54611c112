//! HTTP client for the hosted Postman API.

use anyhow::{Context, Result};
use reqwest::Client;
use serde_json::Value;

use super::ResourceKind;
use crate::error::ResolveError;

/// Base URL of the hosted Postman API.
pub const DEFAULT_BASE_URL: &str = "https://api.getpostman.com";

/// Header carrying the API key on authenticated fetches.
pub const API_KEY_HEADER: &str = "X-Api-Key";

/// Maximum length of response body kept in error messages and logs
/// (to avoid logging sensitive data)
const MAX_ERROR_BODY_LENGTH: usize = 200;

/// Truncate and strip a response body for error messages and logs.
fn truncate_body(body: &str) -> String {
    // Cut on a char boundary at or after the limit.
    let cut = body
        .char_indices()
        .map(|(i, _)| i)
        .find(|&i| i >= MAX_ERROR_BODY_LENGTH)
        .unwrap_or(body.len());

    let truncated = if cut < body.len() {
        format!(
            "{}... [truncated, {} bytes total]",
            &body[..cut],
            body.len()
        )
    } else {
        body.to_string()
    };

    truncated.replace(|c: char| !c.is_ascii_graphic() && c != ' ', "")
}

/// HTTP client wrapper for Postman API calls.
///
/// Issues exactly one GET per call; retries and pagination are out of scope.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client against the hosted Postman API.
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against a different API base URL (self-hosted gateways).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("postrun/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Build the API URL for a resource kind and UID.
    pub fn resource_url(&self, kind: ResourceKind, uid: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url,
            kind.endpoint(),
            urlencoding::encode(uid)
        )
    }

    /// Fetch a hosted resource by UID with an authenticated GET.
    ///
    /// Fails with [`ResolveError::MissingApiKey`] before any network call when
    /// the key is empty.
    pub async fn fetch_by_uid(
        &self,
        kind: ResourceKind,
        uid: &str,
        api_key: &str,
    ) -> Result<Value, ResolveError> {
        if api_key.is_empty() {
            return Err(ResolveError::MissingApiKey { kind });
        }

        let url = self.resource_url(kind, uid);
        self.get(&url, Some(api_key)).await
    }

    /// Fetch a plain URL descriptor; no API key header is sent.
    pub async fn fetch_url(&self, url: &str) -> Result<Value, ResolveError> {
        self.get(url, None).await
    }

    /// Make a single GET request and parse the response as JSON.
    async fn get(&self, url: &str, api_key: Option<&str>) -> Result<Value, ResolveError> {
        tracing::debug!("GET {}", url);

        let mut request = self.client.get(url);
        if let Some(key) = api_key {
            request = request.header(API_KEY_HEADER, key);
        }

        let response = request.send().await.map_err(|err| ResolveError::Fetch {
            url: url.to_string(),
            status: None,
            message: err.to_string(),
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|err| ResolveError::Fetch {
            url: url.to_string(),
            status: Some(status.as_u16()),
            message: format!("failed to read response body: {err}"),
        })?;

        if !status.is_success() {
            tracing::error!("API error: {} - {}", status, truncate_body(&body));
            return Err(ResolveError::Fetch {
                url: url.to_string(),
                status: Some(status.as_u16()),
                message: format!("HTTP {}: {}", status, truncate_body(&body)),
            });
        }

        serde_json::from_str(&body).map_err(|err| ResolveError::Parse {
            what: format!("response from {url}"),
            detail: err.to_string(),
        })
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}
