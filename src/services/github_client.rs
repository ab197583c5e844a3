//! GitHub REST API client.
//!
//! One GET per call: no retries, no rate-limit pacing and no caching.
//! Every request carries the GitHub JSON media type. When a token is
//! available it is sent as a bearer credential; a per-call token takes
//! precedence over the configured default.

use reqwest::StatusCode;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::config::GitHubSettings;

/// Media type requested from the GitHub REST API.
pub const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

/// User-Agent sent upstream. GitHub rejects requests without one.
pub const USER_AGENT: &str = concat!("opensource-showcase/", env!("CARGO_PKG_VERSION"));

/// Low-level client failures.
///
/// These carry the upstream status and cause for logging only; callers of
/// the aggregator see a generic per-operation error instead.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Transport { url: String, source: reqwest::Error },

    #[error("GitHub returned {status} for {url}")]
    Status { url: String, status: StatusCode },

    #[error("failed to decode response from {url}: {source}")]
    Decode { url: String, source: reqwest::Error },

    #[error("token contains characters not allowed in an HTTP header")]
    InvalidToken,
}

/// Thin wrapper around a shared `reqwest::Client` bound to one API base URL.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    base_url: String,
    default_token: Option<SecretString>,
    http_client: reqwest::Client,
}

impl GitHubClient {
    /// Create a client from settings.
    pub fn new(settings: &GitHubSettings) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build().map_err(ClientError::Build)?;

        let base_url = settings.api_url.trim_end_matches('/').to_string();

        info!(
            "GitHub client initialized (api_url={}, default_token={}, timeout={:?})",
            base_url,
            settings.token.is_some(),
            settings.request_timeout
        );

        Ok(Self {
            base_url,
            default_token: settings.token.clone(),
            http_client,
        })
    }

    /// API base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether requests without a per-call token are still authenticated.
    pub fn has_default_token(&self) -> bool {
        self.default_token.is_some()
    }

    /// Build the request headers for an optional token.
    pub fn auth_headers(token: Option<&SecretString>) -> Result<HeaderMap, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_MEDIA_TYPE));

        if let Some(token) = token {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
                .map_err(|_| ClientError::InvalidToken)?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        Ok(headers)
    }

    /// GET `path_and_query` relative to the base URL and decode the JSON body.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path_and_query: &str,
        token: Option<&SecretString>,
    ) -> Result<T, ClientError> {
        let url = format!("{}{}", self.base_url, path_and_query);
        let token = token.or(self.default_token.as_ref());
        let headers = Self::auth_headers(token)?;

        debug!("GET {} (authenticated={})", url, token.is_some());

        let response = self
            .http_client
            .get(&url)
            .headers(headers)
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status { url, status });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| ClientError::Decode { url, source })
    }
}
