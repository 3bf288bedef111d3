//! JSON-over-HTTP transport for talking to the portal API.

mod error;

pub use error::{HttpError, HttpErrorExt};

use portal_domain::config::ApiConfig;
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument};

/// Cheaply clonable handle to the remote API.
///
/// Reply bodies are decoded regardless of the HTTP status: the API reports validation
/// failures as JSON documents on 4xx responses, and callers decide what a reply means.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Arc<str>,
}

/// Fluent builder for [`ApiClient`].
#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug, Default)]
pub struct ApiClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl ApiClientBuilder {
    /// Scheme, host and optional prefix, e.g. `https://api.example.com`.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Whole-request timeout; unlimited when unset.
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Seeds base URL and timeout from the client configuration.
    pub fn config(self, cfg: &ApiConfig) -> Self {
        self.base_url(cfg.base_url.clone()).timeout(cfg.timeout())
    }

    /// # Errors
    /// [`HttpError::InvalidBaseUrl`] when the base URL is missing or not `http(s)://`,
    /// [`HttpError::Request`] when the TLS backend cannot be initialized.
    pub fn build(self) -> Result<ApiClient, HttpError> {
        let base_url = self.base_url.ok_or_else(|| HttpError::InvalidBaseUrl {
            message: "base URL is required".into(),
            context: None,
        })?;

        let trimmed = base_url.trim().trim_end_matches('/');
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(HttpError::InvalidBaseUrl {
                message: format!("'{base_url}' must start with http:// or https://").into(),
                context: None,
            });
        }

        let mut http = Client::builder().user_agent(concat!("portal/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }

        Ok(ApiClient {
            http: http.build().context("Failed to initialize HTTP client")?,
            base_url: Arc::from(trimmed),
        })
    }
}

impl ApiClient {
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an endpoint path such as `/api/auth/register`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// POSTs `body` as JSON and decodes the reply body as `R`.
    ///
    /// # Errors
    /// [`HttpError::Request`] for connection, timeout or body-read failures and
    /// [`HttpError::Decode`] when the reply is not the expected JSON document.
    #[instrument(level = "debug", skip(self, body), fields(base = %self.base_url))]
    pub async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, HttpError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.url(path);
        let response = self.http.post(&url).json(body).send().await.context(url.clone())?;

        let status = response.status();
        let bytes = response.bytes().await.context(url.clone())?;
        debug!(%status, len = bytes.len(), "Reply received");

        serde_json::from_slice(&bytes).context(format!("{url} answered {status}"))
    }
}
