use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::redirect::Policy;

use crate::error::FetchError;

pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// Retrieves the raw body behind a URL.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Transport settings for [`HttpFetcher`].
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Skip TLS peer verification. Off unless explicitly requested.
    pub accept_invalid_certs: bool,
    pub user_agent: String,
    /// Whole-request timeout; `None` leaves the transport defaults in place.
    pub timeout: Option<Duration>,
    /// Follow 3xx responses. Off: the redirect response's own body is returned.
    pub follow_redirects: bool,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            accept_invalid_certs: false,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
            follow_redirects: false,
        }
    }
}

/// [`Fetcher`] backed by a reqwest client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        if config.accept_invalid_certs {
            warn!("TLS certificate verification is disabled");
        }

        let redirect = if config.follow_redirects {
            Policy::default()
        } else {
            Policy::none()
        };

        let mut builder = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .redirect(redirect);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| FetchError::InvalidConfig(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        debug!("GET {url}");

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::transport(url, e))?;

        // Any status with a body counts; callers inspect the content.
        let status = resp.status();
        let body = resp.text().await.map_err(|e| FetchError::transport(url, e))?;
        debug!("GET {url} -> {status} ({} bytes)", body.len());
        Ok(body)
    }
}
