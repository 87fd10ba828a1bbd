//! HTTP client configuration and construction

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use vas_domain::error::{Error, Result};

use crate::constants::HTTP_DEFAULT_TIMEOUT_SECS;

/// HTTP client configuration
///
/// Controls connection pooling, timeouts, and other HTTP client behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpClientConfig {
    /// Maximum idle connections per host
    pub max_idle_per_host: usize,
    /// Idle connection timeout
    pub idle_timeout: Duration,
    /// TCP keep-alive duration
    pub keepalive: Duration,
    /// Total timeout for requests
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            max_idle_per_host: 10,
            idle_timeout: Duration::from_secs(90),
            keepalive: Duration::from_secs(60),
            timeout: Duration::from_secs(HTTP_DEFAULT_TIMEOUT_SECS),
            user_agent: format!("vas/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Create configuration with custom timeout only
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout,
            ..Default::default()
        }
    }

    /// Build a reqwest client from this configuration
    pub fn build(&self) -> Result<Client> {
        Client::builder()
            .pool_max_idle_per_host(self.max_idle_per_host)
            .pool_idle_timeout(self.idle_timeout)
            .tcp_keepalive(self.keepalive)
            .timeout(self.timeout)
            .user_agent(self.user_agent.clone())
            .build()
            .map_err(|e| Error::configuration_with_source("Failed to create HTTP client", e))
    }
}
