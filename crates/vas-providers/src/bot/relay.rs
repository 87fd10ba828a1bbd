//! Relay bot
//!
//! Forwards each activity to an upstream bot runtime over HTTP and returns
//! its reply. A `204 No Content` answer means the bot had nothing to say.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use vas_domain::error::{Error, Result};
use vas_domain::ports::Bot;

use crate::constants::CONTENT_TYPE_JSON;
use crate::utils::HttpResponseUtils;

const RELAY_PROVIDER_NAME: &str = "bot-relay";

/// Bot that delegates turns to an upstream endpoint
#[derive(Debug, Clone)]
pub struct RelayBot {
    endpoint: Url,
    http_client: Client,
}

impl RelayBot {
    /// Create a relay for `endpoint`
    pub fn new(endpoint: &str, http_client: Client) -> Result<Self> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| Error::configuration_with_source(format!("Invalid bot endpoint '{endpoint}'"), e))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(Error::configuration(format!(
                "Bot endpoint must use http or https, got '{}'",
                endpoint.scheme()
            )));
        }
        Ok(Self {
            endpoint,
            http_client,
        })
    }
}

#[async_trait]
impl Bot for RelayBot {
    async fn on_turn(&self, activity: Value, cancel: CancellationToken) -> Result<Option<Value>> {
        debug!(endpoint = %self.endpoint, "Relaying activity");

        let request = self
            .http_client
            .post(self.endpoint.clone())
            .header("Content-Type", CONTENT_TYPE_JSON)
            .body(serde_json::to_vec(&activity)?)
            .send();

        let response = tokio::select! {
            biased;
            () = cancel.cancelled() => return Err(Error::cancelled("bot relay request")),
            response = request => response
                .map_err(|e| HttpResponseUtils::transport_error(RELAY_PROVIDER_NAME, e))?,
        };

        if response.status() == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        HttpResponseUtils::check_and_parse::<Value>(response, RELAY_PROVIDER_NAME)
            .await
            .map(Some)
    }
}
