//! HTTP Response Utilities
//!
//! Helper functions for processing HTTP responses from API providers.
//! These are shared utilities, not ports.

use reqwest::Response;
use serde::de::DeserializeOwned;
use vas_domain::error::{Error, Result};

use crate::constants::ERROR_MSG_REQUEST_TIMEOUT;

/// Utilities for processing HTTP responses
///
/// Provides common response handling patterns used by the geospatial
/// providers and the relay bot.
pub struct HttpResponseUtils;

impl HttpResponseUtils {
    /// Check response status and parse JSON
    ///
    /// # Arguments
    /// * `response` - The HTTP response to check
    /// * `provider_name` - Name of the provider for error messages
    ///
    /// # Returns
    /// Deserialized body on success, or an appropriate error
    pub async fn check_and_parse<T: DeserializeOwned>(
        response: Response,
        provider_name: &str,
    ) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(Self::status_error(provider_name, status.as_u16(), &error_text));
        }

        response.json::<T>().await.map_err(|e| {
            Error::provider(provider_name, format!("response parse failed: {e}"))
        })
    }

    /// Map a non-success status code to a provider error
    pub fn status_error(provider_name: &str, code: u16, details: &str) -> Error {
        let context = match code {
            401 | 403 => "authentication failed".to_string(),
            429 => "rate limit exceeded".to_string(),
            500..=599 => format!("server error ({code})"),
            _ => format!("request failed ({code})"),
        };
        Error::provider(provider_name, format!("{context}: {details}"))
    }

    /// Map a transport-level reqwest error to a domain error
    pub fn transport_error(provider_name: &str, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::network(format!("{provider_name}: {ERROR_MSG_REQUEST_TIMEOUT} deadline"))
        } else {
            Error::network_with_source(format!("{provider_name}: HTTP request failed"), err)
        }
    }
}
