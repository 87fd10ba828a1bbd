//! Geospatial provider configuration types

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use vas_domain::constants::{
    DEFAULT_LOCALE, FALLBACK_KEY, PRIMARY_CLIENT_ID_KEY, PRIMARY_CLIENT_SECRET_KEY,
};
use vas_domain::value_objects::ServiceConfiguration;
use vas_providers::constants::HTTP_DEFAULT_TIMEOUT_SECS;

use crate::constants::DEFAULT_GEO_INIT_TIMEOUT_SECS;

const WELL_KNOWN_KEYS: [&str; 3] = [PRIMARY_CLIENT_ID_KEY, PRIMARY_CLIENT_SECRET_KEY, FALLBACK_KEY];

/// Geospatial provider configuration
///
/// `properties` holds the credentials bundle the provider is selected from
/// (`primaryClientId`, `primaryClientSecret`, `fallbackKey`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeoConfig {
    /// Locale used when the caller does not pass one
    pub locale: String,
    /// Upper bound on provider initialization in seconds
    pub init_timeout_secs: u64,
    /// Per-request timeout for provider HTTP calls in seconds
    pub request_timeout_secs: u64,
    /// Override for the primary provider base URL
    pub primary_base_url: Option<String>,
    /// Override for the fallback provider base URL
    pub fallback_base_url: Option<String>,
    /// Provider credentials
    pub properties: HashMap<String, String>,
}

impl Default for GeoConfig {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            init_timeout_secs: DEFAULT_GEO_INIT_TIMEOUT_SECS,
            request_timeout_secs: HTTP_DEFAULT_TIMEOUT_SECS,
            primary_base_url: None,
            fallback_base_url: None,
            properties: HashMap::new(),
        }
    }
}

impl GeoConfig {
    /// Build the selector's input bundle
    ///
    /// Environment overrides reach us lowercased, so keys matching a
    /// well-known name case-insensitively are stored under that name.
    pub fn service_configuration(&self) -> ServiceConfiguration {
        let properties = self
            .properties
            .iter()
            .map(|(key, value)| {
                let key = WELL_KNOWN_KEYS
                    .iter()
                    .find(|known| known.eq_ignore_ascii_case(key))
                    .map_or_else(|| key.clone(), |known| (*known).to_string());
                (key, value.clone())
            })
            .collect();

        ServiceConfiguration::from_properties(self.locale.clone(), properties)
    }
}
