//! Service manager
//!
//! Turns a [`ProviderSelection`] into an initialized [`GeoProviderHandle`]
//! through the [`GeoProviderInitializer`] port, bounded by a timeout.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};
use vas_domain::constants::DEFAULT_LOCALE;
use vas_domain::error::{Error, Result};
use vas_domain::ports::GeoProviderInitializer;
use vas_domain::value_objects::{GeoProviderHandle, ProviderSelection, ServiceConfiguration};
use vas_providers::geo::HttpGeoProviderInitializer;
use vas_providers::http::HttpClientConfig;

use super::{select_point_of_interest_provider, select_routing_provider};
use crate::config::GeoConfig;
use crate::constants::DEFAULT_GEO_INIT_TIMEOUT_SECS;

/// Selects and initializes geospatial providers
#[derive(Clone)]
pub struct ServiceManager {
    initializer: Arc<dyn GeoProviderInitializer>,
    init_timeout: Duration,
}

impl ServiceManager {
    /// Create a manager around an initializer, with the default timeout
    pub fn new(initializer: Arc<dyn GeoProviderInitializer>) -> Self {
        Self {
            initializer,
            init_timeout: Duration::from_secs(DEFAULT_GEO_INIT_TIMEOUT_SECS),
        }
    }

    /// Create a manager backed by the HTTP providers described in `config`
    pub fn from_config(config: &GeoConfig) -> Result<Self> {
        let http = HttpClientConfig::with_timeout(Duration::from_secs(config.request_timeout_secs));
        let mut initializer = HttpGeoProviderInitializer::from_config(&http)?;
        if let Some(url) = &config.primary_base_url {
            initializer = initializer.with_foursquare_base_url(url.clone());
        }
        if let Some(url) = &config.fallback_base_url {
            initializer = initializer.with_azure_maps_base_url(url.clone());
        }

        Ok(Self::new(Arc::new(initializer))
            .with_init_timeout(Duration::from_secs(config.init_timeout_secs)))
    }

    /// Override the initialization timeout
    pub fn with_init_timeout(mut self, timeout: Duration) -> Self {
        self.init_timeout = timeout;
        self
    }

    /// Initialization timeout
    pub fn init_timeout(&self) -> Duration {
        self.init_timeout
    }

    /// Initialize the point-of-interest provider
    ///
    /// Primary when both primary credentials are present, fallback otherwise.
    /// `locale` defaults to `"en"` and is ignored by the primary provider.
    pub async fn init_maps_service(
        &self,
        config: &ServiceConfiguration,
        locale: Option<&str>,
    ) -> Result<GeoProviderHandle> {
        let selection =
            select_point_of_interest_provider(config, locale.unwrap_or(DEFAULT_LOCALE))?;
        self.initialize(selection).await
    }

    /// Initialize the routing provider, which is always the fallback
    pub async fn init_routing_maps_service(
        &self,
        config: &ServiceConfiguration,
        locale: Option<&str>,
    ) -> Result<GeoProviderHandle> {
        let selection = select_routing_provider(config, locale.unwrap_or(DEFAULT_LOCALE))?;
        self.initialize(selection).await
    }

    async fn initialize(&self, selection: ProviderSelection) -> Result<GeoProviderHandle> {
        let kind = selection.kind();
        debug!(?selection, "Initializing geospatial provider");

        let init = async {
            match &selection {
                ProviderSelection::Primary {
                    client_id,
                    client_secret,
                } => self
                    .initializer
                    .init_primary(client_id, client_secret)
                    .await
                    .map(GeoProviderHandle::Primary),
                ProviderSelection::Fallback { api_key, locale } => self
                    .initializer
                    .init_fallback(api_key, locale)
                    .await
                    .map(GeoProviderHandle::Fallback),
            }
        };

        let handle = tokio::time::timeout(self.init_timeout, init)
            .await
            .map_err(|_| {
                Error::timeout(
                    format!("{kind} geospatial provider initialization"),
                    self.init_timeout.as_secs(),
                )
            })??;

        info!(
            kind = %kind,
            provider = handle.service().provider_name(),
            locale = handle.service().locale().unwrap_or("-"),
            "Geospatial provider initialized"
        );
        Ok(handle)
    }
}

impl std::fmt::Debug for ServiceManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceManager")
            .field("init_timeout", &self.init_timeout)
            .finish_non_exhaustive()
    }
}
