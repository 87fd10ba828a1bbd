//! HTTP-backed provider initializer
//!
//! Builds the concrete Foursquare and Azure Maps services, sharing one
//! reqwest client between them.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;

use vas_domain::error::Result;
use vas_domain::ports::{GeoProviderInitializer, GeoSpatialService};

use super::{AzureMapsGeoSpatialService, FoursquareGeoSpatialService};
use crate::http::HttpClientConfig;

/// Initializer for the real geospatial backends
#[derive(Clone)]
pub struct HttpGeoProviderInitializer {
    http_client: Client,
    foursquare_base_url: Option<String>,
    azure_maps_base_url: Option<String>,
}

impl HttpGeoProviderInitializer {
    /// Create an initializer around an existing client
    pub fn new(http_client: Client) -> Self {
        Self {
            http_client,
            foursquare_base_url: None,
            azure_maps_base_url: None,
        }
    }

    /// Create an initializer with a client built from configuration
    pub fn from_config(config: &HttpClientConfig) -> Result<Self> {
        Ok(Self::new(config.build()?))
    }

    /// Point the primary provider at a different base URL
    pub fn with_foursquare_base_url<S: Into<String>>(mut self, url: S) -> Self {
        self.foursquare_base_url = Some(url.into());
        self
    }

    /// Point the fallback provider at a different base URL
    pub fn with_azure_maps_base_url<S: Into<String>>(mut self, url: S) -> Self {
        self.azure_maps_base_url = Some(url.into());
        self
    }
}

impl std::fmt::Debug for HttpGeoProviderInitializer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGeoProviderInitializer").finish()
    }
}

#[async_trait]
impl GeoProviderInitializer for HttpGeoProviderInitializer {
    async fn init_primary(
        &self,
        client_id: &str,
        client_secret: &str,
    ) -> Result<Arc<dyn GeoSpatialService>> {
        let mut service =
            FoursquareGeoSpatialService::init_client(client_id, client_secret, self.http_client.clone())
                .await?;
        if let Some(url) = &self.foursquare_base_url {
            service = service.with_base_url(url.clone());
        }
        Ok(Arc::new(service))
    }

    async fn init_fallback(
        &self,
        api_key: &str,
        locale: &str,
    ) -> Result<Arc<dyn GeoSpatialService>> {
        let mut service =
            AzureMapsGeoSpatialService::init_key(api_key, locale, self.http_client.clone()).await?;
        if let Some(url) = &self.azure_maps_base_url {
            service = service.with_base_url(url.clone());
        }
        Ok(Arc::new(service))
    }
}
