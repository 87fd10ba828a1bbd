//! Foursquare Geospatial Provider
//!
//! Primary point-of-interest backend. Implements the `GeoSpatialService`
//! port on top of the Foursquare v2 venues search API. Foursquare has no
//! routing API and does not localize results, so the service ignores locale
//! and reports route lookups as unsupported.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use tracing::debug;

use vas_domain::error::{Error, Result};
use vas_domain::ports::GeoSpatialService;
use vas_domain::value_objects::{Coordinates, PointOfInterest, RouteDirections};

use crate::constants::{
    FOURSQUARE_API_VERSION, FOURSQUARE_BASE_URL, FOURSQUARE_PROVIDER_NAME, POI_RESULT_LIMIT,
    POI_SEARCH_RADIUS_METERS,
};
use crate::utils::HttpResponseUtils;

/// Foursquare geospatial provider
///
/// Receives the HTTP client via constructor injection.
///
/// ## Example
///
/// ```rust,no_run
/// use vas_providers::geo::FoursquareGeoSpatialService;
///
/// async fn example() -> vas_domain::Result<()> {
///     let service =
///         FoursquareGeoSpatialService::init_client("client-id", "client-secret", reqwest::Client::new())
///             .await?;
///     Ok(())
/// }
/// ```
pub struct FoursquareGeoSpatialService {
    client_id: String,
    client_secret: String,
    base_url: String,
    http_client: Client,
}

impl FoursquareGeoSpatialService {
    /// Initialize the client from its credentials
    ///
    /// Both values must be non-blank.
    pub async fn init_client(
        client_id: &str,
        client_secret: &str,
        http_client: Client,
    ) -> Result<Self> {
        if client_id.trim().is_empty() || client_secret.trim().is_empty() {
            return Err(Error::configuration(
                "Foursquare client id and client secret must both be set",
            ));
        }

        Ok(Self {
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
            base_url: FOURSQUARE_BASE_URL.to_string(),
            http_client,
        })
    }

    /// Override the API base URL
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn venues_search_url(&self, at: Coordinates, query: Option<&str>) -> Result<Url> {
        let mut params = vec![
            ("ll", at.to_query()),
            ("client_id", self.client_id.clone()),
            ("client_secret", self.client_secret.clone()),
            ("v", FOURSQUARE_API_VERSION.to_string()),
            ("limit", POI_RESULT_LIMIT.to_string()),
            ("radius", POI_SEARCH_RADIUS_METERS.to_string()),
        ];
        match query {
            Some(query) => params.push(("query", query.to_string())),
            None => params.push(("intent", "checkin".to_string())),
        }

        Url::parse_with_params(
            &format!("{}/venues/search", self.base_url.trim_end_matches('/')),
            &params,
        )
        .map_err(|e| Error::configuration_with_source("Invalid Foursquare base URL", e))
    }

    async fn search_venues(
        &self,
        at: Coordinates,
        query: Option<&str>,
    ) -> Result<Vec<PointOfInterest>> {
        let url = self.venues_search_url(at, query)?;
        debug!(provider = FOURSQUARE_PROVIDER_NAME, query = ?query, "Searching venues");

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| HttpResponseUtils::transport_error(FOURSQUARE_PROVIDER_NAME, e))?;

        let envelope: VenueSearchEnvelope =
            HttpResponseUtils::check_and_parse(response, FOURSQUARE_PROVIDER_NAME).await?;
        Ok(envelope.into_points())
    }
}

#[async_trait]
impl GeoSpatialService for FoursquareGeoSpatialService {
    fn provider_name(&self) -> &str {
        FOURSQUARE_PROVIDER_NAME
    }

    fn locale(&self) -> Option<&str> {
        None
    }

    async fn get_nearby_points_of_interest(
        &self,
        at: Coordinates,
    ) -> Result<Vec<PointOfInterest>> {
        self.search_venues(at, None).await
    }

    async fn get_points_of_interest_by_query(
        &self,
        at: Coordinates,
        query: &str,
    ) -> Result<Vec<PointOfInterest>> {
        self.search_venues(at, Some(query)).await
    }

    async fn get_route_directions(
        &self,
        _start: Coordinates,
        _end: Coordinates,
    ) -> Result<RouteDirections> {
        Err(Error::unsupported(FOURSQUARE_PROVIDER_NAME, "route directions"))
    }
}

// ============================================================================
// Wire format
// ============================================================================

#[derive(Debug, Deserialize)]
struct VenueSearchEnvelope {
    response: VenueSearchResponse,
}

#[derive(Debug, Default, Deserialize)]
struct VenueSearchResponse {
    #[serde(default)]
    venues: Vec<Venue>,
}

#[derive(Debug, Deserialize)]
struct Venue {
    id: String,
    name: String,
    location: VenueLocation,
    #[serde(default)]
    categories: Vec<VenueCategory>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VenueLocation {
    address: Option<String>,
    city: Option<String>,
    lat: f64,
    lng: f64,
    distance: Option<f64>,
    #[serde(default)]
    formatted_address: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct VenueCategory {
    name: String,
    #[serde(default)]
    primary: bool,
}

impl VenueSearchEnvelope {
    fn into_points(self) -> Vec<PointOfInterest> {
        self.response
            .venues
            .into_iter()
            .map(Venue::into_point)
            .collect()
    }
}

impl Venue {
    fn into_point(self) -> PointOfInterest {
        let category = self
            .categories
            .iter()
            .find(|c| c.primary)
            .or_else(|| self.categories.first())
            .map(|c| c.name.clone());

        let address = if self.location.formatted_address.is_empty() {
            self.location.address
        } else {
            Some(self.location.formatted_address.join(", "))
        };

        PointOfInterest {
            id: self.id,
            name: self.name,
            address,
            city: self.location.city,
            category,
            coordinates: Coordinates::new(self.location.lat, self.location.lng),
            distance_meters: self.location.distance,
            provider: FOURSQUARE_PROVIDER_NAME.to_string(),
        }
    }
}
