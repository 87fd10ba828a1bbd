//! Azure Maps Geospatial Provider
//!
//! Fallback point-of-interest backend and the only routing backend.
//! Implements the `GeoSpatialService` port using the Azure Maps Search
//! (nearby, fuzzy) and Route Directions REST APIs. Results are localized to
//! the locale given at initialization.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use tracing::debug;

use vas_domain::error::{Error, Result};
use vas_domain::ports::GeoSpatialService;
use vas_domain::value_objects::{Coordinates, PointOfInterest, RouteDirections, RouteSummary};

use crate::constants::{
    AZURE_MAPS_API_VERSION, AZURE_MAPS_BASE_URL, AZURE_MAPS_PROVIDER_NAME, POI_RESULT_LIMIT,
    POI_SEARCH_RADIUS_METERS,
};
use crate::utils::HttpResponseUtils;

/// Azure Maps geospatial provider
pub struct AzureMapsGeoSpatialService {
    api_key: String,
    locale: String,
    base_url: String,
    http_client: Client,
}

impl AzureMapsGeoSpatialService {
    /// Initialize the client from its subscription key and locale
    ///
    /// The key must be non-blank. A blank locale is stored as the domain
    /// default.
    pub async fn init_key(api_key: &str, locale: &str, http_client: Client) -> Result<Self> {
        if api_key.trim().is_empty() {
            return Err(Error::configuration("Azure Maps key must be set"));
        }

        let locale = if locale.trim().is_empty() {
            vas_domain::constants::DEFAULT_LOCALE
        } else {
            locale.trim()
        };

        Ok(Self {
            api_key: api_key.to_string(),
            locale: locale.to_string(),
            base_url: AZURE_MAPS_BASE_URL.to_string(),
            http_client,
        })
    }

    /// Override the API base URL
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn url(&self, path: &str, extra: Vec<(&str, String)>) -> Result<Url> {
        let mut params = vec![
            ("api-version", AZURE_MAPS_API_VERSION.to_string()),
            ("subscription-key", self.api_key.clone()),
            ("language", self.locale.clone()),
        ];
        params.extend(extra);

        Url::parse_with_params(
            &format!("{}/{}", self.base_url.trim_end_matches('/'), path),
            &params,
        )
        .map_err(|e| Error::configuration_with_source("Invalid Azure Maps base URL", e))
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(&self, url: Url) -> Result<T> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| HttpResponseUtils::transport_error(AZURE_MAPS_PROVIDER_NAME, e))?;

        HttpResponseUtils::check_and_parse(response, AZURE_MAPS_PROVIDER_NAME).await
    }

    fn search_params(at: Coordinates) -> Vec<(&'static str, String)> {
        vec![
            ("lat", at.latitude.to_string()),
            ("lon", at.longitude.to_string()),
            ("limit", POI_RESULT_LIMIT.to_string()),
            ("radius", POI_SEARCH_RADIUS_METERS.to_string()),
        ]
    }
}

#[async_trait]
impl GeoSpatialService for AzureMapsGeoSpatialService {
    fn provider_name(&self) -> &str {
        AZURE_MAPS_PROVIDER_NAME
    }

    fn locale(&self) -> Option<&str> {
        Some(&self.locale)
    }

    async fn get_nearby_points_of_interest(
        &self,
        at: Coordinates,
    ) -> Result<Vec<PointOfInterest>> {
        debug!(provider = AZURE_MAPS_PROVIDER_NAME, "Searching nearby");
        let url = self.url("search/nearby/json", Self::search_params(at))?;
        let response: SearchResponse = self.get_json(url).await?;
        Ok(response.into_points())
    }

    async fn get_points_of_interest_by_query(
        &self,
        at: Coordinates,
        query: &str,
    ) -> Result<Vec<PointOfInterest>> {
        debug!(provider = AZURE_MAPS_PROVIDER_NAME, query, "Fuzzy search");
        let mut params = Self::search_params(at);
        params.push(("query", query.to_string()));
        params.push(("idxSet", "POI".to_string()));

        let url = self.url("search/fuzzy/json", params)?;
        let response: SearchResponse = self.get_json(url).await?;
        Ok(response.into_points())
    }

    async fn get_route_directions(
        &self,
        start: Coordinates,
        end: Coordinates,
    ) -> Result<RouteDirections> {
        let query = format!("{}:{}", start.to_query(), end.to_query());
        debug!(provider = AZURE_MAPS_PROVIDER_NAME, %query, "Route directions");

        let url = self.url("route/directions/json", vec![("query", query)])?;
        let response: RouteResponse = self.get_json(url).await?;
        response.into_directions()
    }
}

// ============================================================================
// Wire format
// ============================================================================

#[derive(Debug, Default, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    id: String,
    dist: Option<f64>,
    poi: Option<Poi>,
    address: Option<Address>,
    position: Position,
}

#[derive(Debug, Deserialize)]
struct Poi {
    name: String,
    #[serde(default)]
    categories: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Address {
    freeform_address: Option<String>,
    municipality: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Position {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Default, Deserialize)]
struct RouteResponse {
    #[serde(default)]
    routes: Vec<Route>,
}

#[derive(Debug, Deserialize)]
struct Route {
    summary: RouteSummaryWire,
    #[serde(default)]
    legs: Vec<RouteLeg>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RouteSummaryWire {
    length_in_meters: u64,
    travel_time_in_seconds: u64,
}

#[derive(Debug, Deserialize)]
struct RouteLeg {
    #[serde(default)]
    points: Vec<RoutePoint>,
}

#[derive(Debug, Deserialize)]
struct RoutePoint {
    latitude: f64,
    longitude: f64,
}

impl SearchResponse {
    fn into_points(self) -> Vec<PointOfInterest> {
        self.results
            .into_iter()
            .filter_map(SearchResult::into_point)
            .collect()
    }
}

impl SearchResult {
    /// Results without a POI record are addresses, not places
    fn into_point(self) -> Option<PointOfInterest> {
        let poi = self.poi?;
        let (address, city) = match self.address {
            Some(address) => (address.freeform_address, address.municipality),
            None => (None, None),
        };

        Some(PointOfInterest {
            id: self.id,
            name: poi.name,
            address,
            city,
            category: poi.categories.into_iter().next(),
            coordinates: Coordinates::new(self.position.lat, self.position.lon),
            distance_meters: self.dist,
            provider: AZURE_MAPS_PROVIDER_NAME.to_string(),
        })
    }
}

impl RouteResponse {
    fn into_directions(self) -> Result<RouteDirections> {
        let route = self
            .routes
            .into_iter()
            .next()
            .ok_or_else(|| Error::provider(AZURE_MAPS_PROVIDER_NAME, "no route found"))?;

        let points = route
            .legs
            .into_iter()
            .flat_map(|leg| leg.points)
            .map(|p| Coordinates::new(p.latitude, p.longitude))
            .collect();

        Ok(RouteDirections {
            summary: RouteSummary {
                length_meters: route.summary.length_in_meters,
                travel_time_seconds: route.summary.travel_time_in_seconds,
            },
            points,
        })
    }
}
