//! Geospatial Provider Ports
//!
//! Contracts for the two interchangeable point-of-interest backends and for
//! the component that initializes them.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::{Coordinates, PointOfInterest, RouteDirections};

/// Geospatial service interface
///
/// Implemented by every backend a [`GeoProviderHandle`] can wrap.
///
/// [`GeoProviderHandle`]: crate::value_objects::GeoProviderHandle
#[async_trait]
pub trait GeoSpatialService: Send + Sync {
    /// Stable provider name (e.g. "foursquare")
    fn provider_name(&self) -> &str;

    /// Locale results are localized to, if the provider honors one
    fn locale(&self) -> Option<&str>;

    /// Points of interest around a location
    async fn get_nearby_points_of_interest(
        &self,
        at: Coordinates,
    ) -> Result<Vec<PointOfInterest>>;

    /// Points of interest matching a free-text query near a location
    async fn get_points_of_interest_by_query(
        &self,
        at: Coordinates,
        query: &str,
    ) -> Result<Vec<PointOfInterest>>;

    /// Driving directions between two locations
    async fn get_route_directions(
        &self,
        start: Coordinates,
        end: Coordinates,
    ) -> Result<RouteDirections>;
}

/// Initializes the concrete geospatial backends
///
/// Initialization may involve network I/O; callers await it fully before
/// using the returned service.
#[async_trait]
pub trait GeoProviderInitializer: Send + Sync {
    /// Initialize the primary provider from its client credentials
    async fn init_primary(
        &self,
        client_id: &str,
        client_secret: &str,
    ) -> Result<Arc<dyn GeoSpatialService>>;

    /// Initialize the fallback provider from its key and locale
    async fn init_fallback(&self, api_key: &str, locale: &str)
    -> Result<Arc<dyn GeoSpatialService>>;
}
