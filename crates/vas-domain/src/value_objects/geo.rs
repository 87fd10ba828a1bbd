//! Geospatial Value Objects
//!
//! Provider-neutral shapes returned by the geospatial ports.

use serde::{Deserialize, Serialize};

/// Latitude/longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude (-90 to 90)
    pub latitude: f64,
    /// Longitude (-180 to 180)
    pub longitude: f64,
}

impl Coordinates {
    /// Create a coordinate pair
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Whether both components are inside their valid ranges
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }

    /// `lat,lon` form used in provider query strings
    pub fn to_query(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }
}

/// Value Object: Point of Interest
///
/// A place returned by a nearby or query search, normalized across
/// providers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointOfInterest {
    /// Provider-scoped identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Formatted street address, when known
    pub address: Option<String>,
    /// City or municipality, when known
    pub city: Option<String>,
    /// Primary category (e.g. "Coffee Shop")
    pub category: Option<String>,
    /// Location of the place
    pub coordinates: Coordinates,
    /// Distance from the search origin in meters, when reported
    pub distance_meters: Option<f64>,
    /// Name of the provider that returned the result
    pub provider: String,
}

/// Length and duration of a route
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    /// Total length in meters
    pub length_meters: u64,
    /// Estimated travel time in seconds
    pub travel_time_seconds: u64,
}

/// Value Object: Route Directions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteDirections {
    /// Route summary
    pub summary: RouteSummary,
    /// Polyline of the route
    pub points: Vec<Coordinates>,
}
