//! Geospatial provider implementations
//!
//! | Provider | Role | Locale | Routing |
//! |----------|------|--------|---------|
//! | [`FoursquareGeoSpatialService`] | Primary | ignored | unsupported |
//! | [`AzureMapsGeoSpatialService`] | Fallback | honored | supported |

mod azure_maps;
mod foursquare;
mod initializer;

pub use azure_maps::AzureMapsGeoSpatialService;
pub use foursquare::FoursquareGeoSpatialService;
pub use initializer::HttpGeoProviderInitializer;
