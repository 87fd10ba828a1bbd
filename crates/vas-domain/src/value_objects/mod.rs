//! Domain Value Objects
//!
//! Immutable value objects that represent concepts in the domain
//! without identity.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`InboundCall`] | One HTTP call: endpoint, context and raw body |
//! | [`CallContext`] | Request data visible to authenticators |
//! | [`PipelineResponse`] | Pipeline result passed through to HTTP |
//! | [`ServiceConfiguration`] | Locale-scoped key/value settings |
//! | [`ProviderSelection`] | Pure geospatial provider decision |
//! | [`GeoProviderHandle`] | Initialized provider, tagged by variant |
//! | [`PointOfInterest`] | Normalized place search result |
//! | [`RouteDirections`] | Route summary and polyline |

/// Inbound call value objects
pub mod call;
/// Geospatial value objects
pub mod geo;
/// Provider selection value objects
pub mod provider;
/// Service configuration value object
pub mod service_config;

pub use call::{CallContext, Endpoint, InboundCall, PipelineResponse};
pub use geo::{Coordinates, PointOfInterest, RouteDirections, RouteSummary};
pub use provider::{GeoProviderHandle, ProviderKind, ProviderSelection};
pub use service_config::ServiceConfiguration;
