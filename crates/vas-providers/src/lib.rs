//! # VAS - Provider Implementations
//!
//! Concrete adapters for the ports defined in `vas-domain`.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Geospatial | `GeoSpatialService` | Foursquare (primary), Azure Maps (fallback) |
//! | Initialization | `GeoProviderInitializer` | HttpGeoProviderInitializer |
//! | Skill auth | `SkillAuthenticator` | ApiKey, Jwt |
//! | Pipeline | `MessagePipeline` | ActivityPipeline (channel, skill) |
//! | Bot | `Bot` | RelayBot |
//!
//! ## Usage
//!
//! ```ignore
//! use vas_providers::geo::HttpGeoProviderInitializer;
//! use vas_providers::pipeline::ActivityPipeline;
//! ```

// Re-export vas-domain types commonly used with providers
pub use vas_domain::error::{Error, Result};
pub use vas_domain::ports::{
    Bot, GeoProviderInitializer, GeoSpatialService, MessagePipeline, SkillAuthenticator,
};

/// Provider-specific constants
pub mod constants;

/// Shared utilities for provider implementations
pub mod utils;

/// HTTP client configuration shared by API-based providers
pub mod http;

/// Geospatial provider implementations
///
/// Implements `GeoSpatialService` for the primary and fallback backends.
pub mod geo;

/// Skill authenticator implementations
pub mod auth;

/// Message pipeline implementations
pub mod pipeline;

/// Bot handler implementations
pub mod bot;
