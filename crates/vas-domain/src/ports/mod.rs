//! Domain Ports
//!
//! Interfaces for the external collaborators the core depends on.
//!
//! | Port | Description |
//! |------|-------------|
//! | [`MessagePipeline`] | Processes an inbound call on behalf of a bot |
//! | [`Bot`] | Handles a single activity turn |
//! | [`SkillAuthenticator`] | Accepts or rejects inter-skill callers |
//! | [`GeoSpatialService`] | Point-of-interest and routing lookups |
//! | [`GeoProviderInitializer`] | Builds the concrete geospatial backends |

/// Skill authentication port
pub mod auth;
/// Geospatial provider ports
pub mod geo;
/// Message pipeline ports
pub mod pipeline;

pub use auth::SkillAuthenticator;
pub use geo::{GeoProviderInitializer, GeoSpatialService};
pub use pipeline::{Bot, MessagePipeline};
