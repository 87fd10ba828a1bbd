//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns that support the server and domain
//! layers.
//!
//! ## Module Categories
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based TOML + environment configuration |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//!
//! ### Selection & Wiring
//! | Module | Description |
//! |--------|-------------|
//! | [`geo`] | Geospatial provider selection and initialization |
//! | [`skill_auth`] | Skill authenticator construction from configuration |

pub mod config;
pub mod constants;
pub mod error_ext;
pub mod geo;
pub mod logging;
pub mod skill_auth;

// Re-export commonly used types
pub use config::{AppConfig, ConfigLoader};
pub use error_ext::ErrorContext;
pub use geo::ServiceManager;
pub use skill_auth::build_skill_authenticator;
