//! Application configuration
//!
//! Typed configuration sections and the figment-based loader.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::{
    AppConfig, AuthConfig, BotConfig, GeoConfig, LoggingConfig, ServerConfig, SkillAuthConfig,
    SkillAuthMode,
};
