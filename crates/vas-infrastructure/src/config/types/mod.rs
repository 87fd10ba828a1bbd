//! Configuration types module

pub mod app;
pub mod auth;
pub mod bot;
pub mod geo;
pub mod logging;
pub mod server;

// Re-export main types
pub use app::AppConfig;
pub use auth::{AuthConfig, SkillAuthConfig, SkillAuthMode};
pub use bot::BotConfig;
pub use geo::GeoConfig;
pub use logging::LoggingConfig;
pub use server::ServerConfig;
