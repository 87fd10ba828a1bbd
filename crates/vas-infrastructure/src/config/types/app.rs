//! Main application configuration

use serde::{Deserialize, Serialize};

use super::{AuthConfig, BotConfig, GeoConfig, LoggingConfig, ServerConfig};

/// Root configuration, one field per TOML section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP listener
    pub server: ServerConfig,
    /// Caller authentication
    pub auth: AuthConfig,
    /// Upstream bot runtime
    pub bot: BotConfig,
    /// Geospatial provider selection
    pub geo: GeoConfig,
    /// Logging
    pub logging: LoggingConfig,
}
