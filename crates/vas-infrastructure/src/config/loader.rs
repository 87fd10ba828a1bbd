//! Configuration loader
//!
//! Handles loading configuration from TOML files, environment variables,
//! and default values through Figment.

use std::env;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use reqwest::Url;
use vas_domain::error::{Error, Result};

use crate::config::{AppConfig, SkillAuthMode};
use crate::constants::*;
use crate::error_ext::ErrorContext;
use crate::logging::parse_log_level;

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (if exists)
    /// 3. Environment variables with prefix (e.g., `VAS_SERVER__PORT`)
    ///
    /// An explicit path that does not exist is an error.
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if !config_path.exists() {
                return Err(Error::configuration(format!(
                    "Configuration file not found: {}",
                    config_path.display()
                )));
            }
        }
        if let Some(path) = self.resolve_config_path() {
            figment = figment.merge(Toml::file(path));
        }

        // Double underscore separates nested keys (e.g., VAS_AUTH__SKILL__KEY)
        figment = figment.merge(
            Env::prefixed(&format!("{}_", self.env_prefix)).split(CONFIG_ENV_SEPARATOR),
        );

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).config_context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).context("Failed to write config file")?;

        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// File `load` reads: the explicit path, else the first default location found
    pub fn resolve_config_path(&self) -> Option<PathBuf> {
        self.config_path
            .clone()
            .or_else(Self::find_default_config_path)
    }

    /// First existing file among the usual config locations
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
            dirs::home_dir().map(|d| {
                d.join(format!(".{DEFAULT_CONFIG_DIR}"))
                    .join(DEFAULT_CONFIG_FILENAME)
            }),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Validation
// ============================================================================

/// Validate application configuration
///
/// Rejects combinations that would only fail later, at request time.
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_server_config(config)?;
    validate_auth_config(config)?;
    validate_bot_config(config)?;
    validate_geo_config(config)?;
    parse_log_level(&config.logging.level)?;
    Ok(())
}

fn validate_server_config(config: &AppConfig) -> Result<()> {
    if config.server.port == 0 {
        return Err(Error::configuration("Server port cannot be 0"));
    }
    Ok(())
}

fn validate_auth_config(config: &AppConfig) -> Result<()> {
    let skill = &config.auth.skill;
    match skill.mode {
        SkillAuthMode::Disabled => {}
        SkillAuthMode::ApiKey => {
            if skill.header.trim().is_empty() {
                return Err(Error::configuration(
                    "Skill API key header cannot be empty in api_key mode",
                ));
            }
            if skill.key.as_deref().is_none_or(str::is_empty) {
                return Err(Error::configuration(
                    "Skill API key is required when auth.skill.mode is api_key",
                ));
            }
        }
        SkillAuthMode::Jwt => {
            let secret = skill.jwt_secret.as_deref().unwrap_or_default();
            if secret.is_empty() {
                return Err(Error::configuration(
                    "JWT secret cannot be empty when auth.skill.mode is jwt",
                ));
            }
            if secret.len() < JWT_MIN_SECRET_LENGTH {
                return Err(Error::configuration(format!(
                    "JWT secret should be at least {JWT_MIN_SECRET_LENGTH} characters long"
                )));
            }
        }
    }
    Ok(())
}

fn validate_bot_config(config: &AppConfig) -> Result<()> {
    let endpoint = Url::parse(&config.bot.endpoint)
        .config_context(format!("Invalid bot endpoint '{}'", config.bot.endpoint))?;
    if !matches!(endpoint.scheme(), "http" | "https") {
        return Err(Error::configuration(format!(
            "Bot endpoint must be an http or https URL, got '{}'",
            config.bot.endpoint
        )));
    }
    if config.bot.timeout_secs == 0 {
        return Err(Error::configuration("Bot timeout cannot be 0"));
    }
    Ok(())
}

fn validate_geo_config(config: &AppConfig) -> Result<()> {
    if config.geo.init_timeout_secs == 0 {
        return Err(Error::configuration(
            "Geospatial provider init timeout cannot be 0",
        ));
    }
    if config.geo.request_timeout_secs == 0 {
        return Err(Error::configuration(
            "Geospatial request timeout cannot be 0",
        ));
    }
    Ok(())
}

// ============================================================================
// Builder
// ============================================================================

/// Configuration builder for programmatic configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: AppConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set server configuration
    pub fn with_server(mut self, server: crate::config::ServerConfig) -> Self {
        self.config.server = server;
        self
    }

    /// Set authentication configuration
    pub fn with_auth(mut self, auth: crate::config::AuthConfig) -> Self {
        self.config.auth = auth;
        self
    }

    /// Set bot relay configuration
    pub fn with_bot(mut self, bot: crate::config::BotConfig) -> Self {
        self.config.bot = bot;
        self
    }

    /// Set geospatial configuration
    pub fn with_geo(mut self, geo: crate::config::GeoConfig) -> Self {
        self.config.geo = geo;
        self
    }

    /// Add one geospatial credential property
    pub fn with_geo_property<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.config.geo.properties.insert(key.into(), value.into());
        self
    }

    /// Set logging configuration
    pub fn with_logging(mut self, logging: crate::config::LoggingConfig) -> Self {
        self.config.logging = logging;
        self
    }

    /// Build the configuration
    pub fn build(self) -> AppConfig {
        self.config
    }
}
