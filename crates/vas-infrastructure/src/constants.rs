//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `vas_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "vas.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "vas";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "VAS";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// SERVER CONSTANTS
// ============================================================================

/// Default bind address
pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";

/// Default HTTP port
pub const DEFAULT_SERVER_PORT: u16 = 3978;

// ============================================================================
// AUTHENTICATION CONSTANTS
// ============================================================================

/// Minimum length of the HS256 secret used to verify skill tokens
pub const JWT_MIN_SECRET_LENGTH: usize = 32;

// ============================================================================
// BOT CONSTANTS
// ============================================================================

/// Default upstream bot runtime endpoint
pub const DEFAULT_BOT_ENDPOINT: &str = "http://127.0.0.1:3979/api/turn";

/// Default timeout for a relayed bot turn in seconds
pub const DEFAULT_BOT_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// GEOSPATIAL CONSTANTS
// ============================================================================

/// Default bound on provider initialization in seconds
pub const DEFAULT_GEO_INIT_TIMEOUT_SECS: u64 = 30;

/// Message of the error raised when the fallback key is missing
pub const MISSING_FALLBACK_KEY_MESSAGE: &str = "Could not get the required fallback maps key (fallbackKey). Please make sure your settings are correctly configured.";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_ENV_FILTER_VAR: &str = "VAS_LOG";

/// File stem used when the configured log path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "vas";
