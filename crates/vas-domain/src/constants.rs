//! Domain constants
//!
//! Configuration keys and defaults that are part of the domain contract.
//! Infrastructure-specific constants live in `vas_infrastructure::constants`.

// ============================================================================
// SERVICE CONFIGURATION KEYS
// ============================================================================

/// Client id of the primary point-of-interest provider
pub const PRIMARY_CLIENT_ID_KEY: &str = "primaryClientId";

/// Client secret of the primary point-of-interest provider
pub const PRIMARY_CLIENT_SECRET_KEY: &str = "primaryClientSecret";

/// Subscription key of the fallback provider (also the only routing provider)
pub const FALLBACK_KEY: &str = "fallbackKey";

/// Locale used when the caller does not supply one
pub const DEFAULT_LOCALE: &str = "en";

// ============================================================================
// ENDPOINTS
// ============================================================================

/// Endpoint for messages delivered by a channel (or a parent bot)
pub const CHANNEL_MESSAGES_PATH: &str = "/api/messages";

/// Endpoint the bot exposes as a skill
pub const SKILL_MESSAGES_PATH: &str = "/api/skill/messages";
