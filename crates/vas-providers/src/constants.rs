//! Provider Constants
//!
//! Constants specific to provider implementations. These are separated from
//! domain constants (which live in vas-domain) and infrastructure constants.

// ============================================================================
// FOURSQUARE (PRIMARY) CONSTANTS
// ============================================================================

/// Provider name reported by the Foursquare client
pub const FOURSQUARE_PROVIDER_NAME: &str = "foursquare";

/// Foursquare v2 API base URL
pub const FOURSQUARE_BASE_URL: &str = "https://api.foursquare.com/v2";

/// API version date sent with every Foursquare request
pub const FOURSQUARE_API_VERSION: &str = "20190123";

// ============================================================================
// AZURE MAPS (FALLBACK) CONSTANTS
// ============================================================================

/// Provider name reported by the Azure Maps client
pub const AZURE_MAPS_PROVIDER_NAME: &str = "azure-maps";

/// Azure Maps API base URL
pub const AZURE_MAPS_BASE_URL: &str = "https://atlas.microsoft.com";

/// Azure Maps REST API version
pub const AZURE_MAPS_API_VERSION: &str = "1.0";

// ============================================================================
// SEARCH CONSTANTS
// ============================================================================

/// Maximum results requested per point-of-interest search
pub const POI_RESULT_LIMIT: usize = 10;

/// Search radius in meters for nearby searches
pub const POI_SEARCH_RADIUS_METERS: u32 = 5_000;

// ============================================================================
// HTTP CONSTANTS
// ============================================================================

/// Content type for JSON payloads
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Default request timeout in seconds
pub const HTTP_DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Error message for request timeouts
pub const ERROR_MSG_REQUEST_TIMEOUT: &str = "Request timed out after";

// ============================================================================
// AUTH CONSTANTS
// ============================================================================

/// Default header carrying the skill API key
pub const SKILL_KEY_HEADER: &str = "x-skill-key";


/// Allowed-callers entry that admits any caller
pub const ANY_CALLER: &str = "*";
