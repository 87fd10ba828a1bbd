//! Server constants

// ============================================================================
// REQUEST CONSTANTS
// ============================================================================

/// Header a caller may use to supply its own request id
pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// Largest accepted activity body in bytes
pub const MAX_ACTIVITY_BYTES: u64 = 1024 * 1024;

// ============================================================================
// ERROR BODY CONSTANTS
// ============================================================================

/// Error kind reported when the body exceeds [`MAX_ACTIVITY_BYTES`]
pub const ERROR_KIND_PAYLOAD_TOO_LARGE: &str = "payload_too_large";

/// Error kind reported by the fallback catcher
pub const ERROR_KIND_HTTP: &str = "http";
