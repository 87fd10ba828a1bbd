//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the VAS skill host
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Configuration-related error
    ///
    /// Raised when required settings are missing or invalid. Fatal at startup.
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Authentication-related error
    #[error("Authentication error: {message}")]
    Authentication {
        /// Description of the authentication error
        message: String,
    },

    /// Network-related error
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// External provider returned an error response
    #[error("{provider} provider error: {message}")]
    Provider {
        /// Name of the provider (e.g. "azure-maps")
        provider: String,
        /// Description of the provider error
        message: String,
    },

    /// Operation not supported by the selected provider
    #[error("{provider} does not support {operation}")]
    Unsupported {
        /// Name of the provider
        provider: String,
        /// Operation that was requested
        operation: String,
    },

    /// Message pipeline failure
    #[error("Pipeline error: {message}")]
    Pipeline {
        /// Description of the pipeline failure
        message: String,
    },

    /// Operation exceeded its deadline
    #[error("Timed out after {seconds}s: {operation}")]
    Timeout {
        /// Operation that timed out
        operation: String,
        /// Deadline in seconds
        seconds: u64,
    },

    /// Operation was cancelled by the caller
    #[error("Cancelled: {operation}")]
    Cancelled {
        /// Operation that was cancelled
        operation: String,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Network and provider error creation methods
impl Error {
    /// Create a network error
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
            source: None,
        }
    }

    /// Create a network error with source
    pub fn network_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Network {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a provider error
    pub fn provider<P: Into<String>, S: Into<String>>(provider: P, message: S) -> Self {
        Self::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// Create an unsupported-operation error
    pub fn unsupported<P: Into<String>, S: Into<String>>(provider: P, operation: S) -> Self {
        Self::Unsupported {
            provider: provider.into(),
            operation: operation.into(),
        }
    }
}

// Request lifecycle error creation methods
impl Error {
    /// Create an authentication error
    pub fn authentication<S: Into<String>>(message: S) -> Self {
        Self::Authentication {
            message: message.into(),
        }
    }

    /// Create a pipeline error
    pub fn pipeline<S: Into<String>>(message: S) -> Self {
        Self::Pipeline {
            message: message.into(),
        }
    }

    /// Create a timeout error
    pub fn timeout<S: Into<String>>(operation: S, seconds: u64) -> Self {
        Self::Timeout {
            operation: operation.into(),
            seconds,
        }
    }

    /// Create a cancellation error
    pub fn cancelled<S: Into<String>>(operation: S) -> Self {
        Self::Cancelled {
            operation: operation.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl Error {
    /// Short machine-readable kind, used in HTTP error bodies and log fields
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Io { .. } => "io",
            Self::Json { .. } => "json",
            Self::Configuration { .. } => "configuration",
            Self::Authentication { .. } => "authentication",
            Self::Network { .. } => "network",
            Self::Provider { .. } => "provider",
            Self::Unsupported { .. } => "unsupported",
            Self::Pipeline { .. } => "pipeline",
            Self::Timeout { .. } => "timeout",
            Self::Cancelled { .. } => "cancelled",
            Self::Internal { .. } => "internal",
        }
    }

    /// Whether this is a configuration error
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }
}
