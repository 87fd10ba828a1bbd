//! Provider Selection Value Objects
//!
//! The outcome of choosing a geospatial backend, split into the pure
//! decision ([`ProviderSelection`]) and the initialized result
//! ([`GeoProviderHandle`]).

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::ports::GeoSpatialService;

/// Which of the two interchangeable backends was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    /// Primary point-of-interest provider (Foursquare)
    Primary,
    /// Fallback provider (Azure Maps), also the only routing provider
    Fallback,
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary => write!(f, "primary"),
            Self::Fallback => write!(f, "fallback"),
        }
    }
}

/// Pure selection decision, computed without any I/O
///
/// Carries exactly the inputs the chosen provider is initialized with.
/// `Debug` redacts the credentials.
#[derive(Clone, PartialEq, Eq)]
pub enum ProviderSelection {
    /// Initialize the primary provider with its client credentials
    Primary {
        /// Client id
        client_id: String,
        /// Client secret
        client_secret: String,
    },
    /// Initialize the fallback provider with its key and locale
    Fallback {
        /// Subscription key
        api_key: String,
        /// Locale for localized results
        locale: String,
    },
}

impl ProviderSelection {
    /// Which backend this selection refers to
    pub fn kind(&self) -> ProviderKind {
        match self {
            Self::Primary { .. } => ProviderKind::Primary,
            Self::Fallback { .. } => ProviderKind::Fallback,
        }
    }
}

impl fmt::Debug for ProviderSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary { .. } => f
                .debug_struct("Primary")
                .field("client_id", &"<redacted>")
                .field("client_secret", &"<redacted>")
                .finish(),
            Self::Fallback { locale, .. } => f
                .debug_struct("Fallback")
                .field("api_key", &"<redacted>")
                .field("locale", locale)
                .finish(),
        }
    }
}

/// An initialized geospatial provider, tagged with its variant
#[derive(Clone)]
pub enum GeoProviderHandle {
    /// Primary provider handle
    Primary(Arc<dyn GeoSpatialService>),
    /// Fallback provider handle
    Fallback(Arc<dyn GeoSpatialService>),
}

impl GeoProviderHandle {
    /// Which backend the handle wraps
    pub fn kind(&self) -> ProviderKind {
        match self {
            Self::Primary(_) => ProviderKind::Primary,
            Self::Fallback(_) => ProviderKind::Fallback,
        }
    }

    /// Borrow the underlying service
    pub fn service(&self) -> &Arc<dyn GeoSpatialService> {
        match self {
            Self::Primary(service) | Self::Fallback(service) => service,
        }
    }
}

impl fmt::Debug for GeoProviderHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeoProviderHandle")
            .field("kind", &self.kind())
            .field("provider", &self.service().provider_name())
            .field("locale", &self.service().locale())
            .finish()
    }
}
