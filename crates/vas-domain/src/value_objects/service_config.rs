//! Service Configuration Value Object
//!
//! Read-only key/value bundle, scoped to one locale, from which the
//! geospatial provider is selected.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_LOCALE;

/// Value Object: Service Configuration
///
/// ## Business Rules
///
/// - Owned by the caller; selection only reads it
/// - A missing, empty or whitespace-only value counts as absent
///
/// ## Example
///
/// ```rust
/// use vas_domain::value_objects::ServiceConfiguration;
///
/// let config = ServiceConfiguration::new("en-us")
///     .with_property("fallbackKey", "abc123")
///     .with_property("primaryClientId", "  ");
///
/// assert_eq!(config.value("fallbackKey"), Some("abc123"));
/// assert_eq!(config.value("primaryClientId"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfiguration {
    locale: String,
    #[serde(default)]
    properties: HashMap<String, String>,
}

impl ServiceConfiguration {
    /// Create an empty configuration for a locale
    pub fn new<L: Into<String>>(locale: L) -> Self {
        Self {
            locale: locale.into(),
            properties: HashMap::new(),
        }
    }

    /// Create a configuration from an existing property map
    pub fn from_properties<L: Into<String>>(
        locale: L,
        properties: HashMap<String, String>,
    ) -> Self {
        Self {
            locale: locale.into(),
            properties,
        }
    }

    /// Add a property
    pub fn with_property<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Locale the configuration is scoped to
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Raw value lookup, blank values included
    pub fn get(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// Value lookup that treats blank values as absent
    pub fn value(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|value| !value.trim().is_empty())
    }

    /// Whether a non-blank value exists for the key
    pub fn has(&self, key: &str) -> bool {
        self.value(key).is_some()
    }

    /// Number of properties
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether there are no properties
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl Default for ServiceConfiguration {
    fn default() -> Self {
        Self::new(DEFAULT_LOCALE)
    }
}
