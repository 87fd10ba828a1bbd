//! Unit tests for the service configuration value object

use std::collections::HashMap;

use vas_domain::constants::{DEFAULT_LOCALE, FALLBACK_KEY};
use vas_domain::value_objects::ServiceConfiguration;

#[test]
fn test_default_locale() {
    let config = ServiceConfiguration::default();
    assert_eq!(config.locale(), DEFAULT_LOCALE);
    assert!(config.is_empty());
}

#[test]
fn test_blank_values_are_absent() {
    let config = ServiceConfiguration::new("fr-fr")
        .with_property(FALLBACK_KEY, "   ")
        .with_property("primaryClientId", "");

    assert_eq!(config.get(FALLBACK_KEY), Some("   "));
    assert_eq!(config.value(FALLBACK_KEY), None);
    assert!(!config.has("primaryClientId"));
    assert_eq!(config.len(), 2);
}

#[test]
fn test_from_properties() {
    let mut properties = HashMap::new();
    properties.insert(FALLBACK_KEY.to_string(), "key-1".to_string());

    let config = ServiceConfiguration::from_properties("de-de", properties);
    assert_eq!(config.locale(), "de-de");
    assert_eq!(config.value(FALLBACK_KEY), Some("key-1"));
}
