//! Startup wiring tests

use vas_domain::constants::{FALLBACK_KEY, PRIMARY_CLIENT_ID_KEY, PRIMARY_CLIENT_SECRET_KEY};
use vas_domain::value_objects::ProviderKind;
use vas_infrastructure::config::{AppConfig, SkillAuthMode};
use vas_infrastructure::constants::MISSING_FALLBACK_KEY_MESSAGE;
use vas_server::init::{build_controller, probe_geo_provider};

fn config_with_properties(pairs: &[(&str, &str)]) -> AppConfig {
    let mut config = AppConfig::default();
    for (key, value) in pairs {
        config
            .geo
            .properties
            .insert((*key).to_string(), (*value).to_string());
    }
    config
}

#[test]
fn test_build_controller_defaults_to_open_skill_endpoint() {
    let controller = build_controller(&AppConfig::default()).unwrap();
    assert!(!controller.has_authenticator());
}

#[test]
fn test_build_controller_with_api_key() {
    let mut config = AppConfig::default();
    config.auth.skill.mode = SkillAuthMode::ApiKey;
    config.auth.skill.key = Some("s3cret".to_string());

    let controller = build_controller(&config).unwrap();
    assert!(controller.has_authenticator());
}

#[test]
fn test_build_controller_rejects_api_key_mode_without_key() {
    let mut config = AppConfig::default();
    config.auth.skill.mode = SkillAuthMode::ApiKey;

    let err = build_controller(&config).unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn test_build_controller_rejects_non_http_bot_endpoint() {
    let mut config = AppConfig::default();
    config.bot.endpoint = "ftp://bot.local/turn".to_string();

    assert!(build_controller(&config).is_err());
}

#[tokio::test]
async fn test_probe_without_fallback_key_is_fatal() {
    let err = probe_geo_provider(&AppConfig::default()).await.unwrap_err();

    assert!(err.is_configuration());
    assert!(err.to_string().contains(MISSING_FALLBACK_KEY_MESSAGE));
}

#[tokio::test]
async fn test_probe_selects_fallback_with_key_only() {
    let config = config_with_properties(&[(FALLBACK_KEY, "azure-key")]);

    let handle = probe_geo_provider(&config).await.unwrap();

    assert_eq!(handle.kind(), ProviderKind::Fallback);
    assert_eq!(handle.service().provider_name(), "azure-maps");
}

#[tokio::test]
async fn test_probe_prefers_primary_with_both_credentials() {
    let config = config_with_properties(&[
        (PRIMARY_CLIENT_ID_KEY, "fsq-id"),
        (PRIMARY_CLIENT_SECRET_KEY, "fsq-secret"),
        (FALLBACK_KEY, "azure-key"),
    ]);

    let handle = probe_geo_provider(&config).await.unwrap();

    assert_eq!(handle.kind(), ProviderKind::Primary);
    assert_eq!(handle.service().provider_name(), "foursquare");
}

#[tokio::test]
async fn test_probe_keeps_primary_when_routing_is_unavailable() {
    let config = config_with_properties(&[
        (PRIMARY_CLIENT_ID_KEY, "fsq-id"),
        (PRIMARY_CLIENT_SECRET_KEY, "fsq-secret"),
    ]);

    let handle = probe_geo_provider(&config).await.unwrap();

    assert_eq!(handle.kind(), ProviderKind::Primary);
}

#[tokio::test]
async fn test_run_rejects_missing_config_file() {
    let missing = std::env::temp_dir().join("vas-missing-config-dir").join("vas.toml");

    let err = vas_server::run(Some(missing.as_path()), true).await.unwrap_err();

    assert!(err.to_string().contains("Configuration file not found"));
}
