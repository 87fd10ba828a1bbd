//! Configuration loading and validation tests
//!
//! Environment overrides are exercised inside `figment::Jail`, which
//! serializes access to the process environment and runs each test in a
//! scratch working directory.

use figment::Jail;
use vas_domain::constants::FALLBACK_KEY;
use vas_infrastructure::config::loader::validate_app_config;
use vas_infrastructure::config::{AppConfig, ConfigBuilder, ConfigLoader, SkillAuthMode};
use vas_infrastructure::constants::{DEFAULT_GEO_INIT_TIMEOUT_SECS, DEFAULT_SERVER_PORT};

fn load() -> figment::error::Result<AppConfig> {
    ConfigLoader::new().load().map_err(|e| e.to_string().into())
}

#[test]
fn test_defaults_are_valid() {
    let config = AppConfig::default();
    assert_eq!(config.server.port, DEFAULT_SERVER_PORT);
    assert_eq!(config.auth.skill.mode, SkillAuthMode::Disabled);
    assert_eq!(config.geo.init_timeout_secs, DEFAULT_GEO_INIT_TIMEOUT_SECS);
    assert!(validate_app_config(&config).is_ok());
}

#[test]
fn test_toml_file_in_working_directory() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "vas.toml",
            r#"
                [server]
                port = 8080

                [auth.skill]
                mode = "api_key"
                key = "from-file"

                [geo]
                locale = "fr-fr"

                [geo.properties]
                fallbackKey = "azure-from-file"
            "#,
        )?;

        let config = load()?;
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.auth.skill.mode, SkillAuthMode::ApiKey);
        assert_eq!(config.auth.skill.key.as_deref(), Some("from-file"));

        let service = config.geo.service_configuration();
        assert_eq!(service.locale(), "fr-fr");
        assert_eq!(service.value(FALLBACK_KEY), Some("azure-from-file"));
        Ok(())
    });
}

#[test]
fn test_env_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file("vas.toml", "[server]\nport = 8080\n")?;
        jail.set_env("VAS_SERVER__PORT", "9090");
        jail.set_env("VAS_AUTH__SKILL__MODE", "jwt");
        jail.set_env("VAS_AUTH__SKILL__JWT_SECRET", "0123456789abcdef0123456789abcdef");
        jail.set_env("VAS_GEO__PROPERTIES__FALLBACKKEY", "azure-from-env");

        let config = load()?;
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.auth.skill.mode, SkillAuthMode::Jwt);
        assert_eq!(
            config.geo.service_configuration().value(FALLBACK_KEY),
            Some("azure-from-env")
        );
        Ok(())
    });
}

#[test]
fn test_explicit_missing_path_is_rejected() {
    Jail::expect_with(|_jail| {
        let loader = ConfigLoader::new().with_config_path("does-not-exist.toml");
        let err = loader.load().unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("does-not-exist.toml"));
        Ok(())
    });
}

#[test]
fn test_resolve_config_path() {
    Jail::expect_with(|jail| {
        jail.create_file("vas.toml", "[server]\nport = 4000\n")?;
        let found = ConfigLoader::new().resolve_config_path().unwrap();
        assert!(found.ends_with("vas.toml"));

        let explicit = ConfigLoader::new().with_config_path("custom.toml");
        assert_eq!(
            explicit.resolve_config_path().unwrap(),
            std::path::PathBuf::from("custom.toml")
        );
        Ok(())
    });
}

#[test]
fn test_skill_auth_mode_names() {
    Jail::expect_with(|jail| {
        jail.create_file("vas.toml", "[auth.skill]\nmode = \"none\"\n")?;
        assert_eq!(load()?.auth.skill.mode, SkillAuthMode::Disabled);

        jail.create_file("vas.toml", "[auth.skill]\nmode = \"disabled\"\n")?;
        assert!(ConfigLoader::new().load().is_err());
        Ok(())
    });
}

#[test]
fn test_invalid_combinations_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("VAS_SERVER__PORT", "0");
        assert!(ConfigLoader::new().load().is_err());
        Ok(())
    });

    Jail::expect_with(|jail| {
        jail.set_env("VAS_AUTH__SKILL__MODE", "api_key");
        let err = ConfigLoader::new().load().unwrap_err();
        assert!(err.is_configuration());
        Ok(())
    });

    Jail::expect_with(|jail| {
        jail.set_env("VAS_AUTH__SKILL__MODE", "jwt");
        jail.set_env("VAS_AUTH__SKILL__JWT_SECRET", "short");
        let err = ConfigLoader::new().load().unwrap_err();
        assert!(err.to_string().contains("at least 32"));
        Ok(())
    });

    Jail::expect_with(|jail| {
        jail.set_env("VAS_BOT__ENDPOINT", "ftp://bots.example.com");
        assert!(ConfigLoader::new().load().unwrap_err().is_configuration());
        Ok(())
    });

    Jail::expect_with(|jail| {
        jail.set_env("VAS_GEO__INIT_TIMEOUT_SECS", "0");
        assert!(ConfigLoader::new().load().unwrap_err().is_configuration());
        Ok(())
    });

    Jail::expect_with(|jail| {
        jail.set_env("VAS_LOGGING__LEVEL", "chatty");
        assert!(ConfigLoader::new().load().unwrap_err().is_configuration());
        Ok(())
    });
}

#[test]
fn test_save_and_reload_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vas.toml");

    let config = ConfigBuilder::new()
        .with_geo_property(FALLBACK_KEY, "saved-key")
        .build();
    let loader = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("VAS_SAVE_TEST");
    loader.save_to_file(&config, &path).unwrap();

    let reloaded = loader.load().unwrap();
    assert_eq!(
        reloaded.geo.service_configuration().value(FALLBACK_KEY),
        Some("saved-key")
    );
    assert_eq!(loader.config_path(), Some(path.as_path()));
}
