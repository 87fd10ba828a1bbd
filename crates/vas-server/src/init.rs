//! Server Initialization
//!
//! Loads configuration, installs logging, validates the geospatial
//! configuration by running provider selection once, wires the request
//! router and launches the HTTP transport.
//!
//! The geospatial provider is not used by the router. Selection at startup
//! only proves the configuration is usable and reports the active backend.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};
use vas_domain::error::Result;
use vas_domain::value_objects::GeoProviderHandle;
use vas_infrastructure::config::{AppConfig, ConfigLoader};
use vas_infrastructure::geo::ServiceManager;
use vas_infrastructure::{build_skill_authenticator, logging};
use vas_providers::bot::RelayBot;
use vas_providers::http::HttpClientConfig;
use vas_providers::pipeline::ActivityPipeline;

use crate::controller::SkillController;
use crate::transport::{HttpTransport, HttpTransportConfig};

/// Run the skill host
///
/// With `check` set, stops after configuration and provider selection
/// succeed, without binding a port.
pub async fn run(
    config_path: Option<&Path>,
    check: bool,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let loader = config_loader(config_path);
    let config = loader.load()?;
    logging::init_logging(config.logging.clone())?;
    logging::log_config_loaded(loader.resolve_config_path().as_deref());

    info!(
        host = %config.server.host,
        port = config.server.port,
        "Starting VAS skill host"
    );

    let handle = probe_geo_provider(&config).await?;
    if check {
        info!(
            kind = %handle.kind(),
            provider = handle.service().provider_name(),
            "Configuration check passed"
        );
        return Ok(());
    }

    let controller = Arc::new(build_controller(&config)?);
    let transport = HttpTransport::new(
        HttpTransportConfig {
            host: config.server.host.clone(),
            port: config.server.port,
        },
        controller,
    );

    transport
        .start()
        .await
        .map_err(|e| -> Box<dyn std::error::Error> { e })
}

/// Loader for an optional explicit path
fn config_loader(config_path: Option<&Path>) -> ConfigLoader {
    match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    }
}

/// Run point-of-interest provider selection once
///
/// A configuration error is fatal. Routing availability is only reported,
/// since routing needs the fallback key even when the primary is configured.
pub async fn probe_geo_provider(config: &AppConfig) -> Result<GeoProviderHandle> {
    let manager = ServiceManager::from_config(&config.geo)?;
    let service_config = config.geo.service_configuration();
    let locale = Some(config.geo.locale.as_str());

    let handle = manager.init_maps_service(&service_config, locale).await?;

    if let Err(e) = manager
        .init_routing_maps_service(&service_config, locale)
        .await
    {
        warn!(error = %e, "Route directions unavailable");
    }

    Ok(handle)
}

/// Build the request router from configuration
pub fn build_controller(config: &AppConfig) -> Result<SkillController> {
    let http_client =
        HttpClientConfig::with_timeout(Duration::from_secs(config.bot.timeout_secs)).build()?;
    let bot = RelayBot::new(&config.bot.endpoint, http_client)?;
    let authenticator = build_skill_authenticator(&config.auth.skill)?;

    Ok(SkillController::new(
        Arc::new(ActivityPipeline::channel()),
        Arc::new(ActivityPipeline::skill()),
        Arc::new(bot),
    )
    .with_optional_authenticator(authenticator))
}
