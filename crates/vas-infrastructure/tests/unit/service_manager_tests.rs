//! Service manager tests
//!
//! Uses a counting fake initializer so no network is involved.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use vas_domain::constants::{FALLBACK_KEY, PRIMARY_CLIENT_ID_KEY, PRIMARY_CLIENT_SECRET_KEY};
use vas_domain::error::{Error, Result};
use vas_domain::ports::{GeoProviderInitializer, GeoSpatialService};
use vas_domain::value_objects::{
    Coordinates, GeoProviderHandle, PointOfInterest, ProviderKind, RouteDirections,
    ServiceConfiguration,
};
use vas_infrastructure::config::GeoConfig;
use vas_infrastructure::geo::ServiceManager;

struct FakeService {
    name: &'static str,
    locale: Option<String>,
}

#[async_trait]
impl GeoSpatialService for FakeService {
    fn provider_name(&self) -> &str {
        self.name
    }

    fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    async fn get_nearby_points_of_interest(&self, _at: Coordinates) -> Result<Vec<PointOfInterest>> {
        Ok(Vec::new())
    }

    async fn get_points_of_interest_by_query(
        &self,
        _at: Coordinates,
        _query: &str,
    ) -> Result<Vec<PointOfInterest>> {
        Ok(Vec::new())
    }

    async fn get_route_directions(
        &self,
        _start: Coordinates,
        _end: Coordinates,
    ) -> Result<RouteDirections> {
        Err(Error::unsupported(self.name, "route directions"))
    }
}

#[derive(Default)]
struct CountingInitializer {
    primary_calls: AtomicUsize,
    fallback_calls: AtomicUsize,
    delay: Option<Duration>,
}

#[async_trait]
impl GeoProviderInitializer for CountingInitializer {
    async fn init_primary(
        &self,
        _client_id: &str,
        _client_secret: &str,
    ) -> Result<Arc<dyn GeoSpatialService>> {
        self.primary_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        Ok(Arc::new(FakeService {
            name: "primary-fake",
            locale: None,
        }))
    }

    async fn init_fallback(&self, _api_key: &str, locale: &str) -> Result<Arc<dyn GeoSpatialService>> {
        self.fallback_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        Ok(Arc::new(FakeService {
            name: "fallback-fake",
            locale: Some(locale.to_string()),
        }))
    }
}

fn manager(initializer: &Arc<CountingInitializer>) -> ServiceManager {
    ServiceManager::new(initializer.clone())
}

fn all_credentials() -> ServiceConfiguration {
    ServiceConfiguration::default()
        .with_property(PRIMARY_CLIENT_ID_KEY, "id")
        .with_property(PRIMARY_CLIENT_SECRET_KEY, "secret")
        .with_property(FALLBACK_KEY, "azure")
}

#[tokio::test]
async fn test_init_maps_service_prefers_primary() {
    let init = Arc::new(CountingInitializer::default());
    let handle = manager(&init)
        .init_maps_service(&all_credentials(), Some("de-de"))
        .await
        .unwrap();

    assert!(matches!(handle, GeoProviderHandle::Primary(_)));
    assert_eq!(handle.service().provider_name(), "primary-fake");
    assert!(handle.service().locale().is_none());
    assert_eq!(init.primary_calls.load(Ordering::SeqCst), 1);
    assert_eq!(init.fallback_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_init_maps_service_fallback_defaults_locale() {
    let init = Arc::new(CountingInitializer::default());
    let config = ServiceConfiguration::default().with_property(FALLBACK_KEY, "azure");

    let handle = manager(&init).init_maps_service(&config, None).await.unwrap();
    assert_eq!(handle.kind(), ProviderKind::Fallback);
    assert_eq!(handle.service().locale(), Some("en"));

    let localized = manager(&init)
        .init_maps_service(&config, Some("ja-jp"))
        .await
        .unwrap();
    assert_eq!(localized.service().locale(), Some("ja-jp"));
    assert_eq!(init.fallback_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_init_routing_maps_service_ignores_primary() {
    let init = Arc::new(CountingInitializer::default());
    let handle = manager(&init)
        .init_routing_maps_service(&all_credentials(), Some("en-gb"))
        .await
        .unwrap();

    assert!(matches!(handle, GeoProviderHandle::Fallback(_)));
    assert_eq!(init.primary_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_configuration_error_skips_initializer() {
    let init = Arc::new(CountingInitializer::default());
    let config = ServiceConfiguration::default().with_property(PRIMARY_CLIENT_ID_KEY, "id");

    let err = manager(&init).init_maps_service(&config, None).await.unwrap_err();
    assert!(err.is_configuration());
    let err = manager(&init)
        .init_routing_maps_service(&config, None)
        .await
        .unwrap_err();
    assert!(err.is_configuration());

    assert_eq!(init.primary_calls.load(Ordering::SeqCst), 0);
    assert_eq!(init.fallback_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test(start_paused = true)]
async fn test_slow_initialization_times_out() {
    let init = Arc::new(CountingInitializer {
        delay: Some(Duration::from_secs(120)),
        ..Default::default()
    });
    let manager = manager(&init).with_init_timeout(Duration::from_secs(5));

    let err = manager
        .init_maps_service(&all_credentials(), None)
        .await
        .unwrap_err();
    match err {
        Error::Timeout { seconds, .. } => assert_eq!(seconds, 5),
        other => panic!("expected timeout, got {other:?}"),
    }
}

#[tokio::test]
async fn test_from_config_builds_http_initializer() {
    let geo = GeoConfig {
        init_timeout_secs: 7,
        ..GeoConfig::default()
    };
    let manager = ServiceManager::from_config(&geo).unwrap();
    assert_eq!(manager.init_timeout(), Duration::from_secs(7));

    let handle = manager
        .init_maps_service(
            &ServiceConfiguration::default().with_property(FALLBACK_KEY, "azure"),
            Some("pt-br"),
        )
        .await
        .unwrap();
    assert_eq!(handle.service().provider_name(), "azure-maps");
    assert_eq!(handle.service().locale(), Some("pt-br"));
}
