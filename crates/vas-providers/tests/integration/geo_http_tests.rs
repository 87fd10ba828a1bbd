//! Geospatial providers against a mock HTTP server

use mockito::{Matcher, Server};
use reqwest::Client;
use serde_json::json;

use vas_domain::error::Error;
use vas_domain::ports::{GeoProviderInitializer, GeoSpatialService};
use vas_domain::value_objects::Coordinates;
use vas_providers::geo::{
    AzureMapsGeoSpatialService, FoursquareGeoSpatialService, HttpGeoProviderInitializer,
};

fn seattle() -> Coordinates {
    Coordinates::new(47.6062, -122.3321)
}

#[tokio::test]
async fn test_azure_maps_nearby_sends_locale_and_key() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/search/nearby/json")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("subscription-key".into(), "azure-key".into()),
            Matcher::UrlEncoded("language".into(), "de-de".into()),
            Matcher::UrlEncoded("api-version".into(), "1.0".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "results": [{
                    "id": "DE/POI/1",
                    "dist": 42.0,
                    "poi": { "name": "Kaffeehaus", "categories": ["cafe"] },
                    "address": { "freeformAddress": "Hauptstr. 1", "municipality": "Berlin" },
                    "position": { "lat": 52.52, "lon": 13.40 }
                }]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let service = AzureMapsGeoSpatialService::init_key("azure-key", "de-de", Client::new())
        .await
        .unwrap()
        .with_base_url(server.url());
    let points = service.get_nearby_points_of_interest(seattle()).await.unwrap();

    mock.assert_async().await;
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].name, "Kaffeehaus");
    assert_eq!(points[0].city.as_deref(), Some("Berlin"));
}

#[tokio::test]
async fn test_azure_maps_route_directions() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/route/directions/json")
        .match_query(Matcher::UrlEncoded(
            "query".into(),
            "47.6062,-122.3321:47.6205,-122.3493".into(),
        ))
        .with_status(200)
        .with_body(
            json!({
                "routes": [{
                    "summary": { "lengthInMeters": 2400, "travelTimeInSeconds": 480 },
                    "legs": [{ "points": [
                        { "latitude": 47.6062, "longitude": -122.3321 },
                        { "latitude": 47.6205, "longitude": -122.3493 }
                    ]}]
                }]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let service = AzureMapsGeoSpatialService::init_key("azure-key", "en", Client::new())
        .await
        .unwrap()
        .with_base_url(server.url());
    let directions = service
        .get_route_directions(seattle(), Coordinates::new(47.6205, -122.3493))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(directions.summary.length_meters, 2400);
    assert_eq!(directions.points.len(), 2);
}

#[tokio::test]
async fn test_azure_maps_rejected_key_is_provider_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/search/fuzzy/json")
        .match_query(Matcher::Any)
        .with_status(401)
        .with_body("invalid subscription key")
        .create_async()
        .await;

    let service = AzureMapsGeoSpatialService::init_key("wrong", "en", Client::new())
        .await
        .unwrap()
        .with_base_url(server.url());
    let err = service
        .get_points_of_interest_by_query(seattle(), "coffee")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Provider { .. }));
    assert!(err.to_string().contains("authentication failed"));
}

#[tokio::test]
async fn test_foursquare_query_search() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/venues/search")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("query".into(), "coffee".into()),
            Matcher::UrlEncoded("client_id".into(), "fsq-id".into()),
            Matcher::UrlEncoded("client_secret".into(), "fsq-secret".into()),
        ]))
        .with_status(200)
        .with_body(
            json!({
                "meta": { "code": 200 },
                "response": { "venues": [{
                    "id": "v1",
                    "name": "Storyville Coffee",
                    "location": { "lat": 47.6088, "lng": -122.3404, "city": "Seattle" },
                    "categories": [{ "name": "Coffee Shop", "primary": true }]
                }]}
            })
            .to_string(),
        )
        .create_async()
        .await;

    let service = FoursquareGeoSpatialService::init_client("fsq-id", "fsq-secret", Client::new())
        .await
        .unwrap()
        .with_base_url(server.url());
    let points = service
        .get_points_of_interest_by_query(seattle(), "coffee")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].provider, "foursquare");
}

#[tokio::test]
async fn test_initializer_builds_both_backends() {
    let initializer = HttpGeoProviderInitializer::new(Client::new());

    let primary = initializer.init_primary("id", "secret").await.unwrap();
    assert_eq!(primary.provider_name(), "foursquare");
    assert!(primary.locale().is_none());

    let fallback = initializer.init_fallback("key", "es-mx").await.unwrap();
    assert_eq!(fallback.provider_name(), "azure-maps");
    assert_eq!(fallback.locale(), Some("es-mx"));

    assert!(initializer.init_fallback("", "en").await.is_err());
}

#[tokio::test]
async fn test_initializer_base_url_override() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/search/nearby/json")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"results": []}"#)
        .create_async()
        .await;

    let initializer =
        HttpGeoProviderInitializer::new(Client::new()).with_azure_maps_base_url(server.url());
    let fallback = initializer.init_fallback("key", "en").await.unwrap();
    let points = fallback.get_nearby_points_of_interest(seattle()).await.unwrap();

    mock.assert_async().await;
    assert!(points.is_empty());
}
