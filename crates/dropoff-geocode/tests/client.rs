//! Integration tests for `OpenCageClient` using wiremock HTTP mocks.

use dropoff_geocode::{GeocodeError, OpenCageClient};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> OpenCageClient {
    OpenCageClient::with_base_url("test-key", 30, base_url)
        .expect("client construction should not fail")
}

#[tokio::test]
async fn geocode_returns_first_result() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": { "code": 200, "message": "OK" },
        "results": [
            {
                "formatted": "Oakland, CA, USA",
                "geometry": { "lat": 37.8044, "lng": -122.2711 }
            },
            {
                "formatted": "Oakland, MD, USA",
                "geometry": { "lat": 39.4079, "lng": -79.4067 }
            }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/geocode/v1/json"))
        .and(query_param("q", "oakland"))
        .and(query_param("key", "test-key"))
        .and(query_param("limit", "1"))
        .and(query_param("no_annotations", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.geocode("oakland").await.expect("should geocode");

    assert!((result.lat - 37.8044).abs() < 1e-9);
    assert!((result.lng - (-122.2711)).abs() < 1e-9);
    assert_eq!(result.formatted_address, "Oakland, CA, USA");
}

#[tokio::test]
async fn geocode_surfaces_no_match_on_empty_results() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": { "code": 200, "message": "OK" },
        "results": []
    });

    Mock::given(method("GET"))
        .and(path("/geocode/v1/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.geocode("nowhereville").await;

    assert!(matches!(result, Err(GeocodeError::NoMatch)));
}

#[tokio::test]
async fn geocode_surfaces_http_errors() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode/v1/json"))
        .respond_with(ResponseTemplate::new(402).set_body_string("quota exceeded"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.geocode("anything").await;

    assert!(matches!(result, Err(GeocodeError::Http(_))));
}

#[tokio::test]
async fn geocode_surfaces_deserialize_errors_with_context() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "results": [ { "formatted": "Oakland, CA, USA" } ]
    });

    Mock::given(method("GET"))
        .and(path("/geocode/v1/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.geocode("oakland").await;

    match result {
        Err(GeocodeError::Deserialize { context, .. }) => {
            assert!(context.contains("oakland"), "context: {context}");
        }
        other => panic!("expected Deserialize error, got: {other:?}"),
    }
}

#[test]
fn rejects_invalid_base_url() {
    let result = OpenCageClient::with_base_url("key", 30, "not a url");
    assert!(matches!(result, Err(GeocodeError::ApiError(_))));
}
