//! TinyURL service integration tests
//!
//! Runs the real HTTP client against a local wiremock server.

use scissors::config::ShortenerConfig;
use scissors::errors::ScissorsError;
use scissors::services::{ShorteningService, TinyUrlService, build_shortening_service};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> ShortenerConfig {
    ShortenerConfig {
        api_url: format!("{}/create", server.uri()),
        api_token: "test-token".to_string(),
        domain: "tinyurl.com".to_string(),
        description: "string".to_string(),
        timeout_secs: 5,
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_create_sends_bearer_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/create"))
        .and(header("Authorization", "Bearer test-token"))
        .and(body_json(json!({
            "url": "https://example.com/long",
            "domain": "tinyurl.com",
            "description": "string"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "tiny_url": "https://tinyurl.com/2p8xyz" },
            "code": 0,
            "errors": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = TinyUrlService::new(&config_for(&server));
    let short = service.create("https://example.com/long").await.unwrap();
    assert_eq!(short, "https://tinyurl.com/2p8xyz");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_non_success_status_is_create_failed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/create"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "data": [],
            "code": 401,
            "errors": ["Unauthorized"]
        })))
        .mount(&server)
        .await;

    let service = build_shortening_service(&config_for(&server));
    let err = service.create("https://example.com").await.unwrap_err();
    assert!(matches!(err, ScissorsError::CreateFailed(_)));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_missing_tiny_url_is_create_failed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/create"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 5,
            "errors": ["Invalid URL"]
        })))
        .mount(&server)
        .await;

    let service = TinyUrlService::new(&config_for(&server));
    let err = service.create("https://example.com").await.unwrap_err();
    match err {
        ScissorsError::CreateFailed(msg) => assert!(msg.contains("Invalid URL")),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unreachable_endpoint_is_create_failed() {
    let config = ShortenerConfig {
        api_url: "http://127.0.0.1:9/create".to_string(),
        timeout_secs: 2,
        ..ShortenerConfig::default()
    };
    let service = TinyUrlService::new(&config);
    let err = service.create("https://example.com").await.unwrap_err();
    assert!(matches!(err, ScissorsError::CreateFailed(_)));
}
