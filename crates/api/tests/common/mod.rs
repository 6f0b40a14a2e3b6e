//! Common test utilities for integration tests.
//!
//! Builds the router over an in-memory fixture store and provides request
//! helpers for driving it with `tower::ServiceExt::oneshot`.

// Not every integration test uses every helper.
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request},
    Router,
};
use chrono::{DateTime, TimeZone, Utc};
use fixture_api::{app::create_app, config::Config};
use persistence::{DatasetKind, FixtureStore, SharedStore};

/// Fixed reference time for reproducible fixtures.
pub fn reference_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 12, 9, 8, 0, 0).unwrap()
}

/// Test configuration with embedded defaults and overrides.
pub fn test_config(overrides: &[(&str, &str)]) -> Config {
    Config::load_for_test(overrides).expect("Failed to load test config")
}

/// Build a shared store for `dataset` using the config's seed options.
pub fn create_test_store(config: &Config, dataset: DatasetKind) -> SharedStore {
    FixtureStore::from_dataset(
        dataset.load(),
        &config.fixtures.seed_options(),
        reference_time(),
    )
    .into_shared()
}

/// Router and store handle over the given dataset.
pub fn create_test_app_with_store(
    dataset: DatasetKind,
    overrides: &[(&str, &str)],
) -> (Router, SharedStore) {
    let config = test_config(overrides);
    let store = create_test_store(&config, dataset);
    (create_app(config, store.clone()), store)
}

/// Router over the given dataset with default config.
pub fn create_test_app(dataset: DatasetKind) -> Router {
    create_test_app_with_store(dataset, &[]).0
}

/// Build a request without a body.
pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Build a GET request.
pub fn get_request(uri: &str) -> Request<Body> {
    empty_request(Method::GET, uri)
}

/// Build a request with a JSON body.
pub fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Parse a response body as JSON.
pub async fn parse_response_body(response: axum::response::Response) -> serde_json::Value {
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap_or_else(|_| {
        panic!(
            "Failed to parse response body. Status: {}, Body: {:?}",
            status,
            String::from_utf8_lossy(&body)
        );
    })
}
