//! Health check endpoint handlers.

use axum::{extract::State, Json};
use chrono::Utc;
use serde::Serialize;

use crate::app::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub store: StoreHealth,
}

/// Fixture store summary.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct StoreHealth {
    pub dataset: String,
    pub devices: usize,
    pub events: usize,
    pub bookmarks: usize,
    pub uptime_secs: i64,
}

/// Simple status response for liveness/readiness probes.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

/// Full health check endpoint.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let store = state.store.read().await;
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        store: StoreHealth {
            dataset: store.dataset_name().to_string(),
            devices: store.devices().len(),
            events: store.events().len(),
            bookmarks: store.bookmarks().len(),
            uptime_secs: store.uptime(Utc::now()).num_seconds(),
        },
    })
}

/// Liveness probe endpoint.
///
/// Returns 200 OK if the process is running.
pub async fn live() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "alive".to_string(),
    })
}

/// Readiness probe endpoint.
///
/// Returns 200 OK once the store can be read.
pub async fn ready(State(state): State<AppState>) -> Json<StatusResponse> {
    let _store = state.store.read().await;
    Json(StatusResponse {
        status: "ready".to_string(),
    })
}
