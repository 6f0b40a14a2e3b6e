//! Dashboard and system status routes.

use axum::{extract::State, Json};
use chrono::Utc;
use domain::models::{DashboardStats, SystemStatus};
use domain::services::simulate_system_status;

use crate::app::AppState;

/// GET /Interface/Dashboard/Stats
pub async fn stats(State(state): State<AppState>) -> Json<DashboardStats> {
    Json(state.store.read().await.dashboard_stats())
}

/// GET /Interface/System/Status
pub async fn system_status(State(state): State<AppState>) -> Json<SystemStatus> {
    let uptime = state.store.read().await.uptime(Utc::now());
    Json(simulate_system_status(&mut rand::thread_rng(), uptime))
}
