//! Analytics routes: configurations, counters and event search.

use axum::{extract::State, Json};
use chrono::Utc;
use domain::models::{AnalyticsConfiguration, ChartPoint, Counter, Event};
use domain::services::synthesize_chart;
use persistence::EventSearch;
use serde::Serialize;
use tracing::debug;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::FieldSet;
use crate::middleware::metrics::record_counter_reset;
use crate::routes::date_window;

/// Events returned by the recent feed when no `Limit` is given.
pub const DEFAULT_RECENT_LIMIT: usize = 10;

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConfigurationsResponse {
    pub analytics_configurations: Vec<AnalyticsConfiguration>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CountersResponse {
    pub counters: Vec<Counter>,
}

#[derive(Debug, Serialize)]
pub struct ResetCounterResponse {
    pub success: bool,
    pub counter: Counter,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EventsResponse {
    pub events: Vec<Event>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChartResponse {
    pub chart: Vec<ChartPoint>,
}

/// GET /Interface/Analytics/GetAnalyticsConfigurations and /Interface/Analytics/GetStatus
pub async fn get_configurations(State(state): State<AppState>) -> Json<ConfigurationsResponse> {
    let store = state.store.read().await;
    Json(ConfigurationsResponse {
        analytics_configurations: store.analytics_configurations().to_vec(),
    })
}

/// GET /Interface/Analytics/GetCounters
pub async fn get_counters(State(state): State<AppState>) -> Json<CountersResponse> {
    let store = state.store.read().await;
    Json(CountersResponse {
        counters: store.counters().to_vec(),
    })
}

/// GET|POST /Interface/Analytics/ResetCounter
pub async fn reset_counter(
    State(state): State<AppState>,
    fields: FieldSet,
) -> Result<Json<ResetCounterResponse>, ApiError> {
    let id = fields
        .text("CounterID")
        .ok_or_else(|| ApiError::Validation("CounterID is required".to_string()))?;

    let counter = state.store.write().await.reset_counter(id)?;
    record_counter_reset();

    Ok(Json(ResetCounterResponse {
        success: true,
        counter,
    }))
}

/// GET /Interface/Analytics/Search
pub async fn search(State(state): State<AppState>, fields: FieldSet) -> Json<EventsResponse> {
    let search = EventSearch {
        cameras: fields.list("Cameras"),
        event_types: fields.list("EventTypes"),
        zones: fields.list("Zones"),
        object_classes: fields.list("ObjectClasses"),
        rule_names: fields.list("RuleNames"),
        window: date_window(&fields, state.config.fixtures.apply_date_range),
    };

    let events = state.store.read().await.search_events(&search);
    debug!(matched = events.len(), "Analytics search");
    Json(EventsResponse { events })
}

/// GET /Interface/Analytics/Recent?Limit=n
pub async fn recent(State(state): State<AppState>, fields: FieldSet) -> Json<EventsResponse> {
    let limit = fields.number("Limit").unwrap_or(DEFAULT_RECENT_LIMIT);
    let events = state.store.read().await.recent_events(limit);
    Json(EventsResponse { events })
}

/// GET /Interface/Analytics/Chart
///
/// Hourly activity is regenerated on every call.
pub async fn chart() -> Json<ChartResponse> {
    let chart = synthesize_chart(&mut rand::thread_rng(), Utc::now());
    Json(ChartResponse { chart })
}
