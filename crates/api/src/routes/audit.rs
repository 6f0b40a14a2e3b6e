//! Audit log search route.

use axum::{extract::State, Json};
use domain::models::AuditLogEntry;
use persistence::AuditSearch;
use serde::Serialize;

use crate::app::AppState;
use crate::extractors::FieldSet;
use crate::routes::date_window;

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AuditLogsResponse {
    pub audit_logs: Vec<AuditLogEntry>,
}

/// GET /Interface/Audit/Search
///
/// `Category` must match exactly. `Keyword` is looked up in action, details
/// and user.
pub async fn search(State(state): State<AppState>, fields: FieldSet) -> Json<AuditLogsResponse> {
    let search = AuditSearch {
        category: fields.text("Category").map(str::to_string),
        keyword: fields.text("Keyword").map(str::to_string),
        window: date_window(&fields, state.config.fixtures.apply_date_range),
    };

    let audit_logs = state.store.read().await.search_audit_logs(&search);
    Json(AuditLogsResponse { audit_logs })
}
