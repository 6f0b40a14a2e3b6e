//! Service information endpoint.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::app::AppState;

pub const SERVICE_NAME: &str = "Surveillance Fixture API";

/// Routes advertised by the service info endpoint.
pub const ENDPOINTS: &[&str] = &[
    "/Interface/Cameras/GetCameras",
    "/Interface/Cameras/GetGroups",
    "/Interface/Cameras/GetStatus",
    "/Interface/Cameras/Activation",
    "/Interface/Analytics/GetAnalyticsConfigurations",
    "/Interface/Analytics/GetCounters",
    "/Interface/Analytics/ResetCounter",
    "/Interface/Analytics/GetStatus",
    "/Interface/Analytics/Search",
    "/Interface/Analytics/Recent",
    "/Interface/Analytics/Chart",
    "/Interface/Audit/Search",
    "/Interface/Cameras/Bookmarks/Search",
    "/Interface/Cameras/Bookmarks/Add",
    "/Interface/Cameras/Bookmarks/Delete",
    "/Interface/Dashboard/Stats",
    "/Interface/System/Status",
];

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub status: &'static str,
    pub dataset: String,
    pub cameras_with_position: usize,
    pub endpoints: &'static [&'static str],
}

/// GET /
pub async fn service_info(State(state): State<AppState>) -> Json<ServiceInfo> {
    let store = state.store.read().await;
    Json(ServiceInfo {
        name: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
        status: "running",
        dataset: store.dataset_name().to_string(),
        cameras_with_position: store.positioned_device_count(),
        endpoints: ENDPOINTS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_info_serialization() {
        let info = ServiceInfo {
            name: SERVICE_NAME,
            version: "0.3.0",
            status: "running",
            dataset: "campus".to_string(),
            cameras_with_position: 81,
            endpoints: ENDPOINTS,
        };
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["camerasWithPosition"], 81);
        assert_eq!(json["status"], "running");
        assert_eq!(json["endpoints"].as_array().unwrap().len(), ENDPOINTS.len());
    }
}
