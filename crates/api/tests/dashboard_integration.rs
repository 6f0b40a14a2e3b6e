//! Integration tests for dashboard and system status.

mod common;

use axum::http::StatusCode;
use persistence::DatasetKind;
use tower::ServiceExt;

use common::{create_test_app, get_request, parse_response_body};

#[tokio::test]
async fn test_dashboard_stats_site() {
    let app = create_test_app(DatasetKind::Site);

    let response = app
        .oneshot(get_request("/Interface/Dashboard/Stats"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert_eq!(body["totalCameras"], 16);
    assert_eq!(body["activeCameras"], 14);
    assert_eq!(body["offlineCameras"], 2);
    assert_eq!(body["recordingCameras"], 8);
    assert_eq!(body["totalEvents"], 50);
    assert!(body["criticalEvents"].as_u64().unwrap() <= 5);
    assert_eq!(body["totalStorage"], "4 TB");
    assert_eq!(body["usedStorage"], "2.8 TB");
}

#[tokio::test]
async fn test_dashboard_stats_campus() {
    let app = create_test_app(DatasetKind::Campus);

    let response = app
        .oneshot(get_request("/Interface/Dashboard/Stats"))
        .await
        .unwrap();

    let body = parse_response_body(response).await;
    assert_eq!(body["totalCameras"], 81);
    assert_eq!(body["activeCameras"], 81);
    assert_eq!(body["offlineCameras"], 0);
}

#[tokio::test]
async fn test_system_status_ranges() {
    let app = create_test_app(DatasetKind::Site);

    let response = app
        .oneshot(get_request("/Interface/System/Status"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert_eq!(body["serverStatus"], "online");
    let cpu = body["cpuUsage"].as_u64().unwrap();
    assert!((30..=60).contains(&cpu));
    let memory = body["memoryUsage"].as_u64().unwrap();
    assert!((50..=75).contains(&memory));
    assert_eq!(body["diskUsage"], 70);
    assert!(body["uptime"].as_str().unwrap().ends_with('m'));
}
