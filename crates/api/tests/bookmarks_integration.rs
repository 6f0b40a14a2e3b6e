//! Integration tests for bookmark endpoints.

mod common;

use axum::http::{Method, StatusCode};
use fake::faker::lorem::en::{Sentence, Words};
use fake::Fake;
use persistence::DatasetKind;
use serde_json::json;
use tower::ServiceExt;

use common::{
    create_test_app, create_test_app_with_store, empty_request, get_request,
    json_request, parse_response_body,
};

fn titles(body: &serde_json::Value) -> Vec<String> {
    body["Bookmarks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["title"].as_str().unwrap().to_string())
        .collect()
}

// ============================================================================
// Search
// ============================================================================

#[tokio::test]
async fn test_search_all_bookmarks() {
    let app = create_test_app(DatasetKind::Site);

    let response = app
        .oneshot(get_request("/Interface/Cameras/Bookmarks/Search"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert_eq!(titles(&body).len(), 5);
    assert_eq!(body["Bookmarks"][0]["startTime"], "14:30");
}

#[tokio::test]
async fn test_search_by_keyword() {
    let app = create_test_app(DatasetKind::Site);

    let response = app
        .oneshot(get_request("/Interface/Cameras/Bookmarks/Search?Keyword=PARKING"))
        .await
        .unwrap();

    let body = parse_response_body(response).await;
    assert_eq!(titles(&body), vec!["Vehicle Incident - Parking"]);
}

#[tokio::test]
async fn test_search_by_colors() {
    let app = create_test_app(DatasetKind::Site);

    let response = app
        .oneshot(get_request("/Interface/Cameras/Bookmarks/Search?Colors=red,green"))
        .await
        .unwrap();

    let body = parse_response_body(response).await;
    assert_eq!(
        titles(&body),
        vec!["Suspicious Activity - Main Entrance", "Perimeter Check"]
    );
}

#[tokio::test]
async fn test_search_date_range_only_when_enabled() {
    let uri = "/Interface/Cameras/Bookmarks/Search?StartDate=2024-12-05&EndDate=2024-12-06&EndTime=23:59";

    let response = create_test_app(DatasetKind::Site)
        .oneshot(get_request(uri))
        .await
        .unwrap();
    let body = parse_response_body(response).await;
    assert_eq!(titles(&body).len(), 5);

    let (app, _) =
        create_test_app_with_store(DatasetKind::Site, &[("fixtures.apply_date_range", "true")]);
    let response = app.oneshot(get_request(uri)).await.unwrap();
    let body = parse_response_body(response).await;
    assert_eq!(
        titles(&body),
        vec!["Delivery Verification", "After Hours Access"]
    );
}

// ============================================================================
// Add and delete
// ============================================================================

#[tokio::test]
async fn test_add_bookmark_lands_first() {
    let (app, store) = create_test_app_with_store(DatasetKind::Site, &[]);
    let title: String = Words(2..4).fake::<Vec<String>>().join(" ");
    let remarks: String = Sentence(3..6).fake();

    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/Interface/Cameras/Bookmarks/Add",
            json!({
                "title": title,
                "color": "purple",
                "startDate": "2024-12-09",
                "startTime": "07:30",
                "cameras": ["Camera 3 - Loading Dock"],
                "remarks": remarks,
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["bookmark"]["title"], title.as_str());
    assert_eq!(body["bookmark"]["color"], "purple");
    assert!(body["bookmark"]["id"].is_string());

    let response = app
        .oneshot(get_request("/Interface/Cameras/Bookmarks/Search"))
        .await
        .unwrap();
    let body = parse_response_body(response).await;
    let listed = titles(&body);
    assert_eq!(listed.len(), 6);
    assert_eq!(listed[0], title);
    assert_eq!(store.read().await.bookmarks().len(), 6);
}

#[tokio::test]
async fn test_add_bookmark_defaults() {
    let app = create_test_app(DatasetKind::Site);

    let response = app
        .oneshot(get_request("/Interface/Cameras/Bookmarks/Add"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert_eq!(body["bookmark"]["title"], "");
    assert_eq!(body["bookmark"]["color"], "blue");
}

#[tokio::test]
async fn test_add_bookmark_unknown_color() {
    let app = create_test_app(DatasetKind::Site);

    let response = app
        .oneshot(get_request("/Interface/Cameras/Bookmarks/Add?Title=x&Color=teal"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_bookmark() {
    let (app, store) = create_test_app_with_store(DatasetKind::Site, &[]);
    let id = store.read().await.bookmarks()[0].id.to_string();

    let response = app
        .clone()
        .oneshot(empty_request(
            Method::DELETE,
            &format!("/Interface/Cameras/Bookmarks/Delete?id={}", urlencoding::encode(&id)),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(store.read().await.bookmarks().len(), 4);

    let response = app
        .oneshot(empty_request(
            Method::DELETE,
            &format!("/Interface/Cameras/Bookmarks/Delete?id={}", urlencoding::encode(&id)),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_via_post_body() {
    let (app, store) = create_test_app_with_store(DatasetKind::Site, &[]);
    let id = store.read().await.bookmarks()[2].id.to_string();

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/Interface/Cameras/Bookmarks/Delete",
            json!({ "id": id }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(store
        .read()
        .await
        .bookmarks()
        .iter()
        .all(|b| b.title != "Delivery Verification"));
}

#[tokio::test]
async fn test_delete_unknown_bookmark() {
    let app = create_test_app(DatasetKind::Site);

    let response = app
        .oneshot(empty_request(
            Method::DELETE,
            "/Interface/Cameras/Bookmarks/Delete?id=not-a-bookmark",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = parse_response_body(response).await;
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_delete_requires_id() {
    let app = create_test_app(DatasetKind::Site);

    let response = app
        .oneshot(empty_request(Method::DELETE, "/Interface/Cameras/Bookmarks/Delete"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
