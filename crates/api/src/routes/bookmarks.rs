//! Bookmark routes.

use axum::{extract::State, Json};
use domain::models::{Bookmark, BookmarkColor, NewBookmark};
use domain::services::TagSet;
use persistence::{BookmarkSearch, StoreError};
use serde::Serialize;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::FieldSet;
use crate::middleware::metrics::{record_bookmark_created, record_bookmark_deleted};
use crate::routes::date_window;

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BookmarksResponse {
    pub bookmarks: Vec<Bookmark>,
}

#[derive(Debug, Serialize)]
pub struct AddBookmarkResponse {
    pub success: bool,
    pub bookmark: Bookmark,
}

#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

fn owned(fields: &FieldSet, key: &str) -> Option<String> {
    fields.text(key).map(str::to_string)
}

/// Reads bookmark fields. Title defaults to empty, color to blue.
fn new_bookmark(fields: &FieldSet) -> Result<NewBookmark, ApiError> {
    let color = match fields.text("Color") {
        Some(color) => color.parse::<BookmarkColor>()?,
        None => BookmarkColor::default(),
    };

    Ok(NewBookmark {
        title: owned(fields, "Title").unwrap_or_default(),
        color,
        start_date: owned(fields, "StartDate"),
        start_time: owned(fields, "StartTime"),
        end_date: owned(fields, "EndDate"),
        end_time: owned(fields, "EndTime"),
        cameras: fields.list("Cameras").unwrap_or_default(),
        remarks: owned(fields, "Remarks"),
    })
}

/// GET /Interface/Cameras/Bookmarks/Search
pub async fn search(State(state): State<AppState>, fields: FieldSet) -> Json<BookmarksResponse> {
    let search = BookmarkSearch {
        keyword: owned(&fields, "Keyword"),
        colors: fields.list("Colors").and_then(TagSet::from_values),
        window: date_window(&fields, state.config.fixtures.apply_date_range),
    };

    let bookmarks = state.store.read().await.search_bookmarks(&search);
    Json(BookmarksResponse { bookmarks })
}

/// GET|POST /Interface/Cameras/Bookmarks/Add
pub async fn add(
    State(state): State<AppState>,
    fields: FieldSet,
) -> Result<Json<AddBookmarkResponse>, ApiError> {
    let new = new_bookmark(&fields)?;
    let bookmark = state.store.write().await.insert_bookmark(new);
    record_bookmark_created();

    Ok(Json(AddBookmarkResponse {
        success: true,
        bookmark,
    }))
}

/// DELETE|POST /Interface/Cameras/Bookmarks/Delete?id=
pub async fn remove(
    State(state): State<AppState>,
    fields: FieldSet,
) -> Result<Json<SuccessResponse>, ApiError> {
    let id = fields
        .text("id")
        .ok_or_else(|| ApiError::Validation("id is required".to_string()))?;

    if !state.store.write().await.delete_bookmark(id) {
        return Err(StoreError::not_found("Bookmark", id).into());
    }
    record_bookmark_deleted();

    Ok(Json(SuccessResponse { success: true }))
}
