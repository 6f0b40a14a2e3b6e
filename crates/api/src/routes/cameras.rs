//! Camera and group routes.

use axum::{extract::State, Json};
use domain::models::{ActivationAction, Device, Group};
use serde::Serialize;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::FieldSet;
use crate::middleware::metrics::record_camera_activation;

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CamerasResponse {
    pub cameras: Vec<Device>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GroupsResponse {
    pub groups: Vec<Group>,
}

#[derive(Debug, Serialize)]
pub struct ActivationResponse {
    pub success: bool,
    pub camera: Device,
}

/// GET /Interface/Cameras/GetCameras
pub async fn get_cameras(State(state): State<AppState>) -> Json<CamerasResponse> {
    let store = state.store.read().await;
    Json(CamerasResponse {
        cameras: store.devices().to_vec(),
    })
}

/// GET /Interface/Cameras/GetGroups
pub async fn get_groups(State(state): State<AppState>) -> Json<GroupsResponse> {
    let store = state.store.read().await;
    Json(GroupsResponse {
        groups: store.groups().to_vec(),
    })
}

/// GET /Interface/Cameras/GetStatus?Cameras=a,b
///
/// Unknown names are skipped. Without `Cameras` every device is returned.
pub async fn get_status(
    State(state): State<AppState>,
    fields: FieldSet,
) -> Json<CamerasResponse> {
    let store = state.store.read().await;
    Json(CamerasResponse {
        cameras: store.camera_status(fields.list("Cameras")),
    })
}

/// GET|POST /Interface/Cameras/Activation
///
/// Takes `Camera` and `Action` (`activate` or `deactivate`).
pub async fn activation(
    State(state): State<AppState>,
    fields: FieldSet,
) -> Result<Json<ActivationResponse>, ApiError> {
    let camera = fields
        .text("Camera")
        .ok_or_else(|| ApiError::Validation("Camera is required".to_string()))?;
    let action: ActivationAction = fields
        .text("Action")
        .ok_or_else(|| ApiError::Validation("Action is required".to_string()))?
        .parse()?;

    let device = state
        .store
        .write()
        .await
        .set_device_activation(camera, action.is_activate())?;
    record_camera_activation(action.is_activate());

    Ok(Json(ActivationResponse {
        success: true,
        camera: device,
    }))
}
