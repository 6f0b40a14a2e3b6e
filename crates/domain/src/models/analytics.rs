//! Analytics configuration and counter models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::event::EventType;

/// Health of an analytics configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AnalyticsStatus {
    Ok,
    Disabled,
    Error,
}

/// An analytics rule watching a camera or group for a set of event types.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsConfiguration {
    pub name: String,
    pub active: bool,
    /// Device name, group label, or `All`.
    pub camera: String,
    pub events: Vec<EventType>,
    pub working: bool,
    pub status: AnalyticsStatus,
    pub status_message: String,
}

/// A running tally owned by an analytics configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Counter {
    pub id: Uuid,
    pub name: String,
    pub configuration: String,
    pub value: u64,
    pub last_reset: DateTime<Utc>,
}

impl Counter {
    pub fn reset(&mut self, at: DateTime<Utc>) {
        self.value = 0;
        self.last_reset = at;
    }
}
