//! Analytics event domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::DomainError;

/// Kinds of analytic events a camera can raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    Presence,
    Enter,
    Exit,
    Appear,
    Disappear,
    Stopped,
    Loitering,
    Direction,
    Speed,
    Tailgating,
    CountingLineA,
    CountingLineB,
    Tampering,
    AbandonedObject,
    RemovedObject,
    Smoke,
    Fire,
    FaceDetection,
    FaceRecognition,
    VehicleDetection,
    Motion,
    Intrusion,
    LineCrossing,
    ObjectLeft,
    ObjectRemoved,
}

impl EventType {
    pub const ALL: [EventType; 25] = [
        EventType::Presence,
        EventType::Enter,
        EventType::Exit,
        EventType::Appear,
        EventType::Disappear,
        EventType::Stopped,
        EventType::Loitering,
        EventType::Direction,
        EventType::Speed,
        EventType::Tailgating,
        EventType::CountingLineA,
        EventType::CountingLineB,
        EventType::Tampering,
        EventType::AbandonedObject,
        EventType::RemovedObject,
        EventType::Smoke,
        EventType::Fire,
        EventType::FaceDetection,
        EventType::FaceRecognition,
        EventType::VehicleDetection,
        EventType::Motion,
        EventType::Intrusion,
        EventType::LineCrossing,
        EventType::ObjectLeft,
        EventType::ObjectRemoved,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Presence => "PRESENCE",
            EventType::Enter => "ENTER",
            EventType::Exit => "EXIT",
            EventType::Appear => "APPEAR",
            EventType::Disappear => "DISAPPEAR",
            EventType::Stopped => "STOPPED",
            EventType::Loitering => "LOITERING",
            EventType::Direction => "DIRECTION",
            EventType::Speed => "SPEED",
            EventType::Tailgating => "TAILGATING",
            EventType::CountingLineA => "COUNTING_LINE_A",
            EventType::CountingLineB => "COUNTING_LINE_B",
            EventType::Tampering => "TAMPERING",
            EventType::AbandonedObject => "ABANDONED_OBJECT",
            EventType::RemovedObject => "REMOVED_OBJECT",
            EventType::Smoke => "SMOKE",
            EventType::Fire => "FIRE",
            EventType::FaceDetection => "FACE_DETECTION",
            EventType::FaceRecognition => "FACE_RECOGNITION",
            EventType::VehicleDetection => "VEHICLE_DETECTION",
            EventType::Motion => "MOTION",
            EventType::Intrusion => "INTRUSION",
            EventType::LineCrossing => "LINE_CROSSING",
            EventType::ObjectLeft => "OBJECT_LEFT",
            EventType::ObjectRemoved => "OBJECT_REMOVED",
        }
    }

    /// Returns true for event kinds counted as critical on the dashboard.
    pub fn is_critical(&self) -> bool {
        matches!(
            self,
            EventType::Intrusion | EventType::Tampering | EventType::Fire | EventType::Smoke
        )
    }
}

impl FromStr for EventType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        EventType::ALL
            .iter()
            .find(|t| t.as_str() == upper)
            .copied()
            .ok_or_else(|| DomainError::unknown("event type", s))
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A synthesized analytics event.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: Uuid,
    pub record_code: String,
    pub camera: String,
    pub zone: Option<String>,
    pub event_type: EventType,
    pub object_class: String,
    pub rule_name: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub confidence: f64,
}
