//! Dashboard and system status models.

use serde::Serialize;

/// Upper bound reported for critical events on the dashboard.
pub const CRITICAL_EVENTS_CAP: usize = 5;

/// Aggregate counts shown on the operator dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_cameras: usize,
    pub active_cameras: usize,
    pub recording_cameras: usize,
    pub offline_cameras: usize,
    pub total_events: usize,
    pub critical_events: usize,
    pub total_storage: String,
    pub used_storage: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServerStatus {
    Online,
    Offline,
    Degraded,
}

/// Simulated server health.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemStatus {
    pub server_status: ServerStatus,
    pub cpu_usage: u8,
    pub memory_usage: u8,
    pub disk_usage: u8,
    pub uptime: String,
    pub last_sync: String,
}

/// One hourly bucket of the event activity chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartPoint {
    /// Hour label formatted as `HH:00`.
    pub time: String,
    pub events: u32,
    pub motion: u32,
}
