//! Synthetic event and audit log generation.
//!
//! Generators take the RNG and the reference time explicitly, so a seeded
//! caller gets a reproducible collection. Output is sorted newest first.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use uuid::{Builder, Uuid};

use crate::models::{
    AuditCategory, AuditLogEntry, ChartPoint, Event, EventType, ServerStatus, SystemStatus,
};

pub const EVENT_LOOKBACK_MINUTES: i64 = 1440;
pub const AUDIT_LOOKBACK_MINUTES: i64 = 2880;

pub const MIN_CONFIDENCE: f64 = 0.70;
pub const MAX_CONFIDENCE: f64 = 0.99;

/// Event kinds produced by the synthesizer.
pub const SYNTHESIZED_EVENT_TYPES: [EventType; 9] = [
    EventType::Motion,
    EventType::Intrusion,
    EventType::FaceDetection,
    EventType::VehicleDetection,
    EventType::Tampering,
    EventType::Loitering,
    EventType::LineCrossing,
    EventType::Enter,
    EventType::Exit,
];

const ZONES: [Option<&str>; 5] = [
    Some("Zone A"),
    Some("Zone B"),
    Some("Zone C"),
    Some("Perimeter"),
    None,
];

const OBJECT_CLASSES: [&str; 3] = ["person", "vehicle", "unknown"];

const RULE_NAMES: [Option<&str>; 4] = [
    Some("Motion Rule 1"),
    Some("Intrusion Alert"),
    Some("Perimeter Watch"),
    None,
];

pub const AUDIT_ACTIONS: [&str; 13] = [
    "User login successful",
    "Camera configuration updated",
    "Bookmark created",
    "Video export started",
    "System backup completed",
    "Alert rule modified",
    "User password changed",
    "PTZ control accessed",
    "Recording settings updated",
    "Server connection established",
    "Failed login attempt",
    "Camera offline detected",
    "Storage threshold warning",
];

const AUDIT_USERS: [Option<&str>; 5] = [
    Some("admin"),
    Some("operator1"),
    Some("security_manager"),
    Some("viewer1"),
    None,
];

/// Random UUID drawn from the supplied generator.
pub fn uuid_from<R: Rng + ?Sized>(rng: &mut R) -> Uuid {
    Builder::from_random_bytes(rng.gen()).into_uuid()
}

/// Uniform pick. Callers guarantee `items` is non-empty.
fn choose<'s, T, R: Rng + ?Sized>(rng: &mut R, items: &'s [T]) -> &'s T {
    &items[rng.gen_range(0..items.len())]
}

fn minutes_ago<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>, lookback: i64) -> DateTime<Utc> {
    now - Duration::minutes(rng.gen_range(1..=lookback))
}

/// Generates `count` events for randomly chosen cameras.
///
/// Returns an empty list when `cameras` is empty.
pub fn synthesize_events<R: Rng + ?Sized>(
    rng: &mut R,
    now: DateTime<Utc>,
    cameras: &[&str],
    count: usize,
) -> Vec<Event> {
    if cameras.is_empty() {
        return Vec::new();
    }

    let mut events: Vec<Event> = (0..count)
        .map(|_| {
            let camera = *choose(rng, cameras);
            let timestamp = minutes_ago(rng, now, EVENT_LOOKBACK_MINUTES);
            Event {
                id: uuid_from(rng),
                record_code: format!("REC{}", rng.gen_range(10000..=99999)),
                camera: camera.to_string(),
                zone: choose(rng, &ZONES).map(str::to_string),
                event_type: *choose(rng, &SYNTHESIZED_EVENT_TYPES),
                object_class: choose(rng, &OBJECT_CLASSES).to_string(),
                rule_name: choose(rng, &RULE_NAMES).map(str::to_string),
                timestamp,
                confidence: round2(rng.gen_range(MIN_CONFIDENCE..=MAX_CONFIDENCE)),
            }
        })
        .collect();

    events.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    events
}

/// Generates `count` audit log entries.
pub fn synthesize_audit_logs<R: Rng + ?Sized>(
    rng: &mut R,
    now: DateTime<Utc>,
    count: usize,
) -> Vec<AuditLogEntry> {
    let mut logs: Vec<AuditLogEntry> = (0..count)
        .map(|i| {
            let timestamp = minutes_ago(rng, now, AUDIT_LOOKBACK_MINUTES);
            AuditLogEntry {
                id: uuid_from(rng),
                timestamp,
                category: *choose(rng, &AuditCategory::ALL),
                action: choose(rng, &AUDIT_ACTIONS).to_string(),
                user: choose(rng, &AUDIT_USERS).map(str::to_string),
                details: format!("Additional details for log entry {}", i + 1),
                ip_address: format!("192.168.1.{}", rng.gen_range(1..=254)),
            }
        })
        .collect();

    logs.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    logs
}

/// Hourly activity for the 24 hours ending at `now`, oldest bucket first.
pub fn synthesize_chart<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> Vec<ChartPoint> {
    (0..24i64)
        .rev()
        .map(|hours_back| ChartPoint {
            time: (now - Duration::hours(hours_back)).format("%H:00").to_string(),
            events: rng.gen_range(20..=100),
            motion: rng.gen_range(10..=60),
        })
        .collect()
}

/// Simulated server health for a process that has been up for `uptime`.
pub fn simulate_system_status<R: Rng + ?Sized>(rng: &mut R, uptime: Duration) -> SystemStatus {
    SystemStatus {
        server_status: ServerStatus::Online,
        cpu_usage: rng.gen_range(30..=60),
        memory_usage: rng.gen_range(50..=75),
        disk_usage: 70,
        uptime: format_uptime(uptime),
        last_sync: format!("{} min ago", rng.gen_range(1..=5)),
    }
}

/// Formats a duration as `14d 6h 32m`.
pub fn format_uptime(uptime: Duration) -> String {
    let minutes = uptime.num_minutes().max(0);
    format!(
        "{}d {}h {}m",
        minutes / (24 * 60),
        (minutes / 60) % 24,
        minutes % 60
    )
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
