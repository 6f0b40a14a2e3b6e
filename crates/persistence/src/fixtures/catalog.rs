//! Analytics and bookmark catalog shared by every bundled dataset.

use chrono::{DateTime, TimeZone, Utc};
use domain::models::{AnalyticsConfiguration, AnalyticsStatus, BookmarkColor, EventType, NewBookmark};

use super::CounterSeed;

fn bookmark(
    title: &str,
    color: BookmarkColor,
    start: (&str, &str),
    end: (&str, &str),
    cameras: &[&str],
    remarks: &str,
) -> NewBookmark {
    NewBookmark {
        title: title.to_string(),
        color,
        start_date: Some(start.0.to_string()),
        start_time: Some(start.1.to_string()),
        end_date: Some(end.0.to_string()),
        end_time: Some(end.1.to_string()),
        cameras: cameras.iter().map(|c| c.to_string()).collect(),
        remarks: Some(remarks.to_string()),
    }
}

pub fn bookmarks() -> Vec<NewBookmark> {
    vec![
        bookmark(
            "Suspicious Activity - Main Entrance",
            BookmarkColor::Red,
            ("2024-12-08", "14:30"),
            ("2024-12-08", "14:45"),
            &["Camera 1 - Main Entrance"],
            "Person loitering near entrance for extended period",
        ),
        bookmark(
            "Vehicle Incident - Parking",
            BookmarkColor::Orange,
            ("2024-12-07", "09:15"),
            ("2024-12-07", "09:25"),
            &["Camera 2 - Parking Lot A", "Camera 9 - Parking Lot B"],
            "Minor collision in parking area",
        ),
        bookmark(
            "Delivery Verification",
            BookmarkColor::Blue,
            ("2024-12-06", "11:00"),
            ("2024-12-06", "11:30"),
            &["Camera 3 - Loading Dock"],
            "Large shipment arrival for verification",
        ),
        bookmark(
            "After Hours Access",
            BookmarkColor::Yellow,
            ("2024-12-05", "23:45"),
            ("2024-12-06", "00:15"),
            &["Camera 5 - Server Room"],
            "Authorized maintenance access to server room",
        ),
        bookmark(
            "Perimeter Check",
            BookmarkColor::Green,
            ("2024-12-04", "06:00"),
            ("2024-12-04", "06:30"),
            &["Camera 14 - Perimeter East", "Camera 15 - Perimeter West"],
            "Morning security patrol verification",
        ),
    ]
}

fn configuration(
    name: &str,
    camera: &str,
    events: &[EventType],
    status_message: &str,
) -> AnalyticsConfiguration {
    AnalyticsConfiguration {
        name: name.to_string(),
        active: true,
        camera: camera.to_string(),
        events: events.to_vec(),
        working: true,
        status: AnalyticsStatus::Ok,
        status_message: status_message.to_string(),
    }
}

pub fn analytics_configurations() -> Vec<AnalyticsConfiguration> {
    let mut loitering = configuration(
        "Loitering Detection - Reception",
        "Camera 4 - Reception",
        &[EventType::Loitering],
        "Disabled by admin",
    );
    loitering.active = false;
    loitering.working = false;
    loitering.status = AnalyticsStatus::Disabled;

    vec![
        configuration(
            "Motion Detection - All Cameras",
            "All",
            &[EventType::Motion],
            "Processing normally",
        ),
        configuration(
            "Intrusion Detection - Perimeter",
            "Perimeter Group",
            &[EventType::Intrusion, EventType::LineCrossing],
            "Active monitoring",
        ),
        configuration(
            "Face Recognition - Entrance",
            "Camera 1 - Main Entrance",
            &[EventType::FaceDetection],
            "Database: 1,247 faces",
        ),
        configuration(
            "Vehicle Detection - Parking",
            "Parking Group",
            &[EventType::VehicleDetection],
            "Active",
        ),
        loitering,
        configuration(
            "Tampering Alert - All",
            "All",
            &[EventType::Tampering],
            "Monitoring",
        ),
    ]
}

fn start_of_december() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 12, 1, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

pub fn counters() -> Vec<CounterSeed> {
    let last_reset = start_of_december();
    [
        ("People Counter - Main Entrance", "Motion Detection - All Cameras", 1247),
        ("Vehicle Counter - Parking", "Vehicle Detection - Parking", 892),
        ("Deliveries - Loading Dock", "Motion Detection - All Cameras", 156),
        ("Security Events", "Intrusion Detection - Perimeter", 23),
        ("Face Matches", "Face Recognition - Entrance", 487),
        ("After Hours Access", "Motion Detection - All Cameras", 12),
    ]
    .into_iter()
    .map(|(name, configuration, value)| CounterSeed {
        name: name.to_string(),
        configuration: configuration.to_string(),
        value,
        last_reset,
    })
    .collect()
}
