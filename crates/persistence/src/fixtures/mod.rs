//! Seed datasets for the fixture store.
//!
//! A [`Dataset`] is plain data: device seeds, groups and the static analytics
//! and bookmark catalog. The store derives everything else (positions, events,
//! audit logs, record ids) from it at construction.

pub mod campus;
pub mod catalog;
pub mod site;

use chrono::{DateTime, Utc};
use domain::models::{AnalyticsConfiguration, DeviceSeed, DeviceStatus, Group, NewBookmark};
use domain::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Bundled dataset selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetKind {
    /// Single facility with sixteen numbered cameras.
    Site,
    /// High school and university campus with classified identifiers.
    #[default]
    Campus,
}

impl DatasetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetKind::Site => "site",
            DatasetKind::Campus => "campus",
        }
    }

    pub fn load(&self) -> Dataset {
        match self {
            DatasetKind::Site => site::dataset(),
            DatasetKind::Campus => campus::dataset(),
        }
    }
}

impl FromStr for DatasetKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "site" => Ok(DatasetKind::Site),
            "campus" => Ok(DatasetKind::Campus),
            _ => Err(DomainError::unknown("dataset", s)),
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Counter as declared in a dataset, before an id is assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterSeed {
    pub name: String,
    pub configuration: String,
    pub value: u64,
    pub last_reset: DateTime<Utc>,
}

/// Static input for building a fixture store.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    pub name: String,
    pub devices: Vec<DeviceSeed>,
    pub groups: Vec<Group>,
    pub bookmarks: Vec<NewBookmark>,
    pub analytics_configurations: Vec<AnalyticsConfiguration>,
    pub counters: Vec<CounterSeed>,
}

impl Dataset {
    /// Dataset with the given roster and the shared analytics catalog.
    pub fn with_catalog(name: &str, devices: Vec<DeviceSeed>, groups: Vec<Group>) -> Self {
        Self {
            name: name.to_string(),
            devices,
            groups,
            bookmarks: catalog::bookmarks(),
            analytics_configurations: catalog::analytics_configurations(),
            counters: catalog::counters(),
        }
    }
}

/// Knobs controlling derived fixture content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedOptions {
    /// Base seed for layout jitter and synthesized records.
    pub seed: u64,
    pub event_count: usize,
    pub audit_log_count: usize,
}

impl Default for SeedOptions {
    fn default() -> Self {
        Self {
            seed: 42,
            event_count: 50,
            audit_log_count: 30,
        }
    }
}

/// Row layout shared by the roster tables:
/// `(name, active, model, device type, address, latitude, longitude, group, status, recording hours)`.
pub(crate) type RosterRow = (
    &'static str,
    bool,
    &'static str,
    &'static str,
    &'static str,
    f64,
    f64,
    &'static str,
    DeviceStatus,
    u32,
);

pub(crate) fn seed_from_row(row: &RosterRow) -> DeviceSeed {
    let (name, active, model, device_type, address, latitude, longitude, group, status, hours) =
        *row;
    DeviceSeed {
        name: name.to_string(),
        active,
        model: model.to_string(),
        device_type: device_type.to_string(),
        connection_address: address.to_string(),
        connection_port: 80,
        latitude,
        longitude,
        group: group.to_string(),
        status,
        working: active,
        recording_hours: hours,
    }
}
