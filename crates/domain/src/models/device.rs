//! Device domain model.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;
use crate::services::layout::Placement;

/// Operational status reported for a camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceStatus {
    Recording,
    Online,
    Offline,
    Error,
}

impl DeviceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceStatus::Recording => "recording",
            DeviceStatus::Online => "online",
            DeviceStatus::Offline => "offline",
            DeviceStatus::Error => "error",
        }
    }
}

impl FromStr for DeviceStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "recording" => Ok(DeviceStatus::Recording),
            "online" => Ok(DeviceStatus::Online),
            "offline" => Ok(DeviceStatus::Offline),
            "error" => Ok(DeviceStatus::Error),
            _ => Err(DomainError::unknown("device status", s)),
        }
    }
}

impl fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Requested activation change for a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationAction {
    Activate,
    Deactivate,
}

impl ActivationAction {
    pub fn is_activate(&self) -> bool {
        matches!(self, ActivationAction::Activate)
    }
}

impl FromStr for ActivationAction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "activate" => Ok(ActivationAction::Activate),
            "deactivate" => Ok(ActivationAction::Deactivate),
            _ => Err(DomainError::unknown("activation action", s)),
        }
    }
}

/// Static description of a camera as it appears in a seed roster.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceSeed {
    pub name: String,
    pub active: bool,
    pub model: String,
    pub device_type: String,
    pub connection_address: String,
    pub connection_port: u16,
    pub latitude: f64,
    pub longitude: f64,
    pub group: String,
    pub status: DeviceStatus,
    pub working: bool,
    pub recording_hours: u32,
}

/// A camera served by the fixture API.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub name: String,
    pub active: bool,
    pub model: String,
    pub device_type: String,
    pub connection_address: String,
    pub connection_port: u16,
    pub latitude: f64,
    pub longitude: f64,
    pub group: String,
    pub status: DeviceStatus,
    pub working: bool,
    pub recording_hours: u32,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub position: Option<Placement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl Device {
    /// Builds a device from its seed, without spatial enrichment.
    ///
    /// `working` is cleared for inactive seeds so the device never reports
    /// working while inactive.
    pub fn from_seed(seed: DeviceSeed) -> Self {
        Self {
            working: seed.working && seed.active,
            name: seed.name,
            active: seed.active,
            model: seed.model,
            device_type: seed.device_type,
            connection_address: seed.connection_address,
            connection_port: seed.connection_port,
            latitude: seed.latitude,
            longitude: seed.longitude,
            group: seed.group,
            status: seed.status,
            recording_hours: seed.recording_hours,
            position: None,
            location: None,
        }
    }

    /// Attaches a derived placement and location label.
    pub fn with_layout(mut self, position: Placement, location: impl Into<String>) -> Self {
        self.position = Some(position);
        self.location = Some(location.into());
        self
    }

    /// Applies an activation change to `active`, `working` and `status` together.
    pub fn apply_activation(&mut self, activate: bool) {
        self.active = activate;
        self.working = activate;
        self.status = if activate {
            DeviceStatus::Online
        } else {
            DeviceStatus::Offline
        };
    }

    pub fn has_position(&self) -> bool {
        self.position.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed(name: &str) -> DeviceSeed {
        DeviceSeed {
            name: name.to_string(),
            active: true,
            model: "Axis P3245-V".to_string(),
            device_type: "IP Camera".to_string(),
            connection_address: "192.168.1.101".to_string(),
            connection_port: 80,
            latitude: 40.7128,
            longitude: -74.0060,
            group: "Entrance".to_string(),
            status: DeviceStatus::Recording,
            working: true,
            recording_hours: 168,
        }
    }

    #[test]
    fn test_device_status_round_trip_strings() {
        for status in [
            DeviceStatus::Recording,
            DeviceStatus::Online,
            DeviceStatus::Offline,
            DeviceStatus::Error,
        ] {
            assert_eq!(status.as_str().parse::<DeviceStatus>().unwrap(), status);
        }
        assert!("broken".parse::<DeviceStatus>().is_err());
    }

    #[test]
    fn test_activation_action_parse() {
        assert_eq!(
            "activate".parse::<ActivationAction>().unwrap(),
            ActivationAction::Activate
        );
        assert_eq!(
            "DEACTIVATE".parse::<ActivationAction>().unwrap(),
            ActivationAction::Deactivate
        );
        assert!("toggle".parse::<ActivationAction>().is_err());
    }

    #[test]
    fn test_from_seed_clears_working_when_inactive() {
        let mut s = seed("Camera 7 - Back Exit");
        s.active = false;
        s.working = true;
        let device = Device::from_seed(s);
        assert!(!device.active);
        assert!(!device.working);
    }

    #[test]
    fn test_apply_activation() {
        let mut device = Device::from_seed(seed("Camera 1 - Main Entrance"));

        device.apply_activation(false);
        assert!(!device.active);
        assert!(!device.working);
        assert_eq!(device.status, DeviceStatus::Offline);

        device.apply_activation(true);
        assert!(device.active);
        assert!(device.working);
        assert_eq!(device.status, DeviceStatus::Online);
    }

    #[test]
    fn test_serialization_without_position() {
        let device = Device::from_seed(seed("Camera 1 - Main Entrance"));
        let json = serde_json::to_value(&device).unwrap();
        assert_eq!(json["name"], "Camera 1 - Main Entrance");
        assert_eq!(json["deviceType"], "IP Camera");
        assert_eq!(json["connectionPort"], 80);
        assert_eq!(json["status"], "recording");
        assert!(json.get("x").is_none());
        assert!(json.get("location").is_none());
    }

    #[test]
    fn test_serialization_with_position() {
        let device = Device::from_seed(seed("CAM-HS-GYM-01")).with_layout(
            Placement {
                x: 25.0,
                y: 3.0,
                z: 10.0,
                angle: -std::f64::consts::FRAC_PI_2,
            },
            "Gymnasium",
        );
        let json = serde_json::to_value(&device).unwrap();
        assert_eq!(json["x"], 25.0);
        assert_eq!(json["y"], 3.0);
        assert_eq!(json["z"], 10.0);
        assert_eq!(json["location"], "Gymnasium");
    }
}
