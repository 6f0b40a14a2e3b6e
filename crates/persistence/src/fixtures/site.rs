//! Single-facility dataset.
//!
//! Sixteen numbered cameras across seven groups. None of the identifiers
//! belong to a classified family, so devices carry no position.

use domain::models::{DeviceStatus, Group};

use super::{seed_from_row, Dataset, RosterRow};

const CAMERAS: &[RosterRow] = &[
    ("Camera 1 - Main Entrance", true, "Axis P3245-V", "IP Camera", "192.168.1.101", 40.7128, -74.0060, "Entrance", DeviceStatus::Recording, 168),
    ("Camera 2 - Parking Lot A", true, "Hikvision DS-2CD2385", "IP Camera", "192.168.1.102", 40.7130, -74.0062, "Parking", DeviceStatus::Online, 120),
    ("Camera 3 - Loading Dock", true, "Dahua IPC-HFW5831E", "IP Camera", "192.168.1.103", 40.7125, -74.0055, "Loading", DeviceStatus::Recording, 144),
    ("Camera 4 - Reception", true, "Axis Q1615 Mk III", "IP Camera", "192.168.1.104", 40.7129, -74.0059, "Interior", DeviceStatus::Online, 96),
    ("Camera 5 - Server Room", true, "Bosch FLEXIDOME IP", "IP Camera", "192.168.1.105", 40.7127, -74.0058, "Secure", DeviceStatus::Recording, 200),
    ("Camera 6 - Warehouse A", true, "Samsung Wisenet XND", "IP Camera", "192.168.1.106", 40.7131, -74.0064, "Warehouse", DeviceStatus::Online, 72),
    ("Camera 7 - Back Exit", false, "Axis P3255-LVE", "IP Camera", "192.168.1.107", 40.7124, -74.0052, "Entrance", DeviceStatus::Offline, 0),
    ("Camera 8 - Hallway B", true, "Hikvision DS-2CD2H85G1", "IP Camera", "192.168.1.108", 40.7128, -74.0057, "Interior", DeviceStatus::Recording, 110),
    ("Camera 9 - Parking Lot B", true, "Dahua IPC-HFW5442H", "IP Camera", "192.168.1.109", 40.7132, -74.0066, "Parking", DeviceStatus::Online, 88),
    ("Camera 10 - Emergency Exit", true, "Axis M3106-L Mk II", "IP Camera", "192.168.1.110", 40.7123, -74.0050, "Entrance", DeviceStatus::Recording, 156),
    ("Camera 11 - Cafeteria", true, "Bosch AUTODOME IP", "PTZ Camera", "192.168.1.111", 40.7126, -74.0056, "Interior", DeviceStatus::Online, 64),
    ("Camera 12 - Stairwell A", true, "Samsung Wisenet PNM", "IP Camera", "192.168.1.112", 40.7127, -74.0055, "Interior", DeviceStatus::Recording, 132),
    ("Camera 13 - Roof Access", true, "Axis Q6155-E", "PTZ Camera", "192.168.1.113", 40.7130, -74.0061, "Secure", DeviceStatus::Online, 48),
    ("Camera 14 - Perimeter East", true, "Hikvision DS-2CD5A26G0", "IP Camera", "192.168.1.114", 40.7134, -74.0070, "Perimeter", DeviceStatus::Recording, 180),
    ("Camera 15 - Perimeter West", true, "Dahua IPC-PFW8601", "Multi-sensor", "192.168.1.115", 40.7120, -74.0045, "Perimeter", DeviceStatus::Recording, 176),
    ("Camera 16 - Gate Control", false, "Axis P1455-LE", "IP Camera", "192.168.1.116", 40.7135, -74.0072, "Entrance", DeviceStatus::Error, 0),
];

pub fn dataset() -> Dataset {
    let devices = CAMERAS.iter().map(seed_from_row).collect();
    let groups = vec![
        Group::new(
            "Entrance",
            &[
                "Camera 1 - Main Entrance",
                "Camera 7 - Back Exit",
                "Camera 10 - Emergency Exit",
                "Camera 16 - Gate Control",
            ],
        ),
        Group::new(
            "Parking",
            &[
                "Camera 2 - Parking Lot A",
                "Camera 9 - Parking Lot B",
            ],
        ),
        Group::new(
            "Loading",
            &[
                "Camera 3 - Loading Dock",
            ],
        ),
        Group::new(
            "Interior",
            &[
                "Camera 4 - Reception",
                "Camera 8 - Hallway B",
                "Camera 11 - Cafeteria",
                "Camera 12 - Stairwell A",
            ],
        ),
        Group::new(
            "Secure",
            &[
                "Camera 5 - Server Room",
                "Camera 13 - Roof Access",
            ],
        ),
        Group::new(
            "Warehouse",
            &[
                "Camera 6 - Warehouse A",
            ],
        ),
        Group::new(
            "Perimeter",
            &[
                "Camera 14 - Perimeter East",
                "Camera 15 - Perimeter West",
            ],
        ),
    ];
    Dataset::with_catalog("site", devices, groups)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_roster() {
        let dataset = dataset();
        assert_eq!(dataset.devices.len(), 16);
        assert_eq!(dataset.groups.len(), 7);

        let inactive: Vec<_> = dataset
            .devices
            .iter()
            .filter(|d| !d.active)
            .map(|d| d.name.as_str())
            .collect();
        assert_eq!(inactive, vec!["Camera 7 - Back Exit", "Camera 16 - Gate Control"]);
    }

    #[test]
    fn test_site_groups_reference_roster() {
        let dataset = dataset();
        for group in &dataset.groups {
            for camera in &group.cameras {
                assert!(dataset.devices.iter().any(|d| &d.name == camera), "{camera}");
            }
        }
    }
}
