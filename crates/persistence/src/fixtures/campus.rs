//! Campus dataset: a high school (`CAM-HS-*`) and a university (`CAM-MSU-*`).
//!
//! Every camera here is active, recording and classified.

use domain::models::{DeviceSeed, DeviceStatus, Group};

use super::Dataset;

/// `(name, model, device type, address, latitude, longitude, group)`.
type CampusRow = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    f64,
    f64,
    &'static str,
);

const CAMERAS: &[CampusRow] = &[
    ("CAM-HS-MAIN-ENTRANCE-01", "Hikvision DS-2CD2385", "IP Camera", "192.168.2.101", 40.7150, -74.0070, "HighSchool-Entrance"),
    ("CAM-HS-MAIN-ENTRANCE-02", "Hikvision DS-2CD2385", "IP Camera", "192.168.2.102", 40.7150, -74.0071, "HighSchool-Entrance"),
    ("CAM-HS-HALLWAY-CENTRAL-01", "Axis P3245-V", "IP Camera", "192.168.2.103", 40.7151, -74.0070, "HighSchool-Hallways"),
    ("CAM-HS-HALLWAY-CENTRAL-02", "Axis P3245-V", "IP Camera", "192.168.2.104", 40.7152, -74.0070, "HighSchool-Hallways"),
    ("CAM-HS-HALLWAY-CENTRAL-03", "Axis P3245-V", "IP Camera", "192.168.2.105", 40.7153, -74.0070, "HighSchool-Hallways"),
    ("CAM-HS-WEST-HALLWAY-01", "Axis Q1615", "IP Camera", "192.168.2.106", 40.7151, -74.0073, "HighSchool-WestWing"),
    ("CAM-HS-WEST-HALLWAY-02", "Axis Q1615", "IP Camera", "192.168.2.107", 40.7152, -74.0073, "HighSchool-WestWing"),
    ("CAM-HS-WEST-HALLWAY-03", "Axis Q1615", "IP Camera", "192.168.2.108", 40.7153, -74.0073, "HighSchool-WestWing"),
    ("CAM-HS-EAST-HALLWAY-01", "Axis Q1615", "IP Camera", "192.168.2.109", 40.7151, -74.0067, "HighSchool-EastWing"),
    ("CAM-HS-EAST-HALLWAY-02", "Axis Q1615", "IP Camera", "192.168.2.110", 40.7152, -74.0067, "HighSchool-EastWing"),
    ("CAM-HS-EAST-HALLWAY-03", "Axis Q1615", "IP Camera", "192.168.2.111", 40.7153, -74.0067, "HighSchool-EastWing"),
    ("CAM-HS-CLASSROOM-A101", "Dahua IPC-HFW5831E", "IP Camera", "192.168.2.112", 40.7150, -74.0072, "HighSchool-Classrooms"),
    ("CAM-HS-CLASSROOM-A102", "Dahua IPC-HFW5831E", "IP Camera", "192.168.2.113", 40.7151, -74.0072, "HighSchool-Classrooms"),
    ("CAM-HS-CLASSROOM-B201", "Dahua IPC-HFW5831E", "IP Camera", "192.168.2.114", 40.7150, -74.0068, "HighSchool-Classrooms"),
    ("CAM-HS-CLASSROOM-B202", "Dahua IPC-HFW5831E", "IP Camera", "192.168.2.115", 40.7151, -74.0068, "HighSchool-Classrooms"),
    ("CAM-HS-CAFETERIA-01", "Hikvision DS-2CD2H85G1", "IP Camera", "192.168.2.116", 40.7154, -74.0071, "HighSchool-CommonAreas"),
    ("CAM-HS-CAFETERIA-02", "Hikvision DS-2CD2H85G1", "IP Camera", "192.168.2.117", 40.7154, -74.0069, "HighSchool-CommonAreas"),
    ("CAM-HS-CAFETERIA-03", "Hikvision DS-2CD2H85G1", "IP Camera", "192.168.2.118", 40.7154, -74.0070, "HighSchool-CommonAreas"),
    ("CAM-HS-LIBRARY-01", "Axis P3245-V", "IP Camera", "192.168.2.119", 40.7152, -74.0074, "HighSchool-Library"),
    ("CAM-HS-LIBRARY-02", "Axis P3245-V", "IP Camera", "192.168.2.120", 40.7151, -74.0074, "HighSchool-Library"),
    ("CAM-HS-GYM-01", "Axis Q6155-E", "PTZ Camera", "192.168.2.121", 40.7153, -74.0067, "HighSchool-Gymnasium"),
    ("CAM-HS-GYM-02", "Axis Q6155-E", "PTZ Camera", "192.168.2.122", 40.7154, -74.0066, "HighSchool-Gymnasium"),
    ("CAM-HS-STAIR-WEST-01", "Samsung Wisenet PNM", "IP Camera", "192.168.2.123", 40.7150, -74.0074, "HighSchool-Stairwells"),
    ("CAM-HS-STAIR-EAST-01", "Samsung Wisenet PNM", "IP Camera", "192.168.2.124", 40.7150, -74.0066, "HighSchool-Stairwells"),
    ("CAM-HS-EXIT-WEST-01", "Axis M3106-L", "IP Camera", "192.168.2.125", 40.7152, -74.0075, "HighSchool-Exits"),
    ("CAM-HS-EXIT-EAST-01", "Axis M3106-L", "IP Camera", "192.168.2.126", 40.7152, -74.0065, "HighSchool-Exits"),
    ("CAM-HS-EXIT-REAR-01", "Axis M3106-L", "IP Camera", "192.168.2.127", 40.7155, -74.0070, "HighSchool-Exits"),
    ("CAM-HS-PARKING-01", "Hikvision DS-2CD2T85G1", "IP Camera", "192.168.2.128", 40.7150, -74.0076, "HighSchool-Exterior"),
    ("CAM-HS-PARKING-02", "Hikvision DS-2CD2T85G1", "IP Camera", "192.168.2.129", 40.7152, -74.0076, "HighSchool-Exterior"),
    ("CAM-HS-PARKING-03", "Hikvision DS-2CD2T85G1", "IP Camera", "192.168.2.130", 40.7154, -74.0076, "HighSchool-Exterior"),
    ("CAM-HS-PLAYGROUND-01", "Axis P1455-LE", "IP Camera", "192.168.2.131", 40.7154, -74.0064, "HighSchool-Exterior"),
    ("CAM-HS-OFFICE-MAIN-01", "Axis P3245-V", "IP Camera", "192.168.2.132", 40.7149, -74.0071, "HighSchool-Administration"),
    ("CAM-HS-OFFICE-PRINCIPAL-01", "Axis P3245-V", "IP Camera", "192.168.2.133", 40.7149, -74.0072, "HighSchool-Administration"),
    ("CAM-MSU-MAIN-ENTRANCE-01", "Axis P3717-PLE", "Panoramic Camera", "192.168.3.101", 55.7029, 37.5309, "MSU-MainEntrance"),
    ("CAM-MSU-MAIN-ENTRANCE-02", "Axis P3717-PLE", "Panoramic Camera", "192.168.3.102", 55.7029, 37.5308, "MSU-MainEntrance"),
    ("CAM-MSU-MAIN-ENTRANCE-03", "Axis P3717-PLE", "Panoramic Camera", "192.168.3.103", 55.7029, 37.5310, "MSU-MainEntrance"),
    ("CAM-MSU-TOWER-BASE-01", "Axis Q6155-E", "PTZ Camera", "192.168.3.104", 55.7030, 37.5309, "MSU-Tower"),
    ("CAM-MSU-TOWER-BASE-02", "Axis Q6155-E", "PTZ Camera", "192.168.3.105", 55.7028, 37.5309, "MSU-Tower"),
    ("CAM-MSU-TOWER-MID-01", "Axis Q6155-E", "PTZ Camera", "192.168.3.106", 55.7029, 37.5308, "MSU-Tower"),
    ("CAM-MSU-TOWER-MID-02", "Axis Q6155-E", "PTZ Camera", "192.168.3.107", 55.7029, 37.5310, "MSU-Tower"),
    ("CAM-MSU-TOWER-TOP-01", "Axis Q6155-E", "PTZ Camera", "192.168.3.108", 55.7029, 37.5309, "MSU-Tower"),
    ("CAM-MSU-TOWER-TOP-02", "Axis Q6155-E", "PTZ Camera", "192.168.3.109", 55.7029, 37.5309, "MSU-Tower"),
    ("CAM-MSU-WEST-WING-ENTRANCE", "Hikvision DS-2CD2385", "IP Camera", "192.168.3.110", 55.7030, 37.5305, "MSU-WestWing"),
    ("CAM-MSU-WEST-WING-CORRIDOR-01", "Axis P3245-V", "IP Camera", "192.168.3.111", 55.7031, 37.5305, "MSU-WestWing"),
    ("CAM-MSU-WEST-WING-CORRIDOR-02", "Axis P3245-V", "IP Camera", "192.168.3.112", 55.7029, 37.5305, "MSU-WestWing"),
    ("CAM-MSU-WEST-WING-CORRIDOR-03", "Axis P3245-V", "IP Camera", "192.168.3.113", 55.7027, 37.5305, "MSU-WestWing"),
    ("CAM-MSU-WEST-WING-ROOF", "Axis Q6155-E", "PTZ Camera", "192.168.3.114", 55.7029, 37.5306, "MSU-WestWing"),
    ("CAM-MSU-EAST-WING-ENTRANCE", "Hikvision DS-2CD2385", "IP Camera", "192.168.3.115", 55.7030, 37.5313, "MSU-EastWing"),
    ("CAM-MSU-EAST-WING-CORRIDOR-01", "Axis P3245-V", "IP Camera", "192.168.3.116", 55.7031, 37.5313, "MSU-EastWing"),
    ("CAM-MSU-EAST-WING-CORRIDOR-02", "Axis P3245-V", "IP Camera", "192.168.3.117", 55.7029, 37.5313, "MSU-EastWing"),
    ("CAM-MSU-EAST-WING-CORRIDOR-03", "Axis P3245-V", "IP Camera", "192.168.3.118", 55.7027, 37.5313, "MSU-EastWing"),
    ("CAM-MSU-EAST-WING-ROOF", "Axis Q6155-E", "PTZ Camera", "192.168.3.119", 55.7029, 37.5312, "MSU-EastWing"),
    ("CAM-MSU-LIBRARY-ENTRANCE", "Dahua IPC-HFW5831E", "IP Camera", "192.168.3.120", 55.7031, 37.5307, "MSU-Academic"),
    ("CAM-MSU-LIBRARY-READING-HALL", "Dahua IPC-HFW5831E", "IP Camera", "192.168.3.121", 55.7031, 37.5306, "MSU-Academic"),
    ("CAM-MSU-AUDITORIUM-MAIN", "Axis P3717-PLE", "Panoramic Camera", "192.168.3.122", 55.7031, 37.5311, "MSU-Academic"),
    ("CAM-MSU-AUDITORIUM-BALCONY", "Axis P3245-V", "IP Camera", "192.168.3.123", 55.7031, 37.5311, "MSU-Academic"),
    ("CAM-MSU-CAFETERIA-MAIN", "Hikvision DS-2CD2H85G1", "IP Camera", "192.168.3.124", 55.7027, 37.5307, "MSU-StudentAreas"),
    ("CAM-MSU-CAFETERIA-SEATING", "Hikvision DS-2CD2H85G1", "IP Camera", "192.168.3.125", 55.7027, 37.5306, "MSU-StudentAreas"),
    ("CAM-MSU-STUDENT-CENTER", "Axis P3245-V", "IP Camera", "192.168.3.126", 55.7027, 37.5311, "MSU-StudentAreas"),
    ("CAM-MSU-RECREATION-AREA", "Axis P3245-V", "IP Camera", "192.168.3.127", 55.7027, 37.5312, "MSU-StudentAreas"),
    ("CAM-MSU-LAB-BUILDING-A", "Samsung Wisenet PNM", "IP Camera", "192.168.3.128", 55.7030, 37.5304, "MSU-Laboratories"),
    ("CAM-MSU-LAB-BUILDING-B", "Samsung Wisenet PNM", "IP Camera", "192.168.3.129", 55.7028, 37.5304, "MSU-Laboratories"),
    ("CAM-MSU-LAB-CORRIDOR", "Axis P3245-V", "IP Camera", "192.168.3.130", 55.7029, 37.5304, "MSU-Laboratories"),
    ("CAM-MSU-ADMIN-ENTRANCE", "Hikvision DS-2CD2385", "IP Camera", "192.168.3.131", 55.7031, 37.5308, "MSU-Administration"),
    ("CAM-MSU-ADMIN-OFFICE", "Axis P3245-V", "IP Camera", "192.168.3.132", 55.7031, 37.5307, "MSU-Administration"),
    ("CAM-MSU-RECTOR-OFFICE", "Axis P3245-V", "IP Camera", "192.168.3.133", 55.7029, 37.5309, "MSU-Administration"),
    ("CAM-MSU-NORTH-GATE", "Axis Q6155-E", "PTZ Camera", "192.168.3.134", 55.7033, 37.5309, "MSU-Perimeter"),
    ("CAM-MSU-SOUTH-GATE", "Axis Q6155-E", "PTZ Camera", "192.168.3.135", 55.7025, 37.5309, "MSU-Perimeter"),
    ("CAM-MSU-WEST-GATE", "Axis Q6155-E", "PTZ Camera", "192.168.3.136", 55.7029, 37.5303, "MSU-Perimeter"),
    ("CAM-MSU-EAST-GATE", "Axis Q6155-E", "PTZ Camera", "192.168.3.137", 55.7029, 37.5315, "MSU-Perimeter"),
    ("CAM-MSU-PARKING-NORTH-01", "Hikvision DS-2CD2T85G1", "IP Camera", "192.168.3.138", 55.7032, 37.5307, "MSU-Parking"),
    ("CAM-MSU-PARKING-NORTH-02", "Hikvision DS-2CD2T85G1", "IP Camera", "192.168.3.139", 55.7032, 37.5311, "MSU-Parking"),
    ("CAM-MSU-PARKING-SOUTH-01", "Hikvision DS-2CD2T85G1", "IP Camera", "192.168.3.140", 55.7026, 37.5307, "MSU-Parking"),
    ("CAM-MSU-PARKING-SOUTH-02", "Hikvision DS-2CD2T85G1", "IP Camera", "192.168.3.141", 55.7026, 37.5311, "MSU-Parking"),
    ("CAM-MSU-PLAZA-CENTER", "Axis P3717-PLE", "Panoramic Camera", "192.168.3.142", 55.7030, 37.5309, "MSU-Plaza"),
    ("CAM-MSU-GARDEN-WEST", "Axis P1455-LE", "IP Camera", "192.168.3.143", 55.7029, 37.5307, "MSU-Plaza"),
    ("CAM-MSU-GARDEN-EAST", "Axis P1455-LE", "IP Camera", "192.168.3.144", 55.7029, 37.5311, "MSU-Plaza"),
    ("CAM-MSU-EMERGENCY-WEST-01", "Axis M3106-L", "IP Camera", "192.168.3.145", 55.7030, 37.5304, "MSU-Emergency"),
    ("CAM-MSU-EMERGENCY-WEST-02", "Axis M3106-L", "IP Camera", "192.168.3.146", 55.7028, 37.5304, "MSU-Emergency"),
    ("CAM-MSU-EMERGENCY-EAST-01", "Axis M3106-L", "IP Camera", "192.168.3.147", 55.7030, 37.5314, "MSU-Emergency"),
    ("CAM-MSU-EMERGENCY-EAST-02", "Axis M3106-L", "IP Camera", "192.168.3.148", 55.7028, 37.5314, "MSU-Emergency"),
];

fn seed(row: &CampusRow) -> DeviceSeed {
    let (name, model, device_type, address, latitude, longitude, group) = *row;
    DeviceSeed {
        name: name.to_string(),
        active: true,
        model: model.to_string(),
        device_type: device_type.to_string(),
        connection_address: address.to_string(),
        connection_port: 80,
        latitude,
        longitude,
        group: group.to_string(),
        status: DeviceStatus::Recording,
        working: true,
        recording_hours: 168,
    }
}

pub fn dataset() -> Dataset {
    let devices = CAMERAS.iter().map(seed).collect();
    let groups = vec![
        Group::new(
            "HighSchool-Entrance",
            &[
                "CAM-HS-MAIN-ENTRANCE-01",
                "CAM-HS-MAIN-ENTRANCE-02",
            ],
        ),
        Group::new(
            "HighSchool-Hallways",
            &[
                "CAM-HS-HALLWAY-CENTRAL-01",
                "CAM-HS-HALLWAY-CENTRAL-02",
                "CAM-HS-HALLWAY-CENTRAL-03",
            ],
        ),
        Group::new(
            "HighSchool-WestWing",
            &[
                "CAM-HS-WEST-HALLWAY-01",
                "CAM-HS-WEST-HALLWAY-02",
                "CAM-HS-WEST-HALLWAY-03",
            ],
        ),
        Group::new(
            "HighSchool-EastWing",
            &[
                "CAM-HS-EAST-HALLWAY-01",
                "CAM-HS-EAST-HALLWAY-02",
                "CAM-HS-EAST-HALLWAY-03",
            ],
        ),
        Group::new(
            "HighSchool-Classrooms",
            &[
                "CAM-HS-CLASSROOM-A101",
                "CAM-HS-CLASSROOM-A102",
                "CAM-HS-CLASSROOM-B201",
                "CAM-HS-CLASSROOM-B202",
            ],
        ),
        Group::new(
            "HighSchool-CommonAreas",
            &[
                "CAM-HS-CAFETERIA-01",
                "CAM-HS-CAFETERIA-02",
                "CAM-HS-CAFETERIA-03",
            ],
        ),
        Group::new(
            "HighSchool-Library",
            &[
                "CAM-HS-LIBRARY-01",
                "CAM-HS-LIBRARY-02",
            ],
        ),
        Group::new(
            "HighSchool-Gymnasium",
            &[
                "CAM-HS-GYM-01",
                "CAM-HS-GYM-02",
            ],
        ),
        Group::new(
            "HighSchool-Stairwells",
            &[
                "CAM-HS-STAIR-WEST-01",
                "CAM-HS-STAIR-EAST-01",
            ],
        ),
        Group::new(
            "HighSchool-Exits",
            &[
                "CAM-HS-EXIT-WEST-01",
                "CAM-HS-EXIT-EAST-01",
                "CAM-HS-EXIT-REAR-01",
            ],
        ),
        Group::new(
            "HighSchool-Exterior",
            &[
                "CAM-HS-PARKING-01",
                "CAM-HS-PARKING-02",
                "CAM-HS-PARKING-03",
                "CAM-HS-PLAYGROUND-01",
            ],
        ),
        Group::new(
            "HighSchool-Administration",
            &[
                "CAM-HS-OFFICE-MAIN-01",
                "CAM-HS-OFFICE-PRINCIPAL-01",
            ],
        ),
        Group::new(
            "MSU-MainEntrance",
            &[
                "CAM-MSU-MAIN-ENTRANCE-01",
                "CAM-MSU-MAIN-ENTRANCE-02",
                "CAM-MSU-MAIN-ENTRANCE-03",
            ],
        ),
        Group::new(
            "MSU-Tower",
            &[
                "CAM-MSU-TOWER-BASE-01",
                "CAM-MSU-TOWER-BASE-02",
                "CAM-MSU-TOWER-MID-01",
                "CAM-MSU-TOWER-MID-02",
                "CAM-MSU-TOWER-TOP-01",
                "CAM-MSU-TOWER-TOP-02",
            ],
        ),
        Group::new(
            "MSU-WestWing",
            &[
                "CAM-MSU-WEST-WING-ENTRANCE",
                "CAM-MSU-WEST-WING-CORRIDOR-01",
                "CAM-MSU-WEST-WING-CORRIDOR-02",
                "CAM-MSU-WEST-WING-CORRIDOR-03",
                "CAM-MSU-WEST-WING-ROOF",
            ],
        ),
        Group::new(
            "MSU-EastWing",
            &[
                "CAM-MSU-EAST-WING-ENTRANCE",
                "CAM-MSU-EAST-WING-CORRIDOR-01",
                "CAM-MSU-EAST-WING-CORRIDOR-02",
                "CAM-MSU-EAST-WING-CORRIDOR-03",
                "CAM-MSU-EAST-WING-ROOF",
            ],
        ),
        Group::new(
            "MSU-Academic",
            &[
                "CAM-MSU-LIBRARY-ENTRANCE",
                "CAM-MSU-LIBRARY-READING-HALL",
                "CAM-MSU-AUDITORIUM-MAIN",
                "CAM-MSU-AUDITORIUM-BALCONY",
            ],
        ),
        Group::new(
            "MSU-StudentAreas",
            &[
                "CAM-MSU-CAFETERIA-MAIN",
                "CAM-MSU-CAFETERIA-SEATING",
                "CAM-MSU-STUDENT-CENTER",
                "CAM-MSU-RECREATION-AREA",
            ],
        ),
        Group::new(
            "MSU-Laboratories",
            &[
                "CAM-MSU-LAB-BUILDING-A",
                "CAM-MSU-LAB-BUILDING-B",
                "CAM-MSU-LAB-CORRIDOR",
            ],
        ),
        Group::new(
            "MSU-Administration",
            &[
                "CAM-MSU-ADMIN-ENTRANCE",
                "CAM-MSU-ADMIN-OFFICE",
                "CAM-MSU-RECTOR-OFFICE",
            ],
        ),
        Group::new(
            "MSU-Perimeter",
            &[
                "CAM-MSU-NORTH-GATE",
                "CAM-MSU-SOUTH-GATE",
                "CAM-MSU-WEST-GATE",
                "CAM-MSU-EAST-GATE",
            ],
        ),
        Group::new(
            "MSU-Parking",
            &[
                "CAM-MSU-PARKING-NORTH-01",
                "CAM-MSU-PARKING-NORTH-02",
                "CAM-MSU-PARKING-SOUTH-01",
                "CAM-MSU-PARKING-SOUTH-02",
            ],
        ),
        Group::new(
            "MSU-Plaza",
            &[
                "CAM-MSU-PLAZA-CENTER",
                "CAM-MSU-GARDEN-WEST",
                "CAM-MSU-GARDEN-EAST",
            ],
        ),
        Group::new(
            "MSU-Emergency",
            &[
                "CAM-MSU-EMERGENCY-WEST-01",
                "CAM-MSU-EMERGENCY-WEST-02",
                "CAM-MSU-EMERGENCY-EAST-01",
                "CAM-MSU-EMERGENCY-EAST-02",
            ],
        ),
    ];
    Dataset::with_catalog("campus", devices, groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::services::classifier::{classify, Category, Site};

    #[test]
    fn test_campus_roster_sizes() {
        let dataset = dataset();
        let high_school = dataset
            .devices
            .iter()
            .filter(|d| d.name.starts_with(Site::HighSchool.prefix()))
            .count();
        let university = dataset
            .devices
            .iter()
            .filter(|d| d.name.starts_with(Site::University.prefix()))
            .count();
        assert_eq!(high_school, 33);
        assert_eq!(university, 48);
        assert_eq!(dataset.groups.len(), 24);
    }

    #[test]
    fn test_every_campus_camera_has_a_specific_category() {
        for device in dataset().devices {
            let classification = classify(&device.name).expect("campus identifiers are classified");
            assert_ne!(classification.category, Category::Other, "{}", device.name);
        }
    }

    #[test]
    fn test_campus_groups_match_device_groups() {
        let dataset = dataset();
        for group in &dataset.groups {
            for camera in &group.cameras {
                let device = dataset
                    .devices
                    .iter()
                    .find(|d| &d.name == camera)
                    .expect("group member exists");
                assert_eq!(device.group, group.name);
            }
        }
    }
}
