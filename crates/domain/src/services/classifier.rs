//! Identifier classification.
//!
//! Camera identifiers carry their placement in the name
//! (`CAM-HS-WEST-HALLWAY-02`, `CAM-MSU-PARKING-NORTH-01`). A family prefix
//! selects the site, then the site's rule table is scanned top to bottom and
//! the first matching rule decides the category. Several identifiers contain
//! more than one marker (`CAM-MSU-LIBRARY-ENTRANCE`), so table order is part
//! of the contract.

use std::fmt;

use Matcher::{All, Contains};

lazy_static::lazy_static! {
    static ref ORDINAL_REGEX: regex::Regex = regex::Regex::new(r"-(\d{2})\b").unwrap();
}

/// Site family an identifier belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Site {
    HighSchool,
    University,
}

impl Site {
    pub const ALL: [Site; 2] = [Site::HighSchool, Site::University];

    pub fn prefix(&self) -> &'static str {
        match self {
            Site::HighSchool => "CAM-HS-",
            Site::University => "CAM-MSU-",
        }
    }

    pub fn from_identifier(identifier: &str) -> Option<Site> {
        Site::ALL
            .into_iter()
            .find(|site| identifier.starts_with(site.prefix()))
    }

    pub fn rules(&self) -> &'static [Rule] {
        match self {
            Site::HighSchool => HIGH_SCHOOL_RULES,
            Site::University => UNIVERSITY_RULES,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    West,
    East,
}

impl Side {
    fn label(&self) -> &'static str {
        match self {
            Side::West => "West",
            Side::East => "East",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Compass {
    North,
    South,
    East,
    West,
}

impl Compass {
    fn label(&self) -> &'static str {
        match self {
            Compass::North => "North",
            Compass::South => "South",
            Compass::East => "East",
            Compass::West => "West",
        }
    }
}

/// Placement category derived from an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Entrance,
    CentralHallway,
    WestHallway,
    EastHallway,
    ClassroomA,
    ClassroomB,
    Cafeteria,
    Library,
    Gym,
    Stairwell,
    ExitWest,
    ExitEast,
    ExitRear,
    Parking(Option<Compass>),
    Playground,
    Office,
    TowerBase,
    TowerMid,
    TowerTop,
    WingEntrance(Side),
    WingCorridor(Side, u8),
    WingRoof(Side),
    Wing(Side),
    Auditorium,
    StudentCenter,
    Recreation,
    LabA,
    LabB,
    LabCorridor,
    Admin,
    ExecutiveOffice,
    Gate(Compass),
    Plaza,
    Garden,
    EmergencyPoint(Side),
    Other,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Entrance => f.write_str("entrance"),
            Category::CentralHallway => f.write_str("central-hallway"),
            Category::WestHallway => f.write_str("west-hallway"),
            Category::EastHallway => f.write_str("east-hallway"),
            Category::ClassroomA => f.write_str("classroom-a"),
            Category::ClassroomB => f.write_str("classroom-b"),
            Category::Cafeteria => f.write_str("cafeteria"),
            Category::Library => f.write_str("library"),
            Category::Gym => f.write_str("gym"),
            Category::Stairwell => f.write_str("stairwell"),
            Category::ExitWest => f.write_str("exit-west"),
            Category::ExitEast => f.write_str("exit-east"),
            Category::ExitRear => f.write_str("exit-rear"),
            Category::Parking(None) => f.write_str("parking"),
            Category::Parking(Some(c)) => write!(f, "parking-{}", c.label().to_lowercase()),
            Category::Playground => f.write_str("playground"),
            Category::Office => f.write_str("office"),
            Category::TowerBase => f.write_str("tower-base"),
            Category::TowerMid => f.write_str("tower-mid"),
            Category::TowerTop => f.write_str("tower-top"),
            Category::WingEntrance(s) => write!(f, "wing-entrance-{}", s.label().to_lowercase()),
            Category::WingCorridor(s, n) => {
                write!(f, "wing-corridor-{}-{}", s.label().to_lowercase(), n)
            }
            Category::WingRoof(s) => write!(f, "wing-roof-{}", s.label().to_lowercase()),
            Category::Wing(s) => write!(f, "wing-{}", s.label().to_lowercase()),
            Category::Auditorium => f.write_str("auditorium"),
            Category::StudentCenter => f.write_str("student-center"),
            Category::Recreation => f.write_str("recreation"),
            Category::LabA => f.write_str("lab-a"),
            Category::LabB => f.write_str("lab-b"),
            Category::LabCorridor => f.write_str("lab-corridor"),
            Category::Admin => f.write_str("admin"),
            Category::ExecutiveOffice => f.write_str("executive-office"),
            Category::Gate(c) => write!(f, "gate-{}", c.label().to_lowercase()),
            Category::Plaza => f.write_str("plaza"),
            Category::Garden => f.write_str("garden"),
            Category::EmergencyPoint(s) => {
                write!(f, "emergency-point-{}", s.label().to_lowercase())
            }
            Category::Other => f.write_str("other"),
        }
    }
}

/// Substring test applied to an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    Contains(&'static str),
    All(&'static [&'static str]),
}

impl Matcher {
    pub fn matches(&self, identifier: &str) -> bool {
        match self {
            Matcher::Contains(needle) => identifier.contains(needle),
            Matcher::All(needles) => needles.iter().all(|n| identifier.contains(n)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub matcher: Matcher,
    pub category: Category,
}

const fn rule(matcher: Matcher, category: Category) -> Rule {
    Rule { matcher, category }
}

pub const HIGH_SCHOOL_RULES: &[Rule] = &[
    rule(Contains("ENTRANCE"), Category::Entrance),
    rule(Contains("HALLWAY-CENTRAL"), Category::CentralHallway),
    rule(Contains("WEST-HALLWAY"), Category::WestHallway),
    rule(Contains("EAST-HALLWAY"), Category::EastHallway),
    rule(All(&["CLASSROOM", "-A"]), Category::ClassroomA),
    rule(Contains("CLASSROOM"), Category::ClassroomB),
    rule(Contains("CAFETERIA"), Category::Cafeteria),
    rule(Contains("LIBRARY"), Category::Library),
    rule(Contains("GYM"), Category::Gym),
    rule(Contains("STAIR"), Category::Stairwell),
    rule(All(&["EXIT", "WEST"]), Category::ExitWest),
    rule(All(&["EXIT", "EAST"]), Category::ExitEast),
    rule(Contains("EXIT"), Category::ExitRear),
    rule(Contains("PARKING"), Category::Parking(None)),
    rule(Contains("PLAYGROUND"), Category::Playground),
    rule(Contains("OFFICE"), Category::Office),
];

pub const UNIVERSITY_RULES: &[Rule] = &[
    rule(Contains("MAIN-ENTRANCE"), Category::Entrance),
    rule(Contains("TOWER-BASE"), Category::TowerBase),
    rule(Contains("TOWER-MID"), Category::TowerMid),
    rule(Contains("TOWER-TOP"), Category::TowerTop),
    rule(All(&["WEST-WING", "ENTRANCE"]), Category::WingEntrance(Side::West)),
    rule(All(&["WEST-WING", "CORRIDOR-01"]), Category::WingCorridor(Side::West, 1)),
    rule(All(&["WEST-WING", "CORRIDOR-02"]), Category::WingCorridor(Side::West, 2)),
    rule(All(&["WEST-WING", "CORRIDOR-03"]), Category::WingCorridor(Side::West, 3)),
    rule(All(&["WEST-WING", "ROOF"]), Category::WingRoof(Side::West)),
    rule(Contains("WEST-WING"), Category::Wing(Side::West)),
    rule(All(&["EAST-WING", "ENTRANCE"]), Category::WingEntrance(Side::East)),
    rule(All(&["EAST-WING", "CORRIDOR-01"]), Category::WingCorridor(Side::East, 1)),
    rule(All(&["EAST-WING", "CORRIDOR-02"]), Category::WingCorridor(Side::East, 2)),
    rule(All(&["EAST-WING", "CORRIDOR-03"]), Category::WingCorridor(Side::East, 3)),
    rule(All(&["EAST-WING", "ROOF"]), Category::WingRoof(Side::East)),
    rule(Contains("EAST-WING"), Category::Wing(Side::East)),
    rule(Contains("LIBRARY"), Category::Library),
    rule(Contains("AUDITORIUM"), Category::Auditorium),
    rule(Contains("CAFETERIA"), Category::Cafeteria),
    rule(Contains("STUDENT-CENTER"), Category::StudentCenter),
    rule(Contains("RECREATION"), Category::Recreation),
    rule(All(&["LAB", "-A"]), Category::LabA),
    rule(All(&["LAB", "-B"]), Category::LabB),
    rule(Contains("LAB"), Category::LabCorridor),
    rule(Contains("ADMIN"), Category::Admin),
    rule(Contains("RECTOR"), Category::ExecutiveOffice),
    rule(Contains("NORTH-GATE"), Category::Gate(Compass::North)),
    rule(Contains("SOUTH-GATE"), Category::Gate(Compass::South)),
    rule(Contains("WEST-GATE"), Category::Gate(Compass::West)),
    rule(Contains("EAST-GATE"), Category::Gate(Compass::East)),
    rule(Contains("PARKING-NORTH"), Category::Parking(Some(Compass::North))),
    rule(Contains("PARKING-SOUTH"), Category::Parking(Some(Compass::South))),
    rule(Contains("PLAZA"), Category::Plaza),
    rule(Contains("GARDEN"), Category::Garden),
    rule(Contains("EMERGENCY-WEST"), Category::EmergencyPoint(Side::West)),
    rule(Contains("EMERGENCY-EAST"), Category::EmergencyPoint(Side::East)),
];

/// Result of classifying a recognised identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub site: Site,
    pub category: Category,
    pub location: String,
}

/// Classifies an identifier, or returns `None` if it belongs to no known family.
pub fn classify(identifier: &str) -> Option<Classification> {
    let site = Site::from_identifier(identifier)?;
    let category = site
        .rules()
        .iter()
        .find(|r| r.matcher.matches(identifier))
        .map(|r| r.category)
        .unwrap_or(Category::Other);

    Some(Classification {
        site,
        category,
        location: location_label(site, category, identifier),
    })
}

/// First two-digit ordinal marker in the identifier (`-01` yields 1).
pub fn ordinal(identifier: &str) -> Option<u8> {
    ORDINAL_REGEX
        .captures(identifier)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

fn location_label(site: Site, category: Category, identifier: &str) -> String {
    match category {
        Category::Entrance => match site {
            Site::HighSchool => "Main Entrance".to_string(),
            Site::University => match ordinal(identifier) {
                Some(1) => "Main Entrance Center".to_string(),
                Some(2) => "Main Entrance Left".to_string(),
                _ => "Main Entrance Right".to_string(),
            },
        },
        Category::ClassroomA | Category::ClassroomB => identifier
            .rsplit('-')
            .next()
            .unwrap_or(identifier)
            .to_string(),
        Category::Parking(Some(c)) => format!("{} Parking", c.label()),
        Category::WingEntrance(s) => format!("{} Wing Entrance", s.label()),
        Category::WingCorridor(s, n) => format!("{} Corridor {}", s.label(), n),
        Category::WingRoof(s) => format!("{} Wing Roof", s.label()),
        Category::Wing(s) => format!("{} Wing", s.label()),
        Category::Gate(c) => format!("{} Gate", c.label()),
        Category::EmergencyPoint(s) => format!("{} Emergency Exit", s.label()),
        _ => fixed_label(category).to_string(),
    }
}

fn fixed_label(category: Category) -> &'static str {
    match category {
        Category::CentralHallway => "Central Hallway",
        Category::WestHallway => "West Hallway",
        Category::EastHallway => "East Hallway",
        Category::Cafeteria => "Cafeteria",
        Category::Library => "Library",
        Category::Gym => "Gymnasium",
        Category::Stairwell => "Stairwell",
        Category::ExitWest => "West Exit",
        Category::ExitEast => "East Exit",
        Category::ExitRear => "Rear Exit",
        Category::Parking(_) => "Parking Lot",
        Category::Playground => "Playground",
        Category::Office => "Office",
        Category::TowerBase => "Tower Base",
        Category::TowerMid => "Tower Mid-Level",
        Category::TowerTop => "Tower Top",
        Category::Auditorium => "Auditorium",
        Category::StudentCenter => "Student Center",
        Category::Recreation => "Recreation Area",
        Category::LabA => "Laboratory A",
        Category::LabB => "Laboratory B",
        Category::LabCorridor => "Lab Corridor",
        Category::Admin => "Administration",
        Category::ExecutiveOffice => "Rector's Office",
        Category::Plaza => "Central Plaza",
        Category::Garden => "Garden",
        _ => "Other",
    }
}
