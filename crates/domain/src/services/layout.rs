//! Deterministic spatial layout for classified cameras.
//!
//! Every (site, category) pair has a fixed template. Ordinal and directional
//! markers in the identifier pick between discrete spots; otherwise a bounded
//! jitter covers the free axes. Jitter comes from a `StdRng` seeded from
//! `(seed, category, identifier)`, so a placement never depends on how many
//! other cameras were placed before it.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use shared::crypto::derive_seed;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

use super::classifier::{ordinal, Category, Classification, Compass, Side, Site};

const HALF_TURN: f64 = PI;
const QUARTER: f64 = FRAC_PI_2;
const EIGHTH: f64 = FRAC_PI_4;
const THREE_EIGHTHS: f64 = 3.0 * FRAC_PI_4;

/// Position and facing of a camera in scene coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Facing in radians.
    pub angle: f64,
}

impl Placement {
    const fn at(x: f64, y: f64, z: f64, angle: f64) -> Self {
        Self { x, y, z, angle }
    }
}

/// Places cameras from their classification.
#[derive(Debug, Clone, Copy)]
pub struct LayoutGenerator {
    seed: u64,
}

impl LayoutGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn place(&self, classification: &Classification, identifier: &str) -> Placement {
        let bucket = classification.category.to_string();
        let mut rng = StdRng::seed_from_u64(derive_seed(
            self.seed,
            &[classification.site.prefix(), bucket.as_str(), identifier],
        ));
        let markers = Markers::of(identifier);

        match classification.site {
            Site::HighSchool => high_school(classification.category, markers, &mut rng),
            Site::University => university(classification.category, markers, &mut rng),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Markers {
    first: bool,
    second: bool,
    west: bool,
    main: bool,
}

impl Markers {
    fn of(identifier: &str) -> Self {
        let ordinal = ordinal(identifier);
        Self {
            first: ordinal == Some(1),
            second: ordinal == Some(2),
            west: identifier.contains("WEST"),
            main: identifier.contains("MAIN"),
        }
    }
}

fn free_angle(rng: &mut StdRng) -> f64 {
    rng.gen_range(0.0..TAU)
}

fn pick(rng: &mut StdRng, choices: &[f64]) -> f64 {
    choices[rng.gen_range(0..choices.len())]
}

fn high_school(category: Category, m: Markers, rng: &mut StdRng) -> Placement {
    const Y: f64 = 3.0;
    const OUTDOOR_Y: f64 = 5.0;

    match category {
        Category::Entrance => Placement::at(
            rng.gen_range(-5.0..=5.0),
            Y,
            rng.gen_range(-40.0..=-38.0),
            HALF_TURN,
        ),
        Category::CentralHallway => Placement::at(
            0.0,
            Y,
            rng.gen_range(-20.0..=20.0),
            pick(rng, &[0.0, HALF_TURN]),
        ),
        Category::WestHallway => Placement::at(-20.0, Y, rng.gen_range(-20.0..=20.0), QUARTER),
        Category::EastHallway => Placement::at(20.0, Y, rng.gen_range(-20.0..=20.0), -QUARTER),
        Category::ClassroomA => Placement::at(
            rng.gen_range(-20.0..=-10.0),
            Y,
            rng.gen_range(-30.0..=-10.0),
            free_angle(rng),
        ),
        Category::ClassroomB => Placement::at(
            rng.gen_range(10.0..=20.0),
            Y,
            rng.gen_range(-30.0..=-10.0),
            free_angle(rng),
        ),
        Category::Cafeteria => Placement::at(
            rng.gen_range(-15.0..=15.0),
            Y,
            rng.gen_range(25.0..=35.0),
            pick(rng, &[0.0, QUARTER, -QUARTER]),
        ),
        Category::Library => Placement::at(
            rng.gen_range(-30.0..=-20.0),
            Y,
            rng.gen_range(-10.0..=0.0),
            QUARTER,
        ),
        Category::Gym => Placement::at(
            rng.gen_range(20.0..=30.0),
            Y,
            rng.gen_range(5.0..=20.0),
            -QUARTER,
        ),
        Category::Stairwell if m.west => Placement::at(-25.0, Y, -30.0, EIGHTH),
        Category::Stairwell => Placement::at(25.0, Y, -30.0, -EIGHTH),
        Category::ExitWest => Placement::at(-35.0, Y, 0.0, QUARTER),
        Category::ExitEast => Placement::at(35.0, Y, 0.0, -QUARTER),
        Category::ExitRear => Placement::at(0.0, Y, 40.0, 0.0),
        Category::Parking(_) => {
            Placement::at(-40.0, OUTDOOR_Y, rng.gen_range(-30.0..=30.0), EIGHTH)
        }
        Category::Playground => Placement::at(40.0, OUTDOOR_Y, 30.0, -EIGHTH),
        Category::Office => Placement::at(rng.gen_range(-10.0..=-5.0), Y, -35.0, EIGHTH),
        _ => Placement::at(
            rng.gen_range(-30.0..=30.0),
            Y,
            rng.gen_range(-30.0..=30.0),
            free_angle(rng),
        ),
    }
}

fn university(category: Category, m: Markers, rng: &mut StdRng) -> Placement {
    const Y: f64 = 2.0;
    const OUTDOOR_Y: f64 = 5.0;
    const ROOF_Y: f64 = 15.0;

    let facing_in = |side: Side| match side {
        Side::West => QUARTER,
        Side::East => -QUARTER,
    };
    let outward = |side: Side| match side {
        Side::West => -1.0,
        Side::East => 1.0,
    };

    match category {
        Category::Entrance if m.first => Placement::at(0.0, Y, -45.0, HALF_TURN),
        Category::Entrance if m.second => Placement::at(-15.0, Y, -45.0, HALF_TURN),
        Category::Entrance => Placement::at(15.0, Y, -45.0, HALF_TURN),
        Category::TowerBase if m.first => Placement::at(0.0, OUTDOOR_Y, 0.0, 0.0),
        Category::TowerBase => Placement::at(0.0, OUTDOOR_Y, 10.0, HALF_TURN),
        Category::TowerMid if m.first => Placement::at(-3.0, 30.0, 0.0, QUARTER),
        Category::TowerMid => Placement::at(3.0, 30.0, 0.0, -QUARTER),
        Category::TowerTop if m.first => Placement::at(0.0, 60.0, -2.0, HALF_TURN),
        Category::TowerTop => Placement::at(0.0, 60.0, 2.0, 0.0),
        Category::WingEntrance(side) => {
            Placement::at(30.0 * outward(side), Y, -30.0, facing_in(side))
        }
        Category::WingCorridor(side, n) => Placement::at(
            40.0 * outward(side),
            Y,
            -20.0 + 20.0 * (f64::from(n) - 1.0),
            facing_in(side),
        ),
        Category::WingRoof(side) => Placement::at(35.0 * outward(side), ROOF_Y, 0.0, facing_in(side)),
        Category::Wing(side) => Placement::at(35.0 * outward(side), Y, 0.0, facing_in(side)),
        Category::Library => Placement::at(
            rng.gen_range(-30.0..=-25.0),
            Y,
            rng.gen_range(-40.0..=-35.0),
            EIGHTH,
        ),
        Category::Auditorium => Placement::at(
            rng.gen_range(20.0..=30.0),
            if m.main { Y } else { 8.0 },
            -35.0,
            -EIGHTH,
        ),
        Category::Cafeteria => Placement::at(
            rng.gen_range(-25.0..=-15.0),
            Y,
            rng.gen_range(35.0..=40.0),
            QUARTER,
        ),
        Category::StudentCenter => Placement::at(20.0, Y, 35.0, -QUARTER),
        Category::Recreation => Placement::at(25.0, Y, 40.0, -EIGHTH),
        Category::LabA => Placement::at(-50.0, Y, -10.0, QUARTER),
        Category::LabB => Placement::at(-50.0, Y, 10.0, QUARTER),
        Category::LabCorridor => Placement::at(-45.0, Y, 0.0, QUARTER),
        Category::Admin => Placement::at(
            rng.gen_range(-15.0..=-5.0),
            Y,
            rng.gen_range(-42.0..=-38.0),
            EIGHTH,
        ),
        Category::ExecutiveOffice => Placement::at(0.0, 50.0, 0.0, 0.0),
        Category::Gate(Compass::North) => Placement::at(0.0, Y, -55.0, HALF_TURN),
        Category::Gate(Compass::South) => Placement::at(0.0, Y, 55.0, 0.0),
        Category::Gate(Compass::West) => Placement::at(-55.0, Y, 0.0, QUARTER),
        Category::Gate(Compass::East) => Placement::at(55.0, Y, 0.0, -QUARTER),
        Category::Parking(Some(Compass::North)) if m.first => {
            Placement::at(-35.0, OUTDOOR_Y, -60.0, EIGHTH)
        }
        Category::Parking(Some(Compass::North)) => Placement::at(35.0, OUTDOOR_Y, -60.0, -EIGHTH),
        Category::Parking(Some(Compass::South)) if m.first => {
            Placement::at(-35.0, OUTDOOR_Y, 60.0, THREE_EIGHTHS)
        }
        Category::Parking(Some(Compass::South)) => {
            Placement::at(35.0, OUTDOOR_Y, 60.0, -THREE_EIGHTHS)
        }
        Category::Plaza => Placement::at(0.0, Y, -50.0, HALF_TURN),
        Category::Garden if m.west => Placement::at(-30.0, Y, -20.0, QUARTER),
        Category::Garden => Placement::at(30.0, Y, -20.0, -QUARTER),
        Category::EmergencyPoint(side) => Placement::at(
            48.0 * outward(side),
            Y,
            if m.first { -30.0 } else { 30.0 },
            facing_in(side),
        ),
        _ => Placement::at(
            rng.gen_range(-50.0..=50.0),
            Y,
            rng.gen_range(-50.0..=50.0),
            free_angle(rng),
        ),
    }
}
