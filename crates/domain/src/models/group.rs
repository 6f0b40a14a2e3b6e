//! Camera group domain model.

use serde::Serialize;

/// A named collection of camera identifiers.
///
/// Member names are soft references: a group may list identifiers that do not
/// resolve to any device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    pub name: String,
    pub cameras: Vec<String>,
    pub active: bool,
}

impl Group {
    pub fn new(name: impl Into<String>, cameras: &[&str]) -> Self {
        Self {
            name: name.into(),
            cameras: cameras.iter().map(|c| c.to_string()).collect(),
            active: true,
        }
    }

    pub fn contains(&self, camera: &str) -> bool {
        self.cameras.iter().any(|c| c == camera)
    }
}
