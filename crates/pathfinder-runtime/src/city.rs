//! Cities — the places on a map.

use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A named place at a position on the map background.
///
/// The name is the city's identity: two cities with the same name are the same
/// node, wherever they are drawn. The map file refers to cities by name only.
#[derive(Debug, Clone, Serialize)]
pub struct City {
    pub name: String,
    pub x: f64,
    pub y: f64,
}

impl City {
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
        }
    }

    /// A lookup key: the city called `name`, with no meaningful position.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, 0.0, 0.0)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `name;x;y`, the city's entry in a map file.
    pub fn save_info(&self) -> String {
        // Debug keeps the ".0" on whole coordinates
        format!("{};{:?};{:?}", self.name, self.x, self.y)
    }
}

impl PartialEq for City {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for City {}

impl Hash for City {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
