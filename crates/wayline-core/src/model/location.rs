use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::errors::{Result, WaylineError};

/// An endpoint of a route: a named point in three-dimensional space
///
/// `z` is guaranteed finite by the constructor so the derived route
/// distance can never be NaN. Equality and hashing compare `z` bitwise,
/// keeping `Eq` and `Hash` consistent with each other.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub x: i64,
    pub y: i64,
    pub z: f32,
    pub name: String,
}

impl Location {
    /// Create a new location
    ///
    /// # Errors
    ///
    /// Returns `InvalidCoordinate` if `z` is not a finite number.
    pub fn new(x: i64, y: i64, z: f32, name: impl Into<String>) -> Result<Self> {
        if !z.is_finite() {
            return Err(WaylineError::InvalidCoordinate {
                reason: format!("the Z value {z} is not a finite number"),
            });
        }
        Ok(Self {
            x,
            y,
            z,
            name: name.into(),
        })
    }
}

impl PartialEq for Location {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x
            && self.y == other.y
            && self.z.to_bits() == other.z.to_bits()
            && self.name == other.name
    }
}

impl Eq for Location {}

impl Hash for Location {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.hash(state);
        self.y.hash(state);
        self.z.to_bits().hash(state);
        self.name.hash(state);
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {}, {})", self.name, self.x, self.y, self.z)
    }
}
