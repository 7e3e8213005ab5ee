use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicI32, Ordering};

use crate::errors::{Result, WaylineError};

use super::{Coordinates, Location};

/// Process-wide monotonic ID source. IDs are never reused, even after an
/// element is removed from a store.
static NEXT_ID: AtomicI32 = AtomicI32::new(1);

fn next_id() -> i32 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// Route - the managed element of a Wayline collection
///
/// A route is immutable once constructed: "updating" one means removing
/// the old element and inserting a new one carrying the same ID (see
/// `Store::replace_by_id`). The `distance` ordering key is derived at
/// construction as the Euclidean distance between the two endpoints, and
/// is finite because `Location` rejects non-finite coordinates.
///
/// Equality and hashing are structural over `name`, `coordinates`, `from`
/// and `to`; the ID is a separate keyed access path and takes no part in
/// them.
#[derive(Debug, Clone)]
pub struct Route {
    id: i32,
    name: String,
    coordinates: Coordinates,
    from: Location,
    to: Location,
    distance: f64,
}

impl Route {
    /// Create a new route with a freshly generated ID
    ///
    /// # Errors
    ///
    /// Returns `InvalidName` if `name` is empty or whitespace-only.
    pub fn new(
        name: impl Into<String>,
        coordinates: Coordinates,
        from: Location,
        to: Location,
    ) -> Result<Self> {
        Self::with_id(next_id(), name, coordinates, from, to)
    }

    /// Create a route bound to an existing ID
    ///
    /// Used by the update path, where the replacement element must carry
    /// the ID of the element it replaces.
    ///
    /// # Errors
    ///
    /// Returns `InvalidName` if `name` is empty or whitespace-only.
    pub fn with_id(
        id: i32,
        name: impl Into<String>,
        coordinates: Coordinates,
        from: Location,
        to: Location,
    ) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(WaylineError::InvalidName {
                reason: "a route name can't be empty".to_string(),
            });
        }
        let distance = euclidean(&from, &to);
        Ok(Self {
            id,
            name,
            coordinates,
            from,
            to,
            distance,
        })
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    pub fn from(&self) -> &Location {
        &self.from
    }

    pub fn to(&self) -> &Location {
        &self.to
    }

    /// The ordering key used by min/max and the ascending listing
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Multi-line representation used by the listing commands
    pub fn detailed(&self) -> String {
        format!(
            "Route #{} \"{}\"\n  position: {}\n  from: {}\n  to: {}\n  distance: {}",
            self.id, self.name, self.coordinates, self.from, self.to, self.distance
        )
    }
}

fn euclidean(from: &Location, to: &Location) -> f64 {
    let dx = (to.x - from.x) as f64;
    let dy = (to.y - from.y) as f64;
    let dz = f64::from(to.z) - f64::from(from.z);
    (dx * dx + dy * dy + dz * dz).sqrt()
}

impl PartialEq for Route {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.coordinates == other.coordinates
            && self.from == other.from
            && self.to == other.to
    }
}

impl Eq for Route {}

impl Hash for Route {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.coordinates.hash(state);
        self.from.hash(state);
        self.to.hash(state);
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Route #{} \"{}\" at {} from {} to {} (distance {})",
            self.id, self.name, self.coordinates, self.from, self.to, self.distance
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(x: i64, y: i64, z: f32) -> Location {
        Location::new(x, y, z, "p").unwrap()
    }

    #[test]
    fn test_new_rejects_empty_name() {
        let result = Route::new("", Coordinates::new(0, 0), loc(0, 0, 0.0), loc(1, 0, 0.0));
        assert!(matches!(result, Err(WaylineError::InvalidName { .. })));

        let result = Route::new("  \t", Coordinates::new(0, 0), loc(0, 0, 0.0), loc(1, 0, 0.0));
        assert!(matches!(result, Err(WaylineError::InvalidName { .. })));
    }

    #[test]
    fn test_distance_is_euclidean() {
        let route = Route::new(
            "r",
            Coordinates::new(0, 0),
            loc(0, 0, 0.0),
            loc(3, 4, 0.0),
        )
        .unwrap();
        assert_eq!(route.distance(), 5.0);
    }

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let a = Route::new("a", Coordinates::new(0, 0), loc(0, 0, 0.0), loc(1, 0, 0.0)).unwrap();
        let b = Route::new("b", Coordinates::new(0, 0), loc(0, 0, 0.0), loc(1, 0, 0.0)).unwrap();
        assert!(b.id() > a.id());
    }

    #[test]
    fn test_equality_ignores_id() {
        let a = Route::new("same", Coordinates::new(1, 1), loc(0, 0, 0.0), loc(2, 0, 0.0)).unwrap();
        let b = Route::new("same", Coordinates::new(1, 1), loc(0, 0, 0.0), loc(2, 0, 0.0)).unwrap();
        assert_ne!(a.id(), b.id());
        assert_eq!(a, b);
    }

    #[test]
    fn test_with_id_binds_the_given_id() {
        let r = Route::with_id(42, "r", Coordinates::new(0, 0), loc(0, 0, 0.0), loc(1, 0, 0.0))
            .unwrap();
        assert_eq!(r.id(), 42);
    }
}
