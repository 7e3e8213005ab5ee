//! On-disk schema for the collection file
//!
//! A `RouteRecord` carries exactly the constructor fields of a route.
//! IDs are not persisted: loading goes through `Route::new`, which
//! assigns fresh monotonic IDs, and `distance` is recomputed from the
//! endpoints. A saved file can therefore never smuggle in duplicate IDs.

use serde::{Deserialize, Serialize};
use wayline_core::{Coordinates, Location, Route};

use crate::errors::Result;

/// Top-level document of the collection file
#[derive(Debug, Serialize, Deserialize)]
pub struct CollectionFile {
    pub routes: Vec<RouteRecord>,
}

/// One persisted route
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteRecord {
    pub name: String,
    pub coordinates: Coordinates,
    pub from: Location,
    pub to: Location,
}

impl RouteRecord {
    /// Construct the in-memory route this record describes
    ///
    /// # Errors
    ///
    /// Returns `InvalidElement` when route construction rejects the
    /// record (empty name).
    pub fn into_route(self) -> Result<Route> {
        Ok(Route::new(self.name, self.coordinates, self.from, self.to)?)
    }
}

impl From<&Route> for RouteRecord {
    fn from(route: &Route) -> Self {
        Self {
            name: route.name().to_string(),
            coordinates: route.coordinates(),
            from: route.from().clone(),
            to: route.to().clone(),
        }
    }
}
