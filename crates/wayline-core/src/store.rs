use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::errors::{Result, WaylineError};
use crate::model::Route;

/// In-memory store for the route collection
///
/// One insertion-ordered `Vec` owns the elements; the original design's
/// unordered set and ordered mirror are materialized on demand as value
/// snapshots (`copy_set`/`copy_ordered`), so the two views can never
/// disagree. Not thread-safe - designed for single-threaded use.
///
/// Invariants:
/// - no two elements are structurally equal (`DuplicateElement` on insert)
/// - no two elements share an ID (`DuplicateId` on insert)
#[derive(Debug, Clone)]
pub struct Store {
    entries: Vec<Route>,
    created_at: DateTime<Utc>,
}

impl Store {
    /// Create a new empty Store
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Create a Store holding an initial batch of routes
    ///
    /// # Errors
    ///
    /// Returns `DuplicateId` or `DuplicateElement` if the batch violates
    /// the store invariants; a violating batch is rejected, never merged.
    pub fn with_routes(routes: Vec<Route>) -> Result<Self> {
        let mut store = Self::new();
        for route in routes {
            store.add(route)?;
        }
        Ok(store)
    }

    /// Insert a route into the collection
    ///
    /// # Errors
    ///
    /// Returns `DuplicateId` if an element with the same ID is present,
    /// `DuplicateElement` if a structurally equal element is present. On
    /// either error the store is unchanged.
    pub fn add(&mut self, route: Route) -> Result<()> {
        if self.entries.iter().any(|r| r.id() == route.id()) {
            return Err(WaylineError::DuplicateId { id: route.id() });
        }
        if self.entries.iter().any(|r| *r == route) {
            return Err(WaylineError::DuplicateElement);
        }
        tracing::debug!(id = route.id(), name = route.name(), "store add");
        self.entries.push(route);
        Ok(())
    }

    /// Remove a route by structural equality
    ///
    /// Returns `true` if the element was present and removed, `false`
    /// otherwise (the store is unchanged in that case).
    pub fn remove(&mut self, route: &Route) -> bool {
        match self.entries.iter().position(|r| r == route) {
            Some(pos) => {
                let removed = self.entries.remove(pos);
                tracing::debug!(id = removed.id(), "store remove");
                true
            }
            None => false,
        }
    }

    /// Remove all elements
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Look up a route by its ID
    ///
    /// A linear scan; at most one element can match because IDs are
    /// unique within the store.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no element has the given ID.
    pub fn get_by_id(&self, id: i32) -> Result<&Route> {
        self.entries
            .iter()
            .find(|r| r.id() == id)
            .ok_or(WaylineError::NotFound { id })
    }

    /// Remove the route with the given ID, returning it
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no element has the given ID.
    pub fn remove_by_id(&mut self, id: i32) -> Result<Route> {
        let pos = self
            .entries
            .iter()
            .position(|r| r.id() == id)
            .ok_or(WaylineError::NotFound { id })?;
        Ok(self.entries.remove(pos))
    }

    /// Replace the element sharing `route`'s ID with `route`
    ///
    /// Remove-then-insert. If the insertion is refused (the new element is
    /// structurally equal to a *different* element already present), the
    /// removed element is restored before the error is returned, so a
    /// refused update never loses data.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no element has the ID, or `DuplicateElement`
    /// if the replacement collides with another element.
    pub fn replace_by_id(&mut self, route: Route) -> Result<()> {
        let old = self.remove_by_id(route.id())?;
        if let Err(err) = self.add(route) {
            // The slot was just vacated and nothing else changed, so
            // re-inserting the old element cannot collide.
            let restored = self.add(old);
            debug_assert!(restored.is_ok(), "restoring a removed element must succeed");
            return Err(err);
        }
        Ok(())
    }

    /// The element with the smallest distance
    ///
    /// Ties are broken by earliest insertion order.
    ///
    /// # Errors
    ///
    /// Returns `EmptyCollection` if the store holds no elements.
    pub fn min(&self) -> Result<&Route> {
        // Strict inequality keeps the first-seen extreme on ties.
        self.entries
            .iter()
            .reduce(|best, r| if r.distance() < best.distance() { r } else { best })
            .ok_or(WaylineError::EmptyCollection)
    }

    /// The element with the largest distance
    ///
    /// Ties are broken by earliest insertion order.
    ///
    /// # Errors
    ///
    /// Returns `EmptyCollection` if the store holds no elements.
    pub fn max(&self) -> Result<&Route> {
        self.entries
            .iter()
            .reduce(|best, r| if r.distance() > best.distance() { r } else { best })
            .ok_or(WaylineError::EmptyCollection)
    }

    /// All elements whose names contain `needle`, in insertion order
    ///
    /// Case-sensitive raw substring match.
    pub fn filter_by_name(&self, needle: &str) -> Vec<&Route> {
        self.entries
            .iter()
            .filter(|r| r.name().contains(needle))
            .collect()
    }

    /// All elements with a distance strictly greater than `route`'s
    pub fn greater_than(&self, route: &Route) -> Vec<&Route> {
        let threshold = route.distance();
        self.entries
            .iter()
            .filter(|r| r.distance() > threshold)
            .collect()
    }

    /// All elements sorted by ascending distance
    ///
    /// The sort is stable, so equal distances keep insertion order.
    pub fn ascending(&self) -> Vec<&Route> {
        let mut sorted: Vec<&Route> = self.entries.iter().collect();
        sorted.sort_by(|a, b| a.distance().total_cmp(&b.distance()));
        sorted
    }

    /// The distinct distance values present, sorted ascending
    pub fn unique_distances(&self) -> Vec<f64> {
        let mut values: Vec<f64> = self.entries.iter().map(Route::distance).collect();
        values.sort_by(f64::total_cmp);
        values.dedup();
        values
    }

    /// Number of elements in the collection
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// When this store was constructed
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Iterate the elements in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.entries.iter()
    }

    /// Value snapshot of the unordered set view
    ///
    /// The returned set does not observe later mutations of the store.
    pub fn copy_set(&self) -> HashSet<Route> {
        self.entries.iter().cloned().collect()
    }

    /// Value snapshot of the insertion-ordered view
    ///
    /// The returned list does not observe later mutations of the store.
    pub fn copy_ordered(&self) -> Vec<Route> {
        self.entries.clone()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
