use wayline_core::{Coordinates, Location, Route, Store};

/// Create a new empty Store for testing
#[allow(dead_code)]
pub fn new_store() -> Store {
    Store::new()
}

/// Create a test route whose distance equals `span`
///
/// The endpoints are laid out along the X axis, so the Euclidean distance
/// is exactly `span` (for non-negative spans).
#[allow(dead_code)]
pub fn route_with_distance(name: &str, span: i64) -> Route {
    let from = Location::new(0, 0, 0.0, "start").unwrap();
    let to = Location::new(span, 0, 0.0, "finish").unwrap();
    Route::new(name, Coordinates::new(0, 0), from, to).unwrap()
}

/// Create a test route with distinct endpoint names, so two routes with
/// the same span can still be structurally different
#[allow(dead_code)]
pub fn route_with_endpoints(name: &str, span: i64, from_name: &str, to_name: &str) -> Route {
    let from = Location::new(0, 0, 0.0, from_name).unwrap();
    let to = Location::new(span, 0, 0.0, to_name).unwrap();
    Route::new(name, Coordinates::new(0, 0), from, to).unwrap()
}

/// Rebuild `route`'s field set under a different ID
#[allow(dead_code)]
pub fn rebind(route: &Route, id: i32) -> Route {
    Route::with_id(
        id,
        route.name(),
        route.coordinates(),
        route.from().clone(),
        route.to().clone(),
    )
    .unwrap()
}
