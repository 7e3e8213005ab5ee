use wayline_core::{Coordinates, Location, Route};
use wayline_store::{load_collection, save_collection};

fn sample_routes() -> Vec<Route> {
    let harbour = Route::new(
        "Harbour loop",
        Coordinates::new(4, -2),
        Location::new(0, 0, 0.0, "Pier").unwrap(),
        Location::new(3, 4, 0.0, "Lighthouse").unwrap(),
    )
    .unwrap();
    let ridge = Route::new(
        "Ridge crossing",
        Coordinates::new(-10, 8),
        Location::new(1, 1, 250.5, "Trailhead").unwrap(),
        Location::new(7, -3, 410.0, "Summit").unwrap(),
    )
    .unwrap();
    vec![harbour, ridge]
}

#[test]
fn test_save_then_load_preserves_structure_and_assigns_fresh_ids() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("collection.json");
    let saved = sample_routes();

    save_collection(&path, &saved).unwrap();
    let loaded = load_collection(&path).unwrap();

    // Same elements, structurally, in the same order.
    assert_eq!(loaded, saved);
    assert_eq!(loaded[0].distance(), saved[0].distance());

    // Fresh IDs, pairwise distinct.
    let mut ids: Vec<i32> = loaded.iter().map(|r| r.id()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), loaded.len());
}
