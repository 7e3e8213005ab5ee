//! Wayline Core - in-memory route collection kernel
//!
//! This crate provides the foundational data structures and operations for
//! Wayline, including:
//! - The immutable `Route` model with its `Coordinates`/`Location` payload
//! - The `Store` collection owner with CRUD, lookup, and ordering queries
//! - The canonical error taxonomy
//! - The logging facility

pub mod errors;
pub mod logging;
pub mod model;
pub mod store;

// Re-export commonly used types
pub use errors::{Result, WaylineError};
pub use model::{Coordinates, Location, Route};
pub use store::Store;
