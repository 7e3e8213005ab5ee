//! Wayline Store - file-backed persistence for route collections
//!
//! The persistence collaborator of the Wayline terminal: loads the
//! initial collection at startup and writes it back when the `save`
//! command asks. The format is one JSON document (see [`format`]).

pub mod errors;
pub mod format;

use std::fs;
use std::path::Path;

use wayline_core::Route;

pub use errors::{Result, StorageError};
pub use format::{CollectionFile, RouteRecord};

/// Load the route collection from `path`
///
/// # Errors
///
/// `Read` if the file cannot be read, `Malformed` if it is not valid
/// JSON, `InvalidElement` if a record fails route construction. All
/// three are fatal at startup.
pub fn load_collection(path: &Path) -> Result<Vec<Route>> {
    let text = fs::read_to_string(path).map_err(|err| StorageError::Read {
        path: path.display().to_string(),
        message: err.to_string(),
    })?;
    let file: CollectionFile =
        serde_json::from_str(&text).map_err(|err| StorageError::Malformed {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;

    let mut routes = Vec::with_capacity(file.routes.len());
    for record in file.routes {
        routes.push(record.into_route()?);
    }
    tracing::debug!(path = %path.display(), count = routes.len(), "loaded collection");
    Ok(routes)
}

/// Write the route collection to `path`
///
/// # Errors
///
/// `Encode` if the collection cannot be serialized, `Write` if the file
/// cannot be written. Both are reportable, non-fatal.
pub fn save_collection(path: &Path, routes: &[Route]) -> Result<()> {
    let file = CollectionFile {
        routes: routes.iter().map(RouteRecord::from).collect(),
    };
    let text = serde_json::to_string_pretty(&file).map_err(|err| StorageError::Encode {
        message: err.to_string(),
    })?;
    fs::write(path, text).map_err(|err| StorageError::Write {
        path: path.display().to_string(),
        message: err.to_string(),
    })?;
    tracing::debug!(path = %path.display(), count = routes.len(), "saved collection");
    Ok(())
}
