//! Error handling for wayline-store
//!
//! Startup failures must be distinguishable (unreadable file, malformed
//! content, invalid element), so each gets its own variant.

use thiserror::Error;
use wayline_core::WaylineError;

/// Result type alias using StorageError
pub type Result<T> = std::result::Result<T, StorageError>;

/// Failures of the collection-file collaborator
#[derive(Error, Debug)]
pub enum StorageError {
    /// The collection file could not be read
    #[error("could not read the collection file {path}: {message}")]
    Read { path: String, message: String },

    /// The collection file is not valid JSON
    #[error("the collection file {path} is not valid JSON: {message}")]
    Malformed { path: String, message: String },

    /// A record in the file fails route construction
    #[error("invalid element in the collection file: {source}")]
    InvalidElement {
        #[source]
        source: WaylineError,
    },

    /// The collection file could not be written
    #[error("could not write the collection file {path}: {message}")]
    Write { path: String, message: String },

    /// The collection could not be encoded
    #[error("could not encode the collection: {message}")]
    Encode { message: String },
}

impl From<WaylineError> for StorageError {
    fn from(source: WaylineError) -> Self {
        StorageError::InvalidElement { source }
    }
}
