use thiserror::Error;

/// Result type alias using WaylineError
pub type Result<T> = std::result::Result<T, WaylineError>;

/// Canonical error taxonomy for Wayline operations
///
/// The `#[error]` messages double as the user-facing text printed at the
/// terminal, so they are written as full sentences addressed to the user.
/// Parse errors are recovered at the line boundary; lookup and collection
/// errors are recovered inside the issuing command.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WaylineError {
    // ===== Parse Errors =====
    /// The first token of a line is not a registered command name
    #[error("Unknown command: {name}. See \"help\" for the list of commands")]
    UnknownCommand { name: String },

    /// A line split into more than a name and a single argument
    #[error("Too many arguments provided. See \"help\" on command usage")]
    TooManyArguments,

    /// An argument-taking command was invoked without its argument
    #[error("Missing command argument. See \"help\" on command usage")]
    MissingArgument,

    /// A no-argument command was invoked with an argument
    #[error("Unexpected argument provided. See \"help\" on command usage")]
    UnexpectedArgument,

    /// An ID argument did not parse as an integer
    #[error("Invalid ID: \"{token}\" is not an integer")]
    InvalidId { token: String },

    /// Interactive element assembly failed; the input line is abandoned
    #[error("Could not assemble a route: {reason}")]
    ElementConstruction { reason: String },

    // ===== Model Validation Errors =====
    /// Route name is empty
    #[error("Invalid route name: {reason}")]
    InvalidName { reason: String },

    /// A location coordinate is outside the representable range
    #[error("Invalid coordinate: {reason}")]
    InvalidCoordinate { reason: String },

    // ===== Collection Errors =====
    /// No element with the given ID exists in the store
    #[error("No route with ID {id} in the collection")]
    NotFound { id: i32 },

    /// An element with the same ID is already present
    #[error("A route with ID {id} is already in the collection")]
    DuplicateId { id: i32 },

    /// A structurally identical element is already present
    #[error("An identical route is already in the collection")]
    DuplicateElement,

    /// min/max were asked of an empty store
    #[error("The collection is empty")]
    EmptyCollection,

    // ===== Generic Errors =====
    /// Input/output failure on the terminal streams
    #[error("I/O error: {message}")]
    Io { message: String },
}

impl From<std::io::Error> for WaylineError {
    fn from(err: std::io::Error) -> Self {
        WaylineError::Io {
            message: err.to_string(),
        }
    }
}
