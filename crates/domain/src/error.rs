//! Common error types used across the workspace.
//!
//! Each concern owns a typed error; [`SensorboardError`] aggregates them via
//! `#[from]` so callers can propagate with `?`.

/// Top-level error for the sensorboard crates.
#[derive(Debug, thiserror::Error)]
pub enum SensorboardError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("route table error: {0}")]
    RouteTable(#[from] RouteTableError),

    #[error("mount error: {0}")]
    Mount(#[from] MountError),
}

/// A string that is not a syntactically valid URL path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("path must not be empty")]
    EmptyPath,

    #[error("path must start with '/'")]
    NotAbsolute,

    #[error("path contains forbidden character {0:?}")]
    ForbiddenCharacter(char),

    #[error("path contains a malformed percent-encoding")]
    MalformedPercentEncoding,
}

/// Route table construction failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteTableError {
    #[error("path {0} is registered more than once")]
    DuplicatePath(String),
}

/// View mount failures. All of them are fatal at startup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MountError {
    #[error("attachment point #{0} does not exist")]
    MissingContainer(String),
}
