// =============================================================================
// CaseDesk Common - Error Types
// =============================================================================
// Table of Contents:
// 1. Record Validation Errors
// 2. Fetch Errors
// 3. Configuration Errors
// =============================================================================

use thiserror::Error;

// -----------------------------------------------------------------------------
// 1. Record Validation Errors
// -----------------------------------------------------------------------------

/// A backend record that does not fit the case schema.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid {field}: {value:?}")]
    InvalidValue { field: &'static str, value: String },

    #[error("Win likelihood carries neither a percentage nor a likelihood level")]
    EmptyLikelihood,

    #[error("Win percentage out of range: {0}")]
    PercentageOutOfRange(f64),
}

// -----------------------------------------------------------------------------
// 2. Fetch Errors
// -----------------------------------------------------------------------------

/// Failure while talking to the case backend.
///
/// `NotFound` is kept apart from the other variants because the detail view
/// renders it as its own state; every other variant is a load failure.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server error: {status} - {message}")]
    Status { status: u16, message: String },

    #[error("Not found")]
    NotFound,

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Invalid record: {0}")]
    Invalid(#[from] RecordError),
}

impl FetchError {
    /// Map a non-success HTTP status onto the error taxonomy.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        match status {
            404 => FetchError::NotFound,
            _ => FetchError::Status {
                status,
                message: message.into(),
            },
        }
    }

    /// Whether this error means "the thing does not exist" rather than
    /// "we could not load it".
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::NotFound)
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

// -----------------------------------------------------------------------------
// 3. Configuration Errors
// -----------------------------------------------------------------------------

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Status ranking must list at least one status")]
    EmptyRanking,

    #[error("Status ranking lists {0:?} more than once")]
    DuplicateRank(String),

    #[error("Unknown sort field: {0}")]
    UnknownSortField(String),

    #[error("Unknown sort direction: {0}")]
    UnknownSortDirection(String),
}
