//! Centralized error types for footgraph.

use thiserror::Error;

/// Main error type for graph export operations.
#[derive(Error, Debug)]
pub enum FootgraphError {
    #[error("Unknown category: '{value}' is not in the {dictionary} dictionary")]
    UnknownCategory {
        dictionary: &'static str,
        value: String,
    },

    #[error("Unknown category code: {code} is not a valid {category} code")]
    UnknownCategoryCode { category: &'static str, code: f64 },

    #[error("Identity collision: node id '{0}' was emitted more than once")]
    IdentityCollision(String),

    #[error("Malformed id component for {kind}: {value:?}")]
    MalformedIdComponent { kind: &'static str, value: String },

    #[error("Malformed node id: {0:?}")]
    MalformedId(String),

    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Missing field '{field}' in {table} row {row}")]
    MissingField {
        table: &'static str,
        field: &'static str,
        row: usize,
    },

    #[error("Sink closed: cannot add to the {0} sink after close")]
    SinkClosed(&'static str),

    #[error("Sink IO error: {0}")]
    SinkIo(#[from] std::io::Error),

    #[error("Input error: {0}")]
    Input(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for graph export operations.
pub type FootgraphResult<T> = Result<T, FootgraphError>;

impl FootgraphError {
    /// Create an input error.
    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
