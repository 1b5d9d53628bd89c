//! Domain errors for the report engine.

use thiserror::Error;

/// Errors surfaced by the aggregation engine and its fetcher port.
///
/// Classification has no error variant: the status partition is closed, so
/// classifying a record can never fail.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The remote service could not deliver a required collection.
    ///
    /// Propagated unchanged through the aggregation pipeline; the engine
    /// performs no retries and never returns a partial aggregate.
    #[error("Fetch failed: {0}")]
    Fetch(String),

    /// A required identifier was missing or blank; rejected before any
    /// fetch is attempted.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A remote record failed required-field validation at the adapter
    /// boundary.
    #[error("Malformed entity: {0}")]
    MalformedEntity(String),
}

/// Result alias used throughout the engine.
pub type EngineResult<T> = Result<T, EngineError>;

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::MalformedEntity(err.to_string())
    }
}
