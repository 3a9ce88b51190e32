//! Typed repository errors.
//!
//! Repository operations never surface a sentinel value that could be mistaken
//! for row data; every failure is one of the variants below.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The sightings store could not be reached, or no pooled connection could
    /// be acquired.
    #[error("sightings store unreachable: {0}")]
    ConnectionFailure(#[source] sqlx::Error),

    /// A query failed to execute. Includes expiry of the bounded query timeout.
    #[error("sightings query failed: {0}")]
    QueryFailure(String),

    /// Lookup by id matched no row.
    #[error("no sighting with id {0}")]
    NotFound(i32),

    /// Caller-supplied input failed validation before any query was built.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl RepositoryError {
    /// Classifies a driver error: transport and pool problems are connection
    /// failures, everything else is a query failure.
    pub fn from_sqlx(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Configuration(_) => RepositoryError::ConnectionFailure(err),
            other => RepositoryError::QueryFailure(other.to_string()),
        }
    }
}
