//! Unified error types for `SafeSpend`.
//!
//! Every fallible operation in the crate returns [`Result`]. Validation
//! failures are rejected before any computation touches the database; store
//! failures surface as [`Error::DataUnavailable`] and are never retried here —
//! retry/backoff policy belongs to the caller.

use thiserror::Error;

/// Unified error type for all `SafeSpend` operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed or missing input, rejected before any computation
    #[error("Validation error: {message}")]
    Validation {
        /// Human-readable description of what was wrong
        message: String,
    },

    /// A monetary amount outside its valid range (e.g. a non-positive
    /// purchase amount or a negative allocation)
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The offending amount
        amount: rust_decimal::Decimal,
    },

    /// A day-of-month field outside 1-31
    #[error("Due day out of range (1-31): {day}")]
    DueDayOutOfRange {
        /// The offending day value
        day: i32,
    },

    /// An explicit lookup of a row that does not exist
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Entity kind, e.g. "envelope" or "bill"
        entity: &'static str,
        /// The identifier that failed to resolve
        id: String,
    },

    /// The underlying record store is unreachable or rejected a query.
    /// Not retried inside the core.
    #[error("Data store unavailable: {source}")]
    DataUnavailable {
        /// The underlying database error
        #[from]
        source: sea_orm::DbErr,
    },

    /// Configuration problem (policy file, environment)
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description
        message: String,
    },

    /// I/O error during startup
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
