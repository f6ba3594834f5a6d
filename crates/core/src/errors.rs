//! Core error types for the ledger synchronization engine.
//!
//! This module defines store-agnostic error types. Store-specific failures
//! are converted to these types by the storage implementation.

use rust_decimal::Decimal;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the ledger engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Store operation failed: {0}")]
    Store(#[from] StoreError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Store-agnostic error type for document store operations.
///
/// The store's per-document write is assumed atomic; a rejected write
/// surfaces as `WriteFailed` and is not retried automatically. The next
/// incoming change event naturally retries the whole computation.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store rejected an upsert or delete.
    #[error("Document write rejected: {0}")]
    WriteFailed(String),

    /// The requested document was not found.
    #[error("Document not found: {0}")]
    NotFound(String),

    /// The store is shutting down or a watch subscription ended.
    #[error("Store closed: {0}")]
    Closed(String),
}

/// Validation errors for user input.
///
/// Amount validation happens entirely at this boundary; the engine itself
/// assumes all amounts it receives are already non-negative.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Amount must be non-negative, got {0}")]
    NegativeAmount(Decimal),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
