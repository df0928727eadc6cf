//! # Store Errors
//!
//! Error types for the in-memory string store.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A record with the same trimmed value already exists
    #[error("String already exists in the system")]
    DuplicateValue,

    /// Interior lock poisoned by a panicking writer
    #[error("Store lock poisoned")]
    LockPoisoned,
}
