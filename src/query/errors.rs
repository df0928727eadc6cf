//! # Query Translation Errors
//!
//! Error types for the natural-language query translator.

use thiserror::Error;

/// Result type for query translation
pub type TranslateResult<T> = Result<T, TranslateError>;

/// Errors raised while turning free text into a filter set.
///
/// Both variants mean the query was understood but the derived filters can
/// never match anything; the HTTP layer maps them to 422.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    /// Derived length bounds can never both hold
    #[error("Conflicting filters: min_length {min} cannot be greater than max_length {max}")]
    ConflictingBounds { min: i64, max: i64 },

    /// Negative word count (unreachable via the current rule table, checked anyway)
    #[error("Invalid word_count: must be non-negative, got {0}")]
    NegativeWordCount(i64),
}
