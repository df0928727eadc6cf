//! # Query Translation
//!
//! Turns free-text queries into structured filter sets via an ordered
//! table of keyword/regex rules, and defines the filter set itself. The
//! translator is a best-effort heuristic matcher, not a grammar: text no
//! rule understands contributes nothing.

pub mod errors;
pub mod filters;
pub mod translator;

pub use errors::{TranslateError, TranslateResult};
pub use filters::StringFilters;
pub use translator::QueryTranslator;
