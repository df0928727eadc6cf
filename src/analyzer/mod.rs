//! # String Analyzer
//!
//! Derives the property set for a stored string. Analysis is a pure
//! function of its input: same string in, same properties out.

pub mod properties;

pub use properties::{analyze, content_hash, Properties};
