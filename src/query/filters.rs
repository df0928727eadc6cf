//! # Filter Set
//!
//! Conjunctive predicates over stored string properties.

use serde::{Deserialize, Serialize};

use crate::analyzer::Properties;

/// A conjunctive set of optional predicates applied to stored records.
///
/// Every set field must pass for a record to match (AND semantics); an
/// empty set matches everything. Numeric bounds are inclusive and kept as
/// `i64` so translated queries can express out-of-range bounds - "shorter
/// than 0 characters" becomes `max_length = -1`, which matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringFilters {
    /// Exact match on the palindrome flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_palindrome: Option<bool>,

    /// Inclusive lower bound on character length
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<i64>,

    /// Inclusive upper bound on character length
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<i64>,

    /// Exact match on the word count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<i64>,

    /// Character (case-folded) that must appear in the frequency map
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains_character: Option<char>,
}

impl StringFilters {
    /// True if no predicate is configured
    pub fn is_empty(&self) -> bool {
        self.is_palindrome.is_none()
            && self.min_length.is_none()
            && self.max_length.is_none()
            && self.word_count.is_none()
            && self.contains_character.is_none()
    }

    /// Check whether a property set passes every configured predicate.
    pub fn matches(&self, props: &Properties) -> bool {
        if let Some(expected) = self.is_palindrome {
            if props.is_palindrome != expected {
                return false;
            }
        }

        if let Some(min) = self.min_length {
            if (props.length as i64) < min {
                return false;
            }
        }

        if let Some(max) = self.max_length {
            if (props.length as i64) > max {
                return false;
            }
        }

        if let Some(count) = self.word_count {
            if (props.word_count as i64) != count {
                return false;
            }
        }

        if let Some(ch) = self.contains_character {
            if !props.character_frequency_map.contains_key(&ch) {
                return false;
            }
        }

        true
    }
}
