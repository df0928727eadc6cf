//! Stored string record types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analyzer::Properties;

/// A stored string plus its derived properties and metadata.
///
/// Records are immutable after creation. The id equals
/// `properties.content_hash`, so two inputs that trim to the same string
/// collide and the second insert is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringRecord {
    /// Content hash of the trimmed value; unique primary key
    pub id: String,

    /// The trimmed original string; never empty
    pub value: String,

    /// Derived properties, computed once at creation
    pub properties: Properties,

    /// Creation timestamp; never mutated
    pub created_at: DateTime<Utc>,
}

impl StringRecord {
    /// Build a record from a trimmed value and its analyzed properties.
    pub fn new(value: impl Into<String>, properties: Properties) -> Self {
        Self {
            id: properties.content_hash.clone(),
            value: value.into(),
            properties,
            created_at: Utc::now(),
        }
    }
}
