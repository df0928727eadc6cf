//! In-memory string store
//!
//! One `RwLock`-guarded map keyed by content hash. `create` performs the
//! existence check and the insert under a single write-lock acquisition,
//! so the no-duplicate invariant holds even when handlers run on parallel
//! runtime workers.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::analyzer::{self, Properties};
use crate::query::StringFilters;

use super::errors::{StoreError, StoreResult};
use super::record::StringRecord;

/// In-memory keyed collection of string records.
///
/// Shared across handlers via `Arc`; all interior mutability lives behind
/// the lock.
#[derive(Debug, Default)]
pub struct StringStore {
    records: RwLock<HashMap<String, StringRecord>>,
}

impl StringStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new record keyed by `properties.content_hash`.
    ///
    /// Concurrent creates of the same value cannot both succeed: the
    /// duplicate check and the insert share one write lock.
    pub fn create(
        &self,
        value: impl Into<String>,
        properties: Properties,
    ) -> StoreResult<StringRecord> {
        let record = StringRecord::new(value, properties);

        let mut records = self.records.write().map_err(|_| StoreError::LockPoisoned)?;
        if records.contains_key(&record.id) {
            return Err(StoreError::DuplicateValue);
        }
        records.insert(record.id.clone(), record.clone());

        Ok(record)
    }

    /// Look up a record by its (untrimmed) value.
    ///
    /// Identity is the hash of the trimmed value, so lookups tolerate
    /// surrounding whitespace but stay case-sensitive.
    pub fn find_by_value(&self, value: &str) -> StoreResult<Option<StringRecord>> {
        let id = analyzer::content_hash(value);
        let records = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(records.get(&id).cloned())
    }

    /// Linear scan applying every configured filter conjunctively.
    ///
    /// Results are ordered by creation time then id, so listings are
    /// stable across calls.
    pub fn find_all(&self, filters: &StringFilters) -> StoreResult<Vec<StringRecord>> {
        let records = self.records.read().map_err(|_| StoreError::LockPoisoned)?;

        let mut results: Vec<StringRecord> = records
            .values()
            .filter(|r| filters.matches(&r.properties))
            .cloned()
            .collect();

        results.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });

        Ok(results)
    }

    /// Remove a record by id, reporting whether it existed.
    pub fn delete_by_id(&self, id: &str) -> StoreResult<bool> {
        let mut records = self.records.write().map_err(|_| StoreError::LockPoisoned)?;
        Ok(records.remove(id).is_some())
    }

    /// Whether a record with this id exists
    pub fn exists(&self, id: &str) -> StoreResult<bool> {
        let records = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(records.contains_key(id))
    }

    /// Number of stored records
    pub fn count(&self) -> StoreResult<usize> {
        let records = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(records.len())
    }
}
