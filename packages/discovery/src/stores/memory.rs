//! In-memory posting store for testing and development.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::StoreResult;
use crate::traits::PostingStore;
use crate::types::Posting;

/// In-memory posting store.
///
/// Useful for testing and development. Not suitable for production as
/// data is lost on restart. The map entry API gives the same
/// insert-if-absent atomicity the production store gets from its
/// conflict guard.
pub struct MemoryStore {
    postings: RwLock<HashMap<String, Posting>>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            postings: RwLock::new(HashMap::new()),
        }
    }

    /// Number of stored postings.
    pub fn posting_count(&self) -> usize {
        self.postings.read().unwrap().len()
    }

    /// Look up a posting by job id.
    pub fn get(&self, job_id: &str) -> Option<Posting> {
        self.postings.read().unwrap().get(job_id).cloned()
    }

    /// Clear all stored postings.
    pub fn clear(&self) {
        self.postings.write().unwrap().clear();
    }
}

#[async_trait]
impl PostingStore for MemoryStore {
    async fn insert_if_absent(&self, posting: &Posting) -> StoreResult<bool> {
        let mut postings = self.postings.write().unwrap();
        match postings.entry(posting.job_id.clone()) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(slot) => {
                slot.insert(posting.clone());
                Ok(true)
            }
        }
    }

    async fn recent_postings(&self, cutoff: DateTime<Utc>) -> StoreResult<Vec<Posting>> {
        let mut recent: Vec<Posting> = self
            .postings
            .read()
            .unwrap()
            .values()
            .filter(|p| p.discovered_at >= cutoff)
            .cloned()
            .collect();
        recent.sort_by(|a, b| b.discovered_at.cmp(&a.discovered_at));
        Ok(recent)
    }
}
