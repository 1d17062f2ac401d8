//! Store trait for durable, deduplicated postings.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::StoreResult;
use crate::types::Posting;

/// Durable posting store keyed by `job_id`.
///
/// The conditional insert is the sole synchronization primitive for
/// deduplication: concurrent pipeline instances legitimately race on
/// the same posting when rescanning a company, and the store-level
/// guard resolves that race. Callers must never pre-check existence
/// and then insert; that reopens the race window the guard closes.
#[async_trait]
pub trait PostingStore: Send + Sync {
    /// Insert a posting only if no record with its `job_id` exists.
    ///
    /// Returns `Ok(true)` when the posting was newly written and
    /// `Ok(false)` when the key was already present. Only backend
    /// trouble is an `Err`.
    async fn insert_if_absent(&self, posting: &Posting) -> StoreResult<bool>;

    /// Scan postings discovered at or after `cutoff`, newest first.
    ///
    /// Read surface for the digest sender; the pipeline itself never
    /// reads postings back.
    async fn recent_postings(&self, cutoff: DateTime<Utc>) -> StoreResult<Vec<Posting>>;
}
