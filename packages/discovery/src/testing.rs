//! Mock implementations for testing.
//!
//! Deterministic, configurable stand-ins for the pipeline's network
//! collaborators, so pipeline logic can be exercised without real HTTP
//! or LLM calls.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::{FetchError, FetchResult, ModelError, ModelResult, StoreError, StoreResult};
use crate::stores::MemoryStore;
use crate::traits::{ExtractionModel, PageFetcher, PostingStore};
use crate::types::Posting;

/// A fetcher serving canned HTML by URL.
///
/// Unknown URLs and explicitly failing URLs both return fetch errors,
/// which the coordinator is expected to absorb as empty page text.
#[derive(Default)]
pub struct MockFetcher {
    pages: RwLock<HashMap<String, String>>,
    failing: RwLock<HashSet<String>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `html` for `url`.
    pub fn with_page(self, url: impl Into<String>, html: impl Into<String>) -> Self {
        self.pages.write().unwrap().insert(url.into(), html.into());
        self
    }

    /// Make fetches of `url` fail with a 503.
    pub fn with_failure(self, url: impl Into<String>) -> Self {
        self.failing.write().unwrap().insert(url.into());
        self
    }
}

#[async_trait]
impl PageFetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> FetchResult<String> {
        if self.failing.read().unwrap().contains(url) {
            return Err(FetchError::Status {
                status: 503,
                url: url.to_string(),
            });
        }

        self.pages
            .read()
            .unwrap()
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::Status {
                status: 404,
                url: url.to_string(),
            })
    }
}

/// A model returning canned responses.
///
/// Responses are keyed by a needle substring matched against the
/// prompt (typically the company name); a default response covers
/// everything else. Tracks call counts for assertions.
#[derive(Default)]
pub struct MockModel {
    responses: RwLock<Vec<(String, String)>>,
    default_response: RwLock<Option<String>>,
    fail: bool,
    calls: AtomicUsize,
}

impl MockModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// A model whose every call fails.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Return `response` for prompts containing `needle`.
    pub fn with_response(self, needle: impl Into<String>, response: impl Into<String>) -> Self {
        self.responses
            .write()
            .unwrap()
            .push((needle.into(), response.into()));
        self
    }

    /// Fallback response for prompts matching no needle.
    pub fn with_default(self, response: impl Into<String>) -> Self {
        *self.default_response.write().unwrap() = Some(response.into());
        self
    }

    /// Number of completion calls made.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ExtractionModel for MockModel {
    async fn complete(&self, prompt: &str) -> ModelResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.fail {
            return Err(ModelError::Api("mock model failure".to_string()));
        }

        for (needle, response) in self.responses.read().unwrap().iter() {
            if prompt.contains(needle.as_str()) {
                return Ok(response.clone());
            }
        }

        self.default_response
            .read()
            .unwrap()
            .clone()
            .ok_or(ModelError::MissingContent)
    }
}

/// A store whose backend gives out after a set number of inserts.
///
/// Successful inserts delegate to an inner [`MemoryStore`], so tests
/// can assert which writes landed before the backend failed.
pub struct FailingStore {
    inner: MemoryStore,
    healthy_inserts: usize,
    inserts: AtomicUsize,
}

impl FailingStore {
    /// A store whose every insert fails.
    pub fn new() -> Self {
        Self::after(0)
    }

    /// A store whose first `healthy_inserts` inserts succeed.
    pub fn after(healthy_inserts: usize) -> Self {
        Self {
            inner: MemoryStore::new(),
            healthy_inserts,
            inserts: AtomicUsize::new(0),
        }
    }

    /// Number of postings written before the backend gave out.
    pub fn posting_count(&self) -> usize {
        self.inner.posting_count()
    }
}

impl Default for FailingStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostingStore for FailingStore {
    async fn insert_if_absent(&self, posting: &Posting) -> StoreResult<bool> {
        let seen = self.inserts.fetch_add(1, Ordering::SeqCst);
        if seen >= self.healthy_inserts {
            return Err(StoreError::Backend("mock backend unavailable".into()));
        }
        self.inner.insert_if_absent(posting).await
    }

    async fn recent_postings(&self, cutoff: DateTime<Utc>) -> StoreResult<Vec<Posting>> {
        self.inner.recent_postings(cutoff).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Candidate;

    #[tokio::test]
    async fn mock_fetcher_serves_and_fails() {
        let fetcher = MockFetcher::new()
            .with_page("https://a.com", "<p>hi</p>")
            .with_failure("https://b.com");

        assert_eq!(fetcher.fetch("https://a.com").await.unwrap(), "<p>hi</p>");
        assert!(fetcher.fetch("https://b.com").await.is_err());
        assert!(fetcher.fetch("https://unknown.com").await.is_err());
    }

    #[tokio::test]
    async fn mock_model_matches_needles_and_counts_calls() {
        let model = MockModel::new()
            .with_response("Acme", "[1]")
            .with_default("[]");

        assert_eq!(model.complete("page of Acme Corp").await.unwrap(), "[1]");
        assert_eq!(model.complete("page of Globex").await.unwrap(), "[]");
        assert_eq!(model.call_count(), 2);
    }

    #[tokio::test]
    async fn failing_store_gives_out_after_its_allowance() {
        let store = FailingStore::after(1);
        let candidate = Candidate {
            title: "Platform Engineer".to_string(),
            url: "https://acme.com/jobs/1".to_string(),
            location: "Remote".to_string(),
        };
        let posting = Posting::from_candidate("Acme Corp", &candidate);

        assert!(store.insert_if_absent(&posting).await.unwrap());
        assert!(store.insert_if_absent(&posting).await.is_err());
        assert_eq!(store.posting_count(), 1);
    }
}
