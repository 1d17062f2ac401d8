//! Deduplicating persistence of filtered candidates.

use tracing::{debug, info};

use crate::error::StoreResult;
use crate::traits::PostingStore;
use crate::types::{Candidate, Posting};

/// Persist candidates for one company, returning how many were newly
/// written (duplicates excluded).
///
/// The store's conditional insert is the only dedup mechanism; there
/// is no read-before-write. A rejected insert is an expected no-op,
/// logged at low severity. Backend failure propagates: continuing past
/// an unreachable store would silently lose writes.
pub async fn ingest_candidates<S: PostingStore + ?Sized>(
    store: &S,
    company: &str,
    candidates: &[Candidate],
) -> StoreResult<usize> {
    let mut written = 0;

    for candidate in candidates {
        let posting = Posting::from_candidate(company, candidate);
        if store.insert_if_absent(&posting).await? {
            written += 1;
            info!(company = %company, title = %candidate.title, "wrote new job posting");
        } else {
            debug!(job_id = %posting.job_id, "duplicate posting skipped");
        }
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::MemoryStore;

    fn candidates() -> Vec<Candidate> {
        vec![
            Candidate {
                title: "Platform Engineer".to_string(),
                url: "https://acme.com/jobs/1".to_string(),
                location: "Remote".to_string(),
            },
            Candidate {
                title: "Senior SRE".to_string(),
                url: "https://acme.com/jobs/2".to_string(),
                location: "NYC".to_string(),
            },
        ]
    }

    #[tokio::test]
    async fn writes_each_new_candidate_once() {
        let store = MemoryStore::new();
        let written = ingest_candidates(&store, "Acme", &candidates()).await.unwrap();

        assert_eq!(written, 2);
        assert_eq!(store.posting_count(), 2);
    }

    #[tokio::test]
    async fn second_run_is_idempotent() {
        let store = MemoryStore::new();
        let items = candidates();

        let first = ingest_candidates(&store, "Acme", &items).await.unwrap();
        let second = ingest_candidates(&store, "Acme", &items).await.unwrap();

        assert_eq!(first, 2);
        assert_eq!(second, 0);
        assert_eq!(store.posting_count(), 2);
    }

    #[tokio::test]
    async fn same_listing_for_different_companies_is_distinct() {
        let store = MemoryStore::new();
        let items = candidates();

        ingest_candidates(&store, "Acme", &items).await.unwrap();
        let written = ingest_candidates(&store, "Globex", &items).await.unwrap();

        assert_eq!(written, 2);
        assert_eq!(store.posting_count(), 4);
    }
}
