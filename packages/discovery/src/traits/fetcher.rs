//! Fetcher trait for retrieving careers pages.

use async_trait::async_trait;

use crate::error::FetchResult;

/// Fetches the raw HTML of a careers page.
///
/// One attempt per invocation with a bounded timeout; no retries. The
/// pipeline runs on a fixed schedule, so a missed page is recovered on
/// the next cycle rather than by in-process retry.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the page body. Non-2xx statuses are errors.
    async fn fetch(&self, url: &str) -> FetchResult<String>;
}
