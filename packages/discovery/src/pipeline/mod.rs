//! Pipeline coordinator and its four stages.
//!
//! One work item flows normalize -> extract -> filter -> ingest. The
//! first three stages each absorb their own failures and degrade to
//! "nothing found" so one bad careers page never blocks the rest of
//! the batch; only store trouble aborts the invocation.

pub mod extract;
pub mod filter;
pub mod ingest;
pub mod prompt;

pub use extract::parse_listing_response;
pub use filter::filter_relevant;
pub use ingest::ingest_candidates;
pub use prompt::build_extraction_prompt;

use tracing::{debug, info, warn};

use crate::config::PipelineConfig;
use crate::error::PipelineResult;
use crate::normalize::{page_text, truncate_chars};
use crate::traits::{ExtractionModel, PageFetcher, PostingStore};
use crate::types::{BatchSummary, Candidate, WorkItem};

/// One configured pipeline instance.
///
/// Collaborators are injected at construction; lifecycle is owned by
/// whatever composes the pipeline. There are no module-level handles.
pub struct Pipeline<F, M, S> {
    fetcher: F,
    model: M,
    store: S,
    config: PipelineConfig,
}

impl<F, M, S> Pipeline<F, M, S>
where
    F: PageFetcher,
    M: ExtractionModel,
    S: PostingStore,
{
    /// Create a pipeline with default configuration.
    pub fn new(fetcher: F, model: M, store: S) -> Self {
        Self {
            fetcher,
            model,
            store,
            config: PipelineConfig::default(),
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    /// Access the underlying store (used by tests and by composing
    /// code that also serves the digest reader).
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Access the injected model.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Process a batch of work items sequentially, in delivery order.
    ///
    /// Per-item fetch/extraction/filter trouble degrades to zero
    /// candidates for that item and the batch continues. A store
    /// failure aborts the whole invocation with no partial aggregate;
    /// the trigger source's redelivery policy is the recovery path.
    pub async fn process_batch(&self, items: &[WorkItem]) -> PipelineResult<BatchSummary> {
        let mut summary = BatchSummary::default();

        for item in items {
            info!(
                company = %item.company_name,
                url = %item.careers_url,
                "processing company"
            );
            summary.jobs_written += self.process_item(item).await?;
            summary.records_processed += 1;
        }

        info!(
            records_processed = summary.records_processed,
            jobs_written = summary.jobs_written,
            "batch complete"
        );

        Ok(summary)
    }

    /// Drive one work item through all four stages, returning the
    /// count of newly written postings.
    async fn process_item(&self, item: &WorkItem) -> PipelineResult<usize> {
        let text = self.normalize_page(&item.careers_url).await;
        let candidates = self.extract_candidates(item, &text).await;
        let relevant = filter_relevant(candidates, &self.config.title_keywords, &item.company_name);
        let written = ingest_candidates(&self.store, &item.company_name, &relevant).await?;
        Ok(written)
    }

    /// Fetch and flatten the careers page. Any transport failure
    /// collapses to empty text, logged but not raised.
    async fn normalize_page(&self, url: &str) -> String {
        match self.fetcher.fetch(url).await {
            Ok(html) => {
                let text = page_text(&html);
                truncate_chars(&text, self.config.page_char_limit).to_string()
            }
            Err(e) => {
                warn!(url = %url, error = %e, "failed to fetch careers page");
                String::new()
            }
        }
    }

    /// Ask the model for listings and parse its response. A failed
    /// model call maps to zero candidates, same as malformed output.
    async fn extract_candidates(&self, item: &WorkItem, text: &str) -> Vec<Candidate> {
        if text.is_empty() {
            debug!(company = %item.company_name, "no page text, skipping extraction");
            return Vec::new();
        }

        let prompt = build_extraction_prompt(
            &item.company_name,
            &item.careers_url,
            text,
            &self.config.target_roles,
        );

        match self.model.complete(&prompt).await {
            Ok(raw) => parse_listing_response(&raw, &item.company_name),
            Err(e) => {
                warn!(
                    company = %item.company_name,
                    error = %e,
                    "extraction model call failed"
                );
                Vec::new()
            }
        }
    }
}
