//! Careers-Page Job Posting Discovery
//!
//! Discovers new job postings on company careers pages: fetch the
//! page, flatten it to bounded plain text, ask a language model for
//! structured listings, keep the target roles, and write each distinct
//! posting to a durable store exactly once.
//!
//! # Design
//!
//! - Upstream HTML and model output are both unreliable. Every
//!   malformation short of a store failure degrades to zero candidates
//!   for that work item, so one bad careers page never blocks a batch.
//! - Identity is content-derived: sha256 of `company|title|url`. The
//!   store's conditional insert is the only deduplication mechanism,
//!   making ingestion idempotent under retries and duplicate triggers.
//! - Collaborators (fetcher, model, store) are generic parameters
//!   injected into [`Pipeline`] at construction; mocks live in
//!   [`testing`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use discovery::{HttpFetcher, MemoryStore, OpenAiModel, Pipeline, WorkItem};
//!
//! let pipeline = Pipeline::new(HttpFetcher::new(), OpenAiModel::from_env()?, MemoryStore::new());
//! let summary = pipeline.process_batch(&items).await?;
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Core trait abstractions (fetcher, model, store)
//! - [`types`] - Work items, candidates, postings
//! - [`pipeline`] - The coordinator and its four stages
//! - [`normalize`] - HTTP fetching and markup flattening
//! - [`ai`] - Extraction model clients
//! - [`stores`] - Store implementations (memory; postgres behind a feature)
//! - [`testing`] - Mock implementations for testing

pub mod ai;
pub mod config;
pub mod error;
pub mod normalize;
pub mod pipeline;
pub mod stores;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use ai::OpenAiModel;
pub use config::PipelineConfig;
pub use error::{FetchError, ModelError, PipelineError, StoreError};
pub use normalize::{page_text, truncate_chars, HttpFetcher};
pub use pipeline::{
    build_extraction_prompt, filter_relevant, ingest_candidates, parse_listing_response, Pipeline,
};
pub use stores::MemoryStore;
pub use traits::{ExtractionModel, PageFetcher, PostingStore};
pub use types::{BatchSummary, Candidate, Posting, WorkItem};

#[cfg(feature = "postgres")]
pub use stores::PostgresStore;

// Re-export testing utilities
pub use testing::{FailingStore, MockFetcher, MockModel};
