//! Core trait abstractions.
//!
//! The pipeline's three external collaborators sit behind traits so
//! tests can inject mocks and the composing binary can pick concrete
//! implementations:
//! - [`PageFetcher`] - HTTP access to careers pages
//! - [`ExtractionModel`] - the language-model completion endpoint
//! - [`PostingStore`] - the durable, uniqueness-guarded posting table

pub mod fetcher;
pub mod model;
pub mod store;

pub use fetcher::PageFetcher;
pub use model::ExtractionModel;
pub use store::PostingStore;
