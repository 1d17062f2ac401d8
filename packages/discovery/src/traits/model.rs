//! Model trait for the listing extraction call.

use async_trait::async_trait;

use crate::error::ModelResult;

/// A language-model completion endpoint.
///
/// Implementations wrap a specific provider and handle the transport
/// specifics; the pipeline only ever sends one textual instruction per
/// work item and reads back one textual response. The response is
/// treated as untrusted, see
/// [`parse_listing_response`](crate::pipeline::parse_listing_response).
#[async_trait]
pub trait ExtractionModel: Send + Sync {
    /// Send one prompt, return the raw completion text.
    async fn complete(&self, prompt: &str) -> ModelResult<String>;
}
