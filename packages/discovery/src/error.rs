//! Typed errors for the discovery pipeline.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling. Each pipeline stage has
//! its own error type so callers can tell recoverable trouble apart
//! from fatal trouble.

use thiserror::Error;

/// Errors raised while fetching a careers page.
///
/// The coordinator recovers all of these locally as "no text": a page
/// that cannot be fetched yields zero candidates this cycle and is
/// picked up again on the next trigger.
#[derive(Debug, Error)]
pub enum FetchError {
    /// URL failed to parse
    #[error("invalid URL: {url}")]
    InvalidUrl { url: String },

    /// HTTP transport failure (connection, DNS, timeout)
    #[error("HTTP error: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Non-2xx response
    #[error("HTTP status {status} for {url}")]
    Status { status: u16, url: String },
}

/// Errors raised by the extraction model client.
///
/// Recovered by the extractor as zero candidates; a model outage
/// degrades, it never aborts the batch.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Request to the model endpoint failed
    #[error("model request failed: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Model endpoint returned an error payload
    #[error("model API error: {0}")]
    Api(String),

    /// Response decoded but carried no completion text
    #[error("model response contained no content")]
    MissingContent,

    /// Client misconfiguration (missing key, bad endpoint)
    #[error("model config error: {0}")]
    Config(String),
}

/// Errors raised by the posting store.
///
/// A rejected conditional insert is NOT an error; `insert_if_absent`
/// reports it as `Ok(false)`. Anything surfacing here means the store
/// itself misbehaved, and the invocation must stop rather than
/// silently lose writes.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Backend failure (connection, query, schema)
    #[error("storage error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Errors that abort a whole pipeline invocation.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The durable store is unavailable or rejected a write for a
    /// reason other than the uniqueness guard.
    #[error("store failure: {0}")]
    Store(#[from] StoreError),
}

/// Result type alias for fetch operations.
pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// Result type alias for model operations.
pub type ModelResult<T> = std::result::Result<T, ModelError>;

/// Result type alias for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Result type alias for pipeline invocations.
pub type PipelineResult<T> = std::result::Result<T, PipelineError>;
