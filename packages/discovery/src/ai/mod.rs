//! Extraction model clients.

pub mod openai;

pub use openai::OpenAiModel;
