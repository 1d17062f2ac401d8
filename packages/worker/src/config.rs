//! Worker configuration loaded from environment variables.

use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    /// Connection URL for the postings database.
    pub database_url: String,
    /// API key for the extraction model endpoint.
    pub openai_api_key: String,
    /// Model id override (client default applies when unset).
    pub model_id: Option<String>,
    /// Model endpoint override (proxies, gateways, regional endpoints).
    pub model_base_url: Option<String>,
    /// Comma-separated title keyword override for the relevance filter.
    pub title_keywords: Option<Vec<String>>,
    /// Page character budget override.
    pub page_char_limit: Option<usize>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            openai_api_key: env::var("OPENAI_API_KEY").context("OPENAI_API_KEY must be set")?,
            model_id: env::var("MODEL_ID").ok(),
            model_base_url: env::var("MODEL_BASE_URL").ok(),
            title_keywords: env::var("TITLE_KEYWORDS").ok().map(parse_keywords),
            page_char_limit: env::var("PAGE_CHAR_LIMIT")
                .ok()
                .map(|v| v.parse())
                .transpose()
                .context("PAGE_CHAR_LIMIT must be a valid number")?,
        })
    }
}

fn parse_keywords(raw: String) -> Vec<String> {
    raw.split(',')
        .map(|kw| kw.trim().to_lowercase())
        .filter(|kw| !kw.is_empty())
        .collect()
}
