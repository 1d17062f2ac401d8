//! Core data types for the discovery pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// One unit of work: a company and its careers page URL.
///
/// Arrives once per trigger delivery; the same company recurs across
/// trigger cycles as careers pages are rescanned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkItem {
    pub company_name: String,
    pub careers_url: String,
}

/// An extracted, not-yet-filtered job listing.
///
/// Ephemeral; exists only within one pipeline run. `title` and `url`
/// are required for the candidate to count as well-formed, `location`
/// defaults to "Remote" when the model omits it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub title: String,
    pub url: String,
    #[serde(default = "default_location")]
    pub location: String,
}

fn default_location() -> String {
    "Remote".to_string()
}

impl Candidate {
    /// A candidate with an empty title or URL is model garbage and is
    /// dropped rather than persisted.
    pub fn is_well_formed(&self) -> bool {
        !self.title.is_empty() && !self.url.is_empty()
    }
}

/// A durably persisted, deduplicated job listing.
///
/// Creation is the only mutation: postings are never updated or
/// deleted by the pipeline. `discovered_at` is informational and plays
/// no role in identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Posting {
    /// Content-derived primary key, see [`Posting::make_job_id`].
    pub job_id: String,
    pub company: String,
    pub title: String,
    pub url: String,
    pub location: String,
    pub discovered_at: DateTime<Utc>,
}

impl Posting {
    /// Build a posting from a filtered candidate, stamping the
    /// discovery time.
    pub fn from_candidate(company: &str, candidate: &Candidate) -> Self {
        Self {
            job_id: Self::make_job_id(company, &candidate.title, &candidate.url),
            company: company.to_string(),
            title: candidate.title.clone(),
            url: candidate.url.clone(),
            location: candidate.location.clone(),
            discovered_at: Utc::now(),
        }
    }

    /// Derive the stable deduplication key: sha256 over the UTF-8
    /// bytes of the pipe-joined `company|title|url` triple.
    ///
    /// Identity is a pure function of content, so two pipeline
    /// instances racing on the same listing derive the same key and
    /// the store's uniqueness guard resolves the race.
    pub fn make_job_id(company: &str, title: &str, url: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(format!("{company}|{title}|{url}").as_bytes());
        hex::encode(hasher.finalize())
    }
}

/// Aggregate counts for one pipeline invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Work items driven through the pipeline, including ones that
    /// degraded to zero candidates.
    pub records_processed: usize,
    /// Postings newly written, excluding duplicates.
    pub jobs_written: usize,
}
