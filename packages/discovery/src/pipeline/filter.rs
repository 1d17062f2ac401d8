//! Title-keyword relevance filtering.

use tracing::info;

use crate::types::Candidate;

/// Keep candidates whose title contains at least one keyword.
///
/// Matching is case-folded substring containment against the title:
/// not tokenized, not fuzzy. Pure apart from one structured log line
/// with extracted/matched/dropped counts, which is what lets the
/// keyword list be tuned from logs alone.
pub fn filter_relevant(
    candidates: Vec<Candidate>,
    keywords: &[String],
    company: &str,
) -> Vec<Candidate> {
    let extracted = candidates.len();
    let keywords: Vec<String> = keywords.iter().map(|kw| kw.to_lowercase()).collect();
    let matched: Vec<Candidate> = candidates
        .into_iter()
        .filter(|c| {
            let title = c.title.to_lowercase();
            keywords.iter().any(|kw| title.contains(kw.as_str()))
        })
        .collect();

    info!(
        company = %company,
        extracted,
        matched = matched.len(),
        dropped = extracted - matched.len(),
        "job filter complete"
    );

    matched
}
