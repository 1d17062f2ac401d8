//! Parsing of model responses into candidate listings.

use tracing::warn;

use crate::types::Candidate;

/// Pull candidate listings out of a raw model response.
///
/// The response is untrusted text: despite the prompt, the model may
/// wrap the array in prose or emit partial garbage. Policy: locate the
/// first bracket-delimited array substring, decode only that slice,
/// and keep elements that decode to a well-formed candidate. Every
/// malformation degrades to an empty list; this function never errors.
pub fn parse_listing_response(raw: &str, company: &str) -> Vec<Candidate> {
    let Some(slice) = array_slice(raw) else {
        warn!(company = %company, "no JSON array found in model response");
        return Vec::new();
    };

    let values: Vec<serde_json::Value> = match serde_json::from_str(slice) {
        Ok(values) => values,
        Err(e) => {
            warn!(company = %company, error = %e, "failed to parse model response as JSON");
            return Vec::new();
        }
    };

    values
        .into_iter()
        .filter(|v| v.is_object())
        .filter_map(|v| serde_json::from_value::<Candidate>(v).ok())
        .filter(Candidate::is_well_formed)
        .collect()
}

/// The substring spanning the first `[` through the last `]`, if any.
fn array_slice(raw: &str) -> Option<&str> {
    let start = raw.find('[')?;
    let end = raw.rfind(']')?;
    if end < start {
        return None;
    }
    Some(&raw[start..=end])
}
