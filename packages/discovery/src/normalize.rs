//! Careers-page fetching and markup flattening.
//!
//! Reduces a careers page to clean, bounded plain text suitable for
//! model consumption. Fetch trouble of any kind collapses to "no text
//! available" at the coordinator; nothing here retries.

use async_trait::async_trait;

use crate::error::{FetchError, FetchResult};
use crate::traits::PageFetcher;

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; job-hunter/1.0)";

/// HTTP fetcher with a bounded per-request timeout.
pub struct HttpFetcher {
    client: reqwest::Client,
    user_agent: String,
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpFetcher {
    /// Create a fetcher with the default timeout and user agent.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
                .build()
                .expect("Failed to create HTTP client"),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Set a custom user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set a custom HTTP client (timeout included).
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> FetchResult<String> {
        url::Url::parse(url).map_err(|_| FetchError::InvalidUrl {
            url: url.to_string(),
        })?;

        let response = self
            .client
            .get(url)
            .header("User-Agent", &self.user_agent)
            .send()
            .await
            .map_err(|e| FetchError::Http(Box::new(e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Http(Box::new(e)))
    }
}

/// Flatten raw HTML to plain text.
///
/// Strips script/style and boilerplate regions (header, footer, nav)
/// wholesale, turns block boundaries into newlines so listings stay
/// separated, drops remaining tags, and decodes the entities that
/// actually show up on careers pages.
pub fn page_text(html: &str) -> String {
    let mut text = html.to_string();

    // Non-content regions go first, body included.
    for pattern in [
        r"(?is)<script[^>]*>.*?</script>",
        r"(?is)<style[^>]*>.*?</style>",
        r"(?is)<noscript[^>]*>.*?</noscript>",
        r"(?is)<header[^>]*>.*?</header>",
        r"(?is)<footer[^>]*>.*?</footer>",
        r"(?is)<nav[^>]*>.*?</nav>",
    ] {
        let re = regex::Regex::new(pattern).unwrap();
        text = re.replace_all(&text, "").to_string();
    }

    // Block boundaries become newlines.
    let br_pattern = regex::Regex::new(r"(?i)<br\s*/?>").unwrap();
    text = br_pattern.replace_all(&text, "\n").to_string();
    let block_end = regex::Regex::new(r"(?i)</(p|div|li|tr|h[1-6])>").unwrap();
    text = block_end.replace_all(&text, "\n").to_string();

    // Remove remaining tags.
    let tag_pattern = regex::Regex::new(r"<[^>]+>").unwrap();
    text = tag_pattern.replace_all(&text, "").to_string();

    // Decode HTML entities.
    text = text
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'");

    // Trim each line, drop empties.
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prefix-truncate to at most `limit` characters.
///
/// Deterministic cut with no attempt to preserve semantic boundaries;
/// operates on chars, not bytes, so multibyte text stays valid.
pub fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
