//! Pipeline tunables.
//!
//! Everything here is externally suppliable; retuning the role set or
//! the page budget needs no code change in the pipeline itself.

/// Page text budget handed to the extraction model. Chosen to fit the
/// model's context window economically.
const DEFAULT_PAGE_CHAR_LIMIT: usize = 15_000;

/// Roles the model is instructed to extract (named in the prompt).
const DEFAULT_TARGET_ROLES: [&str; 7] = [
    "Platform Engineer",
    "Site Reliability Engineer",
    "SRE",
    "DevOps Engineer",
    "Cloud Engineer",
    "Infrastructure Engineer",
    "Staff Engineer",
];

/// Keywords used for post-extraction title matching (case-insensitive).
const DEFAULT_TITLE_KEYWORDS: [&str; 7] = [
    "platform",
    "sre",
    "site reliability",
    "devops",
    "cloud engineer",
    "infrastructure",
    "staff engineer",
];

/// Configuration for one pipeline instance.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Role labels named verbatim in the extraction prompt.
    pub target_roles: Vec<String>,

    /// Keywords matched as case-insensitive substrings of candidate
    /// titles.
    pub title_keywords: Vec<String>,

    /// Maximum characters of normalized page text sent to the model;
    /// longer pages get a plain prefix cut.
    pub page_char_limit: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            target_roles: DEFAULT_TARGET_ROLES.iter().map(|s| s.to_string()).collect(),
            title_keywords: DEFAULT_TITLE_KEYWORDS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            page_char_limit: DEFAULT_PAGE_CHAR_LIMIT,
        }
    }
}

impl PipelineConfig {
    /// Override the roles named in the extraction prompt.
    pub fn with_target_roles(mut self, roles: Vec<String>) -> Self {
        self.target_roles = roles;
        self
    }

    /// Override the title keyword set used by the relevance filter.
    pub fn with_title_keywords(mut self, keywords: Vec<String>) -> Self {
        self.title_keywords = keywords;
        self
    }

    /// Override the page character budget.
    pub fn with_page_char_limit(mut self, limit: usize) -> Self {
        self.page_char_limit = limit;
        self
    }
}
