//! Prompt construction for the listing extraction call.

/// Build the extraction instruction for one careers page.
///
/// The instruction names the target roles explicitly, demands a bare
/// JSON array with exactly three keys per element, and spells out the
/// fallbacks the parser relies on (page URL when no posting-specific
/// URL exists, "Remote" when no location is given).
pub fn build_extraction_prompt(
    company: &str,
    careers_url: &str,
    page_text: &str,
    target_roles: &[String],
) -> String {
    let roles = target_roles.join(", ");
    format!(
        "You are extracting job listings from the careers page of {company} ({careers_url}).\n\
         Only extract roles that match these types: {roles}.\n\
         Skip all other roles entirely and do not include them in the output.\n\
         \n\
         Return a JSON array where each element has exactly these keys:\n\
         \x20 - \"title\": job title string\n\
         \x20 - \"url\": absolute URL to the job posting (fall back to \"{careers_url}\" if no specific posting URL exists)\n\
         \x20 - \"location\": location string, or \"Remote\" if unspecified\n\
         Return ONLY the JSON array with no markdown fences and no explanation.\n\
         If no matching roles are found, return an empty array: []\n\
         \n\
         Page content:\n\
         {page_text}"
    )
}
