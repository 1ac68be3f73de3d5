//! LinkedIn profile URL validation. Format only: LinkedIn offers no public
//! lookup API, so existence is never checked.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static PROFILE_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^https?://(?:www\.)?linkedin\.com/in/([a-z0-9_-]{3,100})/?(?:\?.*)?$")
        .expect("LinkedIn profile URL pattern is a valid regex")
});

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedinValidation {
    pub valid: bool,
    /// Canonical `https://www.linkedin.com/in/<slug>` form, when valid.
    pub profile_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn profile_slug(input: &str) -> Option<&str> {
    PROFILE_URL
        .captures(input.trim())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

pub fn validate_linkedin(input: &str) -> LinkedinValidation {
    match profile_slug(input) {
        Some(slug) => LinkedinValidation {
            valid: true,
            profile_url: Some(format!("https://www.linkedin.com/in/{slug}")),
            message: Some("URL format is valid.".to_string()),
            error: None,
        },
        None => LinkedinValidation {
            valid: false,
            profile_url: None,
            message: None,
            error: Some(
                "Invalid LinkedIn URL. Use: https://linkedin.com/in/yourprofile".to_string(),
            ),
        },
    }
}
