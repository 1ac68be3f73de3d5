//! GitHub profile validation: username parsing plus a live lookup against the
//! public users API.

use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;

const GITHUB_API_URL: &str = "https://api.github.com";
const GITHUB_API_VERSION: &str = "2022-11-28";
const REQUEST_TIMEOUT_SECS: u64 = 10;
const MAX_USERNAME_LEN: usize = 39;

static PROFILE_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://(?:www\.)?github\.com/([a-z0-9_-]+)/?$")
        .expect("GitHub profile URL pattern is a valid regex")
});

/// Outcome of a validation. Format and lookup failures are reported here with
/// `valid: false`; only transport failures become errors.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GithubValidation {
    pub valid: bool,
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GithubValidation {
    fn invalid(username: Option<String>, error: &str) -> Self {
        Self {
            valid: false,
            username,
            error: Some(error.to_string()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Deserialize)]
struct GithubUser {
    login: String,
    name: Option<String>,
    avatar_url: Option<String>,
    html_url: Option<String>,
}

/// GitHub username rules: 1 to 39 ASCII letters, digits or single hyphens, not
/// starting or ending with a hyphen.
fn is_valid_username(name: &str) -> bool {
    let allowed = |b: u8| b.is_ascii_alphanumeric() || b == b'-';
    !name.is_empty()
        && name.len() <= MAX_USERNAME_LEN
        && name.bytes().all(allowed)
        && !name.starts_with('-')
        && !name.ends_with('-')
        && !name.contains("--")
}

/// Extracts the lower-cased username from a profile URL or a bare username.
/// Either way the name must pass the username rules.
pub fn parse_username(input: &str) -> Option<String> {
    let cleaned = input.trim().to_lowercase();
    let username = match PROFILE_URL.captures(&cleaned) {
        Some(caps) => caps.get(1)?.as_str().to_string(),
        None => cleaned.clone(),
    };
    is_valid_username(&username).then_some(username)
}

#[derive(Clone)]
pub struct GithubValidator {
    client: Client,
    token: Option<String>,
}

impl GithubValidator {
    pub fn new(token: Option<String>) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(concat!("launchpad/", env!("CARGO_PKG_VERSION")))
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client, token })
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    pub async fn validate(&self, input: &str) -> Result<GithubValidation, AppError> {
        let Some(username) = parse_username(input) else {
            return Ok(GithubValidation::invalid(
                None,
                "Invalid GitHub URL format. Use: https://github.com/username",
            ));
        };

        let mut request = self
            .client
            .get(format!("{GITHUB_API_URL}/users/{username}"))
            .header("Accept", "application/vnd.github+json");
        if let Some(token) = &self.token {
            request = request
                .bearer_auth(token)
                .header("X-GitHub-Api-Version", GITHUB_API_VERSION);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("Failed to reach GitHub: {e}")))?;

        let status = response.status();
        debug!("GitHub lookup for '{}' returned {}", username, status);
        match status {
            StatusCode::NOT_FOUND => {
                return Ok(GithubValidation::invalid(
                    Some(username),
                    "GitHub profile not found",
                ))
            }
            StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS => {
                return Ok(GithubValidation::invalid(
                    Some(username),
                    "GitHub API rate limit exceeded. Try again later.",
                ))
            }
            s if !s.is_success() => {
                return Err(AppError::Upstream(format!("GitHub API error: {s}")));
            }
            _ => {}
        }

        let user: GithubUser = response
            .json()
            .await
            .map_err(|e| AppError::Upstream(format!("Unexpected GitHub response: {e}")))?;

        Ok(GithubValidation {
            valid: true,
            username: Some(user.login),
            name: user.name,
            avatar: user.avatar_url,
            profile_url: user.html_url,
            error: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_profile_urls() {
        assert_eq!(
            parse_username("https://github.com/Octocat"),
            Some("octocat".to_string())
        );
        assert_eq!(
            parse_username("  http://www.github.com/some-user/ "),
            Some("some-user".to_string())
        );
    }

    #[test]
    fn test_profile_url_username_must_follow_rules() {
        assert_eq!(parse_username("https://github.com/user_name"), None);
        assert_eq!(parse_username("https://github.com/-bad-"), None);
        assert_eq!(parse_username("https://github.com/a--b"), None);
        let too_long = format!("https://github.com/{}", "a".repeat(40));
        assert_eq!(parse_username(&too_long), None);
        let longest = format!("https://github.com/{}", "a".repeat(39));
        assert_eq!(parse_username(&longest), Some("a".repeat(39)));
    }

    #[test]
    fn test_parse_bare_usernames() {
        assert_eq!(parse_username("octocat"), Some("octocat".to_string()));
        assert_eq!(parse_username("a-b-c"), Some("a-b-c".to_string()));
        assert_eq!(parse_username(&"a".repeat(39)), Some("a".repeat(39)));
    }

    #[test]
    fn test_rejects_invalid_input() {
        assert_eq!(parse_username(""), None);
        assert_eq!(parse_username("-octocat"), None);
        assert_eq!(parse_username("octocat-"), None);
        assert_eq!(parse_username("octo--cat"), None);
        assert_eq!(parse_username(&"a".repeat(40)), None);
        assert_eq!(parse_username("https://github.com/octocat/repo"), None);
        assert_eq!(parse_username("https://gitlab.com/octocat"), None);
        assert_eq!(parse_username("octo cat"), None);
    }

    #[tokio::test]
    async fn test_invalid_format_skips_network() {
        let validator = GithubValidator::new(None).unwrap();
        let result = validator.validate("not a username!").await.unwrap();
        assert!(!result.valid);
        assert!(result.username.is_none());
        assert!(result.error.unwrap().contains("Invalid GitHub URL"));
    }

    #[test]
    fn test_invalid_result_wire_shape() {
        let value = serde_json::to_value(GithubValidation::invalid(
            Some("ghost".to_string()),
            "GitHub profile not found",
        ))
        .unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "valid": false,
                "username": "ghost",
                "error": "GitHub profile not found"
            })
        );
    }
}
