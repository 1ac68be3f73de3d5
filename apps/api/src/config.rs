use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 3001;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Application configuration loaded from environment variables.
///
/// Nothing is strictly required: without `ANTHROPIC_API_KEY` the service
/// runs on the local keyword extractor and the local roadmap generator.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub anthropic_api_key: Option<String>,
    pub github_token: Option<String>,
    /// `DEMO_MODE=true` serves canned role data and never calls the LLM.
    pub demo_mode: bool,
    /// Optional JSON file replacing the built-in skill synonym table.
    pub skill_synonyms_path: Option<String>,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            github_token: optional_env("GITHUB_TOKEN"),
            demo_mode: optional_env("DEMO_MODE")
                .map(|v| v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            skill_synonyms_path: optional_env("SKILL_SYNONYMS_PATH"),
            max_upload_bytes: match optional_env("MAX_UPLOAD_BYTES") {
                Some(v) => v
                    .parse::<usize>()
                    .context("MAX_UPLOAD_BYTES must be a byte count")?,
                None => DEFAULT_MAX_UPLOAD_BYTES,
            },
        })
    }

    /// True when LLM-backed analysis and planning should be attempted.
    pub fn llm_enabled(&self) -> bool {
        !self.demo_mode && self.anthropic_api_key.is_some()
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
impl Config {
    /// Offline configuration used by handler tests: no keys, no demo data.
    pub fn offline() -> Self {
        Config {
            port: DEFAULT_PORT,
            rust_log: "debug".to_string(),
            anthropic_api_key: None,
            github_token: None,
            demo_mode: false,
            skill_synonyms_path: None,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}
