use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::profiles::github::GithubValidator;
use crate::roadmap::planner::RoadmapPlanner;
use crate::skills::matcher::SkillMatcher;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Present only when an API key is set and demo mode is off.
    pub llm: Option<LlmClient>,
    /// Shares the synonym table loaded at startup.
    pub matcher: SkillMatcher,
    /// Pluggable roadmap planner. LLM-backed when `llm` is present, local otherwise.
    pub planner: Arc<dyn RoadmapPlanner>,
    pub github: GithubValidator,
}
