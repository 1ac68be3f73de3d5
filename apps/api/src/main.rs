mod config;
mod demo;
mod errors;
mod llm_client;
mod models;
mod profiles;
mod resume;
mod roadmap;
mod role;
mod routes;
mod skills;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::profiles::github::GithubValidator;
use crate::roadmap::planner::{LlmRoadmapPlanner, LocalRoadmapPlanner, RoadmapPlanner};
use crate::routes::build_router;
use crate::skills::matcher::SkillMatcher;
use crate::skills::synonyms::SynonymTable;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Launchpad API v{}", env!("CARGO_PKG_VERSION"));

    // Skill synonym table, shared read-only by every matcher
    let synonyms = SynonymTable::load(config.skill_synonyms_path.as_deref())?;
    let matcher = SkillMatcher::new(Arc::new(synonyms));

    // LLM client only when it will actually be used
    let llm = if config.llm_enabled() {
        let key = config.anthropic_api_key.clone().unwrap_or_default();
        let client = LlmClient::new(key).context("Failed to build LLM client")?;
        info!("LLM client initialized (model: {})", llm_client::MODEL);
        Some(client)
    } else if config.demo_mode {
        info!("Demo mode: canned role data, local analysis and local roadmaps");
        None
    } else {
        warn!("ANTHROPIC_API_KEY not set: local analysis and roadmaps, no dream-role analysis");
        None
    };

    let planner: Arc<dyn RoadmapPlanner> = match &llm {
        Some(client) => Arc::new(LlmRoadmapPlanner::new(client.clone(), matcher.clone())),
        None => Arc::new(LocalRoadmapPlanner::new(matcher.clone())),
    };
    info!("Roadmap planner: {}", planner.backend());

    let github = GithubValidator::new(config.github_token.clone())
        .context("Failed to build GitHub client")?;

    let state = AppState {
        config: config.clone(),
        llm,
        matcher,
        planner,
        github,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
