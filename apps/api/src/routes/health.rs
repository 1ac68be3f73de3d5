use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::llm_client::MODEL;
use crate::state::AppState;

/// GET /api/health
/// Returns a status object with service version and which integrations are configured.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "launchpad-api",
        "llm": state.llm.is_some(),
        "model": state.llm.as_ref().map(|_| MODEL),
        "demoMode": state.config.demo_mode,
        "github": state.github.has_token(),
        "planner": state.planner.backend(),
        "synonymGroups": state.matcher.synonyms().groups().len(),
    }))
}
