//! Axum route handler for dream-role analysis.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::lenient;
use crate::models::role::RoleRequirement;
use crate::role::analyzer::{analyze_dream_role, RoleSource};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRoleBody {
    #[serde(default, deserialize_with = "lenient::string")]
    pub role_title: String,
}

/// POST /api/analyze-dream-role
///
/// Demo mode wins over a configured key; with neither the endpoint answers 503.
pub async fn handle_analyze_dream_role(
    State(state): State<AppState>,
    Json(body): Json<AnalyzeRoleBody>,
) -> Result<Json<RoleRequirement>, AppError> {
    let source = if state.config.demo_mode {
        RoleSource::Demo
    } else {
        match state.llm.as_ref() {
            Some(llm) => RoleSource::Llm(llm),
            None => RoleSource::Unavailable,
        }
    };

    let role = analyze_dream_role(source, &body.role_title).await?;
    info!(
        "Dream role analyzed: '{}' ({} required items)",
        role.role,
        role.total_required()
    );
    Ok(Json(role))
}
