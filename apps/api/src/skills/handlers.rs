//! Axum route handler for the skill gap report.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::debug;

use crate::errors::AppError;
use crate::models::role::RoleRequirement;
use crate::models::skills::ResumeAnalysis;
use crate::skills::gaps::{compute_gaps, SkillGapResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGapsBody {
    pub skills: Option<ResumeAnalysis>,
    pub dream_role: Option<RoleRequirement>,
}

/// POST /api/skill-gaps
///
/// Compares an analyzed resume against an analyzed dream role.
pub async fn handle_skill_gaps(
    State(state): State<AppState>,
    Json(body): Json<SkillGapsBody>,
) -> Result<Json<SkillGapResult>, AppError> {
    let skills = body
        .skills
        .ok_or_else(|| AppError::Validation("Skills data is required".to_string()))?;
    let role = body
        .dream_role
        .filter(|role| !role.is_empty())
        .ok_or_else(|| AppError::Validation("Dream role is required".to_string()))?;

    let current = skills.skills.flatten_for_matching();
    let gaps = compute_gaps(&state.matcher, &current, &role);
    debug!(
        "Skill gaps for '{}': {} missing, {}% matched",
        role.display_name(),
        gaps.total_gaps,
        gaps.match_percentage
    );

    Ok(Json(gaps))
}
