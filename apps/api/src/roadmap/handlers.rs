//! Axum route handlers for roadmap generation and milestone repair.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::models::roadmap::Roadmap;
use crate::models::role::RoleRequirement;
use crate::models::skills::ResumeAnalysis;
use crate::roadmap::normalizer::normalize_value;
use crate::roadmap::planner::{RoadmapRequest, RoadmapSource};
use crate::skills::gaps::SkillGapResult;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RoadmapBody {
    pub skills: Option<ResumeAnalysis>,
    #[serde(default, rename = "profileData")]
    pub profile_data: Option<ProfileData>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileData {
    #[serde(default)]
    pub github_valid: bool,
    #[serde(default)]
    pub linked_in_valid: bool,
    #[serde(default)]
    pub dream_role: Option<RoleRequirement>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapResponse {
    /// Key for client-side completion state; changes whenever the titles do.
    pub progress_key: String,
    pub milestones: Roadmap,
    pub source: RoadmapSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_gaps: Option<SkillGapResult>,
}

#[derive(Debug, Deserialize)]
pub struct NormalizeBody {
    pub milestones: Value,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizeResponse {
    pub progress_key: String,
    pub milestones: Roadmap,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/roadmap
///
/// Always answers with 15 milestones: when the LLM backend fails the local
/// templates are used and `source` says so.
pub async fn handle_roadmap(
    State(state): State<AppState>,
    Json(body): Json<RoadmapBody>,
) -> Result<Json<RoadmapResponse>, AppError> {
    let skills = body
        .skills
        .ok_or_else(|| AppError::Validation("Skills data is required".to_string()))?;
    let profile = body.profile_data.unwrap_or_default();

    let request = RoadmapRequest {
        skills,
        has_github: profile.github_valid,
        has_linkedin: profile.linked_in_valid,
        dream_role: profile.dream_role,
    };

    let planned = state.planner.plan(&request).await;
    info!(
        "Roadmap generated: backend={}, source={:?}, dream_role={}",
        state.planner.backend(),
        planned.source,
        request.dream_role().is_some()
    );

    Ok(Json(RoadmapResponse {
        progress_key: planned.roadmap.progress_key(),
        milestones: planned.roadmap,
        source: planned.source,
        skill_gaps: planned.skill_gaps,
    }))
}

/// POST /api/roadmap/normalize
///
/// Repairs a client-held milestone list (e.g. one restored from local storage)
/// into a valid 15-step roadmap. `milestones` must be a JSON array.
pub async fn handle_normalize(
    Json(body): Json<NormalizeBody>,
) -> Result<Json<NormalizeResponse>, AppError> {
    let milestones = normalize_value(&body.milestones)?;
    Ok(Json(NormalizeResponse {
        progress_key: milestones.progress_key(),
        milestones,
    }))
}
