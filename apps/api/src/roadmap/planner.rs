//! Roadmap planning: a pluggable, trait-based planner that turns a skill profile
//! (and optionally a dream role) into a normalized 15-step roadmap.
//!
//! Backends:
//! - `LocalRoadmapPlanner`: template-based, deterministic, no I/O
//! - `LlmRoadmapPlanner`: asks Claude, falls back to the local templates on any failure
//!
//! `AppState` holds an `Arc<dyn RoadmapPlanner>`, chosen at startup from config.
//! Planning never fails: whatever the backend, the caller gets 15 milestones.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;
use tracing::{debug, warn};

use crate::llm_client::{prompts::JSON_ONLY_SYSTEM, LlmClient, LlmError};
use crate::models::roadmap::{RawMilestone, Roadmap, ROADMAP_LEN};
use crate::models::role::RoleRequirement;
use crate::models::skills::ResumeAnalysis;
use crate::roadmap::fallback::{local_roadmap, GapPlan};
use crate::roadmap::normalizer::normalize_milestones;
use crate::roadmap::prompts::{
    build_prompt, ROADMAP_CALL, ROADMAP_PROMPT_BASE, ROADMAP_PROMPT_DREAM_ROLE,
};
use crate::skills::gaps::{compute_gaps, SkillGapResult};
use crate::skills::matcher::SkillMatcher;

// ────────────────────────────────────────────────────────────────────────────
// Request / output models (shared across all planner backends)
// ────────────────────────────────────────────────────────────────────────────

/// Everything a planner needs to know about the person.
#[derive(Debug, Clone, Default)]
pub struct RoadmapRequest {
    pub skills: ResumeAnalysis,
    pub has_github: bool,
    pub has_linkedin: bool,
    pub dream_role: Option<RoleRequirement>,
}

impl RoadmapRequest {
    /// The dream role, unless absent or empty (`{}` means "no role chosen").
    pub fn dream_role(&self) -> Option<&RoleRequirement> {
        self.dream_role.as_ref().filter(|role| !role.is_empty())
    }
}

/// Which backend produced the milestones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoadmapSource {
    Llm,
    Local,
}

#[derive(Debug, Clone)]
pub struct PlannedRoadmap {
    pub roadmap: Roadmap,
    pub source: RoadmapSource,
    /// Present whenever a dream role was given.
    pub skill_gaps: Option<SkillGapResult>,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap planning backends without touching the handler.
#[async_trait]
pub trait RoadmapPlanner: Send + Sync {
    async fn plan(&self, request: &RoadmapRequest) -> PlannedRoadmap;

    /// Short backend name for logs and the health endpoint.
    fn backend(&self) -> &'static str;
}

/// Gap analysis against the request's dream role, if it has one.
/// Current skills are every matchable category of the resume.
fn gaps_for(matcher: &SkillMatcher, request: &RoadmapRequest) -> Option<SkillGapResult> {
    request.dream_role().map(|role| {
        let current = request.skills.skills.flatten_for_matching();
        compute_gaps(matcher, &current, role)
    })
}

fn plan_locally(request: &RoadmapRequest, gaps: Option<SkillGapResult>) -> PlannedRoadmap {
    let plan = request
        .dream_role()
        .zip(gaps.as_ref())
        .map(|(role, gaps)| GapPlan { role, gaps });
    let roadmap = local_roadmap(&request.skills.skills, plan);

    PlannedRoadmap {
        roadmap,
        source: RoadmapSource::Local,
        skill_gaps: gaps,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// LocalRoadmapPlanner
// ────────────────────────────────────────────────────────────────────────────

/// Template planner. Used in demo mode and when no LLM key is configured.
pub struct LocalRoadmapPlanner {
    matcher: SkillMatcher,
}

impl LocalRoadmapPlanner {
    pub fn new(matcher: SkillMatcher) -> Self {
        Self { matcher }
    }
}

#[async_trait]
impl RoadmapPlanner for LocalRoadmapPlanner {
    async fn plan(&self, request: &RoadmapRequest) -> PlannedRoadmap {
        let gaps = gaps_for(&self.matcher, request);
        plan_locally(request, gaps)
    }

    fn backend(&self) -> &'static str {
        "local"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// LlmRoadmapPlanner
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
enum LlmPlanError {
    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error("Failed to serialize profile context: {0}")]
    Context(#[from] serde_json::Error),

    #[error("Response has no milestone list")]
    MissingList,

    #[error("Response has {0} milestones, expected at least 15")]
    TooFew(usize),
}

/// Claude-backed planner. Any LLM, parse or shape failure is logged and the
/// request is answered from the local templates instead.
pub struct LlmRoadmapPlanner {
    llm: LlmClient,
    matcher: SkillMatcher,
}

impl LlmRoadmapPlanner {
    pub fn new(llm: LlmClient, matcher: SkillMatcher) -> Self {
        Self { llm, matcher }
    }

    async fn plan_with_llm(
        &self,
        request: &RoadmapRequest,
        gaps: Option<&SkillGapResult>,
    ) -> Result<Roadmap, LlmPlanError> {
        let context = profile_context(request, gaps);
        let profile_json = serde_json::to_string_pretty(&context)?;

        let summary = gaps.map(SkillGapResult::summary);
        let template = if summary.is_some() {
            ROADMAP_PROMPT_DREAM_ROLE
        } else {
            ROADMAP_PROMPT_BASE
        };
        let prompt = build_prompt(template, &profile_json, summary.as_deref());

        let response: Value = self
            .llm
            .call_json(&prompt, JSON_ONLY_SYSTEM, &ROADMAP_CALL)
            .await?;
        roadmap_from_response(response)
    }
}

#[async_trait]
impl RoadmapPlanner for LlmRoadmapPlanner {
    async fn plan(&self, request: &RoadmapRequest) -> PlannedRoadmap {
        let gaps = gaps_for(&self.matcher, request);

        match self.plan_with_llm(request, gaps.as_ref()).await {
            Ok(roadmap) => {
                debug!("LLM roadmap accepted ({} days total)", roadmap.total_days());
                PlannedRoadmap {
                    roadmap,
                    source: RoadmapSource::Llm,
                    skill_gaps: gaps,
                }
            }
            Err(e) => {
                warn!("LLM roadmap failed, falling back to local templates: {e}");
                plan_locally(request, gaps)
            }
        }
    }

    fn backend(&self) -> &'static str {
        "llm"
    }
}

/// The profile data the model sees. Extracurriculars are included for
/// tailoring even though they never count toward gap matching.
fn profile_context(request: &RoadmapRequest, gaps: Option<&SkillGapResult>) -> Value {
    let skills = &request.skills.skills;
    let mut context = json!({
        "currentSkills": {
            "skills": skills.skills,
            "languages": skills.languages,
            "tools": skills.tools,
            "frameworks": skills.frameworks,
            "technicalSkills": skills.technical_skills,
            "extracurricular": skills.extracurricular,
        },
        "resumeAnalysis": request.skills.analysis,
        "profileInfo": {
            "hasGitHub": request.has_github,
            "hasLinkedIn": request.has_linkedin,
        },
    });

    if let (Some(role), Some(object)) = (request.dream_role(), context.as_object_mut()) {
        object.insert("dreamRole".to_string(), json!(role));
        if let Some(gaps) = gaps {
            object.insert("skillGaps".to_string(), json!(gaps));
        }
    }
    context
}

/// Turns the model's JSON into a roadmap. A response with fewer than 15
/// milestones is rejected rather than padded.
fn roadmap_from_response(response: Value) -> Result<Roadmap, LlmPlanError> {
    let items = extract_milestone_list(response)?;
    if items.len() < ROADMAP_LEN {
        return Err(LlmPlanError::TooFew(items.len()));
    }

    let raw: Vec<RawMilestone> = items.into_iter().map(RawMilestone::from).collect();
    Ok(normalize_milestones(&raw))
}

/// Accepts `{"milestones": [...]}`, `{"items": [...]}` or a bare array.
fn extract_milestone_list(response: Value) -> Result<Vec<Value>, LlmPlanError> {
    match response {
        Value::Array(items) => Ok(items),
        Value::Object(mut fields) => ["milestones", "items"]
            .iter()
            .find_map(|key| match fields.remove(*key) {
                Some(Value::Array(items)) => Some(items),
                _ => None,
            })
            .ok_or(LlmPlanError::MissingList),
        _ => Err(LlmPlanError::MissingList),
    }
}
