//! Resume Analyzer: skills and a profile assessment from resume text.
//!
//! With an LLM client the analysis comes from Claude; without one, or when the
//! call fails or returns something unparseable, the keyword extractor is used
//! and a generic assessment is attached. Analysis therefore never fails once
//! text has been extracted.

use tracing::{info, warn};

use crate::llm_client::prompts::{EXTRACTION_ACCURACY, JSON_ONLY_SYSTEM};
use crate::llm_client::{LlmClient, LlmError};
use crate::models::skills::{ProfileAssessment, ResumeAnalysis, SkillSet};
use crate::resume::keywords::extract_skills;
use crate::resume::prompts::{RESUME_ANALYSIS_PROMPT_TEMPLATE, RESUME_CALL};

/// Only this many characters of resume text are sent to the model.
pub const MAX_PROMPT_CHARS: usize = 12_000;

pub async fn analyze_resume(llm: Option<&LlmClient>, text: &str) -> ResumeAnalysis {
    let Some(llm) = llm else {
        info!("No LLM configured, analyzing resume by keywords");
        return keyword_analysis(text);
    };

    match llm_analysis(llm, text).await {
        Ok(analysis) => analysis,
        Err(e) => {
            warn!("LLM resume analysis failed, falling back to keywords: {e}");
            keyword_analysis(text)
        }
    }
}

async fn llm_analysis(llm: &LlmClient, text: &str) -> Result<ResumeAnalysis, LlmError> {
    let prompt = RESUME_ANALYSIS_PROMPT_TEMPLATE
        .replace("{accuracy}", EXTRACTION_ACCURACY)
        .replace("{resume_text}", char_prefix(text, MAX_PROMPT_CHARS));

    let mut analysis = llm
        .call_json::<ResumeAnalysis>(&prompt, JSON_ONLY_SYSTEM, &RESUME_CALL)
        .await?;
    if analysis.analysis.is_none() {
        analysis.analysis = Some(ProfileAssessment {
            experience_level: "Mid".to_string(),
            professional_summary: "Profile analyzed from resume.".to_string(),
            key_strengths: Vec::new(),
            areas_for_improvement: Vec::new(),
            recommendations: Vec::new(),
            industry_fit: Vec::new(),
        });
    }
    Ok(analysis)
}

fn keyword_analysis(text: &str) -> ResumeAnalysis {
    let skills = extract_skills(text);
    let analysis = generic_assessment(&skills);
    ResumeAnalysis {
        skills,
        analysis: Some(analysis),
    }
}

/// Assessment attached to keyword results. Strengths come from the soft skills found.
fn generic_assessment(skills: &SkillSet) -> ProfileAssessment {
    let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

    ProfileAssessment {
        experience_level: "Mid".to_string(),
        professional_summary: "Your resume has been analyzed. Review your extracted skills and \
            use the personalized roadmap to advance your career."
            .to_string(),
        key_strengths: skills.skills.iter().take(4).cloned().collect(),
        areas_for_improvement: owned(&[
            "Expand technical certifications",
            "Add quantified achievements to experience",
            "Highlight leadership examples",
        ]),
        recommendations: owned(&[
            "Update your portfolio with recent projects",
            "Connect with professionals in your target industry",
            "Consider contributing to open-source projects",
        ]),
        industry_fit: if skills.frameworks.is_empty() {
            owned(&["General Tech", "Product Roles"])
        } else {
            owned(&["Software Development", "Web Development"])
        },
    }
}

fn char_prefix(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
