// LLM prompt constants for resume analysis.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::llm_client::CallOptions;

pub const RESUME_CALL: CallOptions = CallOptions {
    max_tokens: 4096,
    temperature: 0.2,
};

/// Resume analysis prompt. Replace `{resume_text}` before sending.
pub const RESUME_ANALYSIS_PROMPT_TEMPLATE: &str = r#"You are an expert career coach and resume analyst. Extract the skills from the resume below AND provide a professional assessment.

Return a JSON object with this EXACT schema (no extra fields):
{
  "skills": ["soft skill"],
  "languages": ["programming language"],
  "tools": ["tool or platform"],
  "frameworks": ["framework or library"],
  "technicalSkills": ["technical domain"],
  "extracurricular": ["certification, award or activity"],
  "analysis": {
    "experienceLevel": "Junior|Mid|Senior|Lead",
    "professionalSummary": "2-3 sentence overview of the profile",
    "keyStrengths": ["4-5 standout attributes"],
    "areasForImprovement": ["2-4 specific, actionable areas"],
    "recommendations": ["3 specific next steps"],
    "industryFit": ["2-3 industries or roles"]
  }
}

Rules:
- Extract EXPLICITLY mentioned items only. Do NOT infer related skills.
- Use the exact wording from the resume: if it says "React JS", write "React JS".
- experienceLevel: Junior 0-2 years, Mid 2-5, Senior 5-10, Lead 10+.
- {accuracy}

--- RESUME TEXT ---
{resume_text}
--- END ---"#;
