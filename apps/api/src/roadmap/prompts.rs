// LLM prompt constants for roadmap planning.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::llm_client::CallOptions;

/// Low temperature: the roadmap should follow the profile, not improvise.
pub const ROADMAP_CALL: CallOptions = CallOptions {
    max_tokens: 3000,
    temperature: 0.2,
};

/// Used when no dream role was chosen. Profile data is appended by `build_prompt`.
pub const ROADMAP_PROMPT_BASE: &str = r#"You are an expert career coach. Create a personalized 30-day career roadmap based STRICTLY on the resume data provided.

CRITICAL RULES:
1. Base EVERY milestone on the person's ACTUAL skills, tools, frameworks, and experience. Never suggest generic tasks.
2. A frontend developer with React experience gets React-specific tasks. A data analyst gets analytics tasks.
3. Infer experience level from the data. Junior and senior profiles get different milestone difficulty.
4. If GitHub is validated, include repository and portfolio tasks. If LinkedIn is validated, include networking tasks.
5. Order: resume and portfolio first, then outreach, applications, interview prep.
6. If resumeAnalysis is present (experienceLevel, keyStrengths, areasForImprovement, recommendations), use it to tailor milestones.

Return a JSON object with this EXACT schema:
{
  "milestones": [
    {"title": "short action", "description": "specific how-to", "days": 3}
  ]
}

EXACTLY 15 milestones. days is an integer from 1 to 7; the total should be about 30."#;

/// Used when a dream role is present. The gap summary is embedded by `build_prompt`.
pub const ROADMAP_PROMPT_DREAM_ROLE: &str = r#"You are an expert career coach creating a personalized 30-day learning roadmap that bridges the gap between the user's current skills and their dream role.

REQUIREMENTS:
1. The skill gap analysis below is CALCULATED, not estimated. Reference the exact missing skills it lists.
2. Order milestones by impact: the gaps that most affect job prospects come first.
3. Each milestone builds on the previous ones. If the user already has a framework, leverage it instead of repeating it.
4. Experience level matters: junior profiles get fundamentals first, senior profiles get advanced work.

PRIORITIZATION:
1. High-priority technical gaps (days 1-7)
2. Popular framework and tool gaps (days 8-12)
3. Project building that combines new and existing skills (days 13-20)
4. Portfolio enhancement: GitHub and profile updates (days 21-25)
5. Networking and applications (days 26-30)

SKILL-SPECIFIC GUIDANCE:
- Missing frontend framework: build a visible project with it
- Missing backend technology: build an API with it
- Missing database: include a schema design task
- Missing deployment or DevOps: include a cloud deployment
- Missing soft skills: include communication and portfolio tasks

Return a JSON object with this EXACT schema:
{
  "milestones": [
    {"title": "short action (5 words max)", "description": "specific, detailed how-to", "days": 2}
  ]
}

EXACTLY 15 milestones. days is an integer from 1 to 7; the total should be about 30.
No generic advice: every task must be traceable to the listed gaps and current skills."#;

/// Appends the serialized profile context (and gap summary, when present) to `template`.
pub fn build_prompt(template: &str, profile_json: &str, gap_summary: Option<&str>) -> String {
    let mut prompt = String::with_capacity(template.len() + profile_json.len() + 256);
    prompt.push_str(template);
    if let Some(summary) = gap_summary {
        prompt.push_str("\n\n");
        prompt.push_str(summary);
    }
    prompt.push_str("\n\n--- USER PROFILE DATA ---\n");
    prompt.push_str(profile_json);
    prompt.push_str("\n--- END ---\n\nReturn ONLY valid JSON with exactly 15 milestones. No other text.");
    prompt
}
