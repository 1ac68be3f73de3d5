// LLM prompt constants for dream-role analysis.

use crate::llm_client::CallOptions;

pub const ROLE_CALL: CallOptions = CallOptions {
    max_tokens: 2048,
    temperature: 0.3,
};

/// Role analysis prompt. Replace `{role_title}` before sending.
pub const ROLE_ANALYSIS_PROMPT_TEMPLATE: &str = r#"You are a career analysis expert with deep knowledge of current job market requirements. Analyze the job title below and provide an accurate, realistic breakdown based on current job postings.

Return a JSON object with this EXACT schema (no extra fields):
{
  "role": "job title as provided",
  "level": "Entry|Mid|Senior|Lead",
  "summary": "concise description of primary responsibilities",
  "requiredSkills": ["core competency"],
  "technicalSkills": ["technical domain"],
  "softSkills": ["non-technical ability"],
  "tools": ["tool or platform used daily"],
  "frameworks": ["framework, with version when standard, e.g. React 18+"],
  "languages": ["programming language"],
  "experience": "X-Y years",
  "avgSalary": "$X,000 - $Y,000 USD",
  "growthPath": "typical career progression"
}

Depth:
- requiredSkills: 8-12 items
- technicalSkills: 6-10 items
- softSkills: 5-7 items
- tools: 6-10 items

Levels: Entry 0-2 years, Mid 2-5, Senior 5-10 (mentoring, architecture), Lead 10+ (team leadership, business impact).
Include ONLY skills genuinely required or highly desired for this role. Salary ranges are for the US market unless the title implies another region.

Analyze this role: "{role_title}""#;
