// Shared prompt fragments. Each service that calls the LLM keeps its own
// prompts.rs alongside it and composes these in.

/// System prompt that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured career-coaching assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Appended to every extraction prompt so the model does not pad categories.
pub const EXTRACTION_ACCURACY: &str = "\
    If uncertain, EXCLUDE rather than guess. \
    Return an empty array [] for categories with no clear evidence. \
    Every item MUST be traceable to the provided input.";
