// Resume ingestion: text extraction, LLM analysis and the keyword fallback.

pub mod analyzer;
pub mod docx;
pub mod extract;
pub mod handlers;
pub mod keywords;
pub mod prompts;
