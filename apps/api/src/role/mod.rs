// Dream-role analysis: job title in, structured role requirements out.

pub mod analyzer;
pub mod handlers;
pub mod prompts;
