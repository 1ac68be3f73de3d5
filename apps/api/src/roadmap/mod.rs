// Roadmap generation: LLM planning with a deterministic local fallback, and the
// normalizer every milestone list passes through before it reaches a client.

use thiserror::Error;

pub mod fallback;
pub mod handlers;
pub mod normalizer;
pub mod planner;
pub mod prompts;

/// Caller contract violations. Malformed *data* is repaired, never reported;
/// this only fires when code hands over the wrong shape entirely.
#[derive(Debug, Error)]
pub enum RoadmapError {
    #[error("{0}")]
    InvalidArgument(String),
}
