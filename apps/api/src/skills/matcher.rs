use std::sync::Arc;

use crate::skills::normalizer::normalize;
use crate::skills::synonyms::SynonymTable;

/// Both normalized strings must be longer than this for the containment rule,
/// so "c" never matches "c++" and "go" never matches "django".
const SUBSTRING_MIN_EXCLUSIVE: usize = 3;

/// Decides whether a current skill satisfies a required skill.
///
/// Rules, first success wins:
/// 1. normalized equality
/// 2. both longer than 3 chars and either contains the other ("react" / "react.js")
/// 3. both belong to a common synonym group ("k8s" / "kubernetes", "reactjs" / "react.js")
///
/// Cheap to clone; the synonym table is shared.
#[derive(Debug, Clone)]
pub struct SkillMatcher {
    synonyms: Arc<SynonymTable>,
}

impl SkillMatcher {
    pub fn new(synonyms: Arc<SynonymTable>) -> Self {
        Self { synonyms }
    }

    pub fn synonyms(&self) -> &SynonymTable {
        &self.synonyms
    }

    /// Whether `current` satisfies `required`. Both sides are normalized first.
    pub fn matches(&self, current: &str, required: &str) -> bool {
        self.matches_normalized(&normalize(current), &normalize(required))
    }

    /// Same as `matches` for inputs already passed through `normalize`.
    pub fn matches_normalized(&self, current: &str, required: &str) -> bool {
        if current == required {
            return true;
        }

        if current.chars().count() > SUBSTRING_MIN_EXCLUSIVE
            && required.chars().count() > SUBSTRING_MIN_EXCLUSIVE
            && (current.contains(required) || required.contains(current))
        {
            return true;
        }

        self.synonyms.share_group(current, required)
    }
}
