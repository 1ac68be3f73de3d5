use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Number of milestones in every roadmap.
pub const ROADMAP_LEN: usize = 15;
pub const MAX_TITLE_CHARS: usize = 80;
pub const MAX_DESCRIPTION_CHARS: usize = 500;
pub const MIN_DAYS: i64 = 1;
pub const MAX_DAYS: i64 = 7;

/// One actionable roadmap step.
///
/// Only the milestone normalizer builds these for a `Roadmap`, so inside a
/// roadmap `title` is non-empty and at most 80 chars, `description` at most
/// 500 chars and `days` within 1..=7.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub title: String,
    pub description: String,
    pub days: u8,
}

/// Exactly fifteen milestones, earliest action first. Serialized as a bare array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Roadmap(Vec<Milestone>);

impl Roadmap {
    /// Callers must hand over exactly `ROADMAP_LEN` normalized milestones.
    pub(crate) fn from_normalized(milestones: Vec<Milestone>) -> Self {
        debug_assert_eq!(milestones.len(), ROADMAP_LEN);
        Roadmap(milestones)
    }

    pub fn milestones(&self) -> &[Milestone] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Milestone> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn total_days(&self) -> u32 {
        self.0.iter().map(|m| u32::from(m.days)).sum()
    }

    /// Titles joined by `|`. Clients key their locally stored completion state
    /// on this so progress resets when a different roadmap is generated.
    pub fn progress_key(&self) -> String {
        self.0
            .iter()
            .map(|m| m.title.as_str())
            .collect::<Vec<_>>()
            .join("|")
    }
}

impl<'a> IntoIterator for &'a Roadmap {
    type Item = &'a Milestone;
    type IntoIter = std::slice::Iter<'a, Milestone>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A milestone candidate from an untrusted source (LLM output or client JSON).
///
/// Nothing about field presence or types is trusted: a JSON object keeps its
/// three fields as raw values for the normalizer to coerce, anything else is
/// carried as-is and normalizes to a default milestone.
#[derive(Debug, Clone, PartialEq)]
pub enum RawMilestone {
    Record {
        title: Option<Value>,
        description: Option<Value>,
        days: Option<Value>,
    },
    Other(Value),
}

impl From<Value> for RawMilestone {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(mut fields) => RawMilestone::Record {
                title: fields.remove("title"),
                description: fields.remove("description"),
                days: fields.remove("days"),
            },
            other => RawMilestone::Other(other),
        }
    }
}

impl From<Milestone> for RawMilestone {
    fn from(milestone: Milestone) -> Self {
        RawMilestone::Record {
            title: Some(Value::String(milestone.title)),
            description: Some(Value::String(milestone.description)),
            days: Some(Value::from(milestone.days)),
        }
    }
}

impl<'de> Deserialize<'de> for RawMilestone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(RawMilestone::from)
    }
}
