use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::models::lenient;

/// Seniority of a target role. Unknown labels resolve to `Mid`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum RoleLevel {
    Entry,
    #[default]
    Mid,
    Senior,
    Lead,
}

impl RoleLevel {
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "entry" | "junior" | "intern" => RoleLevel::Entry,
            "senior" => RoleLevel::Senior,
            "lead" | "principal" | "staff" => RoleLevel::Lead,
            _ => RoleLevel::Mid,
        }
    }
}

impl<'de> Deserialize<'de> for RoleLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value
            .as_ref()
            .and_then(Value::as_str)
            .map(RoleLevel::from_label)
            .unwrap_or_default())
    }
}

/// Skills and context required for a target ("dream") role.
/// Produced once per analyzed role and not mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleRequirement {
    #[serde(default, deserialize_with = "lenient::string")]
    pub role: String,
    #[serde(default)]
    pub level: RoleLevel,
    #[serde(default, deserialize_with = "lenient::string")]
    pub summary: String,
    /// Core competencies. Informational only; not part of the gap calculation.
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub required_skills: Vec<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub technical_skills: Vec<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub soft_skills: Vec<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub tools: Vec<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub frameworks: Vec<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub languages: Vec<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub experience: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub avg_salary: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub growth_path: String,
}

impl RoleRequirement {
    /// Number of items across the five categories the gap calculator checks,
    /// counted without de-duplication.
    pub fn total_required(&self) -> usize {
        self.technical_skills.len()
            + self.tools.len()
            + self.frameworks.len()
            + self.languages.len()
            + self.soft_skills.len()
    }

    /// A requirement with no role name and nothing to match carries no information
    /// (clients send `{}` when no dream role was chosen).
    pub fn is_empty(&self) -> bool {
        self.role.trim().is_empty() && self.total_required() == 0
    }

    /// Role name for user-facing text, never blank.
    pub fn display_name(&self) -> &str {
        let role = self.role.trim();
        if role.is_empty() {
            "your target role"
        } else {
            role
        }
    }
}
