use serde::{Deserialize, Serialize};

use crate::models::lenient;

/// Skills extracted from a resume, grouped by category.
///
/// Lists keep their original order and casing and are not de-duplicated.
/// A category missing from the input is an empty list, never null.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillSet {
    /// Soft skills.
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub languages: Vec<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub tools: Vec<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub frameworks: Vec<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub technical_skills: Vec<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub extracurricular: Vec<String>,
}

impl SkillSet {
    /// Every category the gap calculator matches against, flattened in a fixed order.
    /// Extracurricular activities are not skills and are left out.
    pub fn flatten_for_matching(&self) -> Vec<String> {
        self.skills
            .iter()
            .chain(&self.languages)
            .chain(&self.tools)
            .chain(&self.frameworks)
            .chain(&self.technical_skills)
            .cloned()
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
            && self.languages.is_empty()
            && self.tools.is_empty()
            && self.frameworks.is_empty()
            && self.technical_skills.is_empty()
            && self.extracurricular.is_empty()
    }
}

/// Qualitative assessment attached to an analyzed resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileAssessment {
    #[serde(
        default = "default_experience_level",
        deserialize_with = "lenient::string"
    )]
    pub experience_level: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub professional_summary: String,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub key_strengths: Vec<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub areas_for_improvement: Vec<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub recommendations: Vec<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub industry_fit: Vec<String>,
}

fn default_experience_level() -> String {
    "Mid".to_string()
}

/// Result of resume analysis: the extracted skills plus an optional assessment.
/// This is also the shape clients send back as `skills` when requesting a roadmap.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeAnalysis {
    #[serde(flatten)]
    pub skills: SkillSet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<ProfileAssessment>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_categories_default_to_empty() {
        let set: SkillSet = serde_json::from_str(r#"{"languages": ["Rust"]}"#).unwrap();
        assert_eq!(set.languages, vec!["Rust".to_string()]);
        assert!(set.tools.is_empty());
        assert!(set.technical_skills.is_empty());
    }

    #[test]
    fn test_wire_names_are_camel_case() {
        let set = SkillSet {
            technical_skills: vec!["Distributed systems".to_string()],
            ..Default::default()
        };
        let value = serde_json::to_value(&set).unwrap();
        assert!(value.get("technicalSkills").is_some());
        assert!(value.get("technical_skills").is_none());
    }

    #[test]
    fn test_flatten_for_matching_skips_extracurricular() {
        let set = SkillSet {
            skills: vec!["Communication".to_string()],
            languages: vec!["Python".to_string()],
            tools: vec!["Git".to_string()],
            frameworks: vec!["React".to_string()],
            technical_skills: vec!["APIs".to_string()],
            extracurricular: vec!["Hackathon".to_string()],
        };
        assert_eq!(
            set.flatten_for_matching(),
            vec!["Communication", "Python", "Git", "React", "APIs"]
        );
    }

    #[test]
    fn test_resume_analysis_flattens_skill_set() {
        let analysis: ResumeAnalysis = serde_json::from_str(
            r#"{
                "frameworks": ["React"],
                "analysis": {"keyStrengths": ["Ownership"]}
            }"#,
        )
        .unwrap();
        assert_eq!(analysis.skills.frameworks, vec!["React".to_string()]);
        let assessment = analysis.analysis.unwrap();
        assert_eq!(assessment.experience_level, "Mid");
        assert_eq!(assessment.key_strengths, vec!["Ownership".to_string()]);
    }
}
