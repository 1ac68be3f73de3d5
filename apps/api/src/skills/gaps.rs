//! Gap Calculator: compares a person's current skills against a role requirement.
//!
//! Output is derived on every request and never stored. For identical input
//! the result is identical: no randomness, no I/O.

use serde::{Deserialize, Serialize};

use crate::models::role::RoleRequirement;
use crate::skills::matcher::SkillMatcher;

/// Per-category missing skills, the matched skills, and an overall match score.
///
/// Invariants: `total_gaps` is the sum of the five missing-list lengths;
/// `match_percentage = round(matched / max(1, total_required) * 100)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGapResult {
    pub missing_technical: Vec<String>,
    pub missing_tools: Vec<String>,
    pub missing_frameworks: Vec<String>,
    pub missing_languages: Vec<String>,
    /// Required soft skills that were not found.
    pub missing_non_technical: Vec<String>,
    /// Matched required items across all categories, in category order.
    pub matched_skills: Vec<String>,
    pub total_gaps: usize,
    pub match_percentage: u32,
}

impl SkillGapResult {
    /// Multi-line gap analysis embedded in the roadmap prompt.
    pub fn summary(&self) -> String {
        let line = |label: &str, items: &[String]| {
            format!("- {label}: {} ({})", items.len(), items.join(", "))
        };

        [
            "SKILL GAP ANALYSIS:".to_string(),
            format!(
                "- Match Level: {}% of required skills already acquired",
                self.match_percentage
            ),
            format!("- Total Gaps: {} skills to develop", self.total_gaps),
            line("Missing Technical Skills", &self.missing_technical),
            line("Missing Frameworks", &self.missing_frameworks),
            line("Missing Tools", &self.missing_tools),
            line("Missing Languages", &self.missing_languages),
            line("Missing Soft Skills", &self.missing_non_technical),
            line("Already Matched", &self.matched_skills),
        ]
        .join("\n")
    }
}

/// Computes the skill gap between `current_skills` and `requirement`.
///
/// Categories are checked in order: technical skills, tools, frameworks,
/// languages, soft skills. A required item is matched when any current skill
/// satisfies it per `SkillMatcher`. An item listed in two categories is
/// counted (and matched or missed) twice.
pub fn compute_gaps(
    matcher: &SkillMatcher,
    current_skills: &[String],
    requirement: &RoleRequirement,
) -> SkillGapResult {
    let mut matched_skills = Vec::new();

    let mut split_category = |required: &[String]| -> Vec<String> {
        let mut missing = Vec::new();
        for item in required {
            if current_skills.iter().any(|c| matcher.matches(c, item)) {
                matched_skills.push(item.clone());
            } else {
                missing.push(item.clone());
            }
        }
        missing
    };

    let missing_technical = split_category(requirement.technical_skills.as_slice());
    let missing_tools = split_category(requirement.tools.as_slice());
    let missing_frameworks = split_category(requirement.frameworks.as_slice());
    let missing_languages = split_category(requirement.languages.as_slice());
    let missing_non_technical = split_category(requirement.soft_skills.as_slice());

    let total_gaps = missing_technical.len()
        + missing_tools.len()
        + missing_frameworks.len()
        + missing_languages.len()
        + missing_non_technical.len();

    let total_required = requirement.total_required().max(1);
    let match_percentage =
        ((matched_skills.len() as f64 / total_required as f64) * 100.0).round() as u32;

    SkillGapResult {
        missing_technical,
        missing_tools,
        missing_frameworks,
        missing_languages,
        missing_non_technical,
        matched_skills,
        total_gaps,
        match_percentage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skills::synonyms::SynonymTable;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use std::sync::Arc;

    fn matcher() -> SkillMatcher {
        SkillMatcher::new(Arc::new(SynonymTable::builtin()))
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_react_python_scenario_is_fifty_percent() {
        let requirement = RoleRequirement {
            role: "Frontend Engineer".to_string(),
            frameworks: strings(&["React", "Vue"]),
            languages: strings(&["Python", "Java"]),
            ..Default::default()
        };

        let gaps = compute_gaps(&matcher(), &strings(&["React", "Python"]), &requirement);

        assert_eq!(gaps.missing_frameworks, strings(&["Vue"]));
        assert_eq!(gaps.missing_languages, strings(&["Java"]));
        assert_eq!(gaps.matched_skills, strings(&["React", "Python"]));
        assert_eq!(gaps.total_gaps, 2);
        assert_eq!(gaps.match_percentage, 50);
    }

    #[test]
    fn test_zero_requirements_do_not_divide_by_zero() {
        let current = strings(&["Rust"]);
        let gaps = compute_gaps(&matcher(), &current, &RoleRequirement::default());
        assert_eq!(gaps.match_percentage, 0);
        assert_eq!(gaps.total_gaps, 0);
        assert!(gaps.matched_skills.is_empty());
    }

    #[test]
    fn test_no_current_skills_everything_missing() {
        let requirement = RoleRequirement {
            technical_skills: strings(&["APIs"]),
            soft_skills: strings(&["Communication", "Mentoring"]),
            ..Default::default()
        };
        let gaps = compute_gaps(&matcher(), &[], &requirement);
        assert_eq!(gaps.missing_technical, strings(&["APIs"]));
        assert_eq!(
            gaps.missing_non_technical,
            strings(&["Communication", "Mentoring"])
        );
        assert_eq!(gaps.total_gaps, 3);
        assert_eq!(gaps.match_percentage, 0);
    }

    #[test]
    fn test_duplicate_across_categories_counts_twice() {
        let requirement = RoleRequirement {
            tools: strings(&["Docker"]),
            technical_skills: strings(&["Docker", "Networking"]),
            ..Default::default()
        };
        let gaps = compute_gaps(&matcher(), &strings(&["docker"]), &requirement);
        assert_eq!(gaps.matched_skills, strings(&["Docker", "Docker"]));
        assert_eq!(gaps.missing_technical, strings(&["Networking"]));
        // 2 of 3 → 66.67 → 67
        assert_eq!(gaps.match_percentage, 67);
    }

    #[test]
    fn test_matched_keeps_required_display_casing() {
        let requirement = RoleRequirement {
            frameworks: strings(&["React 18+"]),
            ..Default::default()
        };
        let gaps = compute_gaps(&matcher(), &strings(&["react"]), &requirement);
        assert_eq!(gaps.matched_skills, strings(&["React 18+"]));
        assert_eq!(gaps.match_percentage, 100);
    }

    #[test]
    fn test_synonyms_close_gaps() {
        let requirement = RoleRequirement {
            tools: strings(&["Kubernetes", "CI/CD"]),
            ..Default::default()
        };
        let gaps = compute_gaps(
            &matcher(),
            &strings(&["k8s", "GitHub Actions"]),
            &requirement,
        );
        assert!(gaps.missing_tools.is_empty());
        assert_eq!(gaps.match_percentage, 100);
    }

    #[test]
    fn test_rounding_half_up() {
        // 1 of 8 → 12.5 → 13
        let requirement = RoleRequirement {
            languages: strings(&["Rust", "Go", "Zig", "Nim", "Odin", "Elixir", "OCaml", "Lua"]),
            ..Default::default()
        };
        let gaps = compute_gaps(&matcher(), &strings(&["Rust"]), &requirement);
        assert_eq!(gaps.match_percentage, 13);
    }

    #[test]
    fn test_wire_shape() {
        let value = serde_json::to_value(SkillGapResult::default()).unwrap();
        for key in [
            "missingTechnical",
            "missingTools",
            "missingFrameworks",
            "missingLanguages",
            "missingNonTechnical",
            "matchedSkills",
            "totalGaps",
            "matchPercentage",
        ] {
            assert!(value.get(key).is_some(), "missing key {key}");
        }
    }

    #[test]
    fn test_summary_lists_missing_items() {
        let gaps = SkillGapResult {
            missing_frameworks: strings(&["Vue"]),
            matched_skills: strings(&["React"]),
            total_gaps: 1,
            match_percentage: 50,
            ..Default::default()
        };
        let summary = gaps.summary();
        assert!(summary.contains("Match Level: 50%"));
        assert!(summary.contains("- Missing Frameworks: 1 (Vue)"));
        assert!(summary.contains("- Already Matched: 1 (React)"));
    }

    fn skill_list() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[A-Za-z+#. ]{0,12}", 0..6)
    }

    proptest! {
        #[test]
        fn prop_total_gaps_is_sum_of_missing(
            current in skill_list(),
            technical in skill_list(),
            tools in skill_list(),
            frameworks in skill_list(),
            languages in skill_list(),
            soft in skill_list(),
        ) {
            let requirement = RoleRequirement {
                technical_skills: technical,
                tools,
                frameworks,
                languages,
                soft_skills: soft,
                ..Default::default()
            };
            let gaps = compute_gaps(&matcher(), &current, &requirement);
            let missing = gaps.missing_technical.len()
                + gaps.missing_tools.len()
                + gaps.missing_frameworks.len()
                + gaps.missing_languages.len()
                + gaps.missing_non_technical.len();
            prop_assert_eq!(gaps.total_gaps, missing);
            prop_assert_eq!(missing + gaps.matched_skills.len(), requirement.total_required());
            prop_assert!(gaps.match_percentage <= 100);
        }

        #[test]
        fn prop_verbatim_skills_score_100(
            technical in skill_list(),
            tools in skill_list(),
            frameworks in skill_list(),
            languages in skill_list(),
            soft in skill_list(),
        ) {
            prop_assume!(
                !(technical.is_empty() && tools.is_empty() && frameworks.is_empty()
                    && languages.is_empty() && soft.is_empty())
            );
            let current: Vec<String> = technical
                .iter()
                .chain(&tools)
                .chain(&frameworks)
                .chain(&languages)
                .chain(&soft)
                .cloned()
                .collect();
            let requirement = RoleRequirement {
                technical_skills: technical,
                tools,
                frameworks,
                languages,
                soft_skills: soft,
                ..Default::default()
            };
            let gaps = compute_gaps(&matcher(), &current, &requirement);
            prop_assert_eq!(gaps.match_percentage, 100);
            prop_assert_eq!(gaps.total_gaps, 0);
        }

        #[test]
        fn prop_deterministic(current in skill_list(), frameworks in skill_list()) {
            let requirement = RoleRequirement { frameworks, ..Default::default() };
            let m = matcher();
            prop_assert_eq!(
                compute_gaps(&m, &current, &requirement),
                compute_gaps(&m, &current, &requirement)
            );
        }
    }
}
