// Canned data served in demo mode and when keyword extraction finds nothing.

use crate::models::role::{RoleLevel, RoleRequirement};
use crate::models::skills::SkillSet;

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// A plausible junior web developer profile.
pub fn sample_skills() -> SkillSet {
    SkillSet {
        skills: owned(&["Project Management", "Problem Solving", "Communication"]),
        languages: owned(&["JavaScript", "Python", "HTML", "CSS"]),
        tools: owned(&["Git", "VS Code", "npm"]),
        frameworks: owned(&["React", "Node.js"]),
        technical_skills: Vec::new(),
        extracurricular: owned(&[
            "Bootcamp Graduate",
            "GitHub Contributions",
            "Personal Projects",
        ]),
    }
}

/// A full-stack developer requirement, relabelled with the requested title.
pub fn sample_role(title: &str) -> RoleRequirement {
    RoleRequirement {
        role: title.to_string(),
        level: RoleLevel::Mid,
        summary: "Full stack developers build complete web applications with both frontend \
            and backend components. They work across the entire software development lifecycle."
            .to_string(),
        required_skills: owned(&[
            "Full-stack development",
            "REST API design",
            "Database design",
            "User authentication",
            "Version control",
            "Responsive web design",
            "Performance optimization",
            "Security best practices",
            "Debugging",
            "Testing",
        ]),
        technical_skills: owned(&[
            "Frontend development",
            "Backend development",
            "Database management",
            "Cloud computing",
            "API development",
        ]),
        soft_skills: owned(&[
            "Problem solving",
            "Communication",
            "Team collaboration",
            "Time management",
            "Adaptability",
        ]),
        tools: owned(&[
            "Git",
            "Docker",
            "AWS/GCP/Azure",
            "Postman",
            "VS Code",
            "npm/yarn",
            "Webpack",
        ]),
        frameworks: owned(&[
            "React",
            "Node.js/Express",
            "Vue.js",
            "Angular",
            "Django",
            "MongoDB",
            "PostgreSQL",
        ]),
        languages: owned(&["JavaScript", "Python", "SQL", "HTML", "CSS"]),
        experience: "2-4 years".to_string(),
        avg_salary: "$100,000 - $150,000".to_string(),
        growth_path: "Senior Full Stack Developer → Tech Lead → Engineering Manager".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skills::gaps::compute_gaps;
    use crate::skills::matcher::SkillMatcher;
    use crate::skills::synonyms::SynonymTable;
    use std::sync::Arc;

    #[test]
    fn test_sample_role_keeps_requested_title() {
        let role = sample_role("Platform Engineer");
        assert_eq!(role.role, "Platform Engineer");
        assert_eq!(role.total_required(), 29);
    }

    #[test]
    fn test_sample_profile_partially_matches_sample_role() {
        let matcher = SkillMatcher::new(Arc::new(SynonymTable::builtin()));
        let gaps = compute_gaps(
            &matcher,
            &sample_skills().flatten_for_matching(),
            &sample_role("Full Stack Developer"),
        );
        assert!(gaps.match_percentage > 0 && gaps.match_percentage < 100);
        assert!(gaps.missing_tools.contains(&"Docker".to_string()));
    }
}
