//! Local Roadmap Fallback Generator.
//!
//! Deterministic 15-step roadmaps built from templates, used whenever the LLM
//! is unavailable, disabled, or returns something unusable. Two variants:
//!
//! - skills only: profile and portfolio work first, then building and
//!   contribution, then networking and interview prep, applications last
//! - dream role: highest-impact technical gaps first (missing framework, then
//!   missing language), a project combining old and new skills, deployment,
//!   community, interview prep, applications, negotiation
//!
//! Placeholders always fall back to generic wording, so no template ever
//! renders an empty slot. Day counts total 30 for both variants; the total is
//! advisory and is not enforced elsewhere.

use crate::models::role::RoleRequirement;
use crate::models::roadmap::{Milestone, RawMilestone, Roadmap};
use crate::models::skills::SkillSet;
use crate::roadmap::normalizer::normalize_milestones;
use crate::skills::gaps::SkillGapResult;

/// Dream role plus the gap analysis computed against it.
#[derive(Debug, Clone, Copy)]
pub struct GapPlan<'a> {
    pub role: &'a RoleRequirement,
    pub gaps: &'a SkillGapResult,
}

/// Builds the local roadmap. Output is already normalized.
pub fn local_roadmap(skills: &SkillSet, plan: Option<GapPlan<'_>>) -> Roadmap {
    let steps = match plan {
        Some(plan) => gap_steps(skills, plan),
        None => skill_steps(skills),
    };
    let raw: Vec<RawMilestone> = steps.into_iter().map(RawMilestone::from).collect();
    normalize_milestones(&raw)
}

fn step(title: impl Into<String>, description: impl Into<String>, days: u8) -> Milestone {
    Milestone {
        title: title.into(),
        description: description.into(),
        days,
    }
}

/// Non-blank, trimmed entries from the given categories, in order.
fn usable<'a>(lists: &[&'a [String]]) -> Vec<&'a str> {
    lists
        .iter()
        .copied()
        .flat_map(|list| list.iter())
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Joins up to `take` items, or returns `fallback` when there are none.
fn join_or(items: &[&str], take: usize, separator: &str, fallback: &str) -> String {
    if items.is_empty() {
        fallback.to_string()
    } else {
        items
            .iter()
            .take(take)
            .copied()
            .collect::<Vec<_>>()
            .join(separator)
    }
}

fn skill_steps(skills: &SkillSet) -> Vec<Milestone> {
    let all = usable(&[
        skills.frameworks.as_slice(),
        skills.languages.as_slice(),
        skills.tools.as_slice(),
    ]);

    let top_two = join_or(&all, 2, ", ", "your strongest skills");
    let top_pair = join_or(&all, 2, " and ", "the technologies you know best");
    let headline = join_or(&all, 1, "", "your core skill");
    let everything = join_or(&all, all.len(), ", ", "the technologies you have used");
    let lead = all.first().copied().unwrap_or("beginner-friendly");

    vec![
        step(
            "Update GitHub portfolio with projects",
            format!(
                "Publish your latest work using {top_two} on GitHub. Document each project's \
                architecture and the technologies used."
            ),
            2,
        ),
        step(
            "Refresh your resume",
            format!(
                "List {everything} in a dedicated skills section. Add recent projects with \
                measurable outcomes."
            ),
            2,
        ),
        step(
            "Optimize LinkedIn profile",
            format!(
                "Rewrite your headline and about section, add your projects, and feature \
                {headline} as a top skill."
            ),
            1,
        ),
        step(
            "Review and refine portfolio",
            "Make sure every portfolio item has a clear README, screenshots, and a live link.",
            1,
        ),
        step(
            "Build practice project",
            format!(
                "Create a small, complete project with {top_pair} to strengthen your portfolio."
            ),
            3,
        ),
        step(
            "Prepare technical demo",
            format!(
                "Record or host a live demo of your best project, highlighting how you used \
                {headline}."
            ),
            2,
        ),
        step(
            "Contribute to open source",
            format!(
                "Find {lead} projects on GitHub and land two or three meaningful contributions."
            ),
            3,
        ),
        step(
            "Research target companies",
            "Identify 20 companies hiring for your skill set. Follow their engineering blogs and \
            note their tech stacks.",
            1,
        ),
        step(
            "Network with professionals",
            "Connect with 15 people in your field on LinkedIn with a personalized note for each.",
            2,
        ),
        step(
            "Schedule informational interviews",
            "Talk to 5 people in roles you aspire to. Ask about their career path and the skills \
            that mattered most.",
            2,
        ),
        step(
            "Study system design",
            format!(
                "Practice system design questions grounded in {top_two}, especially if you are \
                aiming for a senior role."
            ),
            2,
        ),
        step(
            "Practice interview questions",
            "Prepare behavioral stories and technical answers specific to your skill set. Do at \
            least one mock interview.",
            3,
        ),
        step(
            "Polish cover letters",
            "Write 5 tailored cover letters for your top target roles, each pointing at a \
            relevant project.",
            2,
        ),
        step(
            "Apply to job postings",
            "Apply to 15 positions that match your skills and track every application in one \
            place.",
            3,
        ),
        step(
            "Follow up on applications",
            "Send a short follow-up a week after each application to show continued interest.",
            1,
        ),
    ]
}

fn gap_steps(skills: &SkillSet, plan: GapPlan<'_>) -> Vec<Milestone> {
    let role = plan.role.display_name();
    let base = usable(&[skills.frameworks.as_slice(), skills.languages.as_slice()]);
    let missing_frameworks = usable(&[plan.gaps.missing_frameworks.as_slice()]);
    let missing_languages = usable(&[plan.gaps.missing_languages.as_slice()]);
    let missing_tools = usable(&[plan.gaps.missing_tools.as_slice()]);

    let framework = missing_frameworks.first().copied();
    let next_framework = missing_frameworks.get(1).copied();
    let language = missing_languages.first().copied();
    let next_language = missing_languages.get(1).copied();

    let learn_framework_title = match framework {
        Some(f) => format!("Learn {f}"),
        None => "Learn new framework".to_string(),
    };
    let learn_framework_description = {
        let mut text = match framework {
            Some(f) => format!(
                "{f} is required for {role}. Work through the official tutorial and build two \
                small practice projects."
            ),
            None => format!(
                "Pick a framework commonly used by {role} teams. Work through the official \
                tutorial and build two small practice projects."
            ),
        };
        if let Some(next) = next_framework {
            text.push_str(&format!(" Once comfortable, skim the fundamentals of {next}."));
        }
        text
    };

    let language_title = match language {
        Some(l) => format!("Learn {l} fundamentals"),
        None => "Master missing backend skills".to_string(),
    };
    let language_description = {
        let mut text = match language {
            Some(l) => format!(
                "Learn {l}, needed for this role. Complete a focused online course and solve \
                practical exercises daily."
            ),
            None => String::from(
                "Strengthen the backend skills this role expects. Complete a focused online \
                course with practical exercises.",
            ),
        };
        if let Some(next) = next_language {
            text.push_str(&format!(" Keep {next} on your list for the following weeks."));
        }
        text
    };

    let existing = join_or(&base, 2, " + ", "existing");
    let new_skills = framework.map(|f| format!("{f} ")).unwrap_or_default();
    let target_tech = framework.unwrap_or("your target tech");
    let community_tech = framework.unwrap_or("your tech stack");
    let deploy_tooling = match missing_tools.first() {
        Some(tool) => format!(" Use {tool} along the way."),
        None => String::new(),
    };

    vec![
        step(learn_framework_title, learn_framework_description, 4),
        step(language_title, language_description, 3),
        step(
            "Build full-stack demo project",
            format!(
                "Combine your {existing} knowledge with new {new_skills}skills in one \
                production-ready portfolio project."
            ),
            4,
        ),
        step(
            "Deploy to cloud platform",
            format!(
                "Deploy your project to AWS, Azure, or Google Cloud and set up a CI/CD \
                pipeline.{deploy_tooling}"
            ),
            2,
        ),
        step(
            "Write technical blog post",
            "Document your learning journey: the challenges you hit and how you solved them.",
            1,
        ),
        step(
            "Contribute to open source",
            format!(
                "Find open-source projects using {target_tech} and make a meaningful contribution."
            ),
            2,
        ),
        step(
            "Prepare technical interview",
            format!(
                "Study algorithms, system design, and {role}-specific questions. Run a mock \
                interview with a peer."
            ),
            3,
        ),
        step(
            "Research companies hiring for role",
            format!(
                "Identify 25 companies hiring for {role}. Compare their tech stacks and \
                requirements."
            ),
            1,
        ),
        step(
            "Network in tech community",
            format!(
                "Join Discord or Slack communities focused on {community_tech} and engage daily."
            ),
            2,
        ),
        step(
            "Polish GitHub presence",
            "Give every repository a README, description, and live demo. Pin your best projects.",
            1,
        ),
        step(
            "Tailor resume for target role",
            format!(
                "Highlight the projects and skills most relevant to {role}, with metrics for each."
            ),
            1,
        ),
        step(
            "Write targeted cover letters",
            "Customize cover letters for your top 5 positions, referencing each company's stack \
            and values.",
            1,
        ),
        step(
            "Apply to positions",
            "Submit applications to 20+ positions and follow up after a week if you hear nothing.",
            2,
        ),
        step(
            "Schedule interviews",
            "As invitations arrive, prepare with company research and mock interviews.",
            2,
        ),
        step(
            "Negotiate offer",
            "Research market rates and prepare to negotiate salary, benefits, and role scope.",
            1,
        ),
    ]
}
