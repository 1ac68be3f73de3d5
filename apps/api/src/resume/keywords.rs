//! Keyword-based skill extraction: the offline fallback for resume analysis.
//!
//! Each known skill has one or more patterns; a skill is reported once, under
//! its display name, when any of its patterns appears as a whole token.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::demo;
use crate::models::skills::SkillSet;

const MAX_CERTIFICATIONS: usize = 3;

struct KeywordRule {
    name: &'static str,
    pattern: Regex,
}

/// Compiles `(display name, patterns)` pairs. Patterns are joined and wrapped
/// in token boundaries that also work next to `+`, `#` and `.`.
fn compile(table: &[(&'static str, &[&str])]) -> Vec<KeywordRule> {
    table
        .iter()
        .map(|&(name, patterns)| KeywordRule {
            name,
            pattern: Regex::new(&format!(
                r"(?i)(?:^|[^a-z0-9_])(?:{})(?:$|[^a-z0-9_])",
                patterns.join("|")
            ))
            .expect("keyword patterns are valid regexes"),
        })
        .collect()
}

const FRAMEWORK_KEYWORDS: &[(&str, &[&str])] = &[
    ("React", &[r"react(?:\.js)?", "reactjs"]),
    ("Vue", &[r"vue(?:\.js)?", "vuejs"]),
    ("Angular", &[r"angular(?:\.js)?", "angularjs"]),
    ("Django", &["django"]),
    ("Flask", &["flask"]),
    ("Spring", &[r"spring\s+boot", r"spring\s+framework"]),
    ("Express", &[r"express\.js", "expressjs"]),
    ("Next.js", &[r"next\.js", "nextjs"]),
    ("Laravel", &["laravel"]),
    ("FastAPI", &["fastapi"]),
    ("NestJS", &["nestjs", r"nest\.js"]),
];

const LANGUAGE_KEYWORDS: &[(&str, &[&str])] = &[
    ("Python", &[r"python(?:\s*\d(?:\.\d+)?)?"]),
    ("JavaScript", &["javascript", "js"]),
    ("TypeScript", &["typescript", "ts"]),
    ("Java", &["java"]),
    ("C++", &[r"c\+\+", "cpp"]),
    ("C#", &["c#", "csharp"]),
    ("PHP", &["php"]),
    ("Ruby", &["ruby"]),
    ("Go", &["go", "golang"]),
    ("Rust", &["rust"]),
    ("Swift", &["swift"]),
    ("SQL", &["sql"]),
    ("HTML", &[r"html\s*\d?"]),
    ("CSS", &[r"css\s*\d?"]),
];

const TOOL_KEYWORDS: &[(&str, &[&str])] = &[
    ("Git", &["git", "github", "gitlab"]),
    ("Docker", &["docker"]),
    ("Kubernetes", &["kubernetes", "k8s"]),
    ("AWS", &["aws", r"amazon\s+(?:web\s+)?services"]),
    ("Azure", &["azure"]),
    ("GCP", &["gcp", r"google\s+cloud"]),
    ("Jenkins", &["jenkins"]),
    ("Jira", &["jira"]),
    (
        "VS Code",
        &[r"vs\s+code", r"visual\s+studio\s+code", "vscode"],
    ),
    ("npm", &["npm"]),
    ("Figma", &["figma"]),
];

const SOFT_SKILL_KEYWORDS: &[(&str, &[&str])] = &[
    ("Leadership", &["leadership", "leader"]),
    ("Communication", &["communication"]),
    (
        "Problem Solving",
        &[r"problem[\s-]solving", r"problem[\s-]solver"],
    ),
    ("Teamwork", &["teamwork", r"team\s+player"]),
    ("Project Management", &[r"project\s+management"]),
    ("Agile", &["agile"]),
    ("Scrum", &["scrum"]),
];

static FRAMEWORKS: Lazy<Vec<KeywordRule>> = Lazy::new(|| compile(FRAMEWORK_KEYWORDS));
static LANGUAGES: Lazy<Vec<KeywordRule>> = Lazy::new(|| compile(LANGUAGE_KEYWORDS));
static TOOLS: Lazy<Vec<KeywordRule>> = Lazy::new(|| compile(TOOL_KEYWORDS));
static SOFT_SKILLS: Lazy<Vec<KeywordRule>> = Lazy::new(|| compile(SOFT_SKILL_KEYWORDS));

/// A certification keyword and up to 50 characters of the same sentence.
const CERTIFICATION_PATTERN: &str =
    r"(?i)(?:aws certified|azure certified|certified|certification|aws|azure|gcp)[^\n.]{0,50}";

static CERTIFICATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(CERTIFICATION_PATTERN).expect("certification pattern is a valid regex")
});

fn matching(rules: &[KeywordRule], text: &str) -> Vec<String> {
    rules
        .iter()
        .filter(|rule| rule.pattern.is_match(text))
        .map(|rule| rule.name.to_string())
        .collect()
}

fn certifications(text: &str) -> Vec<String> {
    CERTIFICATION
        .find_iter(text)
        .take(MAX_CERTIFICATIONS)
        .map(|m| m.as_str().trim().to_string())
        .filter(|m| !m.is_empty())
        .collect()
}

/// Order-preserving de-duplication.
fn dedupe(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

/// Extracts skills from raw resume text. When nothing at all is recognised a
/// sample profile is returned so the rest of the flow still has data to show.
pub fn extract_skills(text: &str) -> SkillSet {
    let found = SkillSet {
        skills: dedupe(matching(&SOFT_SKILLS, text)),
        languages: dedupe(matching(&LANGUAGES, text)),
        tools: dedupe(matching(&TOOLS, text)),
        frameworks: dedupe(matching(&FRAMEWORKS, text)),
        technical_skills: Vec::new(),
        extracurricular: dedupe(certifications(text)),
    };

    if found.is_empty() {
        debug!("No skills recognised in resume text, using the sample profile");
        return demo::sample_skills();
    }
    found
}
