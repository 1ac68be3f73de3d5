//! Dream Role Analyzer: turns a job title into a `RoleRequirement`.

use crate::demo;
use crate::errors::AppError;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::LlmClient;
use crate::models::role::RoleRequirement;
use crate::role::prompts::{ROLE_ANALYSIS_PROMPT_TEMPLATE, ROLE_CALL};

const DEFAULT_EXPERIENCE: &str = "Varies";
const DEFAULT_SALARY: &str = "Market dependent";

/// Where role requirements come from.
#[derive(Clone, Copy)]
pub enum RoleSource<'a> {
    /// Canned full-stack requirement, relabelled with the requested title.
    Demo,
    Llm(&'a LlmClient),
    Unavailable,
}

/// Analyzes `title` into a role requirement.
///
/// Blank titles are rejected; without demo mode or an LLM client the feature
/// is unavailable (503) rather than guessed.
pub async fn analyze_dream_role(
    source: RoleSource<'_>,
    title: &str,
) -> Result<RoleRequirement, AppError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(AppError::Validation("Role title is required".to_string()));
    }

    match source {
        RoleSource::Demo => Ok(demo::sample_role(title)),
        RoleSource::Unavailable => Err(AppError::ServiceUnavailable(
            "Dream role analysis is not configured. Set ANTHROPIC_API_KEY or DEMO_MODE=true"
                .to_string(),
        )),
        RoleSource::Llm(llm) => {
            let prompt = ROLE_ANALYSIS_PROMPT_TEMPLATE.replace("{role_title}", title);
            let role: RoleRequirement = llm
                .call_json(&prompt, JSON_ONLY_SYSTEM, &ROLE_CALL)
                .await
                .map_err(|e| AppError::Llm(format!("Dream role analysis failed: {e}")))?;
            Ok(sanitize(role, title))
        }
    }
}

/// Fills the fields the model left blank. Lists and `level` are already
/// defaulted during deserialization.
fn sanitize(mut role: RoleRequirement, title: &str) -> RoleRequirement {
    fill_blank(&mut role.role, title);
    fill_blank(&mut role.experience, DEFAULT_EXPERIENCE);
    fill_blank(&mut role.avg_salary, DEFAULT_SALARY);
    role
}

fn fill_blank(field: &mut String, fallback: &str) {
    if field.trim().is_empty() {
        *field = fallback.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::role::RoleLevel;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[tokio::test]
    async fn test_blank_title_is_rejected_before_anything_else() {
        let err = analyze_dream_role(RoleSource::Demo, "   ")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_demo_role_uses_trimmed_title() {
        let role = analyze_dream_role(RoleSource::Demo, "  Data Engineer ")
            .await
            .unwrap();
        assert_eq!(role.role, "Data Engineer");
        assert!(!role.frameworks.is_empty());
    }

    #[tokio::test]
    async fn test_unavailable_without_llm_is_503() {
        let err = analyze_dream_role(RoleSource::Unavailable, "Data Engineer")
            .await
            .unwrap_err();
        assert_eq!(
            err.into_response().status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_sanitize_fills_blank_fields() {
        let role: RoleRequirement = serde_json::from_str(
            r#"{"role": "", "level": "Principal", "tools": "Docker", "experience": null}"#,
        )
        .unwrap();
        let role = sanitize(role, "Staff Engineer");
        assert_eq!(role.role, "Staff Engineer");
        assert_eq!(role.level, RoleLevel::Lead);
        assert!(role.tools.is_empty());
        assert_eq!(role.experience, "Varies");
        assert_eq!(role.avg_salary, "Market dependent");
        assert_eq!(role.growth_path, "");
    }

    #[test]
    fn test_sanitize_keeps_model_values() {
        let role = RoleRequirement {
            role: "ML Engineer".to_string(),
            experience: "3-5 years".to_string(),
            avg_salary: "$150,000".to_string(),
            ..Default::default()
        };
        let role = sanitize(role, "ml engineer");
        assert_eq!(role.role, "ML Engineer");
        assert_eq!(role.experience, "3-5 years");
    }
}
