pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::profiles::handlers as profiles;
use crate::resume::handlers as resume;
use crate::roadmap::handlers as roadmap;
use crate::role::handlers as role;
use crate::skills::handlers as skills;
use crate::state::AppState;

/// Room for multipart boundaries and headers on top of the file itself.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes + MULTIPART_OVERHEAD_BYTES;

    Router::new()
        .route("/api/health", get(health::health_handler))
        // Resume + role analysis
        .route(
            "/api/upload",
            post(resume::handle_upload).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route(
            "/api/analyze-dream-role",
            post(role::handle_analyze_dream_role),
        )
        // Gap analysis + roadmap
        .route("/api/skill-gaps", post(skills::handle_skill_gaps))
        .route("/api/roadmap", post(roadmap::handle_roadmap))
        .route("/api/roadmap/normalize", post(roadmap::handle_normalize))
        // Profile links
        .route(
            "/api/validate/github",
            post(profiles::handle_validate_github),
        )
        .route(
            "/api/validate/linkedin",
            post(profiles::handle_validate_linkedin),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::profiles::github::GithubValidator;
    use crate::resume::docx::tests::docx_with_paragraphs;
    use crate::roadmap::planner::LocalRoadmapPlanner;
    use crate::skills::matcher::SkillMatcher;
    use crate::skills::synonyms::SynonymTable;

    const BOUNDARY: &str = "launchpad-test-boundary";

    fn state_with(config: Config) -> AppState {
        let matcher = SkillMatcher::new(Arc::new(SynonymTable::builtin()));
        AppState {
            config,
            llm: None,
            planner: Arc::new(LocalRoadmapPlanner::new(matcher.clone())),
            matcher,
            github: GithubValidator::new(None).unwrap(),
        }
    }

    fn app() -> Router {
        build_router(state_with(Config::offline()))
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn post_upload(
        field: &str,
        content_type: &str,
        file_name: &str,
        data: &[u8],
    ) -> Request<Body> {
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; \
                 filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri("/api/upload")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    fn sample_skills() -> Value {
        json!({
            "frameworks": ["React"],
            "languages": ["Python"],
            "tools": ["Git"],
            "skills": ["Communication"]
        })
    }

    #[tokio::test]
    async fn test_health_reports_offline_integrations() {
        let request = Request::builder()
            .uri("/api/health")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["llm"], false);
        assert_eq!(body["planner"], "local");
    }

    #[tokio::test]
    async fn test_roadmap_without_llm_is_local_and_complete() {
        let (status, body) = send(
            app(),
            post_json("/api/roadmap", json!({ "skills": sample_skills() })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source"], "local");
        assert_eq!(body["milestones"].as_array().unwrap().len(), 15);
        assert!(body.get("skillGaps").is_none());
    }

    #[tokio::test]
    async fn test_roadmap_with_dream_role_includes_gaps() {
        let (status, body) = send(
            app(),
            post_json(
                "/api/roadmap",
                json!({
                    "skills": sample_skills(),
                    "profileData": {
                        "githubValid": true,
                        "linkedInValid": false,
                        "dreamRole": {
                            "role": "Frontend Engineer",
                            "frameworks": ["React", "Vue"],
                            "languages": ["Python", "Java"]
                        }
                    }
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["skillGaps"]["matchPercentage"], 50);
        assert_eq!(body["skillGaps"]["missingFrameworks"], json!(["Vue"]));
        assert_eq!(body["milestones"][0]["title"], "Learn Vue");
        assert!(body["progressKey"].as_str().unwrap().starts_with("Learn Vue|"));
    }

    #[tokio::test]
    async fn test_roadmap_requires_skills() {
        let (status, body) = send(app(), post_json("/api/roadmap", json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], "Skills data is required");
    }

    #[tokio::test]
    async fn test_normalize_repairs_array() {
        let (status, body) = send(
            app(),
            post_json(
                "/api/roadmap/normalize",
                json!({ "milestones": [{"title": "Ship", "days": "40"}, null] }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let milestones = body["milestones"].as_array().unwrap();
        assert_eq!(milestones.len(), 15);
        assert_eq!(
            milestones[0],
            json!({"title": "Ship", "description": "", "days": 7})
        );
        assert_eq!(milestones[1]["title"], "Task");
        assert!(body["progressKey"].as_str().unwrap().starts_with("Ship|Task|"));
    }

    #[tokio::test]
    async fn test_normalize_rejects_non_array() {
        let (status, body) = send(
            app(),
            post_json(
                "/api/roadmap/normalize",
                json!({ "milestones": {"title": "x"} }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INVALID_ARGUMENT");
    }

    #[tokio::test]
    async fn test_skill_gaps_endpoint() {
        let (status, body) = send(
            app(),
            post_json(
                "/api/skill-gaps",
                json!({
                    "skills": {"frameworks": ["reactjs"], "tools": ["k8s"]},
                    "dreamRole": {
                        "role": "Platform Engineer",
                        "frameworks": ["React.js"],
                        "tools": ["Kubernetes", "Terraform"]
                    }
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["matchedSkills"], json!(["Kubernetes", "React.js"]));
        assert_eq!(body["missingTools"], json!(["Terraform"]));
        assert_eq!(body["totalGaps"], 1);
        assert_eq!(body["matchPercentage"], 67);
    }

    #[tokio::test]
    async fn test_skill_gaps_requires_role() {
        let (status, _) = send(
            app(),
            post_json(
                "/api/skill-gaps",
                json!({ "skills": sample_skills(), "dreamRole": {} }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_dream_role_empty_title_is_400() {
        let (status, body) = send(
            app(),
            post_json("/api/analyze-dream-role", json!({ "roleTitle": "  " })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Role title is required");
    }

    #[tokio::test]
    async fn test_dream_role_without_llm_is_503() {
        let (status, body) = send(
            app(),
            post_json("/api/analyze-dream-role", json!({ "roleTitle": "SRE" })),
        )
        .await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"]["code"], "SERVICE_UNAVAILABLE");
    }

    #[tokio::test]
    async fn test_dream_role_in_demo_mode() {
        let config = Config {
            demo_mode: true,
            ..Config::offline()
        };
        let (status, body) = send(
            build_router(state_with(config)),
            post_json(
                "/api/analyze-dream-role",
                json!({ "roleTitle": "Data Engineer" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["role"], "Data Engineer");
        assert_eq!(body["level"], "Mid");
    }

    #[tokio::test]
    async fn test_validate_linkedin() {
        let (status, body) = send(
            app(),
            post_json(
                "/api/validate/linkedin",
                json!({ "url": "https://linkedin.com/in/jane-doe" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["valid"], true);
        assert_eq!(body["profileUrl"], "https://www.linkedin.com/in/jane-doe");
    }

    #[tokio::test]
    async fn test_validate_requires_url() {
        let (status, _) = send(app(), post_json("/api/validate/linkedin", json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let (status, _) = send(app(), post_json("/api/validate/github", json!({"url": ""}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_upload_plain_text_resume() {
        let resume = b"Frontend engineer: React, TypeScript, Docker. Strong communication.";
        let request = post_upload("resume", "text/plain", "cv.txt", resume);
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["frameworks"], json!(["React"]));
        assert_eq!(body["tools"], json!(["Docker"]));
        assert_eq!(body["analysis"]["experienceLevel"], "Mid");
    }

    #[tokio::test]
    async fn test_upload_docx_resume() {
        let resume = docx_with_paragraphs(&[
            "Platform engineer",
            "Kubernetes, Docker and Go in production",
        ]);
        let (status, body) = send(
            app(),
            post_upload("resume", "application/octet-stream", "cv.docx", &resume),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["tools"], json!(["Docker", "Kubernetes"]));
        assert_eq!(body["languages"], json!(["Go"]));
    }

    #[tokio::test]
    async fn test_upload_legacy_doc_is_unsupported() {
        let (status, body) = send(
            app(),
            post_upload(
                "resume",
                "application/msword",
                "cv.doc",
                b"\xd0\xcf\x11\xe0",
            ),
        )
        .await;
        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(body["error"]["code"], "UNSUPPORTED_MEDIA_TYPE");
    }

    #[tokio::test]
    async fn test_upload_without_resume_field() {
        let (status, body) = send(
            app(),
            post_upload(
                "avatar",
                "text/plain",
                "cv.txt",
                b"React developer with many years",
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "No resume file provided");
    }

    #[tokio::test]
    async fn test_upload_unsupported_type() {
        let (status, _) = send(
            app(),
            post_upload("resume", "image/png", "cv.png", b"\x89PNG"),
        )
        .await;
        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[tokio::test]
    async fn test_upload_too_little_text() {
        let (status, _) = send(
            app(),
            post_upload("resume", "text/plain", "cv.txt", b"too short"),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_upload_over_limit() {
        let config = Config {
            max_upload_bytes: 64,
            ..Config::offline()
        };
        let resume = "React developer. ".repeat(10);
        let (status, body) = send(
            build_router(state_with(config)),
            post_upload("resume", "text/plain", "cv.txt", resume.as_bytes()),
        )
        .await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body["error"]["code"], "PAYLOAD_TOO_LARGE");
    }
}
