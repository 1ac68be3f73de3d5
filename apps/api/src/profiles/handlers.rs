//! Axum route handlers for profile link validation.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::lenient;
use crate::profiles::github::GithubValidation;
use crate::profiles::linkedin::{validate_linkedin, LinkedinValidation};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ValidateUrlBody {
    #[serde(default, deserialize_with = "lenient::string")]
    pub url: String,
}

impl ValidateUrlBody {
    fn required(&self, what: &str) -> Result<&str, AppError> {
        let url = self.url.trim();
        if url.is_empty() {
            return Err(AppError::Validation(format!("{what} URL is required")));
        }
        Ok(url)
    }
}

/// POST /api/validate/github
pub async fn handle_validate_github(
    State(state): State<AppState>,
    Json(body): Json<ValidateUrlBody>,
) -> Result<Json<GithubValidation>, AppError> {
    let url = body.required("GitHub")?;
    let result = state.github.validate(url).await?;
    Ok(Json(result))
}

/// POST /api/validate/linkedin
pub async fn handle_validate_linkedin(
    Json(body): Json<ValidateUrlBody>,
) -> Result<Json<LinkedinValidation>, AppError> {
    let url = body.required("LinkedIn")?;
    Ok(Json(validate_linkedin(url)))
}
