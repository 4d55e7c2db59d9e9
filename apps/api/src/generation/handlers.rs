//! Axum route handlers for the Generation API.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::generation::generator::{generate_resume, GenerateResumeRequest, ResumeResult};
use crate::state::AppState;

/// POST /api/v1/resumes/generate
///
/// Tailors a summary and per-project descriptions to the job description.
/// Output is model-generated and varies between calls.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateResumeRequest>,
) -> Result<Json<ResumeResult>, AppError> {
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "jobDescription cannot be empty".to_string(),
        ));
    }
    if request.user_profile.name.trim().is_empty() {
        return Err(AppError::Validation(
            "userProfile.name cannot be empty".to_string(),
        ));
    }

    let result = generate_resume(state.llm.as_ref(), &request).await?;

    Ok(Json(result))
}
