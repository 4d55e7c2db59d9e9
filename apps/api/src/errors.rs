use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failures raised at the boundary of the generation components.
///
/// Every fault from prompt submission through reply validation is classified
/// into exactly one of these. Nothing is retried internally.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Required setting missing or invalid at construction time.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The outbound model call failed (network, auth, rate limit, provider fault).
    #[error("Failed to generate content: {0}")]
    Provider(String),

    /// The reply could not be interpreted as JSON after fence stripping.
    #[error("Could not interpret model output as structured data")]
    Parse {
        #[source]
        source: serde_json::Error,
    },

    /// The reply parsed but lacks the mandated fields.
    #[error("Model output is missing required fields: {0}")]
    Shape(String),
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Generation(#[from] GenerationError),
}

impl AppError {
    /// Stable machine-readable code for the error body.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Generation(GenerationError::Configuration(_)) => "CONFIGURATION_ERROR",
            AppError::Generation(GenerationError::Provider(_)) => "LLM_PROVIDER_ERROR",
            AppError::Generation(GenerationError::Parse { .. }) => "LLM_PARSE_ERROR",
            AppError::Generation(GenerationError::Shape(_)) => "LLM_SHAPE_ERROR",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.code();
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Generation(GenerationError::Configuration(msg)) => {
                tracing::error!("Configuration error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "The AI service is not configured".to_string(),
                )
            }
            AppError::Generation(e) => {
                match std::error::Error::source(e) {
                    Some(cause) => tracing::error!("{e}: {cause}"),
                    None => tracing::error!("{e}"),
                }
                (StatusCode::BAD_GATEWAY, e.to_string())
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
