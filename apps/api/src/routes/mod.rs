pub mod health;

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::errors::GenerationError;
use crate::generation::handlers as generation;
use crate::linking::handlers as linking;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume content API
        .route("/api/v1/resumes/generate", post(generation::handle_generate))
        // Post linking API
        .route("/api/v1/posts/links", post(linking::handle_propose_links))
        .route(
            "/api/v1/posts/links/prompt",
            post(linking::handle_link_prompt),
        )
        .with_state(state)
}

/// CORS policy for the dashboard. Without a configured origin every origin is allowed.
pub fn cors_layer(allowed_origin: Option<&str>) -> Result<CorsLayer, GenerationError> {
    let Some(origin) = allowed_origin else {
        return Ok(CorsLayer::permissive());
    };

    let origin = HeaderValue::from_str(origin).map_err(|_| {
        GenerationError::Configuration(format!("CORS_ALLOWED_ORIGIN is not a valid origin: {origin}"))
    })?;

    Ok(CorsLayer::new()
        .allow_origin([origin])
        .allow_methods(Any)
        .allow_headers(Any))
}
