//! Axum route handlers for the Linking API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::linking::linker::{build_link_prompt, propose_links};
use crate::linking::models::{LinkProposal, PostSummary};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LinkPostsRequest {
    pub posts: Vec<PostSummary>,
}

#[derive(Debug, Serialize)]
pub struct LinkPromptResponse {
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct LinkPostsResponse {
    pub links: Vec<LinkProposal>,
}

fn validate_posts(posts: &[PostSummary]) -> Result<(), AppError> {
    if let Some(post) = posts.iter().find(|p| p.id.trim().is_empty()) {
        return Err(AppError::Validation(format!(
            "post \"{}\" has an empty id",
            post.title
        )));
    }
    Ok(())
}

/// POST /api/v1/posts/links/prompt
///
/// Returns the prompt that would be sent for these posts, without calling the model.
pub async fn handle_link_prompt(
    Json(request): Json<LinkPostsRequest>,
) -> Result<Json<LinkPromptResponse>, AppError> {
    validate_posts(&request.posts)?;
    Ok(Json(LinkPromptResponse {
        prompt: build_link_prompt(&request.posts),
    }))
}

/// POST /api/v1/posts/links
///
/// Proposes directed links between the supplied posts.
pub async fn handle_propose_links(
    State(state): State<AppState>,
    Json(request): Json<LinkPostsRequest>,
) -> Result<Json<LinkPostsResponse>, AppError> {
    validate_posts(&request.posts)?;
    let links = propose_links(state.llm.as_ref(), &request.posts).await?;
    Ok(Json(LinkPostsResponse { links }))
}
