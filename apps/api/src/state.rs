use std::sync::Arc;

use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Text generator shared by every component. `LlmClient` in production.
    pub llm: Arc<dyn TextGenerator>,
}
