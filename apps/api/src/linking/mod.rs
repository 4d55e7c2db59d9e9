// Post linking: proposes directed relationships between content posts.
// Shares the llm_client pipeline and error taxonomy with generation.

pub mod handlers;
pub mod linker;
pub mod models;
pub mod prompts;
