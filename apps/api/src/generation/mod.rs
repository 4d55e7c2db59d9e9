// Resume content generation.
// All LLM calls go through llm_client, never directly to Anthropic.

pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod sizing;
