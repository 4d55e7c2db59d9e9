//! Post Linker: asks the model for directed relationships between posts.
//!
//! `build_link_prompt` is pure. `propose_links` runs the shared
//! complete → parse → validate pipeline and then enforces the prompt contract
//! (no self-links, no duplicates, no unknown ids) on the reply.

use std::collections::HashSet;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::errors::GenerationError;
use crate::linking::models::{LinkProposal, LinkReply, LinkType, PostSummary};
use crate::linking::prompts::LINK_PROMPT_TEMPLATE;
use crate::llm_client::output::{into_typed, parse_reply};
use crate::llm_client::prompts::{fill_template, NO_FORMATTING_INSTRUCTION};
use crate::llm_client::TextGenerator;

/// Maximum excerpt length, in characters, shown to the model.
pub const EXCERPT_MAX_CHARS: usize = 200;

/// Renders the enumerated post listing and instructions for the model.
pub fn build_link_prompt(posts: &[PostSummary]) -> String {
    let listing = posts
        .iter()
        .enumerate()
        .map(|(i, post)| render_post(i + 1, post))
        .collect::<Vec<_>>()
        .join("\n");

    let link_types = LinkType::ALL
        .iter()
        .map(LinkType::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    fill_template(
        LINK_PROMPT_TEMPLATE,
        &[
            ("posts", listing.as_str()),
            ("link_types", link_types.as_str()),
            ("no_formatting_instruction", NO_FORMATTING_INSTRUCTION),
        ],
    )
}

fn render_post(index: usize, post: &PostSummary) -> String {
    format!(
        "{index}. id: {} | title: {} | type: {}\n   excerpt: {}\n   skills: {}\n   tags: {}",
        post.id,
        post.title,
        post.content_type.as_str(),
        flatten_excerpt(post.excerpt.as_deref().unwrap_or_default()),
        join_or_none(&post.linked_skills),
        join_or_none(&post.tags),
    )
}

/// Replaces each line break (`\n`, `\r\n` or a lone `\r`) with one space and
/// keeps the first `EXCERPT_MAX_CHARS` characters.
pub fn flatten_excerpt(excerpt: &str) -> String {
    excerpt
        .replace("\r\n", "\n")
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .take(EXCERPT_MAX_CHARS)
        .collect()
}

fn join_or_none(values: &[String]) -> String {
    if values.is_empty() {
        "none".to_string()
    } else {
        values.join(", ")
    }
}

/// Proposes links between `posts` with a single model call.
///
/// Fewer than two posts cannot be linked; the model is not called.
pub async fn propose_links(
    llm: &dyn TextGenerator,
    posts: &[PostSummary],
) -> Result<Vec<LinkProposal>, GenerationError> {
    if posts.len() < 2 {
        debug!("Skipping link proposal: {} post(s) supplied", posts.len());
        return Ok(Vec::new());
    }

    info!("Proposing links across {} posts", posts.len());

    let prompt = build_link_prompt(posts);
    let reply = llm
        .complete(&prompt)
        .await
        .map_err(|e| GenerationError::Provider(e.to_string()))?;

    let proposals = interpret_link_reply(&reply)?;
    let links = enforce_link_contract(posts, proposals);

    info!("Accepted {} link proposals", links.len());
    Ok(links)
}

/// Parses and validates a raw model reply into link proposals.
pub fn interpret_link_reply(reply: &str) -> Result<Vec<LinkProposal>, GenerationError> {
    let value = parse_reply(reply)?;
    if !value.get("links").is_some_and(Value::is_array) {
        return Err(GenerationError::Shape(
            "expected a \"links\" array".to_string(),
        ));
    }
    let reply: LinkReply = into_typed(
        value,
        "links must carry sourceId, targetId, reason and a known linkType",
    )?;
    Ok(reply.links)
}

/// Drops self-links, duplicate triples and links to ids not in `posts`.
/// Order of the surviving proposals is preserved.
pub fn enforce_link_contract(
    posts: &[PostSummary],
    proposals: Vec<LinkProposal>,
) -> Vec<LinkProposal> {
    let known_ids: HashSet<&str> = posts.iter().map(|p| p.id.as_str()).collect();
    let mut seen: HashSet<(String, String, LinkType)> = HashSet::new();

    proposals
        .into_iter()
        .filter(|link| {
            if link.source_id == link.target_id {
                warn!("Dropping self-link on {}", link.source_id);
                return false;
            }
            if !known_ids.contains(link.source_id.as_str())
                || !known_ids.contains(link.target_id.as_str())
            {
                warn!(
                    "Dropping link {} -> {} referencing an unknown post",
                    link.source_id, link.target_id
                );
                return false;
            }
            let key = (link.source_id.clone(), link.target_id.clone(), link.link_type);
            if !seen.insert(key) {
                warn!(
                    "Dropping duplicate {} link {} -> {}",
                    link.link_type, link.source_id, link.target_id
                );
                return false;
            }
            true
        })
        .collect()
}
