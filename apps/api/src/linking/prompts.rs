// LLM prompt templates for the linking module.

/// Link proposal prompt template.
/// Replace: {posts}, {link_types}, {no_formatting_instruction}
pub const LINK_PROMPT_TEMPLATE: &str = r#"You connect related content on a portfolio site. Analyze the posts below and propose directed links between posts that are clearly related.

POSTS:
{posts}

ALLOWED linkType VALUES:
{link_types}

Return JSON only, with this EXACT shape:
{"links": [{"sourceId": "id of the source post", "targetId": "id of the target post", "linkType": "one of the allowed values", "reason": "one sentence of evidence"}]}

RULES:
1. sourceId and targetId must be ids from the list above and must differ
2. Never propose the same (sourceId, targetId, linkType) twice
3. Only propose a link when the excerpts, skills or tags give clear evidence for it
4. If no links are warranted, return {"links": []}

{no_formatting_instruction}"#;
