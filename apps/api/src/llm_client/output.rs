//! Reply post-processing shared by every component: fence stripping and
//! JSON parsing into the `GenerationError` taxonomy.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::GenerationError;

/// Strips a surrounding ``` fence, with or without a language tag, from LLM output.
///
/// Unfenced text is returned trimmed. Applying it twice gives the same result.
pub fn strip_code_fences(text: &str) -> &str {
    let text = text.trim();
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };

    let after_tag = skip_language_tag(rest);
    let rest = if after_tag.len() != rest.len() {
        after_tag
    } else {
        // ```json{...}``` with no separator
        rest.strip_prefix("json").unwrap_or(rest)
    };

    let rest = rest.trim_start();
    rest.strip_suffix("```").map(str::trim).unwrap_or(rest)
}

/// Skips an info-string such as `JSON` or `jsonc` when a line break follows it.
///
/// A single word alone on the opening fence line is always read as a tag, so a
/// bare scalar document must sit on its own line or share the fence line
/// (`` ```true``` `` keeps `true`).
fn skip_language_tag(rest: &str) -> &str {
    let tag_len = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
        .unwrap_or(rest.len());
    let after_tag = &rest[tag_len..];
    let line_break_follows = after_tag.starts_with('\n') || after_tag.starts_with("\r\n");
    if tag_len > 0 && (after_tag.is_empty() || line_break_follows) {
        after_tag
    } else {
        rest
    }
}

/// Strips fences and parses the reply as an untyped JSON document.
pub fn parse_reply(text: &str) -> Result<Value, GenerationError> {
    serde_json::from_str(strip_code_fences(text)).map_err(|source| GenerationError::Parse { source })
}

/// Converts an already-validated JSON value into its typed form.
/// A mismatch here is a shape problem, not a parse problem.
pub fn into_typed<T: DeserializeOwned>(value: Value, what: &str) -> Result<T, GenerationError> {
    serde_json::from_value(value).map_err(|e| GenerationError::Shape(format!("{what}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_code_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_code_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_code_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_code_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_code_fences_no_fences() {
        let input = "  {\"key\": \"value\"}\n";
        assert_eq!(strip_code_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_code_fences_other_tag() {
        let input = "```JSON\n{\"key\": 1}\n```";
        assert_eq!(strip_code_fences(input), "{\"key\": 1}");
        let input = "```jsonc\n{\"key\": 1}\n```";
        assert_eq!(strip_code_fences(input), "{\"key\": 1}");
    }

    #[test]
    fn test_strip_code_fences_single_line() {
        assert_eq!(strip_code_fences("```{\"key\": 1}```"), "{\"key\": 1}");
        assert_eq!(strip_code_fences("```json{\"key\": 1}```"), "{\"key\": 1}");
        assert_eq!(strip_code_fences("```true```"), "true");
        assert_eq!(strip_code_fences("```true ```"), "true");
        assert_eq!(strip_code_fences("```42```"), "42");
    }

    #[test]
    fn test_strip_code_fences_is_idempotent() {
        let input = "\n\n```json\n  {\"key\": \"value\"}  \n```\n";
        let once = strip_code_fences(input);
        assert_eq!(strip_code_fences(once), once);
    }

    #[test]
    fn test_fenced_and_bare_replies_parse_identically() {
        let inner = r#"{"summary": "Engineer.", "projects": []}"#;
        let fenced_json = format!("```json\n{inner}\n```");
        let fenced_bare = format!("```\n{inner}\n```");
        let unfenced = format!("   {inner}   ");

        let expected = parse_reply(inner).unwrap();
        assert_eq!(parse_reply(&fenced_json).unwrap(), expected);
        assert_eq!(parse_reply(&fenced_bare).unwrap(), expected);
        assert_eq!(parse_reply(&unfenced).unwrap(), expected);
    }

    #[test]
    fn test_not_json_is_parse_error() {
        assert!(matches!(
            parse_reply("not json"),
            Err(GenerationError::Parse { .. })
        ));
        assert!(matches!(
            parse_reply("```json\nnot json\n```"),
            Err(GenerationError::Parse { .. })
        ));
    }

    #[test]
    fn test_into_typed_mismatch_is_shape_error() {
        let value = serde_json::json!({"count": "three"});
        #[derive(Debug, serde::Deserialize)]
        #[allow(dead_code)]
        struct Counted {
            count: u32,
        }
        assert!(matches!(
            into_typed::<Counted>(value, "counted"),
            Err(GenerationError::Shape(_))
        ));
    }
}
