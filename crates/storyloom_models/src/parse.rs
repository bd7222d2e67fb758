//! Extraction and assembly of scenes from model replies.
//!
//! Replies are requested as JSON but may arrive wrapped in markdown code
//! fences or surrounded by prose. Extraction tries fences first, then the
//! first balanced object literal.

use crate::Sanitizer;
use serde::Deserialize;
use storyloom_core::{Choice, Scene};
use storyloom_error::{GenerationError, GenerationErrorKind, StoryloomResult};
use uuid::Uuid;

/// The structured reply a model is asked to produce.
///
/// Every field is lenient: the scene assembly decides what is required and
/// what falls back to a default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSceneReply {
    /// Scene title, falls back to a provider default when missing
    #[serde(default)]
    pub title: Option<String>,
    /// Narrative body text; required
    #[serde(default)]
    pub content: Option<String>,
    /// Offered choices; labels only, ids are assigned locally
    #[serde(default)]
    pub choices: Vec<RawChoice>,
    /// Model-declared ending flag
    #[serde(default)]
    pub is_ending: bool,
    /// Visual description of the scene
    #[serde(default)]
    pub visual_prompt: Option<String>,
}

/// A choice as the model emits it: display text only.
#[derive(Debug, Clone, Deserialize)]
pub struct RawChoice {
    /// Display label
    pub text: String,
}

/// Extract a JSON object from a reply that may contain markdown or prose.
///
/// Strategies, in order: ```json code fences, then the first balanced
/// `{ ... }` literal.
///
/// # Errors
///
/// Returns a `GenerationError` when no JSON object is found.
///
/// # Examples
///
/// ```
/// use storyloom_models::extract_json;
///
/// let reply = "Here you go:\n```json\n{\"title\": \"Dawn\"}\n```\n";
/// assert_eq!(extract_json(reply).unwrap(), "{\"title\": \"Dawn\"}");
/// ```
pub fn extract_json(reply: &str) -> StoryloomResult<String> {
    if let Some(json) = extract_from_code_block(reply) {
        return Ok(json);
    }

    if let Some(json) = extract_balanced(reply) {
        return Ok(json);
    }

    tracing::error!(reply_length = reply.len(), "No JSON found in model reply");
    Err(GenerationError::new(GenerationErrorKind::NoJsonFound(format!(
        "reply length {}",
        reply.len()
    )))
    .into())
}

/// Pull content out of a ```json fenced block (or a bare ``` fence).
fn extract_from_code_block(reply: &str) -> Option<String> {
    let start = reply.find("```")?;
    let after_fence = &reply[start + 3..];

    // Skip a language tag on the fence line.
    let body_start = after_fence.find('\n')? + 1;
    let body = &after_fence[body_start..];
    let end = body.find("```")?;

    let candidate = body[..end].trim();
    if candidate.starts_with('{') {
        Some(candidate.to_string())
    } else {
        None
    }
}

/// Pull the first balanced `{ ... }` literal out of free-form text.
///
/// Brace counting respects string literals and escapes so braces inside
/// generated prose do not unbalance the scan.
fn extract_balanced(reply: &str) -> Option<String> {
    let start = reply.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in reply[start..].char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' if in_string => escaped = true,
            '"' => in_string = !in_string,
            '{' if !in_string => depth += 1,
            '}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(reply[start..start + offset + 1].to_string());
                }
            }
            _ => {}
        }
    }
    None
}

/// Assemble a [`Scene`] from a raw model reply.
///
/// The scene id is minted locally, never trusted from the model. Body text
/// is sanitized; titles and choice labels are not. When `force_ending` is
/// set the scene ends with no choices regardless of what the model said;
/// a model-declared ending before that point passes through unsuppressed.
///
/// # Errors
///
/// Returns a `GenerationError` when no JSON is found, the JSON does not
/// deserialize, body content is missing/empty after sanitation, or a
/// non-ending reply offers no choices.
pub fn scene_from_reply(
    reply: &str,
    sanitizer: &Sanitizer,
    force_ending: bool,
    fallback_title: &str,
) -> StoryloomResult<Scene> {
    let json = extract_json(reply)?;

    let raw: RawSceneReply = serde_json::from_str(&json).map_err(|e| {
        tracing::error!(error = %e, "Scene reply failed to deserialize");
        GenerationError::new(GenerationErrorKind::UnparsableReply(e.to_string()))
    })?;

    let content = raw
        .content
        .as_deref()
        .map(|text| sanitizer.clean(text))
        .filter(|text| !text.is_empty())
        .ok_or_else(|| {
            GenerationError::new(GenerationErrorKind::MissingField("content".to_string()))
        })?;

    let is_ending = force_ending || raw.is_ending;
    let choices: Vec<Choice> = if is_ending {
        Vec::new()
    } else {
        raw.choices
            .into_iter()
            .enumerate()
            .map(|(i, c)| Choice::new(i.to_string(), c.text))
            .collect()
    };

    // A non-ending scene with no choices is a dead end the user cannot
    // advance from; treat it as a malformed reply.
    if !is_ending && choices.is_empty() {
        return Err(GenerationError::new(GenerationErrorKind::MissingField(
            "choices".to_string(),
        ))
        .into());
    }

    Ok(Scene {
        id: Uuid::new_v4().to_string(),
        title: raw
            .title
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| fallback_title.to_string()),
        content,
        choices,
        is_ending,
        visual_prompt: raw.visual_prompt,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPLY: &str = r#"{
        "title": "The Hatch",
        "content": "Salt wind cuts the deck.",
        "choices": [{ "text": "Descend" }, { "text": "Wait" }],
        "isEnding": false,
        "visualPrompt": "a rusted hatch on a trawler deck"
    }"#;

    #[test]
    fn extracts_from_json_code_fence() {
        let wrapped = format!("Sure, here's the scene:\n```json\n{REPLY}\n```\nEnjoy!");
        let json = extract_json(&wrapped).unwrap();
        assert!(json.starts_with('{'));
        assert!(json.contains("The Hatch"));
    }

    #[test]
    fn extracts_balanced_object_from_prose() {
        let wrapped = format!("The scene follows. {REPLY} That is all.");
        let json = extract_json(&wrapped).unwrap();
        assert!(json.contains("visualPrompt"));
        assert!(json.ends_with('}'));
    }

    #[test]
    fn braces_inside_strings_do_not_unbalance_the_scan() {
        let reply = r#"{"title": "Braces {inside} text", "content": "ok"}"#;
        let json = extract_json(reply).unwrap();
        assert_eq!(json, reply);
    }

    #[test]
    fn missing_json_is_a_generation_error() {
        assert!(extract_json("no structure here at all").is_err());
        assert!(extract_json("").is_err());
    }

    #[test]
    fn assembles_scene_with_local_ids() {
        let sanitizer = Sanitizer::new();
        let scene = scene_from_reply(REPLY, &sanitizer, false, "fallback").unwrap();
        assert_eq!(scene.title, "The Hatch");
        assert_eq!(scene.choices.len(), 2);
        assert_eq!(scene.choices[0].id, "0");
        assert_eq!(scene.choices[1].id, "1");
        assert!(!scene.is_ending);
        assert!(!scene.id.is_empty());
    }

    #[test]
    fn forced_ending_overrides_model_output() {
        let sanitizer = Sanitizer::new();
        let scene = scene_from_reply(REPLY, &sanitizer, true, "fallback").unwrap();
        assert!(scene.is_ending);
        assert!(scene.choices.is_empty());
    }

    #[test]
    fn model_declared_ending_passes_through() {
        let reply = r#"{"title": "End", "content": "It is done.", "isEnding": true}"#;
        let sanitizer = Sanitizer::new();
        let scene = scene_from_reply(reply, &sanitizer, false, "fallback").unwrap();
        assert!(scene.is_ending);
        assert!(scene.choices.is_empty());
    }

    #[test]
    fn missing_title_uses_fallback() {
        let reply = r#"{"content": "Something happens.", "choices": [{"text": "Go"}]}"#;
        let sanitizer = Sanitizer::new();
        let scene = scene_from_reply(reply, &sanitizer, false, "The Next Chapter").unwrap();
        assert_eq!(scene.title, "The Next Chapter");
    }

    #[test]
    fn non_ending_reply_without_choices_is_rejected() {
        let sanitizer = Sanitizer::new();
        let omitted = r#"{"title": "T", "content": "The door opens."}"#;
        assert!(scene_from_reply(omitted, &sanitizer, false, "x").is_err());

        let emptied = r#"{"title": "T", "content": "The door opens.", "choices": []}"#;
        assert!(scene_from_reply(emptied, &sanitizer, false, "x").is_err());

        // A forced ending with the same reply is still fine.
        assert!(scene_from_reply(omitted, &sanitizer, true, "x").is_ok());
    }

    #[test]
    fn missing_content_is_an_error() {
        let reply = r#"{"title": "Empty"}"#;
        let sanitizer = Sanitizer::new();
        assert!(scene_from_reply(reply, &sanitizer, false, "x").is_err());
    }

    #[test]
    fn body_text_is_sanitized() {
        let reply = r#"{"title": "T", "content": "TheyWalked...undefined here"}"#;
        let sanitizer = Sanitizer::new();
        let scene = scene_from_reply(reply, &sanitizer, true, "x").unwrap();
        assert_eq!(scene.content, "They Walked... here");
    }
}
