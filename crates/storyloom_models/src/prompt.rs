//! Prompt assembly for the three-scene narrative structure.

use crate::FINAL_SCENE_POSITION;
use storyloom_core::Scene;

const STYLE_RULES: &str = "### WRITING STYLE (CRITICAL):
- Use simple, modern language.
- Prefer short sentences.
- Avoid rare, academic, or literary words.
- Write like a cinematic screenplay, not a novel.
- One clear image or action per sentence.";

const STRUCTURE_RULES: &str = "### STRUCTURE RULES:
- Scene 1: Introduce the world and the conflict.
- Scene 2: The choice that changes everything.
- Scene 3: The final confrontation and resolution.";

/// Resolve a selected action against the last scene's offered choices.
///
/// An id that matches no offered choice is taken verbatim as the user's
/// free-text action ("custom thought").
///
/// # Examples
///
/// ```
/// use storyloom_core::{Choice, Scene};
/// use storyloom_models::resolve_action;
///
/// let scene = Scene {
///     id: "s".into(),
///     title: "t".into(),
///     content: "c".into(),
///     choices: vec![Choice::new("0", "Open the hatch")],
///     is_ending: false,
///     visual_prompt: None,
/// };
///
/// assert_eq!(resolve_action(&scene, "0"), "Open the hatch");
/// assert_eq!(resolve_action(&scene, "swim for shore"), "swim for shore");
/// ```
pub fn resolve_action<'a>(last_scene: &'a Scene, choice_id: &'a str) -> &'a str {
    last_scene
        .choice(choice_id)
        .map(|c| c.text.as_str())
        .unwrap_or(choice_id)
}

/// Pacing hint derived from how long the user took to decide.
fn timing_context(elapsed_seconds: Option<f64>) -> &'static str {
    match elapsed_seconds {
        Some(t) if t < 3.0 => "User chose IMMEDIATELY (impulsive, rash, confident).",
        Some(t) if t > 8.0 => {
            "User HESITATED for a long time (fearful, thoughtful, or uncertain)."
        }
        _ => "",
    }
}

/// Build the instruction payload for the opening scene.
///
/// Fixes the story to exactly three scenes, constrains tone and style, and
/// requests a structured JSON reply with a title, body, exactly two choices,
/// and a visual description.
pub fn opening_prompt(premise: &str, genre: &str) -> String {
    format!(
        r#"You are a creative interactive storyteller.
Create the opening scene of a {genre} story based on this prompt: "{premise}".

{STYLE_RULES}

### CRITICAL OUTPUT RULES:
1. Tokenization: ensure EVERY word is separated by whitespace.
2. Sanitization: NEVER output the literal string "undefined".
3. Grammar: review spacing carefully. "The ir" is wrong; "Their" is correct.

{STRUCTURE_RULES}

### Guidelines:
1. Structure: this story must conclude in exactly {FINAL_SCENE_POSITION} scenes. This is Scene 1.
2. Length: write a complete, immersive scene (approx 200 words).
3. Pacing: establishing but engaging.
4. Foreshadowing: drop a subtle hint about a future threat.

Return ONLY a JSON object with this structure:
{{
  "title": "A short, dramatic title for this scene",
  "content": "The narrative description...",
  "choices": [
    {{ "text": "First choice" }},
    {{ "text": "Second choice" }}
  ],
  "visualPrompt": "Detailed visual description (no text)"
}}"#
    )
}

/// Build the instruction payload for a continuation scene.
///
/// `position` is the 1-based position of the scene about to be generated
/// (`history.len() + 1`). At the final position the prompt demands a
/// wrapped-up ending with no choices; the caller additionally enforces that
/// override on the parsed reply.
pub fn continuation_prompt(
    history: &[Scene],
    action: &str,
    position: usize,
    elapsed_seconds: Option<f64>,
) -> String {
    let previous_context = history
        .iter()
        .map(|scene| scene.content.as_str())
        .collect::<Vec<_>>()
        .join("\n---\n");

    let ending_logic = if position >= FINAL_SCENE_POSITION {
        r#"THIS IS THE FINAL SCENE. You MUST wrap up the story now.
- "isEnding": true
- "choices": [] (an empty array)
- "content": write a dramatic, satisfying conclusion.
- End with a clear final beat or realization.
- The last sentence must change how the reader sees the story.
- Do NOT end mid-action. This is the conclusion."#
    } else {
        r#"The story continues.
- "isEnding": false
- "choices": provide 2 interesting options."#
    };

    format!(
        r#"Continue this story.

{STYLE_RULES}

{STRUCTURE_RULES}

### Pacing & Structure:
- Current progress: Scene {position} of {FINAL_SCENE_POSITION}.
- Ending logic:
{ending_logic}

### CRITICAL OUTPUT RULES:
1. Spacing: check that no words are merged. "The y" is wrong; "They" is correct.
2. Output: STRICTLY prevent the word "undefined" from appearing.
3. Timing: {timing} Reflect this in the narrative.

Previous context:
{previous_context}

User action/thought: "{action}"

Return ONLY a JSON object with:
{{
  "title": "Dramatic title",
  "content": "Narrative...",
  "choices": [ {{ "text": "Option 1" }}, {{ "text": "Option 2" }} ],
  "isEnding": boolean,
  "visualPrompt": "Visual description"
}}"#,
        timing = timing_context(elapsed_seconds),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use storyloom_core::Choice;

    fn scene(content: &str) -> Scene {
        Scene {
            id: "s".to_string(),
            title: "t".to_string(),
            content: content.to_string(),
            choices: vec![Choice::new("0", "Push forward"), Choice::new("1", "Retreat")],
            is_ending: false,
            visual_prompt: None,
        }
    }

    #[test]
    fn opening_prompt_embeds_premise_and_genre() {
        let prompt = opening_prompt("a lonely lighthouse keeper", "mystery");
        assert!(prompt.contains("a lonely lighthouse keeper"));
        assert!(prompt.contains("mystery story"));
        assert!(prompt.contains("exactly 3 scenes"));
    }

    #[test]
    fn continuation_prompt_joins_history_with_separator() {
        let history = vec![scene("First beat."), scene("Second beat.")];
        let prompt = continuation_prompt(&history, "Retreat", 3, None);
        assert!(prompt.contains("First beat.\n---\nSecond beat."));
        assert!(prompt.contains("Scene 3 of 3"));
        assert!(prompt.contains("FINAL SCENE"));
    }

    #[test]
    fn non_final_position_requests_two_options() {
        let history = vec![scene("Opening.")];
        let prompt = continuation_prompt(&history, "Push forward", 2, None);
        assert!(prompt.contains("provide 2 interesting options"));
        assert!(!prompt.contains("FINAL SCENE"));
    }

    #[test]
    fn pacing_hint_reflects_decision_speed() {
        let history = vec![scene("Opening.")];
        let fast = continuation_prompt(&history, "go", 2, Some(1.0));
        assert!(fast.contains("IMMEDIATELY"));

        let slow = continuation_prompt(&history, "go", 2, Some(12.0));
        assert!(slow.contains("HESITATED"));

        let neutral = continuation_prompt(&history, "go", 2, Some(5.0));
        assert!(!neutral.contains("IMMEDIATELY"));
        assert!(!neutral.contains("HESITATED"));
    }

    #[test]
    fn boundary_timings_add_no_hint() {
        let history = vec![scene("Opening.")];
        for boundary in [3.0, 8.0] {
            let prompt = continuation_prompt(&history, "go", 2, Some(boundary));
            assert!(!prompt.contains("IMMEDIATELY"));
            assert!(!prompt.contains("HESITATED"));
        }
    }

    #[test]
    fn free_text_action_passes_through_verbatim() {
        let s = scene("Opening.");
        assert_eq!(resolve_action(&s, "1"), "Retreat");
        assert_eq!(resolve_action(&s, "climb the mast"), "climb the mast");
    }
}
