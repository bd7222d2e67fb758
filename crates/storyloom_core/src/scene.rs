//! Scene and choice types for the branching narrative.

use serde::{Deserialize, Serialize};

/// A labeled option a user can select to advance the story.
///
/// The id is a short token unique within its owning scene, assigned locally
/// from the choice's position. A selected action may also be a free-form
/// string that matches no offered id; providers accept it verbatim.
///
/// # Examples
///
/// ```
/// use storyloom_core::Choice;
///
/// let choice = Choice::new("0", "Enter the glowing portal");
/// assert_eq!(choice.id, "0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Choice {
    /// Short token unique within the owning scene
    pub id: String,
    /// Display label shown to the user
    pub text: String,
}

impl Choice {
    /// Create a new choice.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// One narrative beat: body text plus the choices available from it.
///
/// Scenes are immutable once created and are produced exclusively by a
/// generation provider. The id is minted locally (UUID v4) and never
/// trusted from the model.
///
/// # Examples
///
/// ```
/// use storyloom_core::{Choice, Scene};
///
/// let scene = Scene {
///     id: "a1b2".to_string(),
///     title: "The Beginning".to_string(),
///     content: "The door creaks open.".to_string(),
///     choices: vec![Choice::new("0", "Step inside")],
///     is_ending: false,
///     visual_prompt: None,
/// };
///
/// assert!(!scene.is_ending);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    /// Opaque unique token, generated locally
    pub id: String,
    /// Short dramatic title for the scene
    pub title: String,
    /// Narrative body text
    pub content: String,
    /// Ordered choices offered to the user; empty for endings
    #[serde(default)]
    pub choices: Vec<Choice>,
    /// Whether this scene concludes the story
    #[serde(default)]
    pub is_ending: bool,
    /// Visual description of the scene, for image backends
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual_prompt: Option<String>,
}

impl Scene {
    /// Look up an offered choice by id.
    pub fn choice(&self, id: &str) -> Option<&Choice> {
        self.choices.iter().find(|c| c.id == id)
    }
}
