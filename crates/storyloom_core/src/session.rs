//! Per-session story state: the canonical scene path and a history cursor.

use crate::Scene;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Owned, injectable state container for one playthrough.
///
/// `history` is the authoritative path actually taken: it only ever grows by
/// appending the scene that was current at the moment a choice was committed.
/// `view_index` is a cursor for read-only history browsing; `-1` means the
/// live `current_scene` is displayed. Navigation never mutates `history` or
/// `current_scene`.
///
/// # Examples
///
/// ```
/// use storyloom_core::StorySession;
///
/// let session = StorySession::new();
/// assert!(session.viewed_scene().is_none());
/// assert_eq!(session.view_index(), -1);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorySession {
    current_scene: Option<Scene>,
    history: Vec<Scene>,
    view_index: i64,
}

impl StorySession {
    /// Creates a new empty session in the landing state.
    pub fn new() -> Self {
        Self {
            current_scene: None,
            history: Vec::new(),
            view_index: -1,
        }
    }

    /// The live scene, if the story has started.
    pub fn current_scene(&self) -> Option<&Scene> {
        self.current_scene.as_ref()
    }

    /// The canonical path of scenes already committed.
    pub fn history(&self) -> &[Scene] {
        &self.history
    }

    /// The history cursor; `-1` means the live scene is displayed.
    pub fn view_index(&self) -> i64 {
        self.view_index
    }

    /// True when the user is browsing history rather than the live scene.
    ///
    /// The displayed scene is read-only then; choice submission must be
    /// disabled by the caller.
    pub fn is_browsing(&self) -> bool {
        self.view_index != -1
    }

    /// Installs `scene` as the live scene and snaps the cursor back to live.
    pub fn set_scene(&mut self, scene: Scene) {
        debug!(scene_id = %scene.id, "Installing current scene");
        self.current_scene = Some(scene);
        self.view_index = -1;
    }

    /// Appends `scene` to the canonical history.
    ///
    /// Call this with the previous current scene immediately before
    /// `set_scene` installs its replacement, so history always lags the
    /// live scene by exactly one commit.
    pub fn add_to_history(&mut self, scene: Scene) {
        debug!(scene_id = %scene.id, depth = self.history.len(), "Appending scene to history");
        self.history.push(scene);
    }

    /// Commits an accepted choice: the live scene moves into history and
    /// `next` becomes the new live scene.
    pub fn commit(&mut self, next: Scene) {
        if let Some(previous) = self.current_scene.take() {
            self.add_to_history(previous);
        }
        self.set_scene(next);
    }

    /// Clears all state, returning to the landing state.
    pub fn reset(&mut self) {
        debug!("Resetting story session");
        self.current_scene = None;
        self.history.clear();
        self.view_index = -1;
    }

    /// Moves the cursor one step back into history. No-op at the earliest
    /// position, or when no history has been committed yet.
    pub fn go_back(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let max_index = self.history.len() as i64;
        let effective = if self.view_index == -1 {
            max_index
        } else {
            self.view_index
        };
        self.view_index = (effective - 1).max(0);
    }

    /// Moves the cursor one step forward. Reaching or passing the end snaps
    /// back to live (`-1`), never an out-of-range index.
    pub fn go_forward(&mut self) {
        let max_index = self.history.len() as i64;
        let effective = if self.view_index == -1 {
            max_index
        } else {
            self.view_index
        };
        let next = effective + 1;
        self.view_index = if next >= max_index { -1 } else { next };
    }

    /// Resolves the scene currently displayed: the live scene when the
    /// cursor is `-1`, otherwise the selected history entry.
    pub fn viewed_scene(&self) -> Option<&Scene> {
        if self.view_index == -1 {
            self.current_scene.as_ref()
        } else {
            self.history.get(self.view_index as usize)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Choice;

    fn scene(id: &str) -> Scene {
        Scene {
            id: id.to_string(),
            title: format!("Scene {id}"),
            content: "text".to_string(),
            choices: vec![Choice::new("0", "go"), Choice::new("1", "stay")],
            is_ending: false,
            visual_prompt: None,
        }
    }

    #[test]
    fn set_scene_resets_cursor_to_live() {
        let mut session = StorySession::new();
        session.set_scene(scene("a"));
        session.add_to_history(scene("a"));
        session.go_back();
        assert_eq!(session.view_index(), 0);

        session.set_scene(scene("b"));
        assert_eq!(session.view_index(), -1);
        assert!(!session.is_browsing());
    }

    #[test]
    fn go_back_at_earliest_position_is_noop() {
        let mut session = StorySession::new();
        session.set_scene(scene("a"));
        session.commit(scene("b"));
        session.go_back();
        assert_eq!(session.view_index(), 0);
        session.go_back();
        assert_eq!(session.view_index(), 0);
    }

    #[test]
    fn go_back_with_empty_history_stays_live() {
        let mut session = StorySession::new();
        session.set_scene(scene("a"));
        session.go_back();
        assert_eq!(session.view_index(), -1);
    }

    #[test]
    fn go_forward_past_end_snaps_to_live() {
        let mut session = StorySession::new();
        session.add_to_history(scene("a"));
        session.add_to_history(scene("b"));
        session.set_scene(scene("c"));

        session.go_back();
        session.go_back();
        assert_eq!(session.view_index(), 0);

        session.go_forward();
        assert_eq!(session.view_index(), 1);
        session.go_forward();
        assert_eq!(session.view_index(), -1);
        session.go_forward();
        assert_eq!(session.view_index(), -1);
    }

    #[test]
    fn viewed_scene_follows_cursor() {
        let mut session = StorySession::new();
        session.add_to_history(scene("a"));
        session.set_scene(scene("b"));

        assert_eq!(session.viewed_scene().map(|s| s.id.as_str()), Some("b"));
        session.go_back();
        assert_eq!(session.viewed_scene().map(|s| s.id.as_str()), Some("a"));
        session.go_forward();
        assert_eq!(session.viewed_scene().map(|s| s.id.as_str()), Some("b"));
    }

    #[test]
    fn reset_returns_to_landing_state() {
        let mut session = StorySession::new();
        session.set_scene(scene("a"));
        session.commit(scene("b"));
        session.reset();

        assert!(session.current_scene().is_none());
        assert!(session.history().is_empty());
        assert_eq!(session.view_index(), -1);
    }
}
