//! Keyboard shortcuts for the lightbox.
//!
//! Keys are matched by their `KeyboardEvent.key` names (`"Escape"`,
//! `"ArrowLeft"`, ...), which is also what the native front-end accepts.

use serde::{Deserialize, Serialize};

use crate::lightbox::Direction;

/// Action triggered by a key while the lightbox is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Close the lightbox
    Close,
    /// Move within the lightbox scope
    Navigate(Direction),
}

/// Key names bound to lightbox actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    /// Closes the lightbox
    #[serde(default = "default_close")]
    pub close: String,
    /// Shows the previous image
    #[serde(default = "default_previous")]
    pub previous: String,
    /// Shows the next image
    #[serde(default = "default_next")]
    pub next: String,
}

fn default_close() -> String {
    "Escape".to_string()
}

fn default_previous() -> String {
    "ArrowLeft".to_string()
}

fn default_next() -> String {
    "ArrowRight".to_string()
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            close: default_close(),
            previous: default_previous(),
            next: default_next(),
        }
    }
}

impl KeyBindings {
    /// Get the action bound to a key, if any.
    pub fn action_for_key(&self, key: &str) -> Option<KeyAction> {
        if key == self.close {
            Some(KeyAction::Close)
        } else if key == self.previous {
            Some(KeyAction::Navigate(Direction::Previous))
        } else if key == self.next {
            Some(KeyAction::Navigate(Direction::Next))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.action_for_key("Escape"), Some(KeyAction::Close));
        assert_eq!(
            bindings.action_for_key("ArrowLeft"),
            Some(KeyAction::Navigate(Direction::Previous))
        );
        assert_eq!(
            bindings.action_for_key("ArrowRight"),
            Some(KeyAction::Navigate(Direction::Next))
        );
        assert_eq!(bindings.action_for_key("Enter"), None);
        assert_eq!(bindings.action_for_key("escape"), None);
    }

    #[test]
    fn test_custom_bindings() {
        let bindings = KeyBindings {
            close: "q".to_string(),
            previous: "h".to_string(),
            next: "l".to_string(),
        };
        assert_eq!(bindings.action_for_key("q"), Some(KeyAction::Close));
        assert_eq!(bindings.action_for_key("Escape"), None);
        assert_eq!(
            bindings.action_for_key("l"),
            Some(KeyAction::Navigate(Direction::Next))
        );
    }
}
