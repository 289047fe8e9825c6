//! Input events that components respond to.

use serde::{Deserialize, Serialize};

/// Keyboard keys (simplified set for now).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Backspace,
    Delete,
    Tab,
    Space,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    /// A named key this crate has no dedicated variant for.
    Other(String),
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value to a [`Key`].
    ///
    /// The space bar reports `" "` in the DOM; `"Spacebar"` is accepted for
    /// older engines.
    pub fn from_dom(key: &str) -> Self {
        match key {
            " " | "Spacebar" => Key::Space,
            "Enter" => Key::Enter,
            "Escape" | "Esc" => Key::Escape,
            "Backspace" => Key::Backspace,
            "Delete" => Key::Delete,
            "Tab" => Key::Tab,
            "ArrowUp" => Key::Up,
            "ArrowDown" => Key::Down,
            "ArrowLeft" => Key::Left,
            "ArrowRight" => Key::Right,
            "Home" => Key::Home,
            "End" => Key::End,
            "PageUp" => Key::PageUp,
            "PageDown" => Key::PageDown,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => Key::Other(other.to_string()),
                }
            }
        }
    }
}

/// Events a disclosure panel reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisclosureEvent {
    /// Pointer click on the row.
    Activate,
    /// Key pressed while the row has focus.
    KeyDown(Key),
    /// Sibling coordination asks this panel to (un)dim itself.
    SetDimmed(bool),
    /// Collapse without notifying the owner.
    Close,
}

/// Pointer and focus events a sidebar reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarEvent {
    /// Pointer moved over the navigation element.
    PointerEnter,
    /// Pointer left the navigation element.
    PointerLeave,
    /// Focus moved into the navigation element.
    Focus,
    /// Focus left the navigation element.
    Blur,
}

/// Result of handling a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyOutcome {
    /// Whether the host should suppress the key's default action
    /// (e.g. page scroll on Space).
    pub default_prevented: bool,
}
