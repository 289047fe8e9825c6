//! Trigger keys: keyboard keys accepted as equivalent to a pointer click.
//!
//! Each [`TriggerAction`] owns its own key set so that, for example, Escape
//! can close a panel without also being able to open it.

use serde::{Deserialize, Serialize};

use crate::event::Key;

/// An action a trigger key can perform on a disclosure panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerAction {
    /// Reveal the details of a collapsed panel.
    OpenDetails,
    /// Hide the details of an expanded panel.
    CloseDetails,
}

/// Key sets per trigger action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerKeys {
    /// Keys that open a collapsed panel
    #[serde(default = "default_open_details")]
    pub open_details: Vec<Key>,
    /// Keys that close an expanded panel
    #[serde(default = "default_close_details")]
    pub close_details: Vec<Key>,
}

fn default_open_details() -> Vec<Key> {
    vec![Key::Space, Key::Enter]
}

fn default_close_details() -> Vec<Key> {
    vec![Key::Space, Key::Enter, Key::Escape]
}

impl Default for TriggerKeys {
    fn default() -> Self {
        Self {
            open_details: default_open_details(),
            close_details: default_close_details(),
        }
    }
}

impl TriggerKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys bound to an action.
    pub fn keys_for(&self, action: TriggerAction) -> &[Key] {
        match action {
            TriggerAction::OpenDetails => &self.open_details,
            TriggerAction::CloseDetails => &self.close_details,
        }
    }

    /// Whether `key` triggers `action`.
    pub fn is_trigger_key(&self, action: TriggerAction, key: &Key) -> bool {
        self.keys_for(action).contains(key)
    }
}
