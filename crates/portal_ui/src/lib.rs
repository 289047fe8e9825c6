//! portal_ui - Headless interaction components for the admin portal
//!
//! This crate holds the disclosure panel and the collapsible sidebar as plain
//! state machines. Rendering is left to the host: widgets expose view
//! descriptors (state classes and ARIA attributes) and report everything the
//! owner must react to as messages produced by callbacks.

mod callback;
pub mod constants;
mod event;
mod keys;
mod layout;
mod state;
pub mod widgets;

pub use callback::{Callback, Callback0};
pub use event::{DisclosureEvent, Key, KeyOutcome, SidebarEvent};
pub use keys::{TriggerAction, TriggerKeys};
pub use layout::Bounds;
pub use state::*;

// Re-export widgets
pub use widgets::{disclosure, sidebar, Disclosure, NavItem, Sidebar};

