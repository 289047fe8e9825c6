//! Component state types and their pure transition functions.
//!
//! State here never touches callbacks or rendering. A transition takes the
//! current state plus an event and returns the next state together with the
//! list of effects the owning widget must carry out.

use crate::event::{DisclosureEvent, Key, SidebarEvent};
use crate::keys::{TriggerAction, TriggerKeys};

// =============================================================================
// Disclosure
// =============================================================================

/// State owned by a single disclosure panel.
///
/// Invariant: `dimmed` is `false` whenever `expanded` is `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisclosureState {
    /// Whether the detail panel is visible
    pub expanded: bool,
    /// Whether the panel renders with reduced prominence
    pub dimmed: bool,
}

/// Side effects requested by a disclosure transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisclosureEffect {
    /// Suppress the default action of the key that caused the transition.
    PreventDefault,
    /// The panel became expanded; notify the owner.
    NotifyExpanded,
    /// The panel became collapsed; notify the owner.
    NotifyCollapsed,
}

/// Result of a disclosure transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: DisclosureState,
    pub effects: Vec<DisclosureEffect>,
}

impl Transition {
    fn unchanged(state: DisclosureState) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }
}

impl DisclosureState {
    /// Initial state: collapsed and not dimmed.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expanded() -> Self {
        Self {
            expanded: true,
            dimmed: false,
        }
    }

    /// Flip `expanded`, clear `dimmed` and report the direction of the change.
    pub fn toggled(self) -> Transition {
        let expanded = !self.expanded;
        let notify = if expanded {
            DisclosureEffect::NotifyExpanded
        } else {
            DisclosureEffect::NotifyCollapsed
        };
        Transition {
            state: DisclosureState {
                expanded,
                dimmed: false,
            },
            effects: vec![notify],
        }
    }

    /// The action a key would perform in the current state, if any.
    pub fn key_action(&self, keys: &TriggerKeys, key: &Key) -> Option<TriggerAction> {
        let action = if self.expanded {
            TriggerAction::CloseDetails
        } else {
            TriggerAction::OpenDetails
        };
        keys.is_trigger_key(action, key).then_some(action)
    }

    /// Compute the next state for `event`.
    pub fn transition(self, event: &DisclosureEvent, keys: &TriggerKeys) -> Transition {
        match event {
            DisclosureEvent::Activate => self.toggled(),
            DisclosureEvent::KeyDown(key) => match self.key_action(keys, key) {
                Some(_) => {
                    let mut next = self.toggled();
                    next.effects.insert(0, DisclosureEffect::PreventDefault);
                    next
                }
                None => Transition::unchanged(self),
            },
            // An expanded panel never dims itself.
            DisclosureEvent::SetDimmed(_) if self.expanded => Transition::unchanged(self),
            DisclosureEvent::SetDimmed(dimmed) => Transition::unchanged(DisclosureState {
                expanded: false,
                dimmed: *dimmed,
            }),
            DisclosureEvent::Close => Transition::unchanged(DisclosureState::default()),
        }
    }
}

// =============================================================================
// Sidebar
// =============================================================================

/// Who is holding the sidebar open.
///
/// `Pinned` always wins over `Hover`: a pinned sidebar is never collapsed by
/// transient pointer or focus interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpansionSource {
    /// Collapsed
    #[default]
    None,
    /// Expanded because the pointer or focus is inside it
    Hover,
    /// Held open by an explicit toggle elsewhere in the layout
    Pinned,
}

impl ExpansionSource {
    pub fn is_expanded(&self) -> bool {
        !matches!(self, ExpansionSource::None)
    }

    pub fn is_pinned(&self) -> bool {
        matches!(self, ExpansionSource::Pinned)
    }
}

/// Externally owned inputs of a sidebar. The sidebar only reads these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SidebarProps {
    pub expansion: ExpansionSource,
    pub is_mobile: bool,
}

/// Side effects requested by the sidebar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SidebarEffect {
    /// Ask the owner to expand the sidebar.
    RequestExpand,
    /// Ask the owner to collapse the sidebar.
    RequestCollapse,
    /// Tell the owner the rendered width of the navigation element.
    ReportWidth(f32),
}

impl SidebarProps {
    pub fn new(expansion: ExpansionSource, is_mobile: bool) -> Self {
        Self {
            expansion,
            is_mobile,
        }
    }

    /// Expanded for any reason (hover or pin).
    pub fn effective_expanded(&self) -> bool {
        self.expansion.is_expanded()
    }

    pub fn is_pinned(&self) -> bool {
        self.expansion.is_pinned()
    }

    /// Collapse is only auto-triggered when expanded and not pinned.
    pub fn should_collapse(&self) -> bool {
        self.effective_expanded() && !self.is_pinned()
    }

    /// Transient expansion always gets a shadow; pinned expansion only on mobile.
    pub fn has_shadow(&self) -> bool {
        !self.is_pinned() || (self.is_mobile && self.effective_expanded())
    }

    /// The request, if any, a pointer or focus event produces.
    pub fn interaction(&self, event: &SidebarEvent) -> Option<SidebarEffect> {
        match event {
            SidebarEvent::PointerEnter | SidebarEvent::Focus => {
                (!self.effective_expanded()).then_some(SidebarEffect::RequestExpand)
            }
            SidebarEvent::PointerLeave | SidebarEvent::Blur => {
                self.should_collapse().then_some(SidebarEffect::RequestCollapse)
            }
        }
    }

    /// Whether moving from `prev` to `next` requires re-measuring the width.
    pub fn needs_width_report(prev: &SidebarProps, next: &SidebarProps) -> bool {
        prev.is_pinned() != next.is_pinned() || prev.is_mobile != next.is_mobile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys() -> TriggerKeys {
        TriggerKeys::default()
    }

    #[test]
    fn test_toggle_always_clears_dimmed() {
        let mut state = DisclosureState {
            expanded: false,
            dimmed: true,
        };
        for _ in 0..5 {
            state = state.toggled().state;
            assert!(!state.dimmed);
        }
    }

    #[test]
    fn test_expanded_never_dimmed() {
        let events = [
            DisclosureEvent::SetDimmed(true),
            DisclosureEvent::Activate,
            DisclosureEvent::SetDimmed(true),
            DisclosureEvent::KeyDown(Key::Escape),
            DisclosureEvent::SetDimmed(true),
            DisclosureEvent::KeyDown(Key::Enter),
            DisclosureEvent::SetDimmed(true),
            DisclosureEvent::Close,
            DisclosureEvent::KeyDown(Key::Space),
            DisclosureEvent::SetDimmed(false),
        ];
        let mut state = DisclosureState::new();
        for event in &events {
            state = state.transition(event, &keys()).state;
            assert!(!(state.expanded && state.dimmed), "after {:?}: {:?}", event, state);
        }
    }

    #[test]
    fn test_open_keys_when_collapsed() {
        for key in [Key::Space, Key::Enter] {
            let t = DisclosureState::new().transition(&DisclosureEvent::KeyDown(key), &keys());
            assert!(t.state.expanded);
            assert_eq!(
                t.effects,
                vec![DisclosureEffect::PreventDefault, DisclosureEffect::NotifyExpanded]
            );
        }
    }

    #[test]
    fn test_escape_ignored_when_collapsed() {
        let t = DisclosureState::new().transition(&DisclosureEvent::KeyDown(Key::Escape), &keys());
        assert!(!t.state.expanded);
        assert!(t.effects.is_empty());
    }

    #[test]
    fn test_escape_closes_when_expanded() {
        let t = DisclosureState::expanded()
            .transition(&DisclosureEvent::KeyDown(Key::Escape), &keys());
        assert!(!t.state.expanded);
        assert_eq!(
            t.effects,
            vec![DisclosureEffect::PreventDefault, DisclosureEffect::NotifyCollapsed]
        );
    }

    #[test]
    fn test_other_key_ignored_when_expanded() {
        let t = DisclosureState::expanded()
            .transition(&DisclosureEvent::KeyDown(Key::Char('a')), &keys());
        assert_eq!(t.state, DisclosureState::expanded());
        assert!(t.effects.is_empty());
    }

    #[test]
    fn test_set_dimmed_does_not_touch_expanded() {
        let t = DisclosureState::new().transition(&DisclosureEvent::SetDimmed(true), &keys());
        assert_eq!(
            t.state,
            DisclosureState {
                expanded: false,
                dimmed: true
            }
        );
        assert!(t.effects.is_empty());
    }

    #[test]
    fn test_close_is_silent() {
        let t = DisclosureState::expanded().transition(&DisclosureEvent::Close, &keys());
        assert_eq!(t.state, DisclosureState::default());
        assert!(t.effects.is_empty());
    }

    #[test]
    fn test_sidebar_expand_requests() {
        let collapsed = SidebarProps::default();
        assert_eq!(
            collapsed.interaction(&SidebarEvent::PointerEnter),
            Some(SidebarEffect::RequestExpand)
        );
        assert_eq!(
            collapsed.interaction(&SidebarEvent::Focus),
            Some(SidebarEffect::RequestExpand)
        );
        assert_eq!(collapsed.interaction(&SidebarEvent::PointerLeave), None);

        let hover = SidebarProps::new(ExpansionSource::Hover, false);
        assert_eq!(hover.interaction(&SidebarEvent::PointerEnter), None);
        assert_eq!(
            hover.interaction(&SidebarEvent::Blur),
            Some(SidebarEffect::RequestCollapse)
        );
    }

    #[test]
    fn test_pinned_ignores_leave_and_blur() {
        for is_mobile in [false, true] {
            let pinned = SidebarProps::new(ExpansionSource::Pinned, is_mobile);
            assert!(!pinned.should_collapse());
            assert_eq!(pinned.interaction(&SidebarEvent::PointerLeave), None);
            assert_eq!(pinned.interaction(&SidebarEvent::Blur), None);
            assert_eq!(pinned.interaction(&SidebarEvent::PointerEnter), None);
        }
    }

    #[test]
    fn test_shadow_rules() {
        assert!(SidebarProps::new(ExpansionSource::None, false).has_shadow());
        assert!(SidebarProps::new(ExpansionSource::Hover, false).has_shadow());
        assert!(!SidebarProps::new(ExpansionSource::Pinned, false).has_shadow());
        assert!(SidebarProps::new(ExpansionSource::Pinned, true).has_shadow());
    }

    #[test]
    fn test_width_report_only_on_pin_or_viewport_change() {
        let none = SidebarProps::default();
        let hover = SidebarProps::new(ExpansionSource::Hover, false);
        let pinned = SidebarProps::new(ExpansionSource::Pinned, false);
        let mobile = SidebarProps::new(ExpansionSource::None, true);

        assert!(!SidebarProps::needs_width_report(&none, &none));
        assert!(!SidebarProps::needs_width_report(&none, &hover));
        assert!(SidebarProps::needs_width_report(&hover, &pinned));
        assert!(SidebarProps::needs_width_report(&pinned, &none));
        assert!(SidebarProps::needs_width_report(&none, &mobile));
    }
}
