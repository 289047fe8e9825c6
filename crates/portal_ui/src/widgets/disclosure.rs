//! Disclosure panel: a toggleable row that reveals a detail panel.
//!
//! Features:
//! - Click or trigger key toggles expanded/collapsed state
//! - Escape closes an expanded panel
//! - Sibling coordination can dim a collapsed panel
//! - Error affordance that is suppressed while details are shown

use crate::callback::Callback0;
use crate::constants::{
    CLASS_DIMMED, CLASS_ERROR_BORDER, CLASS_EXPANDED, DISCLOSURE_BASE_CLASSES, DISCLOSURE_ROLE,
    DISCLOSURE_TAB_INDEX, ICON_CHEVRON_DOWN, ICON_CHEVRON_UP,
};
use crate::event::{DisclosureEvent, Key, KeyOutcome};
use crate::keys::TriggerKeys;
use crate::state::{DisclosureEffect, DisclosureState, Transition};

/// Direction the expand/collapse chevron points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chevron {
    Up,
    Down,
}

impl Chevron {
    pub fn icon_class(&self) -> &'static str {
        match self {
            Chevron::Up => ICON_CHEVRON_UP,
            Chevron::Down => ICON_CHEVRON_DOWN,
        }
    }
}

/// Everything a renderer needs to draw a disclosure row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisclosureView {
    pub role: &'static str,
    pub tab_index: i32,
    pub aria_expanded: bool,
    /// Id of the detail panel this row controls
    pub aria_controls: String,
    pub expanded: bool,
    pub dimmed: bool,
    pub shows_error_border: bool,
    pub shows_error_icon: bool,
    pub chevron: Chevron,
    /// Screen reader text for the chevron
    pub chevron_label: String,
}

impl DisclosureView {
    /// CSS state classes of the container, base classes first.
    pub fn class_names(&self) -> Vec<&'static str> {
        let mut classes = DISCLOSURE_BASE_CLASSES.to_vec();
        if self.expanded {
            classes.push(CLASS_EXPANDED);
        }
        if self.shows_error_border {
            classes.push(CLASS_ERROR_BORDER);
        }
        if self.dimmed {
            classes.push(CLASS_DIMMED);
        }
        classes
    }
}

/// A disclosure panel widget.
pub struct Disclosure<M> {
    /// Local expansion state
    state: DisclosureState,
    /// Id of the controlled detail panel
    controls_id: String,
    /// What the panel reveals, used in screen reader text
    label: String,
    /// Upstream error signal
    has_error: bool,
    trigger_keys: TriggerKeys,
    on_expand: Callback0<M>,
    on_collapse: Callback0<M>,
}

impl<M> Disclosure<M> {
    /// Create a collapsed panel controlling the detail element `controls_id`.
    pub fn new(controls_id: impl Into<String>) -> Self {
        Self {
            state: DisclosureState::new(),
            controls_id: controls_id.into(),
            label: "details".to_string(),
            has_error: false,
            trigger_keys: TriggerKeys::default(),
            on_expand: Callback0::none(),
            on_collapse: Callback0::none(),
        }
    }

    /// Set the screen reader label for the revealed content
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the upstream error flag
    pub fn has_error(mut self, has_error: bool) -> Self {
        self.has_error = has_error;
        self
    }

    pub fn trigger_keys(mut self, keys: TriggerKeys) -> Self {
        self.trigger_keys = keys;
        self
    }

    /// Set callback for the collapsed -> expanded transition
    pub fn on_expand<F>(mut self, callback: F) -> Self
    where
        F: Fn() -> M + 'static,
    {
        self.on_expand = Callback0::new(move |_| callback());
        self
    }

    /// Set callback for the expanded -> collapsed transition
    pub fn on_collapse<F>(mut self, callback: F) -> Self
    where
        F: Fn() -> M + 'static,
    {
        self.on_collapse = Callback0::new(move |_| callback());
        self
    }

    pub fn is_expanded(&self) -> bool {
        self.state.expanded
    }

    pub fn is_dimmed(&self) -> bool {
        self.state.dimmed
    }

    /// Flip the panel and notify the owner of the new direction.
    pub fn toggle(&mut self) -> Option<M> {
        let transition = self.state.toggled();
        self.apply(transition).1
    }

    /// Dim or undim the panel. Never changes `expanded`.
    pub fn set_dim_opacity(&mut self, dimmed: bool) {
        self.on_event(&DisclosureEvent::SetDimmed(dimmed));
    }

    /// Collapse without notifying the owner.
    pub fn close(&mut self) {
        self.on_event(&DisclosureEvent::Close);
    }

    /// Handle a key press while the row has focus.
    pub fn handle_key_down(&mut self, key: &Key) -> (KeyOutcome, Option<M>) {
        let transition = self
            .state
            .transition(&DisclosureEvent::KeyDown(key.clone()), &self.trigger_keys);
        self.apply(transition)
    }

    /// Handle any disclosure event, producing at most one owner message.
    pub fn on_event(&mut self, event: &DisclosureEvent) -> Option<M> {
        let transition = self.state.transition(event, &self.trigger_keys);
        self.apply(transition).1
    }

    fn apply(&mut self, transition: Transition) -> (KeyOutcome, Option<M>) {
        if transition.state != self.state {
            log::trace!(
                "Disclosure '{}': {:?} -> {:?}",
                self.controls_id,
                self.state,
                transition.state
            );
        }
        self.state = transition.state;

        let mut outcome = KeyOutcome::default();
        let mut message = None;
        for effect in transition.effects {
            match effect {
                DisclosureEffect::PreventDefault => outcome.default_prevented = true,
                DisclosureEffect::NotifyExpanded => {
                    log::debug!("Disclosure '{}' expanded", self.controls_id);
                    message = self.on_expand.emit();
                }
                DisclosureEffect::NotifyCollapsed => {
                    log::debug!("Disclosure '{}' collapsed", self.controls_id);
                    message = self.on_collapse.emit();
                }
            }
        }
        (outcome, message)
    }

    /// Errors are only shown while the user is not already looking at details.
    pub fn shows_error(&self) -> bool {
        self.has_error && !self.state.expanded
    }

    pub fn view(&self) -> DisclosureView {
        let expanded = self.state.expanded;
        let (chevron, verb) = if expanded {
            (Chevron::Up, "Close")
        } else {
            (Chevron::Down, "Open")
        };
        DisclosureView {
            role: DISCLOSURE_ROLE,
            tab_index: DISCLOSURE_TAB_INDEX,
            aria_expanded: expanded,
            aria_controls: self.controls_id.clone(),
            expanded,
            dimmed: self.state.dimmed,
            shows_error_border: self.shows_error(),
            shows_error_icon: self.shows_error(),
            chevron,
            chevron_label: format!("{} {}", verb, self.label),
        }
    }
}

impl<M> std::fmt::Debug for Disclosure<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Disclosure")
            .field("state", &self.state)
            .field("controls_id", &self.controls_id)
            .field("has_error", &self.has_error)
            .finish_non_exhaustive()
    }
}

/// Create a disclosure panel
pub fn disclosure<M>(controls_id: impl Into<String>) -> Disclosure<M> {
    Disclosure::new(controls_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Msg {
        Expanded,
        Collapsed,
    }

    fn panel() -> Disclosure<Msg> {
        Disclosure::new("coupon-details-7")
            .label("coupon details")
            .on_expand(|| Msg::Expanded)
            .on_collapse(|| Msg::Collapsed)
    }

    #[test]
    fn test_enter_and_space_open_once() {
        for key in [" ", "Enter"] {
            let mut p = panel();
            let (outcome, msg) = p.handle_key_down(&Key::from_dom(key));
            assert!(p.is_expanded());
            assert_eq!(msg, Some(Msg::Expanded));
            assert!(outcome.default_prevented);
        }
    }

    #[test]
    fn test_escape_collapses_expanded() {
        let mut p = panel();
        p.toggle();
        let (outcome, msg) = p.handle_key_down(&Key::from_dom("Escape"));
        assert!(!p.is_expanded());
        assert_eq!(msg, Some(Msg::Collapsed));
        assert!(outcome.default_prevented);
    }

    #[test]
    fn test_unrelated_key_is_ignored() {
        let mut p = panel();
        p.toggle();
        let (outcome, msg) = p.handle_key_down(&Key::from_dom("a"));
        assert!(p.is_expanded());
        assert_eq!(msg, None);
        assert!(!outcome.default_prevented);
    }

    #[test]
    fn test_callbacks_default_to_noop() {
        let mut p: Disclosure<Msg> = Disclosure::new("x");
        assert_eq!(p.toggle(), None);
        assert!(p.is_expanded());
        assert_eq!(p.toggle(), None);
        assert!(!p.is_expanded());
    }

    #[test]
    fn test_dim_only_while_collapsed() {
        let mut p = panel();
        p.set_dim_opacity(true);
        assert!(p.is_dimmed());
        assert!(p.view().class_names().contains(&CLASS_DIMMED));

        assert_eq!(p.toggle(), Some(Msg::Expanded));
        assert!(!p.is_dimmed());
        p.set_dim_opacity(true);
        assert!(p.is_expanded());
        assert!(!p.is_dimmed());
    }

    #[test]
    fn test_error_suppressed_while_expanded() {
        let mut p = panel().has_error(true);
        let view = p.view();
        assert!(view.shows_error_border && view.shows_error_icon);
        assert!(view.class_names().contains(&CLASS_ERROR_BORDER));

        p.toggle();
        let view = p.view();
        assert!(!view.shows_error_border);
        assert!(!view.shows_error_icon);
        assert!(!view.class_names().contains(&CLASS_ERROR_BORDER));
    }

    #[test]
    fn test_view_aria_and_chevron() {
        let mut p = panel();
        let view = p.view();
        assert_eq!(view.role, "button");
        assert_eq!(view.tab_index, 0);
        assert!(!view.aria_expanded);
        assert_eq!(view.aria_controls, "coupon-details-7");
        assert_eq!(view.chevron, Chevron::Down);
        assert_eq!(view.chevron_label, "Open coupon details");

        p.toggle();
        let view = p.view();
        assert!(view.aria_expanded);
        assert_eq!(view.chevron.icon_class(), ICON_CHEVRON_UP);
        assert_eq!(view.chevron_label, "Close coupon details");
    }

    #[test]
    fn test_close_does_not_notify() {
        let mut p = panel();
        p.toggle();
        p.close();
        assert!(!p.is_expanded());
        assert!(!p.is_dimmed());
    }
}
