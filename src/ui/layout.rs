//! Page layout: owns the sidebar's expansion and reflows content around it.
//!
//! The sidebar only requests changes. This module is the authority that
//! decides the [`ExpansionSource`], re-renders the sidebar with the new props,
//! and applies the width the sidebar reports to the content offset.

use portal_ui::widgets::SidebarView;
use portal_ui::{Bounds, ExpansionSource, NavItem, Sidebar, SidebarEvent, SidebarProps};

use crate::config::LayoutPreferences;
use crate::message::Message;

/// Rendered layout state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutView {
    pub sidebar: SidebarView,
    /// Whether the pin toggle button shows as pressed
    pub pin_pressed: bool,
}

#[derive(Debug)]
pub struct PortalLayout {
    expansion: ExpansionSource,
    is_mobile: bool,
    viewport_height: f32,
    prefs: LayoutPreferences,
    sidebar: Sidebar<Message>,
    /// Width the content is offset by: the initial rendered width of the
    /// sidebar, then whatever it last reported
    content_offset: f32,
}

impl PortalLayout {
    pub fn new(prefs: LayoutPreferences, viewport_width: f32, viewport_height: f32) -> Self {
        let expansion = if prefs.start_pinned {
            ExpansionSource::Pinned
        } else {
            ExpansionSource::None
        };
        Self::with_expansion(prefs, expansion, viewport_width, viewport_height)
    }

    pub fn with_expansion(
        prefs: LayoutPreferences,
        expansion: ExpansionSource,
        viewport_width: f32,
        viewport_height: f32,
    ) -> Self {
        let is_mobile = viewport_width < prefs.mobile_breakpoint;
        let sidebar = Sidebar::new(SidebarProps::new(expansion, is_mobile))
            .expand_sidebar(|| Message::ExpandSidebar)
            .collapse_sidebar(|| Message::CollapseSidebar)
            .on_width_change(Message::SidebarWidthChanged);
        let mut layout = Self {
            expansion,
            is_mobile,
            viewport_height,
            prefs,
            sidebar,
            content_offset: 0.0,
        };
        // Content starts after the sidebar as it will first render; later
        // reports from the sidebar replace this.
        layout.content_offset = layout.rendered_sidebar_width(&layout.props());
        layout
    }

    pub fn props(&self) -> SidebarProps {
        SidebarProps::new(self.expansion, self.is_mobile)
    }

    pub fn expansion(&self) -> ExpansionSource {
        self.expansion
    }

    pub fn is_mobile(&self) -> bool {
        self.is_mobile
    }

    pub fn content_offset(&self) -> f32 {
        self.content_offset
    }

    pub fn set_menu(&mut self, items: Vec<NavItem>) {
        self.sidebar.set_items(items);
    }

    /// Width the navigation element renders at for `props`.
    fn rendered_sidebar_width(&self, props: &SidebarProps) -> f32 {
        if props.effective_expanded() {
            self.prefs.expanded_sidebar_width
        } else if props.is_mobile {
            // Hidden entirely on small viewports until expanded.
            0.0
        } else {
            self.prefs.collapsed_sidebar_width
        }
    }

    fn lay_out_sidebar(&mut self, props: &SidebarProps) {
        let width = self.rendered_sidebar_width(props);
        self.sidebar
            .layout(Bounds::from_size(width, self.viewport_height));
    }

    /// First render: lay out the sidebar, then run its mount hook.
    pub fn mount(&mut self) -> Option<Message> {
        let props = self.props();
        self.lay_out_sidebar(&props);
        self.sidebar.mount()
    }

    /// Re-render with the current authority state, then run the update hook.
    fn render(&mut self) -> Option<Message> {
        let props = self.props();
        self.lay_out_sidebar(&props);
        self.sidebar.update(props)
    }

    /// Forward a pointer/focus event to the sidebar.
    pub fn sidebar_event(&mut self, event: &SidebarEvent) -> Option<Message> {
        self.sidebar.on_event(event)
    }

    /// Sidebar asked to expand.
    pub fn expand(&mut self) -> Option<Message> {
        if self.expansion == ExpansionSource::None {
            self.expansion = ExpansionSource::Hover;
        }
        self.render()
    }

    /// Sidebar asked to collapse. A pinned sidebar stays open.
    pub fn collapse(&mut self) -> Option<Message> {
        if self.expansion == ExpansionSource::Hover {
            self.expansion = ExpansionSource::None;
        }
        self.render()
    }

    /// Pin toggle pressed.
    pub fn toggle_pin(&mut self) -> Option<Message> {
        self.expansion = match self.expansion {
            ExpansionSource::Pinned => ExpansionSource::None,
            ExpansionSource::None | ExpansionSource::Hover => ExpansionSource::Pinned,
        };
        log::debug!("Sidebar pin toggled, now {:?}", self.expansion);
        self.render()
    }

    /// Viewport changed size; reclassify mobile/desktop.
    pub fn resize(&mut self, width: f32, height: f32) -> Option<Message> {
        self.viewport_height = height;
        let is_mobile = width < self.prefs.mobile_breakpoint;
        if is_mobile != self.is_mobile {
            let class = if is_mobile { "mobile" } else { "desktop" };
            log::debug!("Viewport {}px is now {}", width, class);
        }
        self.is_mobile = is_mobile;
        self.render()
    }

    /// Sidebar reported its width.
    pub fn set_sidebar_width(&mut self, width: f32) {
        self.content_offset = width;
    }

    pub fn view(&self) -> LayoutView {
        LayoutView {
            sidebar: self.sidebar.view(),
            pin_pressed: self.expansion.is_pinned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(width: f32) -> PortalLayout {
        PortalLayout::new(LayoutPreferences::default(), width, 900.0)
    }

    fn pinned_layout(width: f32) -> PortalLayout {
        PortalLayout::with_expansion(
            LayoutPreferences::default(),
            ExpansionSource::Pinned,
            width,
            900.0,
        )
    }

    /// Feed follow-up messages back the way the app does.
    fn settle(layout: &mut PortalLayout, mut msg: Option<Message>) -> Vec<Message> {
        let mut seen = Vec::new();
        while let Some(m) = msg.take() {
            seen.push(m.clone());
            msg = match m {
                Message::ExpandSidebar => layout.expand(),
                Message::CollapseSidebar => layout.collapse(),
                Message::SidebarWidthChanged(w) => {
                    layout.set_sidebar_width(w);
                    None
                }
                other => panic!("unexpected {:?}", other),
            };
        }
        seen
    }

    #[test]
    fn test_mount_unpinned_reports_nothing() {
        let mut l = layout(1280.0);
        assert_eq!(l.mount(), None);
        assert_eq!(l.content_offset(), 60.0);
    }

    #[test]
    fn test_initial_offset_matches_rendered_width() {
        assert_eq!(layout(1280.0).content_offset(), 60.0);
        assert_eq!(layout(600.0).content_offset(), 0.0);
        assert_eq!(pinned_layout(1280.0).content_offset(), 230.0);
    }

    #[test]
    fn test_mount_pinned_reports_expanded_width() {
        let mut l = pinned_layout(1280.0);
        let msg = l.mount();
        assert_eq!(msg, Some(Message::SidebarWidthChanged(230.0)));
        settle(&mut l, msg);
        assert_eq!(l.content_offset(), 230.0);
    }

    #[test]
    fn test_start_pinned_preference() {
        let prefs = LayoutPreferences {
            start_pinned: true,
            ..LayoutPreferences::default()
        };
        let l = PortalLayout::new(prefs, 1280.0, 900.0);
        assert_eq!(l.expansion(), ExpansionSource::Pinned);
    }

    #[test]
    fn test_hover_expand_does_not_reflow() {
        let mut l = layout(1280.0);
        l.mount();
        let msg = l.sidebar_event(&SidebarEvent::PointerEnter);
        let seen = settle(&mut l, msg);
        assert_eq!(seen, vec![Message::ExpandSidebar]);
        assert_eq!(l.expansion(), ExpansionSource::Hover);
        assert!(l.view().sidebar.expanded);

        let msg = l.sidebar_event(&SidebarEvent::PointerLeave);
        let seen = settle(&mut l, msg);
        assert_eq!(seen, vec![Message::CollapseSidebar]);
        assert_eq!(l.expansion(), ExpansionSource::None);
    }

    #[test]
    fn test_pin_reflows_and_survives_mouse_leave() {
        let mut l = layout(1280.0);
        l.mount();
        let msg = l.toggle_pin();
        let seen = settle(&mut l, msg);
        assert_eq!(seen, vec![Message::SidebarWidthChanged(230.0)]);
        assert_eq!(l.content_offset(), 230.0);

        assert_eq!(l.sidebar_event(&SidebarEvent::PointerLeave), None);
        assert_eq!(l.sidebar_event(&SidebarEvent::Blur), None);
        assert!(l.view().pin_pressed);

        let msg = l.toggle_pin();
        settle(&mut l, msg);
        assert_eq!(l.content_offset(), 60.0);
        assert!(!l.view().sidebar.expanded);
    }

    #[test]
    fn test_viewport_change_reports_width() {
        let mut l = layout(1280.0);
        l.mount();
        let msg = l.resize(600.0, 900.0);
        let seen = settle(&mut l, msg);
        assert!(l.is_mobile());
        assert_eq!(seen, vec![Message::SidebarWidthChanged(0.0)]);

        // Same class, no report.
        assert_eq!(l.resize(500.0, 900.0), None);

        let msg = l.resize(1200.0, 900.0);
        settle(&mut l, msg);
        assert_eq!(l.content_offset(), 60.0);
    }

    #[test]
    fn test_collapse_request_ignored_while_pinned() {
        let mut l = pinned_layout(1280.0);
        l.mount();
        assert_eq!(l.collapse(), None);
        assert_eq!(l.expansion(), ExpansionSource::Pinned);
    }
}
