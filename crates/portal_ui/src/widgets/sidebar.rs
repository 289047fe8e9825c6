//! Responsive collapsible sidebar.
//!
//! The sidebar expands on hover/focus and collapses on blur/pointer-leave
//! unless it is pinned open. It never changes its own expansion: it asks the
//! owner through `expand_sidebar`/`collapse_sidebar` and reads the result back
//! through [`Sidebar::update`]. Whenever the pin or the viewport class changes,
//! it measures its rendered width and reports it through `on_width_change` so
//! the parent layout can reflow around the real size.

use crate::callback::{Callback, Callback0};
use crate::constants::{
    CLASS_DISPLAY_FLEX, CLASS_EXPANDED, CLASS_SHADOW, SIDEBAR_ARIA_LABEL, SIDEBAR_BASE_CLASSES,
    SIDEBAR_ID,
};
use crate::event::SidebarEvent;
use crate::layout::Bounds;
use crate::state::{SidebarEffect, SidebarProps};

/// A navigation entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub title: String,
    /// Route the entry links to
    pub destination: String,
    pub icon_class: String,
    /// Hidden entries are not rendered at all
    pub hidden: bool,
}

impl NavItem {
    pub fn new(
        title: impl Into<String>,
        destination: impl Into<String>,
        icon_class: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            destination: destination.into(),
            icon_class: icon_class.into(),
            hidden: false,
        }
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }
}

/// A rendered navigation link. Titles are only shown while expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLinkView {
    pub title: String,
    pub destination: String,
    pub icon_class: String,
    pub show_title: bool,
}

/// Everything a renderer needs to draw the sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarView {
    pub id: &'static str,
    pub aria_label: &'static str,
    pub aria_expanded: bool,
    pub expanded: bool,
    pub has_shadow: bool,
    pub links: Vec<NavLinkView>,
}

impl SidebarView {
    /// CSS state classes of the navigation element, base classes first.
    pub fn class_names(&self) -> Vec<&'static str> {
        let mut classes = SIDEBAR_BASE_CLASSES.to_vec();
        if self.expanded {
            classes.push(CLASS_DISPLAY_FLEX);
            classes.push(CLASS_EXPANDED);
        }
        if self.has_shadow {
            classes.push(CLASS_SHADOW);
        }
        classes
    }
}

/// A collapsible navigation sidebar.
pub struct Sidebar<M> {
    /// Externally owned inputs as of the last render
    props: SidebarProps,
    items: Vec<NavItem>,
    /// Rendered navigation element, `None` until the host lays it out
    element: Option<Bounds>,
    expand_sidebar: Callback0<M>,
    collapse_sidebar: Callback0<M>,
    on_width_change: Callback<f32, M>,
}

impl<M> Sidebar<M> {
    pub fn new(props: SidebarProps) -> Self {
        Self {
            props,
            items: Vec::new(),
            element: None,
            expand_sidebar: Callback0::none(),
            collapse_sidebar: Callback0::none(),
            on_width_change: Callback::none(),
        }
    }

    /// Set the navigation entries
    pub fn items(mut self, items: Vec<NavItem>) -> Self {
        self.items = items;
        self
    }

    /// Set the request sent when the sidebar wants to expand
    pub fn expand_sidebar<F>(mut self, callback: F) -> Self
    where
        F: Fn() -> M + 'static,
    {
        self.expand_sidebar = Callback0::new(move |_| callback());
        self
    }

    /// Set the request sent when the sidebar wants to collapse
    pub fn collapse_sidebar<F>(mut self, callback: F) -> Self
    where
        F: Fn() -> M + 'static,
    {
        self.collapse_sidebar = Callback0::new(move |_| callback());
        self
    }

    /// Set callback receiving the measured width
    pub fn on_width_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(f32) -> M + 'static,
    {
        self.on_width_change = Callback::new(callback);
        self
    }

    pub fn set_items(&mut self, items: Vec<NavItem>) {
        self.items = items;
    }

    pub fn props(&self) -> SidebarProps {
        self.props
    }

    /// Record the rendered bounds of the navigation element.
    pub fn layout(&mut self, bounds: Bounds) {
        log::trace!("Sidebar laid out at {:?}", bounds);
        self.element = Some(bounds);
    }

    /// Forget the rendered element (it left the document).
    pub fn unmount_element(&mut self) {
        self.element = None;
    }

    /// Rendered width of the navigation element, `None` before it is laid out.
    pub fn measure_width(&self) -> Option<f32> {
        self.element.map(|bounds| bounds.width)
    }

    /// Post-mount hook: report the width right away if already pinned open.
    pub fn mount(&mut self) -> Option<M> {
        if self.props.is_pinned() {
            self.report_width()
        } else {
            None
        }
    }

    /// Post-render hook with the new props.
    ///
    /// The width is re-measured only when the pin or the viewport class
    /// changed, so plain hover expansion never triggers a layout read.
    pub fn update(&mut self, props: SidebarProps) -> Option<M> {
        let prev = std::mem::replace(&mut self.props, props);
        if SidebarProps::needs_width_report(&prev, &self.props) {
            log::debug!("Sidebar props changed {:?} -> {:?}", prev, self.props);
            self.report_width()
        } else {
            None
        }
    }

    /// Handle a pointer or focus event.
    pub fn on_event(&mut self, event: &SidebarEvent) -> Option<M> {
        let effect = self.props.interaction(event)?;
        log::trace!("Sidebar {:?} on {:?}", effect, event);
        self.dispatch(effect)
    }

    /// Carry out an effect through the matching owner callback.
    fn dispatch(&self, effect: SidebarEffect) -> Option<M> {
        match effect {
            SidebarEffect::RequestExpand => self.expand_sidebar.emit(),
            SidebarEffect::RequestCollapse => self.collapse_sidebar.emit(),
            SidebarEffect::ReportWidth(width) => {
                log::debug!("Sidebar width is {}", width);
                self.on_width_change.call(width)
            }
        }
    }

    /// The width report due now, if the element has been laid out.
    fn width_effect(&self) -> Option<SidebarEffect> {
        let width = self.measure_width();
        if width.is_none() {
            log::debug!("Sidebar width requested before the element was laid out");
        }
        width.map(SidebarEffect::ReportWidth)
    }

    fn report_width(&self) -> Option<M> {
        self.width_effect().and_then(|effect| self.dispatch(effect))
    }

    /// Entries that are actually rendered, in order.
    pub fn visible_items(&self) -> impl Iterator<Item = &NavItem> {
        self.items.iter().filter(|item| !item.hidden)
    }

    pub fn view(&self) -> SidebarView {
        let expanded = self.props.effective_expanded();
        SidebarView {
            id: SIDEBAR_ID,
            aria_label: SIDEBAR_ARIA_LABEL,
            aria_expanded: expanded,
            expanded,
            has_shadow: self.props.has_shadow(),
            links: self
                .visible_items()
                .map(|item| NavLinkView {
                    title: item.title.clone(),
                    destination: item.destination.clone(),
                    icon_class: item.icon_class.clone(),
                    show_title: expanded,
                })
                .collect(),
        }
    }
}

impl<M> std::fmt::Debug for Sidebar<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sidebar")
            .field("props", &self.props)
            .field("items", &self.items.len())
            .field("element", &self.element)
            .finish_non_exhaustive()
    }
}

/// Create a sidebar
pub fn sidebar<M>(props: SidebarProps) -> Sidebar<M> {
    Sidebar::new(props)
}
