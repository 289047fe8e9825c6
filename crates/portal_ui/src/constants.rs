//! Centralized constants for portal_ui
//!
//! Class names and ARIA strings shared by the widgets live here so host
//! renderers and tests agree on a single spelling.

// =============================================================================
// Disclosure
// =============================================================================

/// ARIA role of a disclosure row
pub const DISCLOSURE_ROLE: &str = "button";

/// Tab index that puts the row in the natural tab order
pub const DISCLOSURE_TAB_INDEX: i32 = 0;

/// Base classes of a disclosure container
pub const DISCLOSURE_BASE_CLASSES: &[&str] = &["rounded", "border"];

pub const CLASS_EXPANDED: &str = "expanded";
pub const CLASS_ERROR_BORDER: &str = "border-danger";
pub const CLASS_DIMMED: &str = "dimmed";

/// Icon classes for the expand/collapse chevron
pub const ICON_CHEVRON_UP: &str = "fa-chevron-up";
pub const ICON_CHEVRON_DOWN: &str = "fa-chevron-down";

/// Icon class for the error indicator
pub const ICON_ERROR: &str = "fa-exclamation-circle";

// =============================================================================
// Sidebar
// =============================================================================

/// DOM id and accessible label of the navigation element
pub const SIDEBAR_ID: &str = "sidebar";
pub const SIDEBAR_ARIA_LABEL: &str = "sidebar";

/// Classes always present on the navigation element
pub const SIDEBAR_BASE_CLASSES: &[&str] = &["sidebar", "border-right", "h-100", "d-none", "d-lg-flex"];

/// Forces display on small viewports while expanded
pub const CLASS_DISPLAY_FLEX: &str = "d-flex";
pub const CLASS_SHADOW: &str = "has-shadow";
