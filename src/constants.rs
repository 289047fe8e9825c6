//! Application-wide constants.

/// Width of the icon-only sidebar on desktop
pub const DEFAULT_COLLAPSED_SIDEBAR_WIDTH: f32 = 60.0;

/// Width of the sidebar showing link titles
pub const DEFAULT_EXPANDED_SIDEBAR_WIDTH: f32 = 230.0;

/// Viewports narrower than this use the mobile layout (Bootstrap `lg`)
pub const DEFAULT_MOBILE_BREAKPOINT: f32 = 992.0;

/// Maximum length of the notes field on the support form
pub const SUPPORT_NOTES_MAX_LENGTH: usize = 512;

/// Prefix of coupon detail panel element ids
pub const COUPON_DETAILS_ID_PREFIX: &str = "coupon-details-";

// =============================================================================
// Admin routes (relative to the portal base URL)
// =============================================================================

pub const ROUTE_LEARNERS: &str = "/admin/learners";
pub const ROUTE_COUPONS: &str = "/admin/coupons";
pub const ROUTE_REPORTING: &str = "/admin/reporting";
pub const ROUTE_SUBSCRIPTIONS: &str = "/admin/subscriptions";
pub const ROUTE_SAML: &str = "/admin/samlconfiguration";
pub const ROUTE_SUPPORT: &str = "/admin/support";
