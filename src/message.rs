//! Application message types for the admin portal.
//!
//! All UI events and component notifications are represented as messages in
//! the Elm architecture style.

use portal_ui::SidebarEvent;

use crate::model::{CouponData, PortalConfiguration, SubscriptionOverview};
use crate::ui::SupportField;

/// Messages that can be sent to update application state.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // Bootstrap
    /// Enterprise configuration fetched
    PortalConfigurationLoaded(PortalConfiguration),
    /// Browser viewport changed size
    ViewportResized { width: f32, height: f32 },

    // Sidebar
    /// Pointer or focus event on the sidebar
    Sidebar(SidebarEvent),
    /// Sidebar asked to be expanded
    ExpandSidebar,
    /// Sidebar asked to be collapsed
    CollapseSidebar,
    /// Pin toggle button pressed
    ToggleSidebarPin,
    /// Sidebar reported its rendered width
    SidebarWidthChanged(f32),

    // Code management
    /// Coupon list fetched
    CouponsLoaded(Vec<CouponData>),
    /// Coupon row clicked
    CouponClicked(u64),
    /// Coupon details opened
    CouponExpanded(u64),
    /// Coupon details closed
    CouponCollapsed(u64),

    // Support
    /// Support form field edited
    SupportFieldChanged(SupportField, String),
    /// Support form submitted
    SubmitSupport,
    /// Support request delivered
    SupportSubmitSucceeded,
    /// Support request failed with a message
    SupportSubmitFailed(String),
    /// Success banner dismissed
    DismissSupportAlert,

    // Subscriptions
    /// Subscription overview fetched
    SubscriptionLoaded(SubscriptionOverview),
    /// "Add Users" button pressed
    OpenAddUsers,
    /// Modal close requested
    CloseAddUsers,
    /// Modal finished adding this many users
    AddUsersCompleted(u32),
    /// Users were added to the subscription
    UsersAdded(u32),
    /// Add-users modal finished closing
    AddUsersClosed,
}
