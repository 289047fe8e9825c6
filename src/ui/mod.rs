//! Portal screens and layout built on the portal_ui components.

mod add_users;
mod coupon_list;
mod layout;
mod menu;
mod support_form;

pub use add_users::{AddUsersButton, AddUsersModalView};
pub use coupon_list::{CouponList, CouponRowView};
pub use layout::{LayoutView, PortalLayout};
pub use menu::{compute_menu_items, menu_items};
pub use support_form::{
    AlertKind, StatusAlert, SubmitError, SubmitStatus, SupportField, SupportForm, SupportRequest,
};
