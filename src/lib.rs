//! Admin Portal - enterprise administration front end
//!
//! Application state for the admin portal: the collapsible navigation
//! sidebar with its page layout, the code management coupon list built from
//! disclosure panels, the support form and the subscription "Add Users" flow.
//! Components come from the `portal_ui` crate; this crate wires them together
//! with messages.

mod app;
pub mod config;
pub mod constants;
mod message;
pub mod model;
pub mod ui;
pub mod validation;

pub use app::{Command, PortalApp};
pub use config::PortalConfig;
pub use message::Message;
