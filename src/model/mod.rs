//! Data models for the admin portal.

mod coupon;
mod error;
mod portal;
mod subscription;

pub use coupon::{parse_coupons, CouponData};
pub use error::ModelError;
pub use portal::PortalConfiguration;
pub use subscription::SubscriptionOverview;
