//! Sidebar navigation entries.

use portal_ui::NavItem;

use crate::config::FeatureFlags;
use crate::constants::{
    ROUTE_COUPONS, ROUTE_LEARNERS, ROUTE_REPORTING, ROUTE_SAML, ROUTE_SUBSCRIPTIONS, ROUTE_SUPPORT,
};
use crate::model::PortalConfiguration;

/// All navigation entries in their fixed order, hidden ones included.
///
/// The order is part of the portal's contract: Learner Report, Code
/// Management, Reporting Configurations, Subscription Management, SAML
/// Configuration, Support.
pub fn menu_items(
    base_url: &str,
    features: &FeatureFlags,
    portal: &PortalConfiguration,
) -> Vec<NavItem> {
    let route = |path: &str| format!("{}{}", base_url, path);
    vec![
        NavItem::new("Learner Report", route(ROUTE_LEARNERS), "fa-line-chart"),
        NavItem::new("Code Management", route(ROUTE_COUPONS), "fa-tags")
            .hidden(!features.code_management || !portal.enable_code_management_screen),
        NavItem::new("Reporting Configurations", route(ROUTE_REPORTING), "fa-file")
            .hidden(!features.reporting_configurations || !portal.enable_reporting_config_screen),
        NavItem::new("Subscription Management", route(ROUTE_SUBSCRIPTIONS), "fa-credit-card")
            .hidden(!portal.enable_subscription_management_screen),
        NavItem::new("Saml Configuration", route(ROUTE_SAML), "fa-id-card")
            .hidden(!features.saml_configuration || !portal.enable_saml_configuration_screen),
        NavItem::new("Support", route(ROUTE_SUPPORT), "fa-support").hidden(!features.support),
    ]
}

/// Navigation entries that are rendered, in order.
pub fn compute_menu_items(
    base_url: &str,
    features: &FeatureFlags,
    portal: &PortalConfiguration,
) -> Vec<NavItem> {
    menu_items(base_url, features, portal)
        .into_iter()
        .filter(|item| !item.hidden)
        .collect()
}
