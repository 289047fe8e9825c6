//! Per-enterprise portal configuration returned by the configuration endpoint.

use serde::{Deserialize, Serialize};

use super::ModelError;

/// Which screens an enterprise has enabled.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PortalConfiguration {
    pub enterprise_id: String,
    pub enterprise_slug: String,
    #[serde(default)]
    pub enterprise_name: String,
    #[serde(default)]
    pub enable_code_management_screen: bool,
    #[serde(default)]
    pub enable_reporting_config_screen: bool,
    #[serde(default)]
    pub enable_subscription_management_screen: bool,
    #[serde(default)]
    pub enable_saml_configuration_screen: bool,
}

impl PortalConfiguration {
    /// Parse the configuration endpoint's JSON body.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let config: Self = serde_json::from_str(json)?;
        if config.enterprise_slug.trim().is_empty() {
            return Err(ModelError::missing_field("enterprise_slug"));
        }
        log::info!(
            "Loaded portal configuration for enterprise '{}'",
            config.enterprise_slug
        );
        Ok(config)
    }

    /// Base URL of the enterprise's admin routes.
    pub fn base_url(&self) -> String {
        format!("/{}", self.enterprise_slug)
    }
}
