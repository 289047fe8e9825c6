//! Configuration file support for the admin portal.
//!
//! Settings are stored as versioned JSON. Every field has a default so older
//! or partial files keep loading.

use portal_ui::{Key, TriggerAction, TriggerKeys};
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_COLLAPSED_SIDEBAR_WIDTH, DEFAULT_EXPANDED_SIDEBAR_WIDTH, DEFAULT_MOBILE_BREAKPOINT,
};

/// Log level setting for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Globally enabled portal features.
///
/// A screen gated by a feature flag is shown only when the flag is on and,
/// where applicable, the enterprise has the screen enabled too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureFlags {
    #[serde(default)]
    pub code_management: bool,
    #[serde(default)]
    pub reporting_configurations: bool,
    #[serde(default)]
    pub saml_configuration: bool,
    #[serde(default = "default_true")]
    pub support: bool,
}

fn default_true() -> bool {
    true
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            code_management: false,
            reporting_configurations: false,
            saml_configuration: false,
            support: true,
        }
    }
}

impl FeatureFlags {
    /// Every feature switched on.
    pub fn all() -> Self {
        Self {
            code_management: true,
            reporting_configurations: true,
            saml_configuration: true,
            support: true,
        }
    }
}

/// Sidebar geometry and viewport classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutPreferences {
    /// Width of the collapsed (icon-only) sidebar on desktop
    #[serde(default = "default_collapsed_width")]
    pub collapsed_sidebar_width: f32,

    /// Width of the expanded sidebar
    #[serde(default = "default_expanded_width")]
    pub expanded_sidebar_width: f32,

    /// Viewports narrower than this are treated as mobile
    #[serde(default = "default_mobile_breakpoint")]
    pub mobile_breakpoint: f32,

    /// Open with the sidebar pinned
    #[serde(default)]
    pub start_pinned: bool,
}

fn default_collapsed_width() -> f32 {
    DEFAULT_COLLAPSED_SIDEBAR_WIDTH
}

fn default_expanded_width() -> f32 {
    DEFAULT_EXPANDED_SIDEBAR_WIDTH
}

fn default_mobile_breakpoint() -> f32 {
    DEFAULT_MOBILE_BREAKPOINT
}

impl Default for LayoutPreferences {
    fn default() -> Self {
        Self {
            collapsed_sidebar_width: default_collapsed_width(),
            expanded_sidebar_width: default_expanded_width(),
            mobile_breakpoint: default_mobile_breakpoint(),
            start_pinned: false,
        }
    }
}

/// Application configuration that can be exported and imported.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalConfig {
    /// Version of the configuration file format
    pub version: u32,

    /// Prefix for every portal route (e.g. `/acme`)
    #[serde(default)]
    pub base_url: String,

    #[serde(default)]
    pub features: FeatureFlags,

    #[serde(default)]
    pub layout: LayoutPreferences,

    /// Keys that open and close coupon details
    #[serde(default)]
    pub trigger_keys: TriggerKeys,

    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,
}

impl PortalConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            base_url: String::new(),
            features: FeatureFlags::default(),
            layout: LayoutPreferences::default(),
            trigger_keys: TriggerKeys::default(),
            log_level: LogLevel::default(),
        }
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        // Validate version compatibility
        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        if config.layout.collapsed_sidebar_width > config.layout.expanded_sidebar_width {
            return Err(ConfigError::InvalidLayout(format!(
                "collapsed sidebar width {} exceeds expanded width {}",
                config.layout.collapsed_sidebar_width, config.layout.expanded_sidebar_width
            )));
        }

        config.check_trigger_keys()?;

        Ok(config)
    }

    /// Customised key sets may add keys but never drop the standard ones,
    /// and Escape only ever closes.
    fn check_trigger_keys(&self) -> Result<(), ConfigError> {
        let defaults = TriggerKeys::default();
        for action in [TriggerAction::OpenDetails, TriggerAction::CloseDetails] {
            if let Some(key) = defaults
                .keys_for(action)
                .iter()
                .find(|key| !self.trigger_keys.is_trigger_key(action, key))
            {
                return Err(ConfigError::InvalidTriggerKeys(format!(
                    "{:?} must accept {:?}",
                    action, key
                )));
            }
        }
        if self
            .trigger_keys
            .is_trigger_key(TriggerAction::OpenDetails, &Key::Escape)
        {
            return Err(ConfigError::InvalidTriggerKeys(
                "Escape cannot open details".to_string(),
            ));
        }
        Ok(())
    }

    /// Load configuration from an explicit path.
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Get the default filename for config export.
    pub fn default_filename() -> &'static str {
        "portal-config.json"
    }

    /// Get the default config file path for auto-load/save.
    pub fn default_path() -> Option<std::path::PathBuf> {
        // Try to use XDG config directory, fall back to home directory
        if let Some(config_dir) = dirs::config_dir() {
            Some(config_dir.join("admin-portal").join(Self::default_filename()))
        } else {
            dirs::home_dir().map(|home_dir| {
                home_dir
                    .join(".config")
                    .join("admin-portal")
                    .join(Self::default_filename())
            })
        }
    }

    /// Load configuration from the default path.
    ///
    /// `Ok(None)` when there is no config file yet.
    pub fn load_from_default_path() -> Result<Option<Self>, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path).map(Some),
            _ => Ok(None),
        }
    }

    /// Save configuration to an explicit path, creating parent directories.
    pub fn save(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = self.to_json()?;
        std::fs::write(path, json)?;
        log::info!("Saved configuration to {:?}", path);
        Ok(())
    }

    /// Save configuration to the default path.
    pub fn save_to_default_path(&self) -> Result<std::path::PathBuf, ConfigError> {
        let path = Self::default_path().ok_or_else(|| {
            ConfigError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config directory",
            ))
        })?;
        self.save(&path)?;
        Ok(path)
    }
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// Layout values that cannot be rendered
    #[error("Invalid layout preferences: {0}")]
    InvalidLayout(String),

    /// Trigger key sets that break keyboard access
    #[error("Invalid trigger keys: {0}")]
    InvalidTriggerKeys(String),

    /// I/O error when reading/writing config
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_defaults() {
        let config = PortalConfig::new();
        let json = config.to_json().unwrap();
        let parsed = PortalConfig::from_json(&json).unwrap();
        assert_eq!(parsed.version, CONFIG_VERSION);
        assert_eq!(parsed.features, FeatureFlags::default());
        assert_eq!(parsed.layout, LayoutPreferences::default());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config =
            PortalConfig::from_json(r#"{"version": 1, "base_url": "/acme", "features": {"code_management": true}}"#)
                .unwrap();
        assert_eq!(config.base_url, "/acme");
        assert!(config.features.code_management);
        assert!(config.features.support);
        assert!(!config.features.saml_configuration);
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.trigger_keys, TriggerKeys::default());
    }

    #[test]
    fn test_rejects_newer_version() {
        let err = PortalConfig::from_json(r#"{"version": 99}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::VersionTooNew {
                file_version: 99,
                supported_version: CONFIG_VERSION
            }
        ));
    }

    #[test]
    fn test_rejects_inverted_sidebar_widths() {
        let err = PortalConfig::from_json(
            r#"{"version": 1, "layout": {"collapsed_sidebar_width": 300, "expanded_sidebar_width": 200}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLayout(_)));
    }

    #[test]
    fn test_trigger_keys_may_be_extended() {
        let config = PortalConfig::from_json(
            r#"{"version": 1, "trigger_keys": {"open_details": ["Space", "Enter", {"Char": "o"}]}}"#,
        )
        .unwrap();
        assert!(config
            .trigger_keys
            .is_trigger_key(TriggerAction::OpenDetails, &Key::Char('o')));
        assert_eq!(
            config.trigger_keys.close_details,
            TriggerKeys::default().close_details
        );
    }

    #[test]
    fn test_rejects_trigger_keys_missing_defaults() {
        for json in [
            r#"{"version": 1, "trigger_keys": {"open_details": []}}"#,
            r#"{"version": 1, "trigger_keys": {"close_details": ["Space", "Enter"]}}"#,
        ] {
            assert!(matches!(
                PortalConfig::from_json(json),
                Err(ConfigError::InvalidTriggerKeys(_))
            ));
        }
    }

    #[test]
    fn test_rejects_escape_as_open_key() {
        let err = PortalConfig::from_json(
            r#"{"version": 1, "trigger_keys": {"open_details": ["Space", "Enter", "Escape"]}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTriggerKeys(_)));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("admin-portal").join(PortalConfig::default_filename());

        let mut config = PortalConfig::new();
        config.base_url = "/acme".to_string();
        config.layout.start_pinned = true;
        config.log_level = LogLevel::Debug;
        config.save(&path).unwrap();

        let loaded = PortalConfig::load(&path).unwrap();
        assert_eq!(loaded.base_url, "/acme");
        assert!(loaded.layout.start_pinned);
        assert_eq!(loaded.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_load_reports_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(matches!(
            PortalConfig::load(&missing),
            Err(ConfigError::IoError(_))
        ));

        let newer = dir.path().join("newer.json");
        std::fs::write(&newer, r#"{"version": 99}"#).unwrap();
        assert!(matches!(
            PortalConfig::load(&newer),
            Err(ConfigError::VersionTooNew { .. })
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            PortalConfig::from_json("{"),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_log_level_mapping() {
        assert_eq!(LogLevel::Trace.to_level_filter(), log::LevelFilter::Trace);
        assert_eq!(LogLevel::default().to_level_filter(), log::LevelFilter::Info);
    }
}
