//! Admin portal entry point for native builds.
//!
//! Loads the saved settings, replays the given API payloads through the app
//! and prints the resulting navigation and coupon rows.

use std::path::{Path, PathBuf};

use clap::Parser;

use admin_portal::config::ConfigError;
use admin_portal::model::{parse_coupons, ModelError, PortalConfiguration};
use admin_portal::{Message, PortalApp, PortalConfig};

#[derive(Debug, Parser)]
#[command(name = "admin-portal")]
#[command(about = "Render the admin portal navigation and coupon list")]
struct Cli {
    /// Enterprise configuration payload (JSON)
    portal_configuration: Option<PathBuf>,

    /// Coupon list payload (JSON)
    coupons: Option<PathBuf>,

    /// Settings file to use instead of the default location
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Email of the signed-in admin, prefilled in the support form
    #[arg(long, default_value = "")]
    user_email: String,

    /// Write the effective settings to the default location and exit
    #[arg(long)]
    init_config: bool,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid data in {path}: {source}")]
    Model { path: PathBuf, source: ModelError },
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

fn read(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn run(config: PortalConfig, cli: &Cli) -> Result<(), CliError> {
    if cli.init_config {
        let path = config.save_to_default_path()?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    let mut app = PortalApp::new(config, cli.user_email.as_str(), 1280.0, 800.0);
    app.mount();

    if let Some(path) = &cli.portal_configuration {
        let portal = PortalConfiguration::from_json(&read(path)?).map_err(|source| {
            CliError::Model {
                path: path.clone(),
                source,
            }
        })?;
        app.update(Message::PortalConfigurationLoaded(portal));
    }
    if let Some(path) = &cli.coupons {
        let coupons = parse_coupons(&read(path)?).map_err(|source| CliError::Model {
            path: path.clone(),
            source,
        })?;
        app.update(Message::CouponsLoaded(coupons));
    }

    println!("Navigation:");
    for item in app.menu() {
        println!("  {:<26} {}", item.title, item.destination);
    }

    if !app.coupons().is_empty() {
        println!("Coupons:");
        for row in app.coupons().views() {
            let marker = if row.panel.shows_error_icon { "!" } else { " " };
            println!(
                " {} {:<30} {} - {}  unassigned {:>4}  redeemed {}",
                marker,
                row.title,
                row.valid_from_date,
                row.valid_to_date,
                row.unassigned_codes,
                row.enrollments_redeemed
            );
        }
    }
    Ok(())
}

/// Pick the settings to run with.
///
/// An explicit settings file must load. A broken file at the default path
/// falls back to defaults; the reason is returned so it can be logged once
/// the logger is running.
fn load_config(cli: &Cli) -> Result<(PortalConfig, Option<ConfigError>), ConfigError> {
    match &cli.config {
        Some(path) => Ok((PortalConfig::load(path)?, None)),
        None => match PortalConfig::load_from_default_path() {
            Ok(config) => Ok((config.unwrap_or_default(), None)),
            Err(e) => Ok((PortalConfig::default(), Some(e))),
        },
    }
}

fn main() {
    let cli = Cli::parse();

    let (config, fallback_reason) = match load_config(&cli) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Application error: {}", e);
            std::process::exit(1);
        }
    };

    env_logger::Builder::new()
        .filter_level(config.log_level.to_level_filter())
        .parse_default_env()
        .init();

    if let Some(e) = fallback_reason {
        log::warn!(
            "Failed to load config file {:?}, using defaults: {}",
            PortalConfig::default_path(),
            e
        );
    }

    if let Err(e) = run(config, &cli) {
        eprintln!("Application error: {}", e);
        std::process::exit(1);
    }
}
