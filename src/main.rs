#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod sections;
mod theme;
mod viewport;

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use portfolio_core::SiteConfig;
use tracing_subscriber::EnvFilter;

/// Global site configuration, set once before launch
static SITE_CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Get the site configuration (loaded at startup or built-in defaults)
pub fn get_site_config() -> SiteConfig {
    SITE_CONFIG.get().cloned().unwrap_or_default()
}

/// Portfolio - single-page personal site
#[derive(Parser, Debug)]
#[command(name = "portfolio-desktop")]
#[command(about = "Single-page portfolio: bio, experience, companies and contact")]
struct Args {
    /// Site configuration file (JSON). Defaults to <config dir>/portfolio/site.json
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    print_config: bool,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1200.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,
}

/// Default config location, if a file exists there
fn discovered_config_path() -> Option<PathBuf> {
    let path = dirs::config_dir()?.join("portfolio").join("site.json");
    path.exists().then_some(path)
}

fn load_config(explicit: Option<&Path>) -> Result<SiteConfig, portfolio_core::SiteError> {
    if let Some(path) = explicit {
        // An explicit path that fails to load is fatal
        return SiteConfig::load(path);
    }

    match discovered_config_path() {
        Some(path) => match SiteConfig::load(&path) {
            Ok(config) => Ok(config),
            Err(e) => {
                tracing::warn!(
                    "Ignoring unusable config at {:?}: {}; using built-in defaults",
                    path,
                    e
                );
                Ok(SiteConfig::default())
            }
        },
        None => Ok(SiteConfig::default()),
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config = match load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if args.print_config {
        return match config.to_json_pretty() {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(e) => {
                tracing::error!("Failed to serialize configuration: {}", e);
                ExitCode::FAILURE
            }
        };
    }

    let title = config.identity.site_title.clone();
    tracing::info!(
        "Starting '{}' with {} sections",
        title,
        config.sections.len()
    );

    // Store configuration globally
    let _ = SITE_CONFIG.set(config);

    // Configure desktop window
    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);

    ExitCode::SUCCESS
}
