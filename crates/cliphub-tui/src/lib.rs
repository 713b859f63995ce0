mod app;
mod args;
mod config;
mod controller;
mod event;
mod format;
mod theme;
mod tui;
mod ui;

use anyhow::Result;
use cliphub_client::HubClient;
use log::warn;
use std::path::Path;
use std::sync::Arc;
use std::sync::mpsc;
use std::time::Duration;

use app::AppState;
use config::Config;
use controller::Controller;
use theme::{Preferences, resolve_theme};

pub use args::Cli;

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.log_file.as_deref())?;

    let config = Config::load(cli.config.as_deref())?;
    let base_url = cli.base_url.unwrap_or_else(|| config.base_url.clone());

    let prefs_path = Preferences::default_path().ok();
    let prefs = prefs_path
        .as_deref()
        .map(|path| {
            Preferences::load_from(path).unwrap_or_else(|e| {
                warn!("ignoring unreadable preferences: {}", e);
                Preferences::default()
            })
        })
        .unwrap_or_default();
    let theme = resolve_theme(&prefs);

    let runtime = tokio::runtime::Runtime::new()?;
    let client = Arc::new(HubClient::new(&base_url)?);

    let (tx, rx) = mpsc::channel();
    let mut controller = Controller::new(
        AppState::new(theme),
        client,
        runtime.handle().clone(),
        tx,
        Duration::from_secs(config.poll_interval_secs),
        prefs_path,
    );

    // First fetch before the first frame, like the page load.
    controller.load(false);

    tui::run_loop(controller, rx)
}

/// Diagnostics go to a file when asked for; stderr would fight the TUI for
/// the terminal, so without a file the default level is off (RUST_LOG still
/// overrides).
fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let mut builder = match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            let mut builder = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or("info"),
            );
            builder.target(env_logger::Target::Pipe(Box::new(file)));
            builder
        }
        None => env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")),
    };

    let _ = builder.try_init();
    Ok(())
}
