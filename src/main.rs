//! PVE Planner - Proxmox VE resources calculator
//!
//! A desktop calculator for planning CPU, RAM and disk allocation across
//! LXC containers and VMs from the Proxmox VE community scripts catalog.

#![allow(dead_code)] // Parts of the core API are only exercised by tests

mod core;
mod ui;

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::core::{AppState, Catalog, Settings};
use crate::ui::PlannerApp;

/// Application name constant
pub const APP_NAME: &str = "PVE Planner";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> Result<()> {
    // Settings decide the log level, so a load failure is reported after logging is up
    let settings = Settings::load();
    let log_filter = settings
        .as_ref()
        .map(Settings::log_filter)
        .unwrap_or_else(|_| Settings::default().log_filter());
    init_logging(log_filter);

    info!("{} v{} starting...", APP_NAME, APP_VERSION);

    let settings = settings.unwrap_or_else(|e| {
        error!("Failed to load settings, using defaults: {:#}", e);
        Settings::default()
    });

    let catalog = load_catalog(&settings)?;
    let state = AppState::new(Arc::new(catalog), settings.clone());

    let (width, height) = settings.window_size.unwrap_or((1280, 900));
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width as f32, height as f32])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    info!("Starting GUI...");
    eframe::run_native(
        &format!("{} v{}", APP_NAME, APP_VERSION),
        native_options,
        Box::new(|cc| Ok(Box::new(PlannerApp::new(cc, state)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))?;

    info!("{} shutting down", APP_NAME);
    Ok(())
}

/// Initialize the logging system
fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Load the configured catalog, refusing to start on an invalid one
fn load_catalog(settings: &Settings) -> Result<Catalog> {
    let catalog = match &settings.catalog_path {
        Some(path) => Catalog::from_path(path)
            .with_context(|| format!("Failed to load catalog from {:?}", path)),
        None => Catalog::bundled().context("Bundled catalog is invalid"),
    };

    catalog.inspect_err(|e| error!("{:#}", e))
}
