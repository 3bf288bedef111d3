#![windows_subsystem = "windows"]

use anyhow::Context;
use portal::domain::config::{ClientConfig, LogConfig};
use portal::kernel::config::load_config;
use portal_desktop::DesktopApp;
use portal_logger::{LevelFilter, Logger};

fn main() -> anyhow::Result<()> {
    let loaded = load_config::<ClientConfig>(None::<&str>);
    let cfg = loaded.as_ref().cloned().unwrap_or_default();

    let _log = init_logger(&cfg.log)?;
    if let Err(err) = loaded {
        tracing::warn!(error = %err, "Using default configuration");
    }

    DesktopApp::new(&cfg).context("Critical: API settings are malformed")?.launch();

    Ok(())
}

fn init_logger(cfg: &LogConfig) -> anyhow::Result<Logger> {
    let level = cfg.level.parse::<LevelFilter>().unwrap_or(LevelFilter::INFO);
    let builder = Logger::builder().name(env!("CARGO_PKG_NAME")).level(level);

    let logger = match &cfg.directory {
        Some(dir) => builder.path(dir).json(cfg.json).init()?,
        None => builder.init()?,
    };
    Ok(logger)
}
