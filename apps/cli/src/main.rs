//! `portal` terminal front-end.
//!
//! Drives the same registration controller as the desktop form: prompts feed keystrokes,
//! the checklist and per-field errors are printed instead of rendered.

mod cli;
mod commands;
mod output;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Command};
use portal::domain::config::{ClientConfig, LogConfig};
use portal::kernel::config::load_config;
use portal_logger::{LevelFilter, Logger};
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let loaded = load_config::<ClientConfig>(cli.config.as_deref());
    let cfg = loaded.as_ref().cloned().unwrap_or_default();

    let _log = init_logger(&cfg.log, cli.verbose).context("Failed to initialize logging")?;
    if let Err(err) = loaded {
        tracing::warn!(error = %err, "Using default configuration");
    }

    match cli.command {
        Command::Register(args) => commands::register::run(&cfg, args).await,
        Command::Socials(args) => commands::socials::run(&args),
    }
}

fn init_logger(cfg: &LogConfig, verbose: bool) -> anyhow::Result<Logger> {
    let builder =
        Logger::builder().name(env!("CARGO_PKG_NAME")).level(console_level(&cfg.level, verbose));

    let logger = match &cfg.directory {
        Some(dir) => builder.path(dir).json(cfg.json).init()?,
        None => builder.init()?,
    };
    Ok(logger)
}

/// `log.level` capped at `warn` so log lines do not bury prompts; `--verbose` means `debug`.
fn console_level(configured: &str, verbose: bool) -> LevelFilter {
    if verbose {
        return LevelFilter::DEBUG;
    }
    configured
        .parse::<LevelFilter>()
        .map_or(LevelFilter::WARN, |level| level.min(LevelFilter::WARN))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_level_is_capped_at_warn() {
        assert_eq!(console_level("info", false), LevelFilter::WARN);
        assert_eq!(console_level("trace", false), LevelFilter::WARN);
        assert_eq!(console_level("error", false), LevelFilter::ERROR);
        assert_eq!(console_level("off", false), LevelFilter::OFF);
    }

    #[test]
    fn verbose_overrides_the_configured_level() {
        assert_eq!(console_level("error", true), LevelFilter::DEBUG);
    }

    #[test]
    fn unparsable_level_falls_back_to_warn() {
        assert_eq!(console_level("loud", false), LevelFilter::WARN);
    }
}
