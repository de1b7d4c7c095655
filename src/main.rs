//! tempconv: terminal host entry point.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  Adapters (outer ring)                   │
//! │                                                          │
//! │  TerminalHost      TerminalDisplay   LogEventSink        │
//! │  (stdin lines)     (DisplayPort)     (EventSink)         │
//! │  JsonConfigFile (ConfigPort)                             │
//! │                                                          │
//! │  ──────────────── Port Trait Boundary ─────────────      │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────┐      │
//! │  │        ScreenService (pure logic)              │      │
//! │  │  ConverterViewModel · Derived<String, String>  │      │
//! │  └────────────────────────────────────────────────┘      │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Each stdin line is the Celsius field contents after one change; the
//! label is echoed as `= <text>`.  `:clear` empties the field.
#![deny(unused_must_use)]

use std::io;

use anyhow::{Context, Result};
use log::{info, warn};

use tempconv::adapters::config_file::JsonConfigFile;
use tempconv::adapters::log_sink::LogEventSink;
use tempconv::adapters::terminal::{TerminalDisplay, TerminalHost};
use tempconv::app::ports::{ConfigError, ConfigPort};
use tempconv::app::service::ScreenService;
use tempconv::config::ScreenConfig;

/// Env var naming an optional JSON config file.
const CONFIG_ENV: &str = "TEMPCONV_CONFIG";

fn main() -> Result<()> {
    // ── 1. Logging ────────────────────────────────────────────
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    info!("tempconv v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Config (file or defaults) ──────────────────────────
    let config = load_config()?;

    // ── 3. Construct adapters ─────────────────────────────────
    let stdout = io::stdout();
    let mut display = TerminalDisplay::new(stdout.lock());
    let mut log_sink = LogEventSink::new();
    let host = TerminalHost::new(config.replay_keystrokes);

    // ── 4. Screen lifecycle ───────────────────────────────────
    let mut screen = ScreenService::new();
    let sent = host
        .run_session(
            io::stdin().lock(),
            &config,
            &mut screen,
            &mut display,
            &mut log_sink,
        )
        .context("reading Celsius input")?;
    info!("Input closed after {} changes", sent);
    Ok(())
}

fn load_config() -> Result<ScreenConfig> {
    let Some(path) = std::env::var_os(CONFIG_ENV) else {
        return Ok(ScreenConfig::default());
    };

    let source = JsonConfigFile::new(path);
    match source.load() {
        Ok(cfg) => Ok(cfg),
        Err(ConfigError::NotFound) => {
            warn!("{} not found, using defaults", source.path().display());
            Ok(ScreenConfig::default())
        }
        Err(e) => Err(tempconv::Error::from(e))
            .with_context(|| format!("loading config from {}", source.path().display())),
    }
}
