//! Diagnostic channel setup for the binary.
//!
//! Library code only emits `tracing` events; whoever calls it picks the sink.
//! The binary logs to stderr and appends a plain-text copy to a log file, so
//! stdout carries nothing but the rendered document.

use anyhow::{Context, Result};
use std::{fs::OpenOptions, path::Path, sync::Mutex};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default persistent log, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "standings.log";

/// Install the global subscriber.
///
/// Reads `RUST_LOG`, defaulting to `info`. With `log_file`, events are also
/// appended to that file without ANSI colors.
pub fn init(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening log file {}", path.display()))?;
            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .try_init()
        .context("installing tracing subscriber")?;
    Ok(())
}
