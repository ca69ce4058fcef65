//! Logging setup
//!
//! The terminal belongs to the editor while it runs, so logs only go to a
//! file: `~/.config/commit-editor/logs/commit-editor.log` with daily
//! rotation.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=commit_editor::commit=trace` - wrap/trailer decisions
//! - `RUST_LOG=commit_editor::update=debug` - message handling

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config_paths::{ensure_logs_dir, LOG_FILE_PREFIX};

/// Initialize the file subscriber.
///
/// Filtering respects RUST_LOG and defaults to `warn`. When no log
/// directory can be created logging stays disabled.
pub fn init() {
    let logs_dir = match ensure_logs_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            return;
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let file_appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE_PREFIX);

    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .with_filter(filter);

    tracing_subscriber::registry().with(file_layer).init();
}
