//! Log output for the mosaic host
//!
//! Two sinks are installed:
//! - stderr, filtered by `RUST_LOG` (default `warn`), e.g.
//!   `RUST_LOG=mosaic::update=debug` to follow every message and mode change
//! - `<config dir>/logs/mosaic.log`, rotated daily, always at `debug`
//!
//! The file sink is dropped with a note on stderr when the logs directory
//! cannot be created; the console sink is always present.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber. Call once, before the first update.
pub fn init() {
    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        );

    let file = crate::config_paths::ensure_logs_dir()
        .map_err(|e| eprintln!("mosaic: file logging disabled ({})", e))
        .ok()
        .map(|dir| {
            fmt::layer()
                .with_writer(tracing_appender::rolling::daily(dir, "mosaic.log"))
                .with_ansi(false)
                .with_line_number(true)
                .with_filter(LevelFilter::DEBUG)
        });

    tracing_subscriber::registry().with(console).with(file).init();
}
