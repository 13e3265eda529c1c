//! Log setup for the command line front end
//!
//! Diagnostics go to stderr through `tracing`, so stdout stays clean for
//! scripted use. `RUST_LOG` wins over everything; otherwise each `-v`
//! raises the level above the configured default.

use tracing_subscriber::EnvFilter;

/// Log filter for a verbosity count and configured default level
#[must_use]
pub fn level_for(verbosity: u8, default_level: &str) -> &str {
    match verbosity {
        0 => default_level,
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(verbosity: u8, default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbosity, default_level)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
