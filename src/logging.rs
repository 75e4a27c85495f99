//! Logging setup for the harness.
//!
//! Library code only emits `tracing` events; installing a subscriber is left
//! to binaries. `RPSLS_LOG` takes precedence over the `-v` count.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a filter directive, e.g. `rpsls=debug`.
pub const LOG_ENV: &str = "RPSLS_LOG";

/// Filter level for a `-v` count. Warnings only by default; each `-v` opens
/// one level, stopping at trace.
#[must_use]
pub const fn verbosity_to_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Events go to stderr so stdout carries
/// only turn reports. Later calls leave the first subscriber in place.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(verbosity_to_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
