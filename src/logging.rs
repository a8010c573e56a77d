//! Logging setup for the bus fee manager.
//!
//! Diagnostics go to stderr through `tracing`. The default filter only lets
//! warnings through so the interactive menu on stdout stays readable;
//! `RUST_LOG` overrides it.

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the logging system.
///
/// Call once at startup. A second call is a no-op.
pub fn init_logging(level: Level) {
    let default_filter = format!("bus_fee_manager={level}");

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_file(false)
            .with_line_number(false),
    );

    // Ignore the error if a subscriber is already installed.
    let _ = subscriber.try_init();
}
