//! Logging initialization
//!
//! Configures tracing-subscriber to write human-readable events to stderr,
//! leaving stdout free.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::args::LogLevel;

/// Install the global subscriber at `level`.
///
/// The filter comes from the command line only; no environment variable is
/// consulted.
pub(crate) fn init_logging(level: LogLevel) {
    let env_filter = EnvFilter::new(level.as_filter());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .compact();

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();
}
