/*!
Logging setup for the CitySense CLI.

Log lines go to stderr so that command output on stdout stays clean for
piping. Verbosity follows `RUST_LOG`; when it is unset a quiet default is
applied (`warn` in release builds, `info` for this workspace in debug
builds).
*/

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

fn default_filter() -> &'static str {
    if cfg!(debug_assertions) {
        "warn,citysense=info,citysense_lib=info"
    } else {
        "warn"
    }
}

/// Initialize the global tracing subscriber. Call once at startup.
pub fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter()));

    let fmt_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();

    tracing::debug!("Tracing initialized");
}
