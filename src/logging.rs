//! Diagnostics via `tracing`, written to stderr so stdout stays clean for results.

use tracing_subscriber::EnvFilter;

/// Default filter for a `-v` count: 0 = warn, 1 = info, 2+ = debug.
pub fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "fuf=warn",
        1 => "fuf=info",
        _ => "fuf=debug",
    }
}

/// Install the global subscriber. `RUST_LOG` takes precedence over the verbosity flag.
/// Safe to call more than once; later calls are no-ops.
pub fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
