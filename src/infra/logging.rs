//! Logging setup. Diagnostics go to stderr through `tracing`; the level comes
//! from `RUST_LOG`, falling back to `warn` (or `debug` when verbose).

use tracing_subscriber::EnvFilter;

pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A second initialization (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
