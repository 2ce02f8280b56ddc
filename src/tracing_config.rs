//! Diagnostic logging.
//!
//! Events go to stderr so they never mix with the report on stdout. The
//! filter comes from `PROPDOC_LOG` (same syntax as `RUST_LOG`, e.g. `debug`
//! or `propdoc::core::handlers=trace`); without it only warnings are shown,
//! or debug events with `--verbose`.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV_VAR: &str = "PROPDOC_LOG";

fn build_filter(verbose: bool) -> EnvFilter {
    match std::env::var(LOG_ENV_VAR) {
        Ok(val) => EnvFilter::builder().parse_lossy(val),
        Err(_) => EnvFilter::new(if verbose { "warn,propdoc=debug" } else { "warn" }),
    }
}

/// Initialise the global tracing subscriber. Later calls are no-ops.
pub fn init_tracing(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
