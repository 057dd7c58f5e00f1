//! Tracing subscriber setup
//!
//! Diagnostics go to stderr so they never mix with command output on stdout.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// `RUST_LOG` wins when set (e.g. `RUST_LOG=pixhost=trace`); otherwise the
/// level is `warn`, or `debug` for pixhost when `verbose` is on. Calling this
/// twice is harmless.
pub fn init(verbose: bool) {
    let fallback = if verbose { "warn,pixhost=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact()
        .try_init();
}
