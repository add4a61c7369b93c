//! Logging setup for the CLI using the `tracing` ecosystem.
//!
//! Logs go to stderr so stdin mode can write Markdown to stdout.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber. Call once, before any logging.
///
/// Level precedence: `--verbose` (debug), `--quiet` (errors only),
/// `RUST_LOG`, then `info` for this crate.
pub fn init_logger(verbose: bool, quiet: bool) {
    let filter = if verbose {
        EnvFilter::new("javadoc_md=debug")
    } else if quiet {
        EnvFilter::new("javadoc_md=error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("javadoc_md=info"))
    };

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .without_time();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
