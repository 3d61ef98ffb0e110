use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "RECEIPTS_LOG";

/// Initialize tracing on stderr with the RECEIPTS_LOG filter.
///
/// Defaults to "warn"; `verbose` forces "debug" for this crate.
pub fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("warn,receipts=debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // Stdout is reserved for progress and summaries
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
