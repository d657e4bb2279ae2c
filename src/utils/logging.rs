use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive
pub const LOG_ENV: &str = "EMOJI_SCAN_LOG";

/// Install the stderr subscriber.
///
/// `EMOJI_SCAN_LOG` wins when set; otherwise `verbose` selects `debug`
/// and the default is `warn`. Logs go to stderr so piped stdout stays clean.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,emoji_scan={default_level}")));

    // A subscriber may already be installed (tests, embedding applications)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
