use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber.
///
/// `RUST_LOG` wins when set. Otherwise any `-v` flags pick the level, falling
/// back to the configured `log_level` and finally to `warn`.
pub fn init(verbosity: u8, configured: Option<&str>) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directive = match (verbosity, configured) {
            (0, Some(level)) => level,
            (0, None) => "warn",
            (1, _) => "info",
            _ => "debug",
        };
        EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("warn"))
    });

    // A subscriber may already be installed when dispatching more than once per process.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
