//! Tracing subscriber setup.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Environment variable overriding the log filter (`RUST_LOG` syntax).
pub const LOG_ENV: &str = "PASSFORGE_LOG";

/// Install a compact stderr subscriber.
///
/// The level is `WARN` by default and `DEBUG` with `verbose`; [`LOG_ENV`]
/// overrides both. Keep the returned guard alive until exit so buffered
/// events are flushed.
#[must_use]
pub fn init(verbose: bool) -> WorkerGuard {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_target(false)
        .compact()
        .try_init();
    if let Err(e) = installed {
        eprintln!("logging already initialized: {e}");
    }

    guard
}
