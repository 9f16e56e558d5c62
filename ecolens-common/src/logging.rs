//! Tracing subscriber setup shared by the EcoLens binaries
//!
//! Startup runs in two phases. Config loading happens under a scoped bootstrap
//! subscriber ([`with_bootstrap_logging`]) so its warnings are visible before
//! the `[logging]` level is known; afterwards [`init_tracing`] installs the
//! global subscriber with the configured level.

use crate::config::LoggingConfig;
use crate::{Error, Result};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Build the filter used by [`init_tracing`]
///
/// `RUST_LOG` wins. Otherwise `default_directives` is used with the configured
/// level substituted for every `{level}` placeholder.
pub fn build_filter(default_directives: &str, logging: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(default_directives.replace("{level}", &logging.level))
    })
}

/// Install the global tracing subscriber (fmt layer + env filter)
pub fn init_tracing(default_directives: &str, logging: &LoggingConfig) -> Result<()> {
    tracing_subscriber::registry()
        .with(build_filter(default_directives, logging))
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| Error::Internal(format!("Failed to install tracing subscriber: {}", e)))
}

/// Run `f` with a temporary subscriber at the default level (or `RUST_LOG`)
///
/// Used around config loading, which runs before [`init_tracing`].
pub fn with_bootstrap_logging<T>(default_directives: &str, f: impl FnOnce() -> T) -> T {
    with_bootstrap_logging_to(default_directives, std::io::stdout, f)
}

/// [`with_bootstrap_logging`] writing to `writer`
pub fn with_bootstrap_logging_to<W, T>(
    default_directives: &str,
    writer: W,
    f: impl FnOnce() -> T,
) -> T
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let subscriber = tracing_subscriber::registry()
        .with(build_filter(default_directives, &LoggingConfig::default()))
        .with(tracing_subscriber::fmt::layer().with_writer(writer).with_ansi(false));
    tracing::subscriber::with_default(subscriber, f)
}
