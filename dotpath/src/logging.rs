//! Development-time tracing for debugging path access.
//!
//! Only the binary installs a subscriber. Library users get the same
//! `tracing` events through whatever subscriber their application sets up.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Env var checked before `RUST_LOG`.
pub const LOG_ENV: &str = "DOTPATH_LOG";

/// Used when neither env var is set: quiet dependencies, `info` for this crate.
pub const DEFAULT_DIRECTIVES: &str = "warn,dotpath=info";

/// Initialize tracing subscriber for development logging.
///
/// Reads `DOTPATH_LOG`, then `RUST_LOG`, falling back to
/// [`DEFAULT_DIRECTIVES`]. Output: stderr, compact format.
///
/// # Example
/// ```bash
/// DOTPATH_LOG=dotpath=trace dotpath get doc.json lvl1.lvl2.one
/// ```
pub fn init() {
    let directives = std::env::var(LOG_ENV)
        .or_else(|_| std::env::var(EnvFilter::DEFAULT_ENV))
        .ok();

    tracing_subscriber::registry()
        .with(filter_for(directives.as_deref()))
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

/// Build the filter for `directives`, falling back to [`DEFAULT_DIRECTIVES`]
/// when they are missing or do not parse.
pub fn filter_for(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|raw| EnvFilter::try_new(raw).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVES))
}
