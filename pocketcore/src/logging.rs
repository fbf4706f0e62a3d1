//! stderr logging via `tracing-subscriber`.

use tracing_subscriber::EnvFilter;

/// Build the filter: `RUST_LOG` if set, non-empty and valid, else `default_filter`,
/// else `info`.
pub fn filter(default_filter: &str) -> EnvFilter {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    filter_from(env.as_deref(), default_filter)
}

fn filter_from(env: Option<&str>, default_filter: &str) -> EnvFilter {
    env.filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_new(default_filter).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

/// Install a compact stderr subscriber. Safe to call more than once; later
/// calls are no-ops.
pub fn init(default_filter: &str) {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter(default_filter))
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .compact()
        .try_init()
        .is_ok();
    if installed {
        tracing::debug!(default_filter, "logging initialised");
    }
}
