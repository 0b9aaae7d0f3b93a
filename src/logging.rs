use tracing_subscriber::EnvFilter;

/// All workspace crate targets that should receive log output.
const CRATE_TARGETS: &[&str] = &["spectrend", "spectrend_series", "spectrend_stats"];

/// Initialize tracing for the given verbosity level.
///
/// Mapping:
/// - 0        -> warn
/// - 1        -> info
/// - 2        -> debug
/// - 3+       -> trace
///
/// `RUST_LOG` env var overrides the verbosity if set.
///
/// # Panics
///
/// Panics if a global subscriber is already installed; use [`try_init`] when
/// embedding in an application that may have set one.
pub fn init(verbosity: u8) {
    tracing_subscriber::fmt().with_env_filter(env_filter(verbosity)).init();
}

/// Like [`init`], but returns an error instead of panicking when a global
/// subscriber is already installed.
pub fn try_init(verbosity: u8) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}

fn env_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)))
}

fn default_filter(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}
