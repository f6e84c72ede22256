use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::ShellError;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "EXPL_LOG";

const DEFAULT_DIRECTIVE: &str = "warn";
const DEBUG_DIRECTIVE: &str = "expl=debug";

/// `--debug` wins over the environment; a bad directive falls back to the default.
pub fn filter(debug: bool) -> EnvFilter {
    if debug {
        return EnvFilter::new(DEBUG_DIRECTIVE);
    }
    std::env::var(LOG_ENV)
        .ok()
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Diagnostics go to stderr so they never mix with command output.
pub fn init(debug: bool) -> Result<(), ShellError> {
    tracing_subscriber::registry()
        .with(filter(debug))
        .with(fmt::layer().compact().with_target(false).with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| ShellError::Logging(e.to_string()))
}
