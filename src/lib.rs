// gradle-mend - one-shot repair tools for a broken Android build script

pub mod gradle;
pub mod patch;
pub mod scan;
pub mod utils;

use anyhow::Result;
use tracing::debug;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Initialize logging for CLI usage.
///
/// Diagnostics go to stderr so that stdout stays reserved for the
/// operator-facing report lines printed by the subcommands.
pub fn init_logging() -> Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    fmt::Subscriber::builder()
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    debug!("gradle-mend v{} logging initialized", version());

    Ok(())
}
