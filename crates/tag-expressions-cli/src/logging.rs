//! Structured logging for the `tag-expr` command.
//!
//! Logs go to stderr so stdout carries only command results. Records the
//! library emits through the `log` facade are forwarded into the same
//! subscriber.

use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;

fn filter_from_config(config: &CliConfig) -> EnvFilter {
    EnvFilter::new(config.log_level.as_filter_str())
}

/// Initialise the logging subsystem based on configuration.
///
/// If a global subscriber is already installed the call is a no-op.
pub(crate) fn init_logging(config: &CliConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_from_config(config))
        .with_writer(std::io::stderr)
        .with_target(true)
        .without_time()
        .try_init();
}
