use std::time::Duration;

use crate::cli::Cli;
use crate::config::app_config::AppConfig;
use crate::core::errors::Result;

/// Runtime settings resolved once per invocation.
///
/// Precedence: command-line flag (or its env var) over config file
/// over built-in default.
pub struct Context {
    pub server_url: String,
    pub timeout: Duration,
    pub probe_interval: Duration,
    pub verbose: bool,
    pub quiet: bool,
}

impl Context {
    /// Merge CLI flags with the loaded configuration.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let config = AppConfig::load(cli.config.as_deref())?;
        Ok(Self {
            server_url: cli
                .server
                .clone()
                .unwrap_or_else(|| config.server.url.clone()),
            timeout: Duration::from_secs(cli.timeout.unwrap_or(config.server.timeout_secs)),
            probe_interval: Duration::from_secs(config.probe.interval_secs),
            verbose: cli.verbose,
            quiet: cli.quiet,
        })
    }
}
