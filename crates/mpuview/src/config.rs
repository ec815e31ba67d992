use clap::ValueEnum;
use mpuview::transport::SerialConfig;
use mpuview::PollerConfig;

use crate::exit::{CliError, CliResult, USAGE};
use crate::logging::{LogFormat, LogLevel};
use crate::output::OutputFormat;

/// Serial port used when none is given on the command line.
#[cfg(windows)]
pub const DEFAULT_PORT: &str = "COM5";
#[cfg(not(windows))]
pub const DEFAULT_PORT: &str = "/dev/ttyUSB0";

pub const ENV_LOG_FORMAT: &str = "MPUVIEW_LOG_FORMAT";
pub const ENV_LOG_LEVEL: &str = "MPUVIEW_LOG_LEVEL";
pub const ENV_OUTPUT: &str = "MPUVIEW_OUTPUT";

/// Everything the binary needs to run, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: String,
    pub serial: SerialConfig,
    pub poller: PollerConfig,
    pub log_format: LogFormat,
    pub log_level: LogLevel,
    pub output: OutputFormat,
}

impl Config {
    /// Resolve configuration from the port argument and the process
    /// environment.
    pub fn from_env(port: String) -> CliResult<Self> {
        Self::from_lookup(port, |key| std::env::var(key).ok())
    }

    /// Resolve configuration with an explicit variable lookup.
    pub fn from_lookup(port: String, lookup: impl Fn(&str) -> Option<String>) -> CliResult<Self> {
        Ok(Self {
            port,
            serial: SerialConfig::default(),
            poller: PollerConfig::default(),
            log_format: parse_var(&lookup, ENV_LOG_FORMAT)?.unwrap_or_default(),
            log_level: parse_var(&lookup, ENV_LOG_LEVEL)?.unwrap_or_default(),
            output: parse_var(&lookup, ENV_OUTPUT)?.unwrap_or_default(),
        })
    }
}

fn parse_var<T: ValueEnum>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> CliResult<Option<T>> {
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    if raw.trim().is_empty() {
        return Ok(None);
    }

    T::from_str(raw.trim(), true).map(Some).map_err(|_| {
        let allowed: Vec<String> = T::value_variants()
            .iter()
            .filter_map(|v| v.to_possible_value())
            .map(|v| v.get_name().to_string())
            .collect();
        CliError::new(
            USAGE,
            format!("invalid {key} value '{raw}' (expected one of: {})", allowed.join(", ")),
        )
    })
}
