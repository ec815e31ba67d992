use clap::ValueEnum;
use tracing::level_filters::LevelFilter;
use tracing::Dispatch;

use crate::config::Config;

/// Diagnostics format on stderr.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Minimum diagnostics level on stderr.
///
/// Rejected reports are logged at `warn`, so `error` silences them.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

/// Build the stderr subscriber described by `config`.
pub fn dispatch(config: &Config) -> Dispatch {
    let builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(LevelFilter::from(config.log_level))
        .with_ansi(false)
        .with_target(false);

    match config.log_format {
        LogFormat::Text => Dispatch::new(builder.finish()),
        LogFormat::Json => Dispatch::new(builder.json().finish()),
    }
}

/// Install the subscriber for the rest of the process.
pub fn init_logging(config: &Config) {
    if let Err(err) = tracing::dispatcher::set_global_default(dispatch(config)) {
        eprintln!("warning: diagnostics disabled: {err}");
    }
}
