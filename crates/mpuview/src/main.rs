mod config;
mod exit;
mod logging;
mod output;
mod watch;

use clap::Parser;
use tracing::debug;

use crate::config::{Config, DEFAULT_PORT};
use crate::logging::init_logging;

#[derive(Parser, Debug)]
#[command(
    name = "mpuview",
    version,
    about = "Show orientation reports from an MPU-6050 sensor board",
    after_help = "Environment: MPUVIEW_LOG_LEVEL (error|warn|info|debug|trace), \
                  MPUVIEW_LOG_FORMAT (text|json), MPUVIEW_OUTPUT (pretty|json)"
)]
struct Cli {
    /// Serial port the sensor board is connected to.
    #[arg(value_name = "PORT", default_value = DEFAULT_PORT)]
    port: String,
}

fn main() {
    let cli = Cli::parse();

    let config = match Config::from_env(cli.port) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    };

    init_logging(&config);
    debug!(
        version = env!("CARGO_PKG_VERSION"),
        target = option_env!("MPUVIEW_BUILD_TARGET").unwrap_or("unknown"),
        "starting"
    );

    match watch::run(config) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}
