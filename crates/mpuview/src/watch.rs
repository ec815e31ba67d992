use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use mpuview::transport::SerialTransport;
use mpuview::Poller;
use tracing::info;

use crate::config::Config;
use crate::exit::{poll_error, transport_error, CliError, CliResult, INTERNAL, SUCCESS};
use crate::output::ConsoleRenderer;

/// Open the port and poll until Ctrl-C or a transport failure.
pub fn run(config: Config) -> CliResult<i32> {
    info!(port = %config.port, "using serial port");

    let transport = SerialTransport::open(&config.port, &config.serial)
        .map_err(|err| transport_error("could not open serial port", err))?;

    let running = Arc::new(AtomicBool::new(true));
    install_ctrlc_handler(running.clone())?;

    let poller = Poller::with_config(
        transport,
        ConsoleRenderer::new(config.output),
        config.poller,
    );
    poller.run(&running).map_err(poll_error)?;

    Ok(SUCCESS)
}

// The first Ctrl-C asks the poller to stop after the current read. A read
// can block indefinitely on a silent device, so a second one exits at once
// without closing the port; the OS releases the handle at exit.
fn install_ctrlc_handler(running: Arc<AtomicBool>) -> CliResult<()> {
    ctrlc::set_handler(move || {
        if !running.swap(false, Ordering::SeqCst) {
            std::process::exit(130);
        }
    })
    .map_err(|err| CliError::new(INTERNAL, format!("signal handler setup failed: {err}")))
}
