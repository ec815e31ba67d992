use std::io::Read;
use std::time::Duration;

use serialport::{DataBits, FlowControl, Parity, SerialPort, StopBits};
use tracing::{debug, info};

use crate::error::{Result, TransportError};
use crate::stream::fill;
use crate::traits::Transport;

/// Baud rate the sensor firmware transmits at.
pub const DEFAULT_BAUD_RATE: u32 = 115_200;

/// Line settings applied when a serial port is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerialConfig {
    pub baud_rate: u32,
    pub data_bits: DataBits,
    pub parity: Parity,
    pub stop_bits: StopBits,
    /// How long a single OS-level read waits before being re-issued.
    ///
    /// Reads through [`Transport::read`] never give up; this only bounds each
    /// underlying poll.
    pub poll_slice: Duration,
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            baud_rate: DEFAULT_BAUD_RATE,
            data_bits: DataBits::Eight,
            parity: Parity::None,
            stop_bits: StopBits::One,
            poll_slice: Duration::from_secs(1),
        }
    }
}

/// Serial port transport (COM ports on Windows, tty devices elsewhere).
pub struct SerialTransport {
    port: Box<dyn SerialPort>,
    endpoint: String,
}

impl SerialTransport {
    /// Open `endpoint` and apply `config` (8N1 at 115200 by default).
    pub fn open(endpoint: &str, config: &SerialConfig) -> Result<Self> {
        let port = serialport::new(endpoint, config.baud_rate)
            .data_bits(config.data_bits)
            .parity(config.parity)
            .stop_bits(config.stop_bits)
            .flow_control(FlowControl::None)
            .timeout(config.poll_slice)
            .open()
            .map_err(|err| open_error(endpoint, err))?;

        info!(
            endpoint,
            baud_rate = config.baud_rate,
            "opened serial port"
        );

        Ok(Self {
            port,
            endpoint: endpoint.to_string(),
        })
    }
}

impl Transport for SerialTransport {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        fill(&mut OsErrorReader(&mut self.port), buf, true)
    }

    fn close(self) -> Result<()> {
        debug!(endpoint = %self.endpoint, "closing serial port");
        drop(self.port);
        Ok(())
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl std::fmt::Debug for SerialTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerialTransport")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

fn open_error(endpoint: &str, err: serialport::Error) -> TransportError {
    if err.kind() == serialport::ErrorKind::InvalidInput {
        return TransportError::Configure {
            endpoint: endpoint.to_string(),
            message: err.to_string(),
        };
    }

    // serialport flattens OS errors into text. Re-open plainly to get the errno.
    let source = match std::fs::OpenOptions::new()
        .read(true)
        .write(true)
        .open(endpoint)
    {
        Err(os) if os.raw_os_error().is_some() => os,
        _ => with_os_code(std::io::Error::from(err)),
    };

    TransportError::Open {
        endpoint: endpoint.to_string(),
        source,
    }
}

/// Restores the OS error code that serialport drops from read errors.
struct OsErrorReader<'a>(&'a mut Box<dyn SerialPort>);

impl Read for OsErrorReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.0.read(buf).map_err(with_os_code)
    }
}

/// Swap `err` for the thread's last OS error when `err` lost its code and
/// errno still describes the same kind of failure.
fn with_os_code(err: std::io::Error) -> std::io::Error {
    if err.raw_os_error().is_some() {
        return err;
    }
    let last = std::io::Error::last_os_error();
    match last.raw_os_error() {
        Some(code) if code != 0 && last.kind() == err.kind() => last,
        _ => err,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_115200_8n1() {
        let config = SerialConfig::default();
        assert_eq!(config.baud_rate, 115_200);
        assert_eq!(config.data_bits, DataBits::Eight);
        assert_eq!(config.parity, Parity::None);
        assert_eq!(config.stop_bits, StopBits::One);
    }

    #[test]
    #[cfg(unix)]
    fn opening_missing_device_keeps_os_error() {
        let err = SerialTransport::open("/dev/mpuview-does-not-exist", &SerialConfig::default())
            .unwrap_err();
        assert!(err.to_string().contains("/dev/mpuview-does-not-exist"));
        // ENOENT
        assert_eq!(err.raw_os_error(), Some(2));
    }

    #[test]
    fn with_os_code_keeps_existing_code() {
        let err = with_os_code(std::io::Error::from_raw_os_error(5));
        assert_eq!(err.raw_os_error(), Some(5));
    }

    #[test]
    #[cfg(unix)]
    fn with_os_code_recovers_errno_of_matching_kind() {
        let _ = std::fs::File::open("/dev/mpuview-does-not-exist");
        let flattened = std::io::Error::new(std::io::ErrorKind::NotFound, "No such file");

        assert_eq!(with_os_code(flattened).raw_os_error(), Some(2));
    }

    #[test]
    #[cfg(unix)]
    fn with_os_code_ignores_stale_errno_of_other_kind() {
        let _ = std::fs::File::open("/dev/mpuview-does-not-exist");
        let flattened = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "device gone");

        let err = with_os_code(flattened);
        assert_eq!(err.raw_os_error(), None);
        assert_eq!(err.kind(), std::io::ErrorKind::BrokenPipe);
    }
}
