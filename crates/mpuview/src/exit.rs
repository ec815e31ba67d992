use mpuview::transport::TransportError;
use mpuview::PollError;

pub const SUCCESS: i32 = 0;
pub const TRANSPORT_ERROR: i32 = 3;
pub const USAGE: i32 = 64;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

/// Failure that ends the process with `code`.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Transport failures exit with the OS error code when there is a usable one.
pub fn transport_error(context: &str, err: TransportError) -> CliError {
    let code = match err.raw_os_error() {
        Some(code) if code > 0 && code < 256 => code,
        _ => TRANSPORT_ERROR,
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn poll_error(err: PollError) -> CliError {
    match err {
        PollError::Read(source) => transport_error("could not read MPU report", source),
        PollError::Close(source) => transport_error("could not close serial port", source),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn os_error_code_becomes_exit_code() {
        let err = transport_error(
            "could not open serial port",
            TransportError::Open {
                endpoint: "COM5".to_string(),
                source: std::io::Error::from_raw_os_error(2),
            },
        );
        assert_eq!(err.code, 2);
        assert!(err.to_string().starts_with("could not open serial port: "));
    }

    #[test]
    fn missing_os_error_falls_back() {
        let err = poll_error(PollError::Read(TransportError::Disconnected));
        assert_eq!(err.code, TRANSPORT_ERROR);
        assert!(err.message.contains("disconnected"));
    }

    #[test]
    fn out_of_range_os_error_falls_back() {
        let err = transport_error(
            "read",
            TransportError::Io(std::io::Error::from_raw_os_error(1167)),
        );
        assert_eq!(err.code, TRANSPORT_ERROR);
    }
}
