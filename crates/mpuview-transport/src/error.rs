/// Errors that can occur in transport operations.
///
/// Every variant is fatal to the poll loop; none of them are retried.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Failed to open the named endpoint.
    #[error("failed to open {endpoint}: {source}")]
    Open {
        endpoint: String,
        source: std::io::Error,
    },

    /// Failed to apply line settings after opening.
    #[error("failed to configure {endpoint}: {message}")]
    Configure { endpoint: String, message: String },

    /// An I/O error occurred while reading from the stream.
    #[error("transport I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stream reached end-of-file before any byte of a frame arrived.
    #[error("transport disconnected")]
    Disconnected,

    /// Failed to release the endpoint.
    #[error("failed to close transport: {0}")]
    Close(std::io::Error),
}

impl TransportError {
    /// Raw OS error code of the underlying failure, when the platform gave one.
    pub fn raw_os_error(&self) -> Option<i32> {
        match self {
            TransportError::Open { source, .. } => source.raw_os_error(),
            TransportError::Io(source) | TransportError::Close(source) => source.raw_os_error(),
            TransportError::Configure { .. } | TransportError::Disconnected => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, TransportError>;
