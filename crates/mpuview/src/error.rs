use mpuview_transport::TransportError;

/// Errors that stop the poll loop.
///
/// Validation failures are not here: they are reported per tick through
/// [`TickOutcome::Rejected`](crate::TickOutcome::Rejected) and never end
/// polling.
#[derive(Debug, thiserror::Error)]
pub enum PollError {
    /// Reading from the transport failed.
    #[error("could not read MPU report: {0}")]
    Read(#[source] TransportError),

    /// Releasing the transport failed.
    #[error("could not close transport: {0}")]
    Close(#[source] TransportError),
}

impl PollError {
    /// The transport failure behind this error.
    pub fn transport(&self) -> &TransportError {
        match self {
            PollError::Read(err) | PollError::Close(err) => err,
        }
    }
}

pub type Result<T> = std::result::Result<T, PollError>;
