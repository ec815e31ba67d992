use crate::error::Result;

/// A blocking byte source owned by exactly one reader.
///
/// Implementations are acquired once, read from repeatedly and released with
/// [`Transport::close`]. Closing consumes the transport so it cannot happen
/// twice.
pub trait Transport {
    /// Read up to `buf.len()` bytes, blocking until the buffer is full or the
    /// stream ends.
    ///
    /// Returns the number of bytes written into `buf`. A short count means the
    /// stream ended part-way through; the caller decides what a short buffer
    /// means. End-of-stream before the first byte is
    /// [`TransportError::Disconnected`](crate::TransportError::Disconnected).
    fn read(&mut self, buf: &mut [u8]) -> Result<usize>;

    /// Release the underlying endpoint.
    fn close(self) -> Result<()>
    where
        Self: Sized;

    /// Human-readable endpoint name for diagnostics.
    fn endpoint(&self) -> &str;
}
