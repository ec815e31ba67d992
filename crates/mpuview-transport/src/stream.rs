use std::io::{ErrorKind, Read};

use tracing::debug;

use crate::error::{Result, TransportError};
use crate::traits::Transport;

/// Transport over any blocking [`Read`] (pipes, files, sockets, test cursors).
pub struct StreamTransport<R> {
    inner: R,
    endpoint: String,
}

impl<R: Read> StreamTransport<R> {
    /// Wrap a reader under a diagnostic endpoint name.
    pub fn new(inner: R, endpoint: impl Into<String>) -> Self {
        Self {
            inner,
            endpoint: endpoint.into(),
        }
    }

    /// Borrow the underlying reader.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Consume the transport and return the inner reader without closing it.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Transport for StreamTransport<R> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        fill(&mut self.inner, buf, false)
    }

    fn close(self) -> Result<()> {
        debug!(endpoint = %self.endpoint, "closing stream transport");
        drop(self.inner);
        Ok(())
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Fill `buf` from `reader`, handling partial reads.
///
/// `Interrupted` is always retried. `TimedOut` is retried only when
/// `wait_through_timeouts` is set, which turns a reader with a poll timeout
/// into an unbounded blocking one.
pub(crate) fn fill<R: Read + ?Sized>(
    reader: &mut R,
    buf: &mut [u8],
    wait_through_timeouts: bool,
) -> Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        let read = match reader.read(&mut buf[filled..]) {
            Ok(n) => n,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) if wait_through_timeouts && err.kind() == ErrorKind::TimedOut => continue,
            Err(err) => return Err(TransportError::Io(err)),
        };

        if read == 0 {
            if filled == 0 {
                return Err(TransportError::Disconnected);
            }
            break;
        }

        filled += read;
    }
    Ok(filled)
}
