//! Blocking byte-stream transports for orientation telemetry.
//!
//! This is the lowest layer of mpuview. The poller only needs two things from
//! a transport: "read up to N bytes, blocking" and "close". Both are expressed
//! by the [`Transport`] trait; providers here cover a real serial device
//! ([`SerialTransport`]) and any [`std::io::Read`] ([`StreamTransport`]).
//!
//! Transports never configure or interpret the bytes they carry beyond the
//! line settings needed to open the device.

pub mod error;
pub mod serial;
pub mod stream;
pub mod traits;

pub use error::{Result, TransportError};
pub use serial::{SerialConfig, SerialTransport, DEFAULT_BAUD_RATE};
pub use stream::StreamTransport;
pub use traits::Transport;
