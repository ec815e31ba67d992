//! Polls orientation reports from an MPU-6050 sensor board and keeps the last
//! validated orientation for a renderer.
//!
//! # Crate Structure
//!
//! - [`transport`] — Blocking byte transports (serial port, generic readers)
//! - [`frame`] — Report layout, CRC-32 and validation
//! - [`orientation`] — Last-known-good orientation state
//! - [`poller`] — Fixed-interval read → validate → publish loop
//! - [`render`] — The renderer boundary the poller publishes to

pub mod error;
pub mod orientation;
pub mod poller;
pub mod render;

pub use error::{PollError, Result};
pub use orientation::OrientationState;
pub use poller::{
    remap_axes, PollStats, Poller, PollerConfig, PollerState, PollerStateWatch, TickOutcome,
};
pub use render::{LatestOrientation, Renderer};

/// Re-export transport types.
pub mod transport {
    pub use mpuview_transport::*;
}

/// Re-export frame types.
pub mod frame {
    pub use mpuview_frame::*;
}
