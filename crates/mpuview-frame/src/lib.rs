//! Fixed-size orientation frames and their validation.
//!
//! Every report sent by the sensor board is a 24-byte little-endian record:
//! - a 4-byte signature (`0xDEADF00D`)
//! - a 4-byte declared size (always 24)
//! - a 4-byte CRC-32 computed with the CRC field itself zeroed
//! - three `f32` angles in degrees
//!
//! [`validate`] turns whatever one transport read returned into either the
//! three angles or a [`ValidationError`] naming the first check that failed.
//! No resynchronization is attempted: a bad buffer is simply rejected.

pub mod checksum;
pub mod codec;
pub mod error;
pub mod validator;

pub use checksum::checksum;
pub use codec::{encode_frame, Angles, Frame, FRAME_SIZE, MAGIC};
pub use error::{Result, ValidationError};
pub use validator::validate;
