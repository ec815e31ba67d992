use bytes::{Buf, BufMut, BytesMut};

use crate::checksum::checksum;

/// Total wire size of one report: signature + size + crc + 3 angles.
pub const FRAME_SIZE: usize = 24;

/// Report signature: `0xDEADF00D`.
pub const MAGIC: u32 = 0xDEAD_F00D;

/// Byte range of the `crc` field inside the wire image.
pub(crate) const CRC_RANGE: std::ops::Range<usize> = 8..12;

/// Orientation angles in degrees, in wire order.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Angles {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Angles {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl From<(f32, f32, f32)> for Angles {
    fn from((x, y, z): (f32, f32, f32)) -> Self {
        Self { x, y, z }
    }
}

impl From<Angles> for (f32, f32, f32) {
    fn from(angles: Angles) -> Self {
        (angles.x, angles.y, angles.z)
    }
}

/// One orientation report with every wire field exposed.
///
/// Wire format (little-endian, packed):
/// ```text
/// ┌────────────┬──────────┬──────────┬─────────┬─────────┬─────────┐
/// │ Signature  │ Size     │ CRC      │ X angle │ Y angle │ Z angle │
/// │ (4B u32)   │ (4B u32) │ (4B u32) │ (4B f32)│ (4B f32)│ (4B f32)│
/// │ 0xDEADF00D │ 24       │          │         │         │         │
/// └────────────┴──────────┴──────────┴─────────┴─────────┴─────────┘
/// ```
///
/// A `Frame` is only a view of bytes; nothing about it is trusted until
/// [`validate`](crate::validate) has accepted the buffer it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub signature: u32,
    pub size: u32,
    pub crc: u32,
    pub x_angle: f32,
    pub y_angle: f32,
    pub z_angle: f32,
}

impl Frame {
    /// Build a well-formed frame for `angles`, CRC included.
    pub fn new(angles: Angles) -> Self {
        let mut frame = Self {
            signature: MAGIC,
            size: FRAME_SIZE as u32,
            crc: 0,
            x_angle: angles.x,
            y_angle: angles.y,
            z_angle: angles.z,
        };
        frame.crc = frame.compute_crc();
        frame
    }

    /// Extract the fields of a wire image.
    pub fn from_bytes(bytes: &[u8; FRAME_SIZE]) -> Self {
        let mut src = &bytes[..];
        Self {
            signature: src.get_u32_le(),
            size: src.get_u32_le(),
            crc: src.get_u32_le(),
            x_angle: src.get_f32_le(),
            y_angle: src.get_f32_le(),
            z_angle: src.get_f32_le(),
        }
    }

    /// Serialize to the wire image, `crc` as stored.
    pub fn to_bytes(&self) -> [u8; FRAME_SIZE] {
        let mut out = [0u8; FRAME_SIZE];
        let mut dst = &mut out[..];
        dst.put_u32_le(self.signature);
        dst.put_u32_le(self.size);
        dst.put_u32_le(self.crc);
        dst.put_f32_le(self.x_angle);
        dst.put_f32_le(self.y_angle);
        dst.put_f32_le(self.z_angle);
        out
    }

    /// CRC of this frame's wire image with the `crc` field zeroed.
    pub fn compute_crc(&self) -> u32 {
        let mut image = self.to_bytes();
        image[CRC_RANGE].fill(0);
        checksum(&image)
    }

    /// The three angles in wire order.
    pub fn angles(&self) -> Angles {
        Angles::new(self.x_angle, self.y_angle, self.z_angle)
    }
}

/// Encode a well-formed report for `angles` into `dst`.
///
/// This is the producer side of the wire format.
pub fn encode_frame(angles: Angles, dst: &mut BytesMut) {
    dst.reserve(FRAME_SIZE);
    dst.put_slice(&Frame::new(angles).to_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO_WIRE: [u8; FRAME_SIZE] = [
        0x0D, 0xF0, 0xAD, 0xDE, 0x18, 0x00, 0x00, 0x00, 0x0F, 0xF9, 0xA6, 0x6D, 0x00, 0x00, 0x20,
        0x41, 0x00, 0x00, 0xA0, 0x41, 0x00, 0x00, 0xF0, 0x41,
    ];

    #[test]
    fn new_frame_matches_firmware_bytes() {
        let frame = Frame::new(Angles::new(10.0, 20.0, 30.0));
        assert_eq!(frame.crc, 0x6DA6_F90F);
        assert_eq!(frame.to_bytes(), SCENARIO_WIRE);
    }

    #[test]
    fn from_bytes_extracts_fields() {
        let frame = Frame::from_bytes(&SCENARIO_WIRE);
        assert_eq!(frame.signature, MAGIC);
        assert_eq!(frame.size, 24);
        assert_eq!(frame.crc, 0x6DA6_F90F);
        assert_eq!(frame.angles(), Angles::new(10.0, 20.0, 30.0));
    }

    #[test]
    fn compute_crc_ignores_stored_crc() {
        let mut frame = Frame::new(Angles::new(-45.5, 0.25, 180.0));
        let expected = frame.crc;
        assert_eq!(expected, 0x2578_3564);

        frame.crc = 0xFFFF_FFFF;
        assert_eq!(frame.compute_crc(), expected);
    }

    #[test]
    fn encode_appends_one_frame() {
        let mut buf = BytesMut::new();
        encode_frame(Angles::new(10.0, 20.0, 30.0), &mut buf);
        encode_frame(Angles::new(1.0, 2.0, 3.0), &mut buf);

        assert_eq!(buf.len(), 2 * FRAME_SIZE);
        assert_eq!(&buf[..FRAME_SIZE], &SCENARIO_WIRE);
    }

    #[test]
    fn angles_tuple_conversions() {
        let angles: Angles = (1.5, -2.5, 3.0).into();
        assert_eq!(angles, Angles::new(1.5, -2.5, 3.0));
        let tuple: (f32, f32, f32) = angles.into();
        assert_eq!(tuple, (1.5, -2.5, 3.0));
    }
}
