use crate::codec::{Angles, Frame, FRAME_SIZE, MAGIC};
use crate::error::{Result, ValidationError};

/// Validate one transport read as an orientation report.
///
/// Checks run in order and stop at the first failure: length, signature,
/// declared size, CRC. On success the three angles are returned exactly as
/// they were on the wire; mapping them onto display axes is up to the caller.
pub fn validate(buffer: &[u8]) -> Result<Angles> {
    let bytes: &[u8; FRAME_SIZE] = buffer.try_into().map_err(|_| ValidationError::BadLength {
        len: buffer.len(),
        expected: FRAME_SIZE,
    })?;

    let frame = Frame::from_bytes(bytes);

    if frame.signature != MAGIC {
        return Err(ValidationError::BadSignature {
            found: frame.signature,
        });
    }

    if frame.size != FRAME_SIZE as u32 {
        return Err(ValidationError::BadDeclaredSize {
            declared: frame.size,
            expected: FRAME_SIZE as u32,
        });
    }

    let computed = frame.compute_crc();
    if computed != frame.crc {
        return Err(ValidationError::BadChecksum {
            stored: frame.crc,
            computed,
        });
    }

    Ok(frame.angles())
}
