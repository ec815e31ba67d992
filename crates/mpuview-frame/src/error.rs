/// Reasons a buffer is rejected as an orientation frame.
///
/// All of these are recoverable: the frame is dropped and polling continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The buffer is not exactly one frame long.
    #[error("invalid report length ({len} bytes, expected {expected})")]
    BadLength { len: usize, expected: usize },

    /// The signature field does not carry the report magic.
    #[error("invalid report signature (0x{found:08X}, expected 0xDEADF00D)")]
    BadSignature { found: u32 },

    /// The declared size field does not match the frame size.
    #[error("invalid report size (declared {declared}, expected {expected})")]
    BadDeclaredSize { declared: u32, expected: u32 },

    /// The stored CRC does not match the recomputed one.
    #[error("CRC error (stored 0x{stored:08X}, computed 0x{computed:08X})")]
    BadChecksum { stored: u32, computed: u32 },
}

impl ValidationError {
    /// Stable short name, used as a structured log field and stats key.
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::BadLength { .. } => "bad_length",
            ValidationError::BadSignature { .. } => "bad_signature",
            ValidationError::BadDeclaredSize { .. } => "bad_declared_size",
            ValidationError::BadChecksum { .. } => "bad_checksum",
        }
    }
}

pub type Result<T> = std::result::Result<T, ValidationError>;
