use crc::{Crc, CRC_32_ISO_HDLC};

// Reflected 0xEDB88320, init and xorout 0xFFFFFFFF. Same as zlib's crc32().
const CRC32: Crc<u32> = Crc::<u32>::new(&CRC_32_ISO_HDLC);

/// CRC-32 over `bytes`, compatible with the sensor firmware.
pub fn checksum(bytes: &[u8]) -> u32 {
    CRC32.checksum(bytes)
}
