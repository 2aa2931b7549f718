//! Header constants for the receipt binary stream.

/// Magic bytes at the start of every stream, ASCII "RC".
pub const MAGIC_BYTES: [u8; 2] = *b"RC";

/// The only stream version this codec currently reads and writes.
pub const VERSION_V1: u8 = 0x01;

/// Total header length: magic bytes plus the version byte.
pub const HEADER_LEN: usize = MAGIC_BYTES.len() + 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magic_values() {
        assert_eq!(MAGIC_BYTES, [0x52, 0x43]);
        assert_eq!(VERSION_V1, 0x01);
        assert_eq!(HEADER_LEN, 3);
    }
}
