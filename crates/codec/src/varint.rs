//! Unsigned LEB128 varints, identical to Protocol Buffers varints.
//!
//! Each byte carries 7 data bits in its low bits, least-significant group
//! first, with the high bit set on every byte except the last:
//!
//! ```txt
//! 0bbbbbbb
//! 1bbbbbbb 0bbbbbbb
//! 1bbbbbbb 1bbbbbbb 0bbbbbbb
//! ...
//! ```
//!
//! Every integer in the receipt wire format (counts, lengths, tags, opcodes,
//! flex weights) goes through this type.  There is no signed encoding.

use crate::errors::CodecError;
use crate::types::{Codec, Decoder, Encoder};

/// The max value one of these varints can have, bounded by the decoder's
/// 35 bit shift guard (5 encoded bytes).
pub const VARINT_MAX: u64 = (1 << 35) - 1;

/// The shift at which the decoder gives up on malformed input.
const MAX_SHIFT: u32 = 35;

/// Inner type used to represent a varint in memory.
pub type VarintInner = u64;

/// Internal varint type.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub struct Varint(VarintInner);

impl Varint {
    fn new_unchecked(v: VarintInner) -> Self {
        Self(v)
    }

    /// Construct a new instance.
    pub fn new(v: VarintInner) -> Option<Self> {
        if v > VARINT_MAX {
            return None;
        }
        Some(Self::new_unchecked(v))
    }

    /// Constructs a new instance from a usize.
    pub fn new_usize(v: usize) -> Option<Self> {
        // This is implemented as a separate function from `new` just so we
        // don't have to trust LLVM will optimize out the bounds checks.
        if v as u64 > VARINT_MAX {
            return None;
        }

        Some(Self::new_unchecked(v as VarintInner))
    }

    /// Constructs a new instance from a signed integer, rejecting negative
    /// values.  The wire format has no signed encoding, so a negative value
    /// here is always a producer bug.
    pub fn new_signed(v: i64) -> Result<Self, CodecError> {
        if v < 0 {
            return Err(CodecError::NegativeInt);
        }

        Self::new(v as u64).ok_or(CodecError::IntOutOfRange("varint"))
    }

    /// Converts to inner value.
    pub fn inner(self) -> VarintInner {
        self.0
    }

    /// Converts to a usize for use as a count or length.
    pub fn to_usize(self) -> usize {
        self.0 as usize
    }

    /// Convenience function for returning the encoded length in bytes.
    pub fn byte_len(&self) -> usize {
        let bits = 64 - self.0.leading_zeros().min(63);
        (bits as usize).div_ceil(7)
    }

    /// # Panics
    ///
    /// If out of bounds.
    #[cfg(test)]
    fn sanity_check(&self) {
        assert!(self.0 <= VARINT_MAX, "varint: out of bounds");
    }
}

impl Codec for Varint {
    fn decode(dec: &mut impl Decoder) -> Result<Self, CodecError> {
        let mut value: u64 = 0;
        let mut shift: u32 = 0;

        loop {
            let byte = u8::decode(dec)?;

            // Malformed or adversarial input could keep the continuation bit
            // set forever, so give up once the next group would not fit.
            if shift >= MAX_SHIFT {
                return Err(CodecError::VarintTooLong);
            }

            value |= u64::from(byte & 0x7f) << shift;

            if byte & 0x80 == 0 {
                break;
            }

            shift += 7;
        }

        let vi = Varint::new_unchecked(value);

        #[cfg(test)]
        vi.sanity_check();

        Ok(vi)
    }

    fn encode(&self, enc: &mut impl Encoder) -> Result<(), CodecError> {
        #[cfg(test)]
        self.sanity_check();

        let mut v = self.0;
        loop {
            let mut byte = (v & 0x7f) as u8;
            v >>= 7;

            if v != 0 {
                byte |= 0x80;
            }

            enc.write_buf(&[byte])?;

            if v == 0 {
                return Ok(());
            }
        }
    }
}
