use tally_codec::CodecError;
use thiserror::Error;

/// Errors for decoding or transporting receipt streams.
///
/// Only header-level and stream-structural problems surface here.  Corruption
/// confined to a single element never does: the decoder drops that element
/// and keeps going.
#[derive(Debug, Error)]
pub enum ReceiptCodecError {
    /// Stream shorter than the fixed header.
    #[error("stream too short for header")]
    TooShort,

    /// Stream had incorrect magic bytes.
    #[error("invalid magic bytes (found {0:?})")]
    BadMagic([u8; 2]),

    /// Stream version this decoder doesn't speak.
    #[error("unsupported version {0:#04x}")]
    UnsupportedVersion(u8),

    /// Transport string wasn't valid base64.
    #[error("base64: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Structural failure in the underlying byte stream.
    #[error("codec: {0}")]
    Codec(#[from] CodecError),
}

/// Wrapper result type.
pub type ReceiptResult<T> = Result<T, ReceiptCodecError>;
