use thiserror::Error;

/// Errors from tally-codec.
#[derive(Debug, Error)]
pub enum CodecError {
    /// If we tried to read past the end of the underlying buffer.
    #[error("would overrun end of input")]
    OverrunInput,

    /// If there was extra data in a buffer that we didn't consume reading a
    /// message.
    #[error("extra unnecessary input leftover")]
    ExtraInput,

    /// If a varint's continuation bits ran past the maximum permitted width.
    #[error("varint exceeded maximum width")]
    VarintTooLong,

    /// If asked to encode a negative value as a varint.
    #[error("cannot encode negative value as varint")]
    NegativeInt,

    /// If an integer didn't fit in the target it was read into or written
    /// from.
    #[error("integer out of range for {0}")]
    IntOutOfRange(&'static str),

    /// If bytes that must hold UTF-8 text didn't.
    #[error("invalid utf-8 in text field")]
    InvalidUtf8,

    /// If we read a variant tag that doesn't correspond to a known variant.
    #[error("invalid variant for {0}")]
    InvalidVariant(&'static str),
}
