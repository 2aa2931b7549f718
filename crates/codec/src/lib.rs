//! Special purpose binary encoding framework for the receipt wire format.

mod errors;
pub use errors::CodecError;

mod buf_decoder;
pub use buf_decoder::BufDecoder;

mod types;
pub use types::{Codec, Decoder, Encoder};

mod varint;
pub use varint::{VARINT_MAX, Varint, VarintInner};

mod util;
pub use util::{decode_buf_exact, encode_to_vec};
