//! Self-describing binary wire format for point-of-sale receipt element
//! trees.
//!
//! A receipt is a tree of elements (text runs, barcodes, images, layout rows,
//! iteration directives) produced by a template renderer and consumed by a
//! printer-facing renderer.  This crate serializes such trees to a compact
//! stream with the layout:
//!
//! ```text
//! header:  0x52 0x43 version           ("RC", currently 0x01)
//! stream:  varint(element_count), element*
//! element: varint(opcode), varint(body_len), body
//! body:    varint(field_count), field*
//! field:   varint(tag), varint(len), bytes[len]
//! ```
//!
//! All integers are unsigned LEB128 varints and all text is raw UTF-8 inside
//! a field's value.  Every element body is length-prefixed and every field is
//! tag-length-value, so decoders skip element kinds and fields they don't
//! recognize instead of failing: streams written by newer versions stay
//! readable by older ones, minus whatever the older side doesn't understand.
//!
//! The base64 wrappers in [`to_base64`]/[`from_base64`] exist so the binary
//! form can sit in JSON documents and text columns that historically held a
//! JSON receipt representation; [`is_receipt_binary`] tells the two apart at
//! read time.

#[cfg(test)]
use proptest as _;

mod error;
pub use error::{ReceiptCodecError, ReceiptResult};

mod magic;
pub use magic::{HEADER_LEN, MAGIC_BYTES, VERSION_V1};

mod tags;
pub use tags::{FieldTag, Opcode, field, opcode};

mod types;
pub use types::{Align, ReceiptElement};

mod fields;

mod encode;
pub use encode::encode_elements;

mod decode;
pub use decode::decode_elements;

mod transport;
pub use transport::{from_base64, is_receipt_binary, to_base64};
