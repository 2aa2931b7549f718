//! Tolerant element decoder.
//!
//! Header problems are fatal; anything wrong inside a single element is not.
//! Each element block is length-prefixed, so a body we can't make sense of
//! (unknown opcode, missing structure, bad UTF-8) is dropped and decoding
//! resumes at the next block.  That containment is what lets old readers
//! consume streams written by newer encoders.

use tally_codec::{BufDecoder, Codec, CodecError, Varint};

use crate::error::{ReceiptCodecError, ReceiptResult};
use crate::fields::FieldMap;
use crate::magic::{HEADER_LEN, MAGIC_BYTES, VERSION_V1};
use crate::tags::{FieldTag, Opcode, field, opcode};
use crate::types::{Align, ReceiptElement};

/// Decodes a binary stream back into a tree of receipt elements.
///
/// Fails only on header-level problems (short stream, bad magic, unknown
/// version) or truncation of the stream's own framing.  Elements whose
/// bodies can't be decoded are silently omitted, so a shorter output list
/// than expected is a sign of partial corruption or a newer writer, not an
/// error.
pub fn decode_elements(buf: &[u8]) -> ReceiptResult<Vec<ReceiptElement>> {
    if buf.len() < HEADER_LEN {
        return Err(ReceiptCodecError::TooShort);
    }

    let magic = [buf[0], buf[1]];
    if magic != MAGIC_BYTES {
        return Err(ReceiptCodecError::BadMagic(magic));
    }

    let version = buf[2];
    if version != VERSION_V1 {
        return Err(ReceiptCodecError::UnsupportedVersion(version));
    }

    let mut dec = BufDecoder::new(&buf[HEADER_LEN..]);
    Ok(decode_element_list(&mut dec)?)
}

/// Decodes `varint(count)` then that many element blocks.  Shared between
/// the top-level stream and the nested lists inside rows and iterators.
///
/// Errors out of here mean the list's own framing was broken (a varint or a
/// body ran past the buffer).  For a nested list that drops the enclosing
/// element; at the top level it aborts the decode.
fn decode_element_list(dec: &mut BufDecoder<&[u8]>) -> Result<Vec<ReceiptElement>, CodecError> {
    let count = Varint::decode(dec)?.to_usize();

    let mut elements = Vec::new();
    for _ in 0..count {
        let op = Varint::decode(dec)?.inner();
        let body_len = Varint::decode(dec)?.to_usize();

        // Slicing the body out first pins the cursor to the block boundary,
        // so a bad body can't desynchronize its siblings.
        let body = dec.read_slice(body_len)?;

        match decode_body(op, body) {
            Ok(Some(element)) => elements.push(element),
            // Unknown opcode or corrupted body: skip just this element.
            Ok(None) | Err(_) => {}
        }
    }

    Ok(elements)
}

/// Decodes one element body per the opcode table.  `Ok(None)` means the
/// opcode isn't one we know.
fn decode_body(op: Opcode, body: &[u8]) -> Result<Option<ReceiptElement>, CodecError> {
    let mut dec = BufDecoder::new(body);
    let fields = FieldMap::read(&mut dec)?;

    let element = match op {
        opcode::TEXT => ReceiptElement::Text {
            text: fields.str_or_empty(field::TEXT)?,
            align: Align::from_wire(&fields.str_or_empty(field::ALIGN)?),
            style: fields.opt_str(field::STYLE)?,
            flex: fields.opt_flex(field::FLEX)?,
        },

        opcode::PICTURE => ReceiptElement::Picture {
            url: fields.str_or_empty(field::IMAGE_URL)?,
            flex: fields.opt_flex(field::FLEX)?,
        },

        opcode::BARCODE => ReceiptElement::Barcode {
            code: fields.str_or_empty(field::CODE)?,
            barcode_type: fields.str_or_empty(field::BARCODE_TYPE)?,
            flex: fields.opt_flex(field::FLEX)?,
        },

        opcode::PAGE_BREAK => ReceiptElement::PageBreak,

        opcode::HORIZONTAL_LINE => ReceiptElement::HorizontalLine,

        opcode::ROW => ReceiptElement::Row {
            children: decode_list_field(&fields, field::CHILDREN)?,
            flex: fields.opt_flex(field::FLEX)?,
        },

        opcode::SECTION_REF => ReceiptElement::SectionRef {
            reference: fields.str_or_empty(field::REF)?,
            flex: fields.opt_flex(field::FLEX)?,
        },

        opcode::ITERATOR => ReceiptElement::Iterator {
            path: fields.str_or_empty(field::PATH)?,
            rows: decode_list_field(&fields, field::ROWS)?,
            conditions: fields.opt_str(field::CONDITIONS)?,
            flex: fields.opt_flex(field::FLEX)?,
        },

        _ => return Ok(None),
    };

    Ok(Some(element))
}

/// Decodes a nested element list out of a field value.
///
/// A missing tag decodes as an empty list; a tag that's present but doesn't
/// parse as a list is an error, which drops the enclosing element.  Scalar
/// fields get the opposite treatment (missing means empty string), matching
/// the original format's leniency split.
fn decode_list_field(
    fields: &FieldMap<'_>,
    tag: FieldTag,
) -> Result<Vec<ReceiptElement>, CodecError> {
    match fields.bytes(tag) {
        Some(value) => {
            let mut dec = BufDecoder::new(value);
            decode_element_list(&mut dec)
        }
        None => Ok(Vec::new()),
    }
}
