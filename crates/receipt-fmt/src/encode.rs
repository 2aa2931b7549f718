//! Element encoder.
//!
//! Encoding is strict where decoding is tolerant: the encoder only ever sees
//! well-typed trees built by this process, so anything it can't represent is
//! an error, never a silent drop.

use tally_codec::{Codec, CodecError, Encoder, Varint};

use crate::error::ReceiptResult;
use crate::fields::write_field;
use crate::magic::{MAGIC_BYTES, VERSION_V1};
use crate::tags::{FieldTag, field};
use crate::types::ReceiptElement;

/// Encodes a tree of receipt elements into the binary stream form.
pub fn encode_elements(elements: &[ReceiptElement]) -> ReceiptResult<Vec<u8>> {
    let mut buf = Vec::new();
    MAGIC_BYTES.encode(&mut buf)?;
    VERSION_V1.encode(&mut buf)?;
    encode_element_list(elements, &mut buf)?;
    Ok(buf)
}

/// Encodes `varint(count)` followed by each element's block.  Used both for
/// the top-level stream and for the nested lists inside rows and iterators.
pub(crate) fn encode_element_list(
    elements: &[ReceiptElement],
    enc: &mut impl Encoder,
) -> Result<(), CodecError> {
    varint_len(elements.len())?.encode(enc)?;
    for element in elements {
        encode_element(element, enc)?;
    }
    Ok(())
}

/// Encodes one `varint(opcode), varint(body_len), body` block.
fn encode_element(element: &ReceiptElement, enc: &mut impl Encoder) -> Result<(), CodecError> {
    let body = encode_body(element)?;

    Varint::new(element.opcode())
        .ok_or(CodecError::IntOutOfRange("opcode"))?
        .encode(enc)?;
    varint_len(body.len())?.encode(enc)?;
    enc.write_buf(&body)
}

/// Builds the body of one element: `varint(field_count)` plus the TLV fields
/// the element's kind calls for.  Optional fields are only counted and
/// emitted when present.
fn encode_body(element: &ReceiptElement) -> Result<Vec<u8>, CodecError> {
    let mut fields: Vec<(FieldTag, Vec<u8>)> = Vec::new();

    match element {
        ReceiptElement::Text {
            text,
            align,
            style,
            flex,
        } => {
            push_str(&mut fields, field::TEXT, text);
            push_str(&mut fields, field::ALIGN, align.as_str());
            if let Some(style) = style {
                push_str(&mut fields, field::STYLE, style);
            }
            push_flex(&mut fields, *flex)?;
        }

        ReceiptElement::Picture { url, flex } => {
            push_str(&mut fields, field::IMAGE_URL, url);
            push_flex(&mut fields, *flex)?;
        }

        ReceiptElement::Barcode {
            code,
            barcode_type,
            flex,
        } => {
            push_str(&mut fields, field::CODE, code);
            push_str(&mut fields, field::BARCODE_TYPE, barcode_type);
            push_flex(&mut fields, *flex)?;
        }

        // No fields at all; the body is just the zero count.
        ReceiptElement::PageBreak | ReceiptElement::HorizontalLine => {}

        ReceiptElement::Row { children, flex } => {
            fields.push((field::CHILDREN, encode_list_value(children)?));
            push_flex(&mut fields, *flex)?;
        }

        ReceiptElement::SectionRef { reference, flex } => {
            push_str(&mut fields, field::REF, reference);
            push_flex(&mut fields, *flex)?;
        }

        ReceiptElement::Iterator {
            path,
            rows,
            conditions,
            flex,
        } => {
            push_str(&mut fields, field::PATH, path);
            fields.push((field::ROWS, encode_list_value(rows)?));
            if let Some(conditions) = conditions {
                push_str(&mut fields, field::CONDITIONS, conditions);
            }
            push_flex(&mut fields, *flex)?;
        }
    }

    let mut body = Vec::new();
    varint_len(fields.len())?.encode(&mut body)?;
    for (tag, value) in &fields {
        write_field(*tag, value, &mut body)?;
    }

    Ok(body)
}

/// Encodes a nested element list into a field value.
fn encode_list_value(elements: &[ReceiptElement]) -> Result<Vec<u8>, CodecError> {
    let mut value = Vec::new();
    encode_element_list(elements, &mut value)?;
    Ok(value)
}

fn push_str(fields: &mut Vec<(FieldTag, Vec<u8>)>, tag: FieldTag, s: &str) {
    fields.push((tag, s.as_bytes().to_vec()));
}

fn push_flex(
    fields: &mut Vec<(FieldTag, Vec<u8>)>,
    flex: Option<u32>,
) -> Result<(), CodecError> {
    if let Some(flex) = flex {
        let mut value = Vec::new();
        Varint::new(u64::from(flex))
            .ok_or(CodecError::IntOutOfRange("flex"))?
            .encode(&mut value)?;
        fields.push((field::FLEX, value));
    }
    Ok(())
}

fn varint_len(len: usize) -> Result<Varint, CodecError> {
    Varint::new_usize(len).ok_or(CodecError::IntOutOfRange("length"))
}
