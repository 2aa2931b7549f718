//! Forward-compatibility behavior against hand-assembled streams.

#![expect(missing_docs, reason = "test crate")]
#![expect(unused_crate_dependencies, reason = "not every dep used per test bin")]

use tally_codec::{Varint, encode_to_vec};
use tally_receipt_fmt::{
    Align, ReceiptCodecError, ReceiptElement, decode_elements, encode_elements, field, opcode,
};

fn varint(v: u64) -> Vec<u8> {
    encode_to_vec(&Varint::new(v).unwrap()).unwrap()
}

/// Frames a body as one element block.
fn block(op: u64, body: &[u8]) -> Vec<u8> {
    let mut buf = varint(op);
    buf.extend(varint(body.len() as u64));
    buf.extend_from_slice(body);
    buf
}

/// One TLV record.
fn tlv(tag: u64, value: &[u8]) -> Vec<u8> {
    let mut buf = varint(tag);
    buf.extend(varint(value.len() as u64));
    buf.extend_from_slice(value);
    buf
}

/// A stream header plus an element count.
fn stream(count: u64) -> Vec<u8> {
    let mut buf = vec![0x52, 0x43, 0x01];
    buf.extend(varint(count));
    buf
}

fn text(s: &str) -> ReceiptElement {
    ReceiptElement::Text {
        text: s.into(),
        align: Align::Left,
        style: None,
        flex: None,
    }
}

/// The encoded block of a single element, with the stream header and count
/// stripped off.
fn encoded_block(element: &ReceiptElement) -> Vec<u8> {
    let buf = encode_elements(std::slice::from_ref(element)).unwrap();
    buf[4..].to_vec()
}

#[test]
fn test_unknown_opcode_is_skipped() {
    // An element from some future version: opcode 255 with an arbitrary
    // 7 byte body, followed by a perfectly normal text element.
    let mut buf = stream(2);
    buf.extend(block(255, &[0xaa; 7]));
    buf.extend(encoded_block(&text("still here")));

    let decoded = decode_elements(&buf).unwrap();
    assert_eq!(decoded, vec![text("still here")]);
}

#[test]
fn test_unknown_opcode_between_known_elements() {
    // The survivors keep their relative order around the skipped block.
    let mut buf = stream(3);
    buf.extend(encoded_block(&text("first")));
    buf.extend(block(99, &[0x00]));
    buf.extend(encoded_block(&text("second")));

    let decoded = decode_elements(&buf).unwrap();
    assert_eq!(decoded, vec![text("first"), text("second")]);
}

#[test]
fn test_unknown_opcode_nested_in_row_is_skipped() {
    // children list: one unknown block, one text block
    let mut children = varint(2);
    children.extend(block(255, &[0xbb; 3]));
    children.extend(encoded_block(&text("kept")));

    let mut row_body = varint(1);
    row_body.extend(tlv(field::CHILDREN, &children));

    let mut buf = stream(1);
    buf.extend(block(opcode::ROW, &row_body));

    let decoded = decode_elements(&buf).unwrap();
    assert_eq!(
        decoded,
        vec![ReceiptElement::Row {
            children: vec![text("kept")],
            flex: None,
        }]
    );
}

#[test]
fn test_unknown_field_tag_is_ignored() {
    // A text body carrying a field from the future alongside the ones we
    // know.
    let mut body = varint(3);
    body.extend(tlv(field::TEXT, b"hi"));
    body.extend(tlv(field::ALIGN, b"right"));
    body.extend(tlv(99, &[0xde, 0xad, 0xbe, 0xef]));

    let mut buf = stream(1);
    buf.extend(block(opcode::TEXT, &body));

    let decoded = decode_elements(&buf).unwrap();
    assert_eq!(
        decoded,
        vec![ReceiptElement::Text {
            text: "hi".into(),
            align: Align::Right,
            style: None,
            flex: None,
        }]
    );
}

#[test]
fn test_short_buffers_fail_with_header_error() {
    for buf in [&[][..], &[0x52][..], &[0x52, 0x43][..]] {
        assert!(matches!(
            decode_elements(buf),
            Err(ReceiptCodecError::TooShort)
        ));
    }
}

#[test]
fn test_foreign_versions_are_rejected() {
    for version in [0x00u8, 0x02, 0x7f, 0xff] {
        let buf = [0x52, 0x43, version, 0x00];
        assert!(matches!(
            decode_elements(&buf),
            Err(ReceiptCodecError::UnsupportedVersion(v)) if v == version
        ));
    }
}

#[test]
fn test_truncated_element_body_is_a_documented_error() {
    // Valid header, one element whose claimed body runs past the end.
    let mut buf = stream(1);
    buf.extend(varint(opcode::TEXT));
    buf.extend(varint(64));
    buf.extend_from_slice(&[0x01, 0x02]);

    assert!(matches!(
        decode_elements(&buf),
        Err(ReceiptCodecError::Codec(_))
    ));
}

#[test]
fn test_stream_starts_with_magic_and_version() {
    let buf = encode_elements(&[text("x")]).unwrap();
    assert_eq!(&buf[..3], &[0x52, 0x43, 0x01]);
}

#[test]
fn test_flex_field_roundtrips_through_raw_bytes() {
    // A hand-built barcode element with an explicit flex varint.
    let mut body = varint(3);
    body.extend(tlv(field::CODE, b"12345678"));
    body.extend(tlv(field::BARCODE_TYPE, b"code39"));
    body.extend(tlv(field::FLEX, &varint(300)));

    let mut buf = stream(1);
    buf.extend(block(opcode::BARCODE, &body));

    let decoded = decode_elements(&buf).unwrap();
    assert_eq!(
        decoded,
        vec![ReceiptElement::Barcode {
            code: "12345678".into(),
            barcode_type: "code39".into(),
            flex: Some(300),
        }]
    );
}
