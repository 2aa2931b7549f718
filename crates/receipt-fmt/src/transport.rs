//! Base64 convenience wrappers.
//!
//! Receipt templates get persisted in JSON documents and text columns that
//! historically held a JSON array of elements.  The binary form travels
//! through the same fields as standard base64, and [`is_receipt_binary`]
//! picks the decode path at read time.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::decode::decode_elements;
use crate::encode::encode_elements;
use crate::error::ReceiptResult;
use crate::magic::MAGIC_BYTES;
use crate::types::ReceiptElement;

/// Encodes a tree of receipt elements to the base64 form of the binary
/// stream.
pub fn to_base64(elements: &[ReceiptElement]) -> ReceiptResult<String> {
    Ok(STANDARD.encode(encode_elements(elements)?))
}

/// Decodes the base64 form of a binary stream back into receipt elements.
pub fn from_base64(s: &str) -> ReceiptResult<Vec<ReceiptElement>> {
    let buf = STANDARD.decode(s)?;
    decode_elements(&buf)
}

/// Heuristic sniff for whether a stored string holds the base64 binary form
/// rather than a legacy JSON receipt.
///
/// Strings that look like JSON (leading `[` or `{`) are rejected without a
/// decode attempt; otherwise the string gets a trial base64 decode and the
/// first two decoded bytes are compared against the magic.  Nothing escapes
/// as an error: any failure just means "not binary".
pub fn is_receipt_binary(s: &str) -> bool {
    if s.starts_with('[') || s.starts_with('{') {
        return false;
    }

    match STANDARD.decode(s) {
        Ok(buf) => buf.len() >= MAGIC_BYTES.len() && buf[..MAGIC_BYTES.len()] == MAGIC_BYTES,
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sniff_rejects_json() {
        assert!(!is_receipt_binary(r#"[{"type":"text","text":"hi"}]"#));
        assert!(!is_receipt_binary(r#"{"type":"text"}"#));
    }

    #[test]
    fn test_sniff_rejects_garbage() {
        assert!(!is_receipt_binary("not base64 at all !!"));
        assert!(!is_receipt_binary(""));
    }

    #[test]
    fn test_sniff_rejects_foreign_base64() {
        // Valid base64, wrong magic.
        assert!(!is_receipt_binary(&STANDARD.encode(b"ZZ\x01\x00")));
        // Valid base64, too short to even hold the magic.
        assert!(!is_receipt_binary(&STANDARD.encode(b"R")));
    }

    #[test]
    fn test_sniff_accepts_encoded_stream() {
        let s = to_base64(&[ReceiptElement::HorizontalLine]).unwrap();
        assert!(is_receipt_binary(&s));
    }
}
