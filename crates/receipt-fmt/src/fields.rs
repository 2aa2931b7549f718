//! The TLV field layer of an element body.
//!
//! A body is `varint(field_count)` followed by that many tag-length-value
//! records.  Reading collects every record, known tag or not, into a map
//! keyed by tag; the element decoders then pull out the tags they care
//! about.  Tags nobody asks for are skipped by construction, which is what
//! makes fields added by newer writers harmless.

use std::collections::BTreeMap;
use std::str;

use tally_codec::{BufDecoder, Codec, CodecError, Encoder, Varint, decode_buf_exact};

use crate::tags::FieldTag;

/// Writes one tag-length-value record.
pub(crate) fn write_field(
    tag: FieldTag,
    value: &[u8],
    enc: &mut impl Encoder,
) -> Result<(), CodecError> {
    Varint::new(tag)
        .ok_or(CodecError::IntOutOfRange("field tag"))?
        .encode(enc)?;
    Varint::new_usize(value.len())
        .ok_or(CodecError::IntOutOfRange("field length"))?
        .encode(enc)?;
    enc.write_buf(value)
}

/// The decoded fields of one element body, keyed by tag.
///
/// Producers must not emit duplicate tags; if one does anyway, the last
/// record wins.
#[derive(Debug)]
pub(crate) struct FieldMap<'b> {
    fields: BTreeMap<FieldTag, &'b [u8]>,
}

impl<'b> FieldMap<'b> {
    /// Reads the field count and that many TLV records.
    pub(crate) fn read(dec: &mut BufDecoder<&'b [u8]>) -> Result<Self, CodecError> {
        let count = Varint::decode(dec)?.to_usize();

        let mut fields = BTreeMap::new();
        for _ in 0..count {
            let tag = Varint::decode(dec)?.inner();
            let len = Varint::decode(dec)?.to_usize();
            let value = dec.read_slice(len)?;
            fields.insert(tag, value);
        }

        Ok(Self { fields })
    }

    /// Returns the raw bytes of a field, if the tag is present.
    pub(crate) fn bytes(&self, tag: FieldTag) -> Option<&'b [u8]> {
        self.fields.get(&tag).copied()
    }

    /// Reads a required scalar string field leniently: a missing tag decodes
    /// to the empty string.  Bytes that aren't UTF-8 are still an error.
    pub(crate) fn str_or_empty(&self, tag: FieldTag) -> Result<String, CodecError> {
        match self.bytes(tag) {
            Some(b) => utf8(b),
            None => Ok(String::new()),
        }
    }

    /// Reads an optional string field.
    pub(crate) fn opt_str(&self, tag: FieldTag) -> Result<Option<String>, CodecError> {
        self.bytes(tag).map(utf8).transpose()
    }

    /// Reads an optional flex weight, encoded as a varint in the field value.
    pub(crate) fn opt_flex(&self, tag: FieldTag) -> Result<Option<u32>, CodecError> {
        let Some(b) = self.bytes(tag) else {
            return Ok(None);
        };

        let v = decode_buf_exact::<Varint>(b)?;
        let flex = u32::try_from(v.inner()).map_err(|_| CodecError::IntOutOfRange("flex"))?;
        Ok(Some(flex))
    }
}

fn utf8(b: &[u8]) -> Result<String, CodecError> {
    str::from_utf8(b)
        .map(str::to_owned)
        .map_err(|_| CodecError::InvalidUtf8)
}
