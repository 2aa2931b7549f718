//! Example of a downstream crate defining its own `Codec` types, with
//! generated property tests over them.

#![expect(missing_docs, reason = "test repo")]
#![expect(unused_crate_dependencies, reason = "macro hacks")]

use tally_codec_tests::{
    generate_codec_tests,
    proptest::prelude::*,
    tally_codec::{Codec, CodecError, Decoder, Encoder},
};

// A tender kind as a point-of-sale backend might frame one: a closed set of
// variants with a catch-all carrying a payload byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TenderKind {
    Cash,
    Card,
    Voucher(u8),
}

impl Codec for TenderKind {
    fn decode(dec: &mut impl Decoder) -> Result<Self, CodecError> {
        let variant = u8::decode(dec)?;
        match variant {
            0 => Ok(TenderKind::Cash),
            1 => Ok(TenderKind::Card),
            2 => {
                let scheme = u8::decode(dec)?;
                Ok(TenderKind::Voucher(scheme))
            }
            _ => Err(CodecError::InvalidVariant("TenderKind")),
        }
    }

    fn encode(&self, enc: &mut impl Encoder) -> Result<(), CodecError> {
        match self {
            TenderKind::Cash => 0u8.encode(enc),
            TenderKind::Card => 1u8.encode(enc),
            TenderKind::Voucher(scheme) => {
                2u8.encode(enc)?;
                scheme.encode(enc)
            }
        }
    }
}

impl Arbitrary for TenderKind {
    type Parameters = ();
    type Strategy = BoxedStrategy<TenderKind>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            Just(TenderKind::Cash),
            Just(TenderKind::Card),
            any::<u8>().prop_map(TenderKind::Voucher),
        ]
        .boxed()
    }
}

generate_codec_tests!(TenderKind, "tender_kind");

#[test]
fn test_unknown_variant_tag_is_an_error() {
    use tally_codec_tests::tally_codec::decode_buf_exact;

    let res: Result<TenderKind, _> = decode_buf_exact(&[9u8]);
    assert!(matches!(res, Err(CodecError::InvalidVariant("TenderKind"))));
}
