use alloc::{string::ToString, vec::Vec};

use rstest::rstest;

use super::utils::packed;
use crate::{DecoderError, DecoderOptions, StreamingDecoder, Token, decode};

fn assert_truncated(err: &DecoderError, expected_context: &str, expected_offset: u64) {
    match err {
        DecoderError::TruncatedInput { context, offset } => {
            assert_eq!(*context, expected_context);
            assert_eq!(*offset, expected_offset);
        }
        other => panic!("expected truncated input, got {other:?}"),
    }
}

#[test]
fn truncated_string_after_start_token() {
    let mut decoder = StreamingDecoder::default();
    decoder.feed(&[0xda, 0x00, 0x05, b'a', b'b']);
    let mut closed = decoder.finish();

    assert_eq!(closed.next().unwrap().unwrap(), Token::StartString);
    let err = closed.next().unwrap().unwrap_err();
    assert_truncated(&err, "str 16", 0);
    assert_eq!(err.to_string(), "cannot decode str 16 at byte 0: no more input");
    assert!(closed.next().is_none());
}

#[test]
fn truncated_string_packed_only() {
    let err = decode(&[0xda, 0x00, 0x05, b'a', b'b'], packed()).unwrap_err();
    assert_truncated(&err, "str 16", 0);
}

#[test]
fn truncated_string_keeps_streamed_chunks() {
    let mut decoder = StreamingDecoder::default();
    decoder.feed(&[0xda, 0x00, 0x05, b'a', b'b']);
    let tokens: Vec<Token> = decoder.by_ref().map(Result::unwrap).collect();
    assert_eq!(tokens, [Token::StartString, Token::StringChunk("ab".into())]);

    let mut closed = decoder.finish();
    assert_truncated(&closed.next().unwrap().unwrap_err(), "str 16", 0);
    assert!(closed.next().is_none());
}

#[rstest]
#[case::uint_16(&[0xcd, 0x01], "uint 16", 0)]
#[case::float_64(&[0xcb, 0x40, 0x09], "float 64", 0)]
#[case::fixstr(&[0xa3, b'a'], "fixstr", 0)]
#[case::str_8_header(&[0xd9], "str 8", 0)]
#[case::bin_8(&[0xc4, 0x02, 0x00], "bin 8", 0)]
#[case::fixext_8(&[0xd7, 0x01, 0x01, 0x02], "fixext 8", 0)]
#[case::ext_16(&[0xc8, 0x00, 0x04, 0x01], "ext 16", 0)]
#[case::after_value(&[0xc0, 0xce, 0x00], "uint 32", 1)]
fn truncated_item(#[case] bytes: &[u8], #[case] context: &str, #[case] offset: u64) {
    let err = decode(bytes, packed()).unwrap_err();
    assert_truncated(&err, context, offset);
    assert!(err.is_truncated());
}

#[test]
fn unterminated_container() {
    let mut decoder = StreamingDecoder::new(packed());
    decoder.feed(&[0x92, 0x01]);
    let mut closed = decoder.finish();
    assert_eq!(closed.next().unwrap().unwrap(), Token::StartArray);
    assert_eq!(closed.next().unwrap().unwrap(), Token::NumberValue("1".into()));
    assert_truncated(&closed.next().unwrap().unwrap_err(), "unterminated container", 2);
    assert!(closed.next().is_none());
}

#[test]
fn nested_truncation_reports_item_offset() {
    let mut decoder = StreamingDecoder::new(packed());
    decoder.feed(&[0x91, 0xcd, 0x01]);
    let mut closed = decoder.finish();
    assert_eq!(closed.next().unwrap().unwrap(), Token::StartArray);
    assert_truncated(&closed.next().unwrap().unwrap_err(), "uint 16", 1);
}

#[test]
fn errors_are_final() {
    let mut decoder = StreamingDecoder::new(packed());
    decoder.feed(&[0xa2, b'a']);
    let mut closed = decoder.finish();
    assert!(closed.next().unwrap().is_err());
    for _ in 0..3 {
        assert!(closed.next().is_none());
    }
}

#[test]
fn empty_input_is_not_an_error() {
    assert!(decode(&[], DecoderOptions::default()).unwrap().is_empty());
}

#[test]
fn every_proper_prefix_is_truncated() {
    // {"a": [1, "xyz"]}
    let bytes = [0x81, 0xa1, b'a', 0x92, 0x01, 0xa3, b'x', b'y', b'z'];
    assert!(decode(&bytes, DecoderOptions::default()).is_ok());
    for len in 1..bytes.len() {
        let err = decode(&bytes[..len], DecoderOptions::default())
            .expect_err("a proper prefix must not decode");
        assert!(err.is_truncated(), "prefix {len}: {err:?}");
    }
}
