#![allow(missing_docs, dead_code)]

use core::fmt::Write;

use msgpackmodem::{DecoderOptions, StreamingDecoder};

pub const ORIGINAL: &str = r#"
{
    "tool": "search",
    "args": {
        "query": "incremental messagepack decoding",
        "limit": 10,
        "ratio": 0.5
    },
    "tags": [
        "a",
        "bc"
    ],
    "ok": true,
    "none": null
}"#;

// ORIGINAL as MessagePack, cut so that chunk boundaries fall inside tags,
// headers, numbers and string payloads.
#[rustfmt::skip]
pub const STREAM: [&[u8]; 8] = [
    b"\x85\xa4tool\xa6sea",                          // inside a fixstr payload
    b"rch\xa4args\x83\xa5query\xd9\x20incremental ", // inside a str 8 payload
    b"messagepack ",                                 // middle of the same payload
    b"decoding\xa5limit\x0a\xa5ratio\xcb\x3f\xe0",   // inside a float 64
    b"\x00\x00\x00\x00\x00\x00\xa4tags\x92",         // right after an array header
    b"\xa1a\xa2b",                                   // inside the last element
    b"c\xa2ok\xc3\xa4none",                          // between a key and its value
    b"\xc0",                                         // closes the top-level map
];

/// Feeds `stream` chunk by chunk, rendering one token per line and a marker
/// line before each chunk.
pub fn render_tokens(stream: &[&[u8]], options: DecoderOptions) -> String {
    let mut decoder = StreamingDecoder::new(options);
    let mut out = String::new();
    for (i, chunk) in stream.iter().enumerate() {
        writeln!(out, "-- chunk {i}").unwrap();
        decoder.feed(chunk);
        for token in decoder.by_ref() {
            writeln!(out, "{}", token.expect("decoder error")).unwrap();
        }
    }
    for token in decoder.finish() {
        writeln!(out, "{}", token.expect("decoder error")).unwrap();
    }
    out
}

#[test]
fn assert_stream_example() {
    let streamed = STREAM.concat();

    let value: serde_json::Value = serde_json::from_str(ORIGINAL).unwrap();
    let original = rmp_serde::to_vec(&value).unwrap();

    assert_eq!(streamed, original);
}
