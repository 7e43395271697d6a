#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use msgpackmodem::{DecoderError, DecoderOptions, StreamingDecoder, Token};

#[derive(Debug, Arbitrary)]
struct Input {
    flags: u8,
    split_seed: u32,
    data: Vec<u8>,
}

fn options(flags: u8) -> DecoderOptions {
    let switch = |bit: u8| match (flags >> bit) & 3 {
        0 => None,
        1 => Some(false),
        _ => Some(true),
    };
    DecoderOptions {
        pack_values: switch(0),
        stream_values: switch(2),
        pack_strings: switch(4),
        stream_numbers: switch(6),
        ..Default::default()
    }
}

/// Split `data` into chunks of at least one byte, sized from `split_seed`.
fn split_into_chunks(data: &[u8], split_seed: u32) -> Vec<&[u8]> {
    let mut chunks = Vec::new();
    let mut rest = data;
    let mut seed = split_seed as usize;
    while !rest.is_empty() {
        let size = (seed % rest.len()) + 1;
        let (head, tail) = rest.split_at(size);
        chunks.push(head);
        rest = tail;
        seed = seed.rotate_left(5) ^ size;
    }
    chunks
}

fn decode_chunks(chunks: &[&[u8]], options: DecoderOptions) -> Result<Vec<Token>, DecoderError> {
    let mut decoder = StreamingDecoder::new(options);
    let mut tokens = Vec::new();
    for chunk in chunks {
        decoder.feed(chunk);
        for token in decoder.by_ref() {
            tokens.push(token?);
        }
    }
    for token in decoder.finish() {
        tokens.push(token?);
    }
    Ok(tokens)
}

fn coalesce(tokens: Vec<Token>) -> Vec<Token> {
    let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
    for token in tokens {
        if let (Token::StringChunk(next), Some(Token::StringChunk(prev))) = (&token, out.last_mut()) {
            prev.push_str(next);
            continue;
        }
        out.push(token);
    }
    out
}

fn decoder(input: &Input) {
    let options = options(input.flags);
    let whole = decode_chunks(&[input.data.as_slice()], options);
    let split = decode_chunks(&split_into_chunks(&input.data, input.split_seed), options);

    match (whole, split) {
        (Ok(whole), Ok(split)) => assert_eq!(coalesce(whole), coalesce(split)),
        (Err(whole), Err(split)) => assert_eq!(whole.to_string(), split.to_string()),
        (whole, split) => panic!("whole and split input disagree: {whole:?} vs {split:?}"),
    }
}

fuzz_target!(|input: Input| decoder(&input));
