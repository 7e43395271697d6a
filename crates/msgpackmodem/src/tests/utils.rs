use alloc::{string::String, vec::Vec};

use serde_json::{Map, Value};

use crate::{DecoderError, DecoderOptions, StreamingDecoder, Token};

/// Options that only emit packed tokens, which keeps expectations short.
pub(crate) fn packed() -> DecoderOptions {
    DecoderOptions {
        stream_values: Some(false),
        ..Default::default()
    }
}

pub(crate) fn encode<T: serde::Serialize>(value: &T) -> Vec<u8> {
    rmp_serde::to_vec(value).expect("value should encode")
}

/// Splits `bytes` into `parts` chunks of (nearly) equal size.
pub(crate) fn produce_chunks(bytes: &[u8], parts: usize) -> Vec<&[u8]> {
    if bytes.is_empty() {
        return Vec::new();
    }
    let size = bytes.len().div_ceil(parts.max(1));
    bytes.chunks(size).collect()
}

/// Splits `bytes` at offsets derived from `splits`, the way the partition
/// property test cuts its input.
pub(crate) fn split_at_offsets<'a>(bytes: &'a [u8], splits: &[usize]) -> Vec<&'a [u8]> {
    let mut chunks = Vec::new();
    let mut rest = bytes;
    for s in splits {
        if rest.is_empty() {
            break;
        }
        let size = 1 + (s % rest.len());
        let (head, tail) = rest.split_at(size);
        chunks.push(head);
        rest = tail;
    }
    if !rest.is_empty() {
        chunks.push(rest);
    }
    chunks
}

/// Feeds every chunk, draining tokens after each, then finishes.
pub(crate) fn decode_chunks<'a, I>(chunks: I, options: DecoderOptions) -> Result<Vec<Token>, DecoderError>
where
    I: IntoIterator<Item = &'a [u8]>,
{
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

pub(crate) fn decode_bytewise(bytes: &[u8], options: DecoderOptions) -> Result<Vec<Token>, DecoderError> {
    decode_chunks(bytes.chunks(1), options)
}

/// Merges adjacent `StringChunk`s. Chunk boundaries inside a payload depend on
/// how the input was cut; their concatenation does not.
pub(crate) fn coalesce_chunks(tokens: Vec<Token>) -> Vec<Token> {
    let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
    for token in tokens {
        if let Token::StringChunk(next) = &token {
            if let Some(Token::StringChunk(prev)) = out.last_mut() {
                prev.push_str(next);
                continue;
            }
        }
        out.push(token);
    }
    out
}

/// One token per line.
pub(crate) fn render(tokens: &[Token]) -> String {
    use core::fmt::Write;

    let mut out = String::new();
    for token in tokens {
        writeln!(out, "{token}").unwrap();
    }
    out
}

enum Open {
    Array(Vec<Value>),
    Object(Map<String, Value>, Option<String>),
}

fn place(stack: &mut [Open], root: &mut Option<Value>, value: Value) {
    match stack.last_mut() {
        Some(Open::Array(items)) => items.push(value),
        Some(Open::Object(map, key)) => {
            map.insert(key.take().unwrap_or_default(), value);
        }
        None => *root = Some(value),
    }
}

/// Rebuilds a JSON value from the packed tokens of one top-level item.
pub(crate) fn reconstruct(tokens: &[Token]) -> Option<Value> {
    let mut stack: Vec<Open> = Vec::new();
    let mut root = None;
    for token in tokens {
        match token {
            Token::StartArray => stack.push(Open::Array(Vec::new())),
            Token::StartObject => stack.push(Open::Object(Map::new(), None)),
            Token::EndArray | Token::EndObject => {
                let value = match stack.pop()? {
                    Open::Array(items) => Value::Array(items),
                    Open::Object(map, _) => Value::Object(map),
                };
                place(&mut stack, &mut root, value);
            }
            Token::KeyValue(key) => match stack.last_mut()? {
                Open::Object(_, pending) => *pending = Some(key.clone()),
                Open::Array(_) => return None,
            },
            Token::StringValue(s) => place(&mut stack, &mut root, Value::String(s.clone())),
            Token::NumberValue(n) => {
                place(&mut stack, &mut root, Value::from(n.parse::<f64>().ok()?));
            }
            Token::NullValue => place(&mut stack, &mut root, Value::Null),
            Token::TrueValue => place(&mut stack, &mut root, Value::Bool(true)),
            Token::FalseValue => place(&mut stack, &mut root, Value::Bool(false)),
            _ => {}
        }
    }
    if stack.is_empty() { root } else { None }
}

/// Structural equality that compares numbers as doubles.
pub(crate) fn same_value(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.as_f64() == y.as_f64(),
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(x, y)| same_value(x, y))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x.iter().all(|(k, v)| y.get(k).is_some_and(|w| same_value(v, w)))
        }
        _ => a == b,
    }
}

#[test]
fn produce_chunks_example() {
    let bytes = [1, 2, 3, 4, 5, 6, 7];
    let expected: [&[u8]; 3] = [&[1, 2, 3], &[4, 5, 6], &[7]];
    assert_eq!(produce_chunks(&bytes, 3), expected);
    let expected: [&[u8]; 3] = [&[1], &[2, 3, 4, 5, 6], &[7]];
    assert_eq!(split_at_offsets(&bytes, &[0, 10]), expected);
}

#[test]
fn coalesce_merges_only_adjacent_chunks() {
    let tokens = alloc::vec![
        Token::StringChunk("a".into()),
        Token::StringChunk("b".into()),
        Token::EndString,
        Token::StringChunk("c".into()),
    ];
    assert_eq!(
        coalesce_chunks(tokens),
        [
            Token::StringChunk("ab".into()),
            Token::EndString,
            Token::StringChunk("c".into()),
        ]
    );
}
