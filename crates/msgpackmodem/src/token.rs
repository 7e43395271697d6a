//! Tokens emitted by the streaming MessagePack decoder.
//!
//! A token is one discrete parsing event: a container boundary, a scalar, or a
//! fragment of a streamed key, string or number. Keys and strings share
//! [`Token::StringChunk`]; which one a chunk belongs to follows from the
//! enclosing start marker.
//!
//! # Examples
//!
//! ```
//! use msgpackmodem::{DecoderOptions, Token, decode};
//!
//! // {"a": 1}
//! let tokens = decode(&[0x81, 0xa1, b'a', 0x01], DecoderOptions::default()).unwrap();
//! assert_eq!(tokens.first(), Some(&Token::StartObject));
//! assert!(tokens.contains(&Token::KeyValue("a".into())));
//! assert!(tokens.contains(&Token::NumberValue("1".into())));
//! assert_eq!(tokens.last(), Some(&Token::EndObject));
//! ```
use alloc::string::String;
use core::fmt;

/// One event produced by [`StreamingDecoder`](crate::StreamingDecoder).
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "name", content = "value", rename_all = "camelCase")
)]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// A map begins.
    StartObject,
    /// The innermost open map ends.
    EndObject,
    /// An array begins.
    StartArray,
    /// The innermost open array ends.
    EndArray,

    /// A streamed map key begins.
    StartKey,
    /// A streamed map key ends.
    EndKey,
    /// A complete map key.
    KeyValue(String),

    /// A streamed string begins.
    StartString,
    /// A piece of the key or string currently being streamed.
    StringChunk(String),
    /// A streamed string ends.
    EndString,
    /// A complete string.
    StringValue(String),

    /// A streamed number begins.
    StartNumber,
    /// The decimal text of the number currently being streamed.
    NumberChunk(String),
    /// A streamed number ends.
    EndNumber,
    /// A complete number as decimal text.
    NumberValue(String),

    /// `nil`
    NullValue,
    /// `true`
    TrueValue,
    /// `false`
    FalseValue,
}

impl Token {
    /// The camelCase event name, e.g. `"startObject"` or `"numberValue"`.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Token::StartObject => "startObject",
            Token::EndObject => "endObject",
            Token::StartArray => "startArray",
            Token::EndArray => "endArray",
            Token::StartKey => "startKey",
            Token::EndKey => "endKey",
            Token::KeyValue(_) => "keyValue",
            Token::StartString => "startString",
            Token::StringChunk(_) => "stringChunk",
            Token::EndString => "endString",
            Token::StringValue(_) => "stringValue",
            Token::StartNumber => "startNumber",
            Token::NumberChunk(_) => "numberChunk",
            Token::EndNumber => "endNumber",
            Token::NumberValue(_) => "numberValue",
            Token::NullValue => "nullValue",
            Token::TrueValue => "trueValue",
            Token::FalseValue => "falseValue",
        }
    }

    /// The text carried by chunk and packed tokens.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Token::KeyValue(s)
            | Token::StringChunk(s)
            | Token::StringValue(s)
            | Token::NumberChunk(s)
            | Token::NumberValue(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.text() {
            Some(text) => write!(f, "{} {text:?}", self.name()),
            None => f.write_str(self.name()),
        }
    }
}
