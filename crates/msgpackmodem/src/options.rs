/// Configuration options for the MessagePack streaming decoder.
///
/// Each value category (keys, strings, numbers) has two switches:
///
/// * *pack*: emit one token carrying the fully assembled value
///   ([`Token::KeyValue`], [`Token::StringValue`], [`Token::NumberValue`]).
/// * *stream*: emit a start marker, one or more chunks and an end marker as
///   the value's bytes arrive.
///
/// Unset (`None`) switches default to enabled. The blanket `pack_values` and
/// `stream_values` switches are applied first and are overridden by any
/// per-category switch. A category that is not packed is always streamed, so
/// a decoded value can never disappear from the token stream.
///
/// # Examples
///
/// ```rust
/// use msgpackmodem::{DecoderOptions, StreamingDecoder};
///
/// let options = DecoderOptions {
///     stream_values: Some(false),
///     pack_strings: Some(false),
///     ..Default::default()
/// };
/// let flags = options.resolve();
/// assert!(!flags.stream_numbers);
/// // strings are not packed, so they must be streamed
/// assert!(flags.stream_strings);
/// let decoder = StreamingDecoder::new(options);
/// ```
///
/// [`Token::KeyValue`]: crate::Token::KeyValue
/// [`Token::StringValue`]: crate::Token::StringValue
/// [`Token::NumberValue`]: crate::Token::NumberValue
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecoderOptions {
    /// Emit [`Token::KeyValue`](crate::Token::KeyValue) for map keys.
    pub pack_keys: Option<bool>,
    /// Emit [`Token::StringValue`](crate::Token::StringValue) for strings.
    pub pack_strings: Option<bool>,
    /// Emit [`Token::NumberValue`](crate::Token::NumberValue) for numbers.
    pub pack_numbers: Option<bool>,
    /// Sets `pack_keys`, `pack_strings` and `pack_numbers` at once.
    pub pack_values: Option<bool>,

    /// Emit `StartKey` / `StringChunk` / `EndKey` for map keys.
    pub stream_keys: Option<bool>,
    /// Emit `StartString` / `StringChunk` / `EndString` for strings.
    pub stream_strings: Option<bool>,
    /// Emit `StartNumber` / `NumberChunk` / `EndNumber` for numbers.
    pub stream_numbers: Option<bool>,
    /// Sets `stream_keys`, `stream_strings` and `stream_numbers` at once.
    pub stream_values: Option<bool>,

    /// Accepted for parity with the JSON decoder's options. MessagePack items
    /// are self-delimiting, so this has no effect.
    pub json_streaming: bool,
}

/// The six resolved emission switches derived from [`DecoderOptions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct EmitFlags {
    /// Emit packed key tokens.
    pub pack_keys: bool,
    /// Emit packed string tokens.
    pub pack_strings: bool,
    /// Emit packed number tokens.
    pub pack_numbers: bool,
    /// Emit streamed key tokens.
    pub stream_keys: bool,
    /// Emit streamed string tokens.
    pub stream_strings: bool,
    /// Emit streamed number tokens.
    pub stream_numbers: bool,
}

impl Default for EmitFlags {
    fn default() -> Self {
        DecoderOptions::default().resolve()
    }
}

impl DecoderOptions {
    /// Resolves the optional switches into concrete flags.
    #[must_use]
    pub fn resolve(&self) -> EmitFlags {
        let pack = self.pack_values.unwrap_or(true);
        let stream = self.stream_values.unwrap_or(true);

        let pack_keys = self.pack_keys.unwrap_or(pack);
        let pack_strings = self.pack_strings.unwrap_or(pack);
        let pack_numbers = self.pack_numbers.unwrap_or(pack);

        EmitFlags {
            pack_keys,
            pack_strings,
            pack_numbers,
            stream_keys: !pack_keys || self.stream_keys.unwrap_or(stream),
            stream_strings: !pack_strings || self.stream_strings.unwrap_or(stream),
            stream_numbers: !pack_numbers || self.stream_numbers.unwrap_or(stream),
        }
    }
}
