//! The MessagePack streaming decoder.
//!
//! `StreamingDecoder` accepts input in arbitrary chunks and yields
//! [`Token`]s as soon as the bytes backing them have arrived. Nothing is
//! lost or repeated when a tag, a length prefix, a number or a string is cut
//! by a chunk boundary: the undecoded remainder is kept and decoding resumes
//! on the next [`feed`](StreamingDecoder::feed).
//!
//! # Examples
//!
//! ```rust
//! use msgpackmodem::{DecoderOptions, StreamingDecoder, Token};
//!
//! let mut decoder = StreamingDecoder::new(DecoderOptions {
//!     stream_values: Some(false),
//!     ..Default::default()
//! });
//! // ["hi", 7] split in the middle of the string
//! decoder.feed(&[0x92, 0xa2, b'h']);
//! assert_eq!(decoder.next().unwrap().unwrap(), Token::StartArray);
//! assert!(decoder.next().is_none());
//!
//! decoder.feed(&[b'i', 0x07]);
//! let rest: Vec<Token> = decoder.finish().collect::<Result<_, _>>().unwrap();
//! assert_eq!(
//!     rest,
//!     [
//!         Token::StringValue("hi".into()),
//!         Token::NumberValue("7".into()),
//!         Token::EndArray,
//!     ]
//! );
//! ```
use alloc::{boxed::Box, collections::VecDeque, string::String, vec::Vec};
use core::mem;

use crate::{
    DecoderError, DecoderOptions, EmitFlags, Token,
    frame::{FrameKind, FrameStack},
    input::PendingInput,
    number::{self, format_integer, format_number},
    sink::{Progress, SinkState, TokenSink},
    text::{Payload, TextDecoder},
};

// MessagePack tags
const MSGPACK_POSFIXINT_MAX: u8 = 0x7f;
const MSGPACK_FIXMAP_MIN: u8 = 0x80;
const MSGPACK_FIXMAP_MAX: u8 = 0x8f;
const MSGPACK_FIXARRAY_MIN: u8 = 0x90;
const MSGPACK_FIXARRAY_MAX: u8 = 0x9f;
const MSGPACK_FIXSTR_MIN: u8 = 0xa0;
const MSGPACK_FIXSTR_MAX: u8 = 0xbf;
const MSGPACK_NIL: u8 = 0xc0;
const MSGPACK_NEVER_USED: u8 = 0xc1;
const MSGPACK_FALSE: u8 = 0xc2;
const MSGPACK_TRUE: u8 = 0xc3;
const MSGPACK_BIN8: u8 = 0xc4;
const MSGPACK_BIN16: u8 = 0xc5;
const MSGPACK_BIN32: u8 = 0xc6;
const MSGPACK_EXT8: u8 = 0xc7;
const MSGPACK_EXT16: u8 = 0xc8;
const MSGPACK_EXT32: u8 = 0xc9;
const MSGPACK_FLOAT32: u8 = 0xca;
const MSGPACK_FLOAT64: u8 = 0xcb;
const MSGPACK_UINT8: u8 = 0xcc;
const MSGPACK_UINT16: u8 = 0xcd;
const MSGPACK_UINT32: u8 = 0xce;
const MSGPACK_UINT64: u8 = 0xcf;
const MSGPACK_INT8: u8 = 0xd0;
const MSGPACK_INT16: u8 = 0xd1;
const MSGPACK_INT32: u8 = 0xd2;
const MSGPACK_INT64: u8 = 0xd3;
const MSGPACK_FIXEXT1: u8 = 0xd4;
const MSGPACK_FIXEXT2: u8 = 0xd5;
const MSGPACK_FIXEXT4: u8 = 0xd6;
const MSGPACK_FIXEXT8: u8 = 0xd7;
const MSGPACK_FIXEXT16: u8 = 0xd8;
const MSGPACK_STR8: u8 = 0xd9;
const MSGPACK_STR16: u8 = 0xda;
const MSGPACK_STR32: u8 = 0xdb;
const MSGPACK_ARRAY16: u8 = 0xdc;
const MSGPACK_ARRAY32: u8 = 0xdd;
const MSGPACK_MAP16: u8 = 0xde;
const MSGPACK_MAP32: u8 = 0xdf;
const MSGPACK_NEGFIXINT_MIN: u8 = 0xe0;

/// Bytes that must be buffered before the item starting with `tag` can be
/// dispatched: the tag, its length prefix or scalar payload, and for fixstr
/// the whole string.
fn header_len(tag: u8) -> usize {
    match tag {
        MSGPACK_FIXSTR_MIN..=MSGPACK_FIXSTR_MAX => 1 + usize::from(tag & 0x1f),
        MSGPACK_BIN8 | MSGPACK_EXT8 | MSGPACK_UINT8 | MSGPACK_INT8 | MSGPACK_STR8 => 2,
        MSGPACK_BIN16 | MSGPACK_EXT16 | MSGPACK_UINT16 | MSGPACK_INT16 | MSGPACK_STR16
        | MSGPACK_ARRAY16 | MSGPACK_MAP16 => 3,
        MSGPACK_BIN32 | MSGPACK_EXT32 | MSGPACK_FLOAT32 | MSGPACK_UINT32 | MSGPACK_INT32
        | MSGPACK_STR32 | MSGPACK_ARRAY32 | MSGPACK_MAP32 => 5,
        MSGPACK_FLOAT64 | MSGPACK_UINT64 | MSGPACK_INT64 => 9,
        _ => 1,
    }
}

/// Human readable name of the item introduced by `tag`, used in errors.
fn describe(tag: u8) -> &'static str {
    match tag {
        MSGPACK_FIXSTR_MIN..=MSGPACK_FIXSTR_MAX => "fixstr",
        MSGPACK_BIN8 => "bin 8",
        MSGPACK_BIN16 => "bin 16",
        MSGPACK_BIN32 => "bin 32",
        MSGPACK_EXT8 => "ext 8",
        MSGPACK_EXT16 => "ext 16",
        MSGPACK_EXT32 => "ext 32",
        MSGPACK_FLOAT32 => "float 32",
        MSGPACK_FLOAT64 => "float 64",
        MSGPACK_UINT8 => "uint 8",
        MSGPACK_UINT16 => "uint 16",
        MSGPACK_UINT32 => "uint 32",
        MSGPACK_UINT64 => "uint 64",
        MSGPACK_INT8 => "int 8",
        MSGPACK_INT16 => "int 16",
        MSGPACK_INT32 => "int 32",
        MSGPACK_INT64 => "int 64",
        MSGPACK_FIXEXT1..=MSGPACK_FIXEXT16 => "fixext",
        MSGPACK_STR8 => "str 8",
        MSGPACK_STR16 => "str 16",
        MSGPACK_STR32 => "str 32",
        MSGPACK_ARRAY16 => "array 16",
        MSGPACK_ARRAY32 => "array 32",
        MSGPACK_MAP16 => "map 16",
        MSGPACK_MAP32 => "map 32",
        _ => "value",
    }
}

fn length(n: u32) -> usize {
    usize::try_from(n).unwrap_or(usize::MAX)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DecodeState {
    /// Ready for the next tag.
    Value,
    /// Inside a string or binary payload.
    Binary {
        remaining: usize,
        key: bool,
        payload: Payload,
        /// A chunk token was already emitted for this payload.
        chunked: bool,
        context: &'static str,
    },
    /// Inside an extension payload, which is dropped.
    Skip {
        remaining: usize,
        context: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    /// Need more input.
    Suspend,
    /// End of input reached in an accepting state.
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Running,
    Finished,
    Failed,
}

/// The streaming MessagePack decoder.
///
/// Feed bytes with [`feed`](Self::feed) and pull tokens through the
/// `Iterator` implementation, or push them into a [`TokenSink`] with
/// [`decode_into`](Self::decode_into). `next` returning `None` means the
/// decoder needs more input. Call [`finish`](Self::finish) once the input is
/// complete.
///
/// Each call to `next` decodes at most one item, so a consumer that stops
/// pulling stops the decoder.
#[derive(Debug)]
pub struct StreamingDecoder {
    input: PendingInput,
    end_of_input: bool,

    frames: FrameStack,
    state: DecodeState,
    text: TextDecoder,
    /// Packed text collected so far for the current payload.
    accumulator: String,
    /// Stream offset of the item being decoded.
    item_offset: u64,

    flags: EmitFlags,
    events: VecDeque<Token>,
    status: Status,
}

impl Default for StreamingDecoder {
    fn default() -> Self {
        Self::new(DecoderOptions::default())
    }
}

impl Iterator for StreamingDecoder {
    type Item = Result<Token, DecoderError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

/// A [`StreamingDecoder`] that has been closed to further input.
///
/// Returned by [`StreamingDecoder::finish`]. Yields the remaining tokens,
/// then either ends or reports [`DecoderError::TruncatedInput`] if the input
/// stopped in the middle of an item or container.
#[derive(Debug)]
pub struct ClosedStreamingDecoder {
    decoder: StreamingDecoder,
}

impl ClosedStreamingDecoder {
    /// Pushes the remaining tokens into `sink`. See
    /// [`StreamingDecoder::decode_into`].
    ///
    /// # Errors
    ///
    /// Fails on truncated input or when the sink fails.
    pub fn decode_into<S: TokenSink>(&mut self, sink: &mut S) -> Result<Progress, DecoderError> {
        self.decoder.decode_into(sink)
    }
}

impl Iterator for ClosedStreamingDecoder {
    type Item = Result<Token, DecoderError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.decoder.next_token()
    }
}

impl StreamingDecoder {
    /// Creates a decoder with the given options.
    #[must_use]
    pub fn new(options: DecoderOptions) -> Self {
        Self {
            input: PendingInput::new(),
            end_of_input: false,
            frames: FrameStack::new(),
            state: DecodeState::Value,
            text: TextDecoder::new(),
            accumulator: String::new(),
            item_offset: 0,
            flags: options.resolve(),
            events: VecDeque::with_capacity(4),
            status: Status::Running,
        }
    }

    /// Appends a chunk of input.
    ///
    /// ```rust
    /// # use msgpackmodem::StreamingDecoder;
    /// let mut decoder = StreamingDecoder::default();
    /// decoder.feed(&[0xcd, 0x01]); // uint 16, first byte only
    /// assert!(decoder.next().is_none());
    /// decoder.feed(&[0x00]);
    /// assert_eq!(decoder.by_ref().count(), 4);
    /// ```
    pub fn feed(&mut self, chunk: &[u8]) {
        self.input.push(chunk);
    }

    /// Marks the end of input and returns a closed decoder yielding the
    /// remaining tokens.
    #[must_use]
    pub fn finish(mut self) -> ClosedStreamingDecoder {
        self.end_of_input = true;
        ClosedStreamingDecoder { decoder: self }
    }

    /// The resolved emission switches.
    #[must_use]
    pub fn flags(&self) -> EmitFlags {
        self.flags
    }

    /// Number of open containers.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.depth()
    }

    /// Number of received bytes not yet decoded.
    #[must_use]
    pub fn buffered_len(&self) -> usize {
        self.input.available()
    }

    /// Decodes buffered input into `sink` until the input runs out, the sink
    /// reports [`SinkState::Full`], or the stream ends.
    ///
    /// # Errors
    ///
    /// [`DecoderError::SinkFailure`] if the sink rejects a token. Errors are
    /// fatal: later calls return `Ok(Progress::Finished)` without decoding.
    pub fn decode_into<S: TokenSink>(&mut self, sink: &mut S) -> Result<Progress, DecoderError> {
        loop {
            match self.next_token() {
                Some(Ok(token)) => match sink.push(token) {
                    Ok(SinkState::Ready) => {}
                    Ok(SinkState::Full) => {
                        log::trace!("token sink full, pausing");
                        return Ok(Progress::Paused);
                    }
                    Err(err) => {
                        log::debug!("token sink failed: {err}");
                        self.status = Status::Failed;
                        self.events.clear();
                        return Err(DecoderError::SinkFailure(Box::new(err)));
                    }
                },
                Some(Err(err)) => return Err(err),
                None if self.status == Status::Running => return Ok(Progress::NeedInput),
                None => return Ok(Progress::Finished),
            }
        }
    }

    fn next_token(&mut self) -> Option<Result<Token, DecoderError>> {
        loop {
            if let Some(token) = self.events.pop_front() {
                return Some(Ok(token));
            }
            if self.status != Status::Running {
                return None;
            }

            match self.step() {
                Ok(Step::Continue) => {}
                Ok(Step::Suspend) => {
                    if self.events.is_empty() {
                        return None;
                    }
                }
                Ok(Step::Done) => self.status = Status::Finished,
                Err(err) => {
                    log::debug!("decoding failed: {err}");
                    self.status = Status::Failed;
                    return Some(Err(err));
                }
            }

            #[cfg(any(test, feature = "fuzzing"))]
            assert!(
                self.events.len() <= 4,
                "Internal error: one step queued {} tokens",
                self.events.len()
            );
        }
    }

    fn step(&mut self) -> Result<Step, DecoderError> {
        match self.state {
            DecodeState::Value => {}
            DecodeState::Binary {
                remaining,
                key,
                payload,
                chunked,
                context,
            } => return self.continue_payload(remaining, key, payload, chunked, context),
            DecodeState::Skip { remaining, context } => {
                return self.continue_skip(remaining, context);
            }
        }

        if let Some(kind) = self.frames.pop_finished() {
            self.events.push_back(kind.end_token());
            return Ok(Step::Continue);
        }

        let Some(tag) = self.input.peek() else {
            if !self.end_of_input {
                return Ok(Step::Suspend);
            }
            if !self.frames.is_empty() {
                return Err(DecoderError::truncated(
                    "unterminated container",
                    self.input.offset(),
                ));
            }
            return Ok(Step::Done);
        };

        let needed = header_len(tag);
        if self.input.available() < needed {
            if self.end_of_input {
                return Err(DecoderError::truncated(describe(tag), self.input.offset()));
            }
            log::trace!(
                "waiting for {} more bytes of {}",
                needed - self.input.available(),
                describe(tag)
            );
            return Ok(Step::Suspend);
        }

        self.item_offset = self.input.offset();
        let key = self.frames.begin_slot();
        self.input.advance(1);
        self.dispatch(tag, key);
        Ok(Step::Continue)
    }

    /// Decodes the item introduced by `tag`. The whole header is buffered.
    fn dispatch(&mut self, tag: u8, key: bool) {
        match tag {
            0x00..=MSGPACK_POSFIXINT_MAX => self.emit_number(format_integer(i64::from(tag))),
            MSGPACK_FIXMAP_MIN..=MSGPACK_FIXMAP_MAX => self.open_map(u64::from(tag & 0x0f)),
            MSGPACK_FIXARRAY_MIN..=MSGPACK_FIXARRAY_MAX => {
                self.open_array(u64::from(tag & 0x0f));
            }
            MSGPACK_FIXSTR_MIN..=MSGPACK_FIXSTR_MAX => {
                self.begin_payload(usize::from(tag & 0x1f), key, Payload::Utf8, "fixstr");
            }
            MSGPACK_NIL => self.events.push_back(Token::NullValue),
            MSGPACK_NEVER_USED => {}
            MSGPACK_FALSE => self.events.push_back(Token::FalseValue),
            MSGPACK_TRUE => self.events.push_back(Token::TrueValue),
            MSGPACK_BIN8 => {
                let len = usize::from(self.read_u8());
                self.begin_payload(len, key, Payload::Raw, "bin 8");
            }
            MSGPACK_BIN16 => {
                let len = usize::from(self.read_u16());
                self.begin_payload(len, key, Payload::Raw, "bin 16");
            }
            MSGPACK_BIN32 => {
                let len = length(self.read_u32());
                self.begin_payload(len, key, Payload::Raw, "bin 32");
            }
            MSGPACK_EXT8 => {
                let len = usize::from(self.read_u8());
                self.begin_skip(len + 1, "ext 8");
            }
            MSGPACK_EXT16 => {
                let len = usize::from(self.read_u16());
                self.begin_skip(len + 1, "ext 16");
            }
            MSGPACK_EXT32 => {
                let len = length(self.read_u32());
                self.begin_skip(len.saturating_add(1), "ext 32");
            }
            MSGPACK_FLOAT32 => {
                let value = number::float32(self.input.take_array());
                self.emit_number(format_number(value));
            }
            MSGPACK_FLOAT64 => {
                let value = number::float64(self.input.take_array());
                self.emit_number(format_number(value));
            }
            MSGPACK_UINT8 => {
                let value = self.read_u8();
                self.emit_number(format_integer(i64::from(value)));
            }
            MSGPACK_UINT16 => {
                let value = self.read_u16();
                self.emit_number(format_integer(i64::from(value)));
            }
            MSGPACK_UINT32 => {
                let value = self.read_u32();
                self.emit_number(format_integer(i64::from(value)));
            }
            MSGPACK_UINT64 => {
                let value = number::uint64_from_halves(self.input.take_array());
                self.emit_number(format_number(value));
            }
            MSGPACK_INT8 => {
                let value = i8::from_be_bytes(self.input.take_array());
                self.emit_number(format_integer(i64::from(value)));
            }
            MSGPACK_INT16 => {
                let value = i16::from_be_bytes(self.input.take_array());
                self.emit_number(format_integer(i64::from(value)));
            }
            MSGPACK_INT32 => {
                let value = i32::from_be_bytes(self.input.take_array());
                self.emit_number(format_integer(i64::from(value)));
            }
            MSGPACK_INT64 => {
                let value = number::int64_from_halves(self.input.take_array());
                self.emit_number(format_number(value));
            }
            MSGPACK_FIXEXT1 => self.begin_skip(1 + 1, "fixext 1"),
            MSGPACK_FIXEXT2 => self.begin_skip(2 + 1, "fixext 2"),
            MSGPACK_FIXEXT4 => self.begin_skip(4 + 1, "fixext 4"),
            MSGPACK_FIXEXT8 => self.begin_skip(8 + 1, "fixext 8"),
            MSGPACK_FIXEXT16 => self.begin_skip(16 + 1, "fixext 16"),
            MSGPACK_STR8 => {
                let len = usize::from(self.read_u8());
                self.begin_payload(len, key, Payload::Utf8, "str 8");
            }
            MSGPACK_STR16 => {
                let len = usize::from(self.read_u16());
                self.begin_payload(len, key, Payload::Utf8, "str 16");
            }
            MSGPACK_STR32 => {
                let len = length(self.read_u32());
                self.begin_payload(len, key, Payload::Utf8, "str 32");
            }
            MSGPACK_ARRAY16 => {
                let len = self.read_u16();
                self.open_array(u64::from(len));
            }
            MSGPACK_ARRAY32 => {
                let len = self.read_u32();
                self.open_array(u64::from(len));
            }
            MSGPACK_MAP16 => {
                let len = self.read_u16();
                self.open_map(u64::from(len));
            }
            MSGPACK_MAP32 => {
                let len = self.read_u32();
                self.open_map(u64::from(len));
            }
            MSGPACK_NEGFIXINT_MIN..=0xff => {
                let value = i8::from_be_bytes([tag]);
                self.emit_number(format_integer(i64::from(value)));
            }
        }
    }

    fn read_u8(&mut self) -> u8 {
        self.input.take_array::<1>()[0]
    }

    fn read_u16(&mut self) -> u16 {
        u16::from_be_bytes(self.input.take_array())
    }

    fn read_u32(&mut self) -> u32 {
        u32::from_be_bytes(self.input.take_array())
    }

    fn open_array(&mut self, len: u64) {
        self.frames.push_array(len);
        self.events.push_back(FrameKind::Array.start_token());
    }

    fn open_map(&mut self, entries: u64) {
        self.frames.push_map(entries);
        self.events.push_back(FrameKind::Map.start_token());
    }

    // ---------------------------------------------------------------------------------------------
    // Payloads
    // ---------------------------------------------------------------------------------------------

    /// `(stream, pack)` for a key or a string.
    fn text_flags(&self, key: bool) -> (bool, bool) {
        if key {
            (self.flags.stream_keys, self.flags.pack_keys)
        } else {
            (self.flags.stream_strings, self.flags.pack_strings)
        }
    }

    fn begin_payload(&mut self, len: usize, key: bool, payload: Payload, context: &'static str) {
        self.text.reset();
        self.accumulator.clear();
        if self.text_flags(key).0 {
            self.events.push_back(if key {
                Token::StartKey
            } else {
                Token::StartString
            });
        }
        self.state = DecodeState::Binary {
            remaining: len,
            key,
            payload,
            chunked: false,
            context,
        };
    }

    fn continue_payload(
        &mut self,
        remaining: usize,
        key: bool,
        payload: Payload,
        chunked: bool,
        context: &'static str,
    ) -> Result<Step, DecoderError> {
        if self.input.available() < remaining && self.end_of_input {
            return Err(DecoderError::truncated(context, self.item_offset));
        }

        let bytes = self.input.take(remaining);
        let consumed = bytes.len();
        let last = consumed == remaining;
        let piece = self.text.decode(payload, bytes, last);

        if last {
            self.state = DecodeState::Value;
            self.finish_payload(key, piece, chunked);
            return Ok(Step::Continue);
        }

        let chunked = self.payload_chunk(key, piece) || chunked;
        self.state = DecodeState::Binary {
            remaining: remaining - consumed,
            key,
            payload,
            chunked,
            context,
        };
        log::trace!("{context}: waiting for {} more bytes", remaining - consumed);
        Ok(Step::Suspend)
    }

    /// Emits an intermediate piece. Returns `true` if a chunk token was queued.
    fn payload_chunk(&mut self, key: bool, piece: String) -> bool {
        if piece.is_empty() {
            return false;
        }
        let (stream, pack) = self.text_flags(key);
        if pack {
            self.accumulator.push_str(&piece);
        }
        if stream {
            self.events.push_back(Token::StringChunk(piece));
        }
        stream
    }

    fn finish_payload(&mut self, key: bool, piece: String, chunked: bool) {
        let (stream, pack) = self.text_flags(key);
        let value = pack.then(|| {
            let mut value = mem::take(&mut self.accumulator);
            value.push_str(&piece);
            value
        });

        if stream {
            // an empty payload still yields one (empty) chunk
            if !piece.is_empty() || !chunked {
                self.events.push_back(Token::StringChunk(piece));
            }
            self.events.push_back(if key { Token::EndKey } else { Token::EndString });
        }
        if let Some(value) = value {
            self.events.push_back(if key {
                Token::KeyValue(value)
            } else {
                Token::StringValue(value)
            });
        }
    }

    fn begin_skip(&mut self, len: usize, context: &'static str) {
        self.state = DecodeState::Skip {
            remaining: len,
            context,
        };
    }

    fn continue_skip(
        &mut self,
        remaining: usize,
        context: &'static str,
    ) -> Result<Step, DecoderError> {
        let available = self.input.available();
        if available < remaining && self.end_of_input {
            return Err(DecoderError::truncated(context, self.item_offset));
        }

        let consumed = available.min(remaining);
        self.input.advance(consumed);
        if consumed == remaining {
            self.state = DecodeState::Value;
            return Ok(Step::Continue);
        }

        self.state = DecodeState::Skip {
            remaining: remaining - consumed,
            context,
        };
        Ok(Step::Suspend)
    }

    // ---------------------------------------------------------------------------------------------
    // Numbers
    // ---------------------------------------------------------------------------------------------

    fn emit_number(&mut self, text: String) {
        let EmitFlags {
            pack_numbers,
            stream_numbers,
            ..
        } = self.flags;

        if stream_numbers {
            self.events.push_back(Token::StartNumber);
            if pack_numbers {
                self.events.push_back(Token::NumberChunk(text.clone()));
                self.events.push_back(Token::EndNumber);
                self.events.push_back(Token::NumberValue(text));
            } else {
                self.events.push_back(Token::NumberChunk(text));
                self.events.push_back(Token::EndNumber);
            }
        } else {
            self.events.push_back(Token::NumberValue(text));
        }
    }
}

/// Decodes a complete MessagePack stream held in memory.
///
/// ```rust
/// use msgpackmodem::{DecoderOptions, Token, decode};
///
/// let tokens = decode(&[0x90], DecoderOptions::default()).unwrap();
/// assert_eq!(tokens, [Token::StartArray, Token::EndArray]);
/// ```
///
/// # Errors
///
/// [`DecoderError::TruncatedInput`] if `bytes` ends inside an item or an
/// open container.
pub fn decode(bytes: &[u8], options: DecoderOptions) -> Result<Vec<Token>, DecoderError> {
    let mut decoder = StreamingDecoder::new(options);
    decoder.feed(bytes);
    decoder.finish().collect()
}
