use alloc::{string::String, vec::Vec};
use core::mem;

use bstr::ByteSlice;

/// How the bytes of a string-like payload become text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Payload {
    /// `str` family: UTF-8, invalid sequences replaced with U+FFFD.
    Utf8,
    /// `bin` family: one char per byte (U+0000 to U+00FF).
    Raw,
}

/// Incremental payload-to-text conversion.
///
/// A UTF-8 sequence cut by a chunk boundary is carried into the next call, so
/// the concatenation of all pieces equals the lossy decoding of the whole
/// payload.
#[derive(Debug, Default)]
pub(crate) struct TextDecoder {
    carry: Vec<u8>,
}

impl TextDecoder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reset(&mut self) {
        self.carry.clear();
    }

    /// Decodes the next piece of a payload. `last` marks the final piece.
    pub(crate) fn decode(&mut self, payload: Payload, bytes: &[u8], last: bool) -> String {
        match payload {
            Payload::Raw => bytes.iter().copied().map(char::from).collect(),
            Payload::Utf8 => self.decode_utf8(bytes, last),
        }
    }

    fn decode_utf8(&mut self, bytes: &[u8], last: bool) -> String {
        let joined;
        let input: &[u8] = if self.carry.is_empty() {
            bytes
        } else {
            self.carry.extend_from_slice(bytes);
            joined = mem::take(&mut self.carry);
            &joined
        };

        let mut out = String::with_capacity(input.len());
        for chunk in ByteSlice::utf8_chunks(input) {
            out.push_str(chunk.valid());
            if chunk.invalid().is_empty() {
                continue;
            }
            if chunk.incomplete() && !last {
                self.carry.extend_from_slice(chunk.invalid());
            } else {
                out.push('\u{FFFD}');
            }
        }
        out
    }
}
