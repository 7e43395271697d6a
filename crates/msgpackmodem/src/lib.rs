//! A streaming, incremental MessagePack decoder.
//!
//! Bytes go in as arbitrarily sized chunks; fine-grained [`Token`]s come out
//! as soon as the bytes backing them have arrived. Containers are reported by
//! start/end markers, keys, strings and numbers can be delivered as streamed
//! chunks, as one packed value, or both (see [`DecoderOptions`]), and numbers
//! are delivered as decimal text.
//!
//! ```rust
//! use msgpackmodem::{DecoderOptions, StreamingDecoder};
//!
//! let mut decoder = StreamingDecoder::new(DecoderOptions {
//!     stream_values: Some(false),
//!     ..Default::default()
//! });
//! // {"key": 3.141592653589793}, cut inside the key and inside the float
//! let chunks: [&[u8]; 3] = [
//!     &[0x81, 0xa3, b'k'],
//!     &[b'e', b'y', 0xcb, 0x40, 0x09],
//!     &[0x21, 0xfb, 0x54, 0x44, 0x2d, 0x18],
//! ];
//! for chunk in chunks {
//!     decoder.feed(chunk);
//!     for token in decoder.by_ref() {
//!         println!("{}", token.unwrap());
//!     }
//! }
//! assert!(decoder.finish().all(|t| t.is_ok()));
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod decoder;
mod error;
mod frame;
mod input;
mod number;
mod options;
mod sink;
mod text;
mod token;

#[cfg(test)]
mod tests;

pub use decoder::{ClosedStreamingDecoder, StreamingDecoder, decode};
pub use error::DecoderError;
pub use options::{DecoderOptions, EmitFlags};
pub use sink::{FnSink, Progress, SinkState, TokenSink, sink_fn};
pub use token::Token;
