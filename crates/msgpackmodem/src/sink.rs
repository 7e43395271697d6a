//! Push-mode delivery of tokens with backpressure.
//!
//! The pull API ([`StreamingDecoder`] as an `Iterator`) applies backpressure
//! by simply not calling `next`. The push API hands tokens to a [`TokenSink`],
//! which answers every token with its remaining capacity.
//!
//! ```
//! use msgpackmodem::{DecoderOptions, Progress, SinkState, StreamingDecoder, Token, sink_fn};
//!
//! let mut decoder = StreamingDecoder::new(DecoderOptions::default());
//! decoder.feed(&[0x92, 0xc3, 0xc2]);
//!
//! let mut seen = Vec::new();
//! let mut sink = sink_fn(|token: Token| {
//!     seen.push(token);
//!     // accept one token per call
//!     Ok::<_, core::convert::Infallible>(SinkState::Full)
//! });
//! while decoder.decode_into(&mut sink).unwrap() == Progress::Paused {}
//! drop(sink);
//! assert_eq!(
//!     seen,
//!     [Token::StartArray, Token::TrueValue, Token::FalseValue, Token::EndArray]
//! );
//! ```
//!
//! [`StreamingDecoder`]: crate::StreamingDecoder
use alloc::vec::Vec;
use core::convert::Infallible;

use crate::Token;

/// Capacity reported by a [`TokenSink`] after accepting a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkState {
    /// More tokens may be pushed.
    Ready,
    /// The token was accepted, but no more should be pushed until the caller
    /// drives the decoder again.
    Full,
}

/// Outcome of one [`decode_into`](crate::StreamingDecoder::decode_into) call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// All buffered input was decoded; feed more bytes to continue.
    NeedInput,
    /// The sink reported [`SinkState::Full`]; call again to resume.
    Paused,
    /// The stream is complete, or the session already failed.
    Finished,
}

/// A consumer of decoded tokens.
pub trait TokenSink {
    /// Error reported when the sink cannot take a token.
    type Error: core::error::Error + Send + Sync + 'static;

    /// Accepts one token and reports whether more may follow.
    ///
    /// # Errors
    ///
    /// Any error aborts the decoding session with
    /// [`DecoderError::SinkFailure`](crate::DecoderError::SinkFailure).
    fn push(&mut self, token: Token) -> Result<SinkState, Self::Error>;
}

impl TokenSink for Vec<Token> {
    type Error = Infallible;

    fn push(&mut self, token: Token) -> Result<SinkState, Self::Error> {
        Vec::push(self, token);
        Ok(SinkState::Ready)
    }
}

impl<S: TokenSink + ?Sized> TokenSink for &mut S {
    type Error = S::Error;

    fn push(&mut self, token: Token) -> Result<SinkState, Self::Error> {
        (**self).push(token)
    }
}

/// A [`TokenSink`] backed by a closure. Built with [`sink_fn`].
#[derive(Debug, Clone)]
pub struct FnSink<F>(F);

/// Wraps a closure as a [`TokenSink`].
pub fn sink_fn<F, E>(f: F) -> FnSink<F>
where
    F: FnMut(Token) -> Result<SinkState, E>,
    E: core::error::Error + Send + Sync + 'static,
{
    FnSink(f)
}

impl<F, E> TokenSink for FnSink<F>
where
    F: FnMut(Token) -> Result<SinkState, E>,
    E: core::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn push(&mut self, token: Token) -> Result<SinkState, Self::Error> {
        (self.0)(token)
    }
}
