use alloc::boxed::Box;

/// Errors reported by [`StreamingDecoder`](crate::StreamingDecoder).
///
/// Every error is fatal for the decoding session: once one has been returned
/// the decoder yields no further tokens.
#[derive(Debug, thiserror::Error)]
pub enum DecoderError {
    /// End of input was signalled while an item was still incomplete.
    ///
    /// `context` names what was being read (for example `"str 16"` or
    /// `"unterminated container"`) and `offset` is the absolute byte position
    /// in the stream where the incomplete item starts.
    #[error("cannot decode {context} at byte {offset}: no more input")]
    TruncatedInput {
        /// The item that could not be completed.
        context: &'static str,
        /// Absolute stream offset of the incomplete item.
        offset: u64,
    },

    /// The downstream [`TokenSink`](crate::TokenSink) failed to accept a token.
    #[error("token sink failed")]
    SinkFailure(#[source] Box<dyn core::error::Error + Send + Sync>),
}

impl DecoderError {
    pub(crate) fn truncated(context: &'static str, offset: u64) -> Self {
        Self::TruncatedInput { context, offset }
    }

    /// Returns `true` if this is a [`DecoderError::TruncatedInput`].
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        matches!(self, Self::TruncatedInput { .. })
    }
}
