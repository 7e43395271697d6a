use alloc::vec::Vec;

use crate::Token;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FrameKind {
    Array,
    Map,
}

impl FrameKind {
    pub(crate) fn start_token(self) -> Token {
        match self {
            FrameKind::Array => Token::StartArray,
            FrameKind::Map => Token::StartObject,
        }
    }

    pub(crate) fn end_token(self) -> Token {
        match self {
            FrameKind::Array => Token::EndArray,
            FrameKind::Map => Token::EndObject,
        }
    }
}

/// Stack entry – one per open container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Frame {
    pub(crate) kind: FrameKind,
    /// Slots left to fill. Maps count keys and values separately.
    pub(crate) remaining: u64,
}

#[derive(Debug, Default)]
pub(crate) struct FrameStack {
    stack: Vec<Frame>,
}

impl FrameStack {
    pub(crate) fn new() -> Self {
        Self {
            stack: Vec::with_capacity(16),
        }
    }

    pub(crate) fn push_array(&mut self, len: u64) {
        self.stack.push(Frame {
            kind: FrameKind::Array,
            remaining: len,
        });
    }

    pub(crate) fn push_map(&mut self, entries: u64) {
        self.stack.push(Frame {
            kind: FrameKind::Map,
            remaining: entries * 2,
        });
    }

    /// Pops the innermost frame if it has no slots left.
    pub(crate) fn pop_finished(&mut self) -> Option<FrameKind> {
        match self.stack.last() {
            Some(frame) if frame.remaining == 0 => self.stack.pop().map(|f| f.kind),
            _ => None,
        }
    }

    /// Claims the next slot of the innermost frame. Returns `true` when the
    /// slot is a map key.
    pub(crate) fn begin_slot(&mut self) -> bool {
        let Some(frame) = self.stack.last_mut() else {
            return false;
        };
        debug_assert!(frame.remaining > 0, "slot claimed on a finished frame");
        let is_key = frame.kind == FrameKind::Map && frame.remaining % 2 == 0;
        frame.remaining -= 1;
        is_key
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub(crate) fn depth(&self) -> usize {
        self.stack.len()
    }
}
