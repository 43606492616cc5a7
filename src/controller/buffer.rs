//! Pending records withheld until the next reset trigger.

use crate::stream::Token;
use chrono::TimeDelta;

/// Records stamped since the last trigger, in arrival order
#[derive(Debug, Default)]
pub struct TokenBuffer {
    tokens: Vec<Token>,
}

impl TokenBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Backfill every pending token with `delta`, hand each to `emit` in
    /// arrival order, and clear the buffer.
    ///
    /// Only the delta changes; time, total and payload stay as stamped.
    pub fn flush(&mut self, delta: TimeDelta, mut emit: impl FnMut(&Token)) {
        for mut token in self.tokens.drain(..) {
            token.record.backfill_delta(delta);
            emit(&token);
        }
    }
}
