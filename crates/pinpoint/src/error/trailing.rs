//! Input left over after an otherwise successful parse.

use std::fmt;

use log::debug;

use crate::error::Message;

/// The unconsumed suffix of an input after a parse completed.
///
/// A driver that requires the whole input to be consumed reports this when
/// the parser stopped early. The result of the parse may still be valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TrailingInputError {
    remaining: String,
}

impl TrailingInputError {
    /// Create a new trailing input error from the unconsumed text.
    pub fn new(remaining: impl Into<String>) -> Self {
        Self {
            remaining: remaining.into(),
        }
    }

    /// Build an error for `input` when a parser consumed only `consumed` bytes.
    ///
    /// Returns `None` when the whole input was consumed. An offset that falls
    /// inside a multi-byte character is moved back to the start of that
    /// character so the remainder is always valid text.
    ///
    /// # Example
    ///
    /// ```
    /// # use pinpoint::{Message, TrailingInputError};
    /// let err = TrailingInputError::from_consumed("(a b))", 5).unwrap();
    /// assert_eq!(err.message(), "left unparsed: )");
    ///
    /// assert!(TrailingInputError::from_consumed("(a b)", 5).is_none());
    /// ```
    pub fn from_consumed(input: &str, consumed: usize) -> Option<Self> {
        if consumed >= input.len() {
            return None;
        }

        let mut boundary = consumed;
        while !input.is_char_boundary(boundary) {
            boundary -= 1;
        }

        debug!(consumed, boundary, total = input.len(); "Input left unparsed");
        Some(Self::new(&input[boundary..]))
    }

    /// Get the unconsumed text.
    pub fn remaining(&self) -> &str {
        &self.remaining
    }
}

impl Message for TrailingInputError {
    fn message(&self) -> String {
        format!("left unparsed: {}", self.remaining)
    }
}

impl fmt::Display for TrailingInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "left unparsed: {}", self.remaining)
    }
}

impl std::error::Error for TrailingInputError {}
