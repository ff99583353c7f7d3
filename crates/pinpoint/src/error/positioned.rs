//! Parse failures anchored at a byte offset.

use std::fmt;

use crate::error::Message;

/// A parse failure at a byte offset into some document.
///
/// The offset is only meaningful relative to the document that was being
/// parsed; no document length is stored and nothing is validated at
/// construction. Offsets past the end of a document are accepted and handled
/// by [`locate_error`](crate::locate_error), which falls back to the bare
/// [`message`](Message::message).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PositionedError {
    pos: usize,
    expected: String,
}

impl PositionedError {
    /// Create a new positioned error.
    ///
    /// # Arguments
    ///
    /// * `pos` - Zero-based byte offset where parsing failed
    /// * `expected` - Description of what the parser expected at `pos`
    pub fn new(pos: usize, expected: impl Into<String>) -> Self {
        Self {
            pos,
            expected: expected.into(),
        }
    }

    /// Get the byte offset of the failure.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Get the description of what was expected.
    pub fn expected(&self) -> &str {
        &self.expected
    }

    /// Keep whichever of two errors got further into the input.
    ///
    /// When a parser backtracks over several alternatives, the error with the
    /// largest offset is usually the most useful one to report. Ties keep
    /// `self`.
    ///
    /// # Example
    ///
    /// ```
    /// # use pinpoint::PositionedError;
    /// let a = PositionedError::new(3, "digit");
    /// let b = PositionedError::new(7, "`)`");
    /// assert_eq!(a.furthest(b).pos(), 7);
    /// ```
    pub fn furthest(self, other: Self) -> Self {
        if other.pos > self.pos { other } else { self }
    }
}

impl Message for PositionedError {
    fn message(&self) -> String {
        format!("offset {}: expected {}", self.pos, self.expected)
    }
}

impl fmt::Display for PositionedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "offset {}: expected {}", self.pos, self.expected)
    }
}

impl std::error::Error for PositionedError {}
