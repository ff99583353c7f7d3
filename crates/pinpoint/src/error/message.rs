//! The one-line message capability shared by all error values.

/// A value that can describe itself in a single line of text.
///
/// Implemented by [`PositionedError`](super::PositionedError),
/// [`TrailingInputError`](super::TrailingInputError) and
/// [`ParseFailure`](super::ParseFailure). The message never contains
/// location context beyond what the value itself stores; use
/// [`locate_error`](crate::locate_error) for a caret diagnostic.
pub trait Message {
    /// Returns the one-line message for this value.
    fn message(&self) -> String;
}
