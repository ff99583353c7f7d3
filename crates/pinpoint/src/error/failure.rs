//! The combined failure type for parsing drivers.

use thiserror::Error;

use crate::error::{Message, PositionedError, TrailingInputError};

/// A type alias for `Result<T, ParseFailure>`.
pub type Result<T> = std::result::Result<T, ParseFailure>;

/// Either of the two ways a parse can fail.
///
/// A driver that runs a parser to completion surfaces a
/// [`PositionedError`] when the parser itself failed, and a
/// [`TrailingInputError`] when the parser succeeded without consuming the
/// whole input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFailure {
    #[error(transparent)]
    Positioned(#[from] PositionedError),

    #[error(transparent)]
    Trailing(#[from] TrailingInputError),
}

impl ParseFailure {
    /// Returns the positioned error, if this failure carries one.
    pub fn as_positioned(&self) -> Option<&PositionedError> {
        match self {
            ParseFailure::Positioned(err) => Some(err),
            ParseFailure::Trailing(_) => None,
        }
    }

    /// Returns the trailing input error, if this failure carries one.
    pub fn as_trailing(&self) -> Option<&TrailingInputError> {
        match self {
            ParseFailure::Positioned(_) => None,
            ParseFailure::Trailing(err) => Some(err),
        }
    }
}

impl Message for ParseFailure {
    fn message(&self) -> String {
        match self {
            ParseFailure::Positioned(err) => err.message(),
            ParseFailure::Trailing(err) => err.message(),
        }
    }
}
