//! Error values surfaced by a parsing pipeline.
//!
//! This module provides the two error shapes a parser can report:
//! - [`PositionedError`] - a byte offset plus a description of what was
//!   expected at that offset
//! - [`TrailingInputError`] - a successful parse that left input unconsumed
//!
//! Both render a one-line message through the [`Message`] trait, and both can
//! be carried through `?` as a [`ParseFailure`].
//!
//! # Example
//!
//! ```
//! # use pinpoint::error::{Message, ParseFailure, PositionedError, TrailingInputError};
//! let positioned = PositionedError::new(4, "identifier");
//! assert_eq!(positioned.message(), "offset 4: expected identifier");
//!
//! let trailing = TrailingInputError::new(")");
//! assert_eq!(trailing.message(), "left unparsed: )");
//!
//! let failure: ParseFailure = positioned.into();
//! assert_eq!(failure.to_string(), "offset 4: expected identifier");
//! ```

mod failure;
mod message;
mod positioned;
mod trailing;

pub use failure::{ParseFailure, Result};
pub use message::Message;
pub use positioned::PositionedError;
pub use trailing::TrailingInputError;
