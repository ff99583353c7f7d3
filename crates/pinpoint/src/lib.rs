//! # Pinpoint
//!
//! Human-readable diagnostics for parse errors that are reported as a raw byte
//! offset into a source document.
//!
//! A parsing engine records *where* it failed and *what* it expected there as a
//! [`PositionedError`]. When a parse succeeds but leaves input behind, a driver
//! reports the remainder as a [`TrailingInputError`]. This crate turns the
//! former into a line-and-caret diagnostic:
//!
//! ```text
//! Parsing error in line 2:
//! let x = ;
//!         ^
//! offset 19: expected expression
//! ```
//!
//! All offsets and slicing are byte based. Tabs in the offending line are
//! preserved under the caret so alignment survives in a terminal, and very
//! long lines are truncated around the error column.
//!
//! ## Usage
//!
//! ```
//! # use pinpoint::{PositionedError, locate_error};
//! let source = "first line\nlet x = ;\n";
//! let err = PositionedError::new(19, "expression");
//!
//! let diagnostic = locate_error(&err, source);
//! assert_eq!(
//!     diagnostic,
//!     "Parsing error in line 2:\nlet x = ;\n        ^\noffset 19: expected expression\n"
//! );
//! ```

pub mod config;
pub mod error;

mod locate;

pub use config::LocateConfig;
pub use error::{Message, ParseFailure, PositionedError, Result, TrailingInputError};
pub use locate::{LineLocation, Locator, locate_error, locate_line};
