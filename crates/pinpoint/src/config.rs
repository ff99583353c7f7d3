//! Truncation settings for rendered diagnostics.
//!
//! [`LocateConfig`] controls how the offending line is cut down before it is
//! printed. It implements [`serde::Deserialize`] so front ends can load it
//! from a configuration file; every field is optional and falls back to the
//! values used by [`locate_error`](crate::locate_error).
//!
//! # Example
//!
//! ```
//! # use pinpoint::config::LocateConfig;
//! let config = LocateConfig::default();
//! assert_eq!(config.right_margin(), 40);
//! assert_eq!(config.window(), 30);
//! assert_eq!(config.max_width(), 70);
//! ```

use serde::Deserialize;

/// Column past which the start of the line is elided.
pub const DEFAULT_RIGHT_MARGIN: usize = 40;

/// Number of bytes kept before the error column once the start is elided.
pub const DEFAULT_WINDOW: usize = 30;

/// Maximum number of bytes of the line that are rendered.
pub const DEFAULT_MAX_WIDTH: usize = 70;

/// Line truncation thresholds for the [`Locator`](crate::Locator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LocateConfig {
    /// When the error column is greater than this, the line prefix is elided.
    right_margin: usize,

    /// Bytes kept before the error column after the prefix is elided.
    window: usize,

    /// Longest rendered line in bytes; longer lines lose their suffix.
    max_width: usize,
}

impl LocateConfig {
    /// Creates a new [`LocateConfig`].
    ///
    /// # Arguments
    ///
    /// * `right_margin` - Column past which the line prefix is elided.
    /// * `window` - Bytes kept before the error column when eliding.
    /// * `max_width` - Longest rendered line in bytes.
    pub fn new(right_margin: usize, window: usize, max_width: usize) -> Self {
        Self {
            right_margin,
            window,
            max_width,
        }
    }

    /// Returns the column past which the line prefix is elided.
    pub fn right_margin(&self) -> usize {
        self.right_margin
    }

    /// Returns the number of bytes kept before the error column.
    pub fn window(&self) -> usize {
        self.window
    }

    /// Returns the longest rendered line in bytes.
    pub fn max_width(&self) -> usize {
        self.max_width
    }
}

impl Default for LocateConfig {
    fn default() -> Self {
        Self::new(DEFAULT_RIGHT_MARGIN, DEFAULT_WINDOW, DEFAULT_MAX_WIDTH)
    }
}
