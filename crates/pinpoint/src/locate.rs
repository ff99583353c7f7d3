//! Rendering of caret diagnostics for positioned errors.
//!
//! The public entry point is [`locate_error`], which renders a
//! [`PositionedError`] against the document it was produced from:
//!
//! ```text
//! Parsing error in line <line number>:
//! <offending line, possibly truncated>
//! <indent>^
//! <error message>
//! ```
//!
//! Everything is measured in bytes. The caret line copies tabs from the
//! offending line and uses spaces elsewhere, so the caret stays aligned in a
//! terminal without knowing its tab width.

mod lines;

use log::trace;

use crate::{
    config::LocateConfig,
    error::{Message, PositionedError},
};

use lines::ScanLines;

/// Marker written over elided parts of a line.
const ELLIPSIS: u8 = b'.';

/// Number of marker bytes written for an elided part.
const ELLIPSIS_LEN: usize = 3;

/// The line of a document that contains a byte offset.
///
/// Produced by [`locate_line`]. The line excludes its `\n` delimiter and a
/// preceding `\r`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineLocation<'a> {
    line_number: usize,
    line_start: usize,
    column: usize,
    line: &'a [u8],
}

impl<'a> LineLocation<'a> {
    /// Returns the 1-based line number.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Returns the byte offset where the line starts.
    ///
    /// Offsets are accumulated from the scanned line lengths plus one byte
    /// per delimiter, so every `\r\n` before this line shifts it by one.
    pub fn line_start(&self) -> usize {
        self.line_start
    }

    /// Returns the offset just past the line's delimiter.
    pub fn line_end(&self) -> usize {
        self.line_start + self.line.len() + 1
    }

    /// Returns the byte column of the located offset within the line.
    ///
    /// This may exceed the line length when the offset sits on the delimiter
    /// or beyond the last scanned line.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Returns the raw bytes of the line.
    pub fn line(&self) -> &'a [u8] {
        self.line
    }
}

/// Find the line of `source` that contains byte offset `pos`.
///
/// Lines are scanned in order and the first one whose range
/// `line_start..=line_end` contains `pos` is returned. Both ends are
/// inclusive, so an offset exactly on a delimiter belongs to the line before
/// it. When the scan runs out of lines first, the last scanned line is used.
/// An empty document is treated as a single empty line.
///
/// Returns `None` when `pos` is past the end of `source`.
pub fn locate_line(source: &str, pos: usize) -> Option<LineLocation<'_>> {
    if pos > source.len() {
        return None;
    }

    let mut line_number = 0;
    let mut line_start = 0;
    let mut line_end = 0;
    let mut line: &[u8] = &[];

    for scanned in ScanLines::new(source.as_bytes()) {
        line_number += 1;
        line = scanned;
        line_start = line_end;
        line_end += scanned.len() + 1;

        if line_start <= pos && pos <= line_end {
            break;
        }
    }

    Some(LineLocation {
        line_number: line_number.max(1),
        line_start,
        column: pos - line_start,
        line,
    })
}

/// Render a caret diagnostic for `err` against `source`.
///
/// Uses the default [`LocateConfig`]. Equivalent to
/// `Locator::default().locate(err, source)`.
///
/// # Example
///
/// ```
/// # use pinpoint::{PositionedError, locate_error};
/// let err = PositionedError::new(1, "`=`");
/// assert_eq!(
///     locate_error(&err, "\tx"),
///     "Parsing error in line 1:\n\tx\n\t^\noffset 1: expected `=`\n"
/// );
///
/// let err = PositionedError::new(5, "foo");
/// assert_eq!(locate_error(&err, "ab"), "offset 5: expected foo");
/// ```
pub fn locate_error(err: &PositionedError, source: &str) -> String {
    Locator::default().locate(err, source)
}

/// Caret diagnostic renderer with configurable truncation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Locator {
    config: LocateConfig,
}

impl Locator {
    /// Create a locator with the given truncation settings.
    pub fn new(config: LocateConfig) -> Self {
        Self { config }
    }

    /// Returns the truncation settings.
    pub fn config(&self) -> &LocateConfig {
        &self.config
    }

    /// Render a caret diagnostic for `err` against `source`.
    ///
    /// Never fails: when the error offset is past the end of `source` the
    /// bare error message is returned instead.
    pub fn locate(&self, err: &PositionedError, source: &str) -> String {
        let Some(location) = locate_line(source, err.pos()) else {
            trace!(pos = err.pos(), len = source.len(); "Error offset is past end of input");
            return err.message();
        };

        trace!(
            line_number = location.line_number(),
            line_start = location.line_start(),
            column = location.column();
            "Located error line"
        );

        let (line, indent) = self.render_window(&location);

        format!(
            "Parsing error in line {}:\n{}\n{}^\n{}\n",
            location.line_number(),
            String::from_utf8_lossy(&line),
            String::from_utf8_lossy(&indent),
            err.message()
        )
    }

    /// Cut the located line down to the rendered window and build the caret
    /// indentation for it.
    fn render_window(&self, location: &LineLocation<'_>) -> (Vec<u8>, Vec<u8>) {
        let column = location.column();
        let mut line = location.line().to_vec();
        let mut indent: Vec<u8> = (0..column)
            .map(|i| match line.get(i) {
                Some(b'\t') => b'\t',
                _ => b' ',
            })
            .collect();

        if column > self.config.right_margin() {
            let cut = column.saturating_sub(self.config.window());
            indent.drain(..cut);
            line.drain(..cut.min(line.len()));
            line.iter_mut()
                .take(ELLIPSIS_LEN)
                .for_each(|byte| *byte = ELLIPSIS);
        }

        let max_width = self.config.max_width();
        if line.len() > max_width {
            line.truncate(max_width);
            line[max_width.saturating_sub(ELLIPSIS_LEN)..].fill(ELLIPSIS);
        }

        (line, indent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(source: &str, pos: usize) -> String {
        locate_error(&PositionedError::new(pos, "thing"), source)
    }

    /// Split a rendered diagnostic into (header, line, caret line, message).
    fn parts(diagnostic: &str) -> (&str, &str, &str, &str) {
        let lines: Vec<&str> = diagnostic.split('\n').collect();
        assert_eq!(lines.len(), 5, "unexpected shape: {diagnostic:?}");
        assert_eq!(lines[4], "", "missing trailing newline");
        (lines[0], lines[1], lines[2], lines[3])
    }

    #[test]
    fn test_locate_line_first_line() {
        let location = locate_line("hello\nworld", 2).unwrap();

        assert_eq!(location.line_number(), 1);
        assert_eq!(location.line_start(), 0);
        assert_eq!(location.line_end(), 6);
        assert_eq!(location.column(), 2);
        assert_eq!(location.line(), b"hello");
    }

    #[test]
    fn test_locate_line_past_end() {
        assert!(locate_line("ab", 3).is_none());
        assert!(locate_line("", 1).is_none());
    }

    #[test]
    fn test_locate_line_at_end() {
        let location = locate_line("ab", 2).unwrap();

        assert_eq!(location.line_number(), 1);
        assert_eq!(location.column(), 2);
    }

    #[test]
    fn test_locate_line_on_delimiter_belongs_to_previous_line() {
        // offset 5 is the `\n` after "hello", line_end of line 1 is 6
        let location = locate_line("hello\nworld", 5).unwrap();
        assert_eq!(location.line_number(), 1);

        let location = locate_line("hello\nworld", 6).unwrap();
        assert_eq!(location.line_number(), 1);
        assert_eq!(location.column(), 6);

        let location = locate_line("hello\nworld", 7).unwrap();
        assert_eq!(location.line_number(), 2);
        assert_eq!(location.column(), 1);
    }

    #[test]
    fn test_locate_line_empty_document() {
        let location = locate_line("", 0).unwrap();

        assert_eq!(location.line_number(), 1);
        assert_eq!(location.column(), 0);
        assert!(location.line().is_empty());
    }

    #[test]
    fn test_locate_line_crlf_drift() {
        // Each `\r\n` is counted as a single byte, so line starts drift
        // one byte left per preceding CRLF line.
        let location = locate_line("ab\r\ncd\r\nef", 9).unwrap();

        assert_eq!(location.line_number(), 3);
        assert_eq!(location.line_start(), 6);
        assert_eq!(location.column(), 3);
        assert_eq!(location.line(), b"ef");
    }

    #[test]
    fn test_locate_line_exhausted_scan_uses_last_line() {
        // Two CRLF lines lose two bytes of accounting; the final offset
        // lands past line_end of the last line.
        let source = "a\r\nb\r\n";
        assert_eq!(source.len(), 6);

        let location = locate_line(source, 6).unwrap();

        assert_eq!(location.line_number(), 2);
        assert_eq!(location.line_start(), 2);
        assert_eq!(location.line_end(), 4);
        assert_eq!(location.column(), 4);
        assert_eq!(location.line(), b"b");
    }

    #[test]
    fn test_locate_exhausted_scan_pads_indent_with_spaces() {
        let diagnostic = render("a\r\nb\r\n", 6);
        let (header, line, caret, _) = parts(&diagnostic);

        assert_eq!(header, "Parsing error in line 2:");
        assert_eq!(line, "b");
        assert_eq!(caret, "    ^");
    }

    #[test]
    fn test_locate_past_end_returns_message() {
        let err = PositionedError::new(5, "foo");

        assert_eq!(locate_error(&err, "ab"), "offset 5: expected foo");
    }

    #[test]
    fn test_locate_simple() {
        assert_eq!(
            render("let x = ;", 8),
            "Parsing error in line 1:\nlet x = ;\n        ^\noffset 8: expected thing\n"
        );
    }

    #[test]
    fn test_locate_empty_document() {
        assert_eq!(
            render("", 0),
            "Parsing error in line 1:\n\n^\noffset 0: expected thing\n"
        );
    }

    #[test]
    fn test_locate_preserves_tabs() {
        let diagnostic = render("\tx", 1);
        let (_, line, caret, _) = parts(&diagnostic);

        assert_eq!(line, "\tx");
        assert_eq!(caret, "\t^");
    }

    #[test]
    fn test_locate_mixed_tabs_and_spaces() {
        let diagnostic = render("\tab\t c", 6);
        let (_, _, caret, _) = parts(&diagnostic);

        assert_eq!(caret, "\t  \t  ^");
    }

    #[test]
    fn test_locate_multiline() {
        let diagnostic = render("line1\nline2\nline3", 8);
        let (header, line, caret, message) = parts(&diagnostic);

        assert_eq!(header, "Parsing error in line 2:");
        assert_eq!(line, "line2");
        assert_eq!(caret, "  ^");
        assert_eq!(message, "offset 8: expected thing");
    }

    #[test]
    fn test_locate_no_truncation_at_margin() {
        let source = "b".repeat(60);
        let diagnostic = render(&source, 40);
        let (_, line, caret, _) = parts(&diagnostic);

        assert_eq!(line, source);
        assert_eq!(caret.len(), 41);
    }

    #[test]
    fn test_locate_left_truncation() {
        let source: String = ('a'..='z').cycle().take(60).collect();
        let diagnostic = render(&source, 41);
        let (_, line, caret, _) = parts(&diagnostic);

        // window starts at column 11
        assert_eq!(line, format!("...{}", &source[14..]));
        assert_eq!(caret, format!("{}^", " ".repeat(30)));
    }

    #[test]
    fn test_locate_long_line_both_truncations() {
        let source = "a".repeat(100);
        let diagnostic = render(&source, 50);
        let (_, line, caret, _) = parts(&diagnostic);

        assert_eq!(line.len(), 70);
        assert!(line.starts_with("..."));
        assert!(line.ends_with("..."));
        assert_eq!(&line[3..67], "a".repeat(64));
        assert_eq!(caret, format!("{}^", " ".repeat(30)));
    }

    #[test]
    fn test_locate_long_line_right_truncation_only() {
        let source = "x".repeat(90);
        let diagnostic = render(&source, 5);
        let (_, line, caret, _) = parts(&diagnostic);

        assert_eq!(line, format!("{}...", "x".repeat(67)));
        assert_eq!(caret, "     ^");
    }

    #[test]
    fn test_locate_line_of_exactly_max_width_is_kept() {
        let source = "y".repeat(70);
        let diagnostic = render(&source, 3);
        let (_, line, _, _) = parts(&diagnostic);

        assert_eq!(line, source);
    }

    #[test]
    fn test_locate_truncation_keeps_tabs_in_window() {
        let source = format!("{}\t{}", "z".repeat(45), "z".repeat(10));
        let diagnostic = render(&source, 50);
        let (_, _, caret, _) = parts(&diagnostic);

        // column 50, window starts at 20; the tab at 45 lands at 25
        assert_eq!(caret, format!("{}\t{}^", " ".repeat(25), " ".repeat(4)));
    }

    #[test]
    fn test_locate_non_ascii_split_is_replaced() {
        // 'é' is two bytes; after the window starts at byte 12 and the
        // marker covers 12..15, byte 15 is a lone continuation byte
        let source = "é".repeat(40);
        let diagnostic = render(&source, 42);
        let (_, line, _, _) = parts(&diagnostic);

        assert_eq!(line, format!("...\u{FFFD}{}", "é".repeat(32)));
    }

    #[test]
    fn test_locator_with_custom_config() {
        let locator = Locator::new(LocateConfig::new(10, 5, 12));
        let source = "0123456789abcdefghijklmnop";
        let err = PositionedError::new(15, "end");

        let diagnostic = locator.locate(&err, source);
        let (_, line, caret, _) = parts(&diagnostic);

        // cut at 10, then limited to 12 bytes
        assert_eq!(line, "...defghi...");
        assert_eq!(caret, "     ^");
    }

    #[test]
    fn test_locator_tolerates_degenerate_config() {
        let locator = Locator::new(LocateConfig::new(0, 100, 1));
        let err = PositionedError::new(4, "x");

        let diagnostic = locator.locate(&err, "abcdef");
        let (_, line, caret, _) = parts(&diagnostic);

        assert_eq!(line, ".");
        assert_eq!(caret, "    ^");
    }
}
