//! Error adapter for rendering errors through miette.
//!
//! This module provides the bridge between the library's plain error values
//! and miette's graphical report formatting used by the CLI:
//! - [`PositionedAdapter`] labels a [`PositionedError`] in its source document
//! - [`ErrorAdapter`] wraps a [`CliError`] that has no source location

use std::fmt;

use miette::{
    Diagnostic as MietteDiagnostic, GraphicalReportHandler, GraphicalTheme, LabeledSpan,
    SourceSpan,
};

use pinpoint::{Message, PositionedError};

use crate::error::{CliError, ConfigError};

/// Adapter for a positioned parse error and the document it refers to.
pub struct PositionedAdapter<'a> {
    /// The wrapped error
    err: &'a PositionedError,
    /// Source code for displaying snippets
    src: &'a str,
}

impl<'a> PositionedAdapter<'a> {
    /// Create a new positioned error adapter.
    pub fn new(err: &'a PositionedError, src: &'a str) -> Self {
        Self { err, src }
    }

    /// The error offset as a zero-width span, or `None` when it lies past
    /// the end of the source.
    ///
    /// miette slices the source by the span, so an offset inside a
    /// multi-byte character is moved back to the character's start.
    fn span(&self) -> Option<SourceSpan> {
        let mut pos = self.err.pos();
        if pos > self.src.len() {
            return None;
        }
        while !self.src.is_char_boundary(pos) {
            pos -= 1;
        }
        Some(SourceSpan::new(pos.into(), 0))
    }
}

impl fmt::Debug for PositionedAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PositionedAdapter")
            .field("err", &self.err)
            .finish()
    }
}

impl fmt::Display for PositionedAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.err.message())
    }
}

impl std::error::Error for PositionedAdapter<'_> {}

impl MietteDiagnostic for PositionedAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("pinpoint::parse"))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        self.span()?;
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = self.span()?;
        let message = Some(format!("expected {}", self.err.expected()));
        Some(Box::new(std::iter::once(
            LabeledSpan::new_primary_with_span(message, span),
        )))
    }
}

/// Adapter for [`CliError`] values, which carry no source location.
pub struct ErrorAdapter<'a>(pub &'a CliError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            CliError::Io(_) => "pinpoint::io",
            CliError::Config(_) => "pinpoint::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            CliError::Config(ConfigError::MissingFile(_)) => Some(Box::new(
                "pass an existing file to --config or omit it to use defaults",
            )),
            _ => None,
        }
    }
}

/// Render any miette diagnostic to a string without colors.
pub fn render(diagnostic: &dyn MietteDiagnostic) -> String {
    let reporter = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor());

    let mut writer = String::new();
    reporter
        .render_report(&mut writer, diagnostic)
        .expect("Writing to String buffer is infallible");
    writer
}

/// Render a positioned error against its source with miette's graphical
/// report handler.
pub fn render_positioned(err: &PositionedError, src: &str) -> String {
    render(&PositionedAdapter::new(err, src))
}
