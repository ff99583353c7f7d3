//! Line scanning over raw document bytes.

/// Iterator over the lines of a byte buffer.
///
/// Lines are delimited by `\n`. The delimiter is not part of the yielded
/// line, and neither is a single `\r` directly before it (or at the very end
/// of the buffer). A trailing delimiter does not produce an extra empty line,
/// and an empty buffer yields nothing.
#[derive(Debug, Clone)]
pub(crate) struct ScanLines<'a> {
    rest: &'a [u8],
}

impl<'a> ScanLines<'a> {
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        Self { rest: bytes }
    }
}

impl<'a> Iterator for ScanLines<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        let line = match self.rest.iter().position(|&b| b == b'\n') {
            Some(newline) => {
                let line = &self.rest[..newline];
                self.rest = &self.rest[newline + 1..];
                line
            }
            None => std::mem::take(&mut self.rest),
        };

        Some(line.strip_suffix(b"\r").unwrap_or(line))
    }
}
