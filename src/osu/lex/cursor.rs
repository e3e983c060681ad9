//! A cursor walking the source line by line.

use std::ops::Range;

/// A line-oriented cursor over the chart source.
pub struct Cursor<'a> {
    /// The line position, starts with 1.
    line: usize,
    /// The index position.
    index: usize,
    /// The source str.
    source: &'a str,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the beginning of `source`.
    pub const fn new(source: &'a str) -> Self {
        Self {
            line: 1,
            index: 0,
            source,
        }
    }

    /// Whether every line has been read.
    pub const fn is_end(&self) -> bool {
        self.index >= self.source.len()
    }

    /// Returns the line number of the line to be read next, starts with 1.
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Determine the end of the current line and handle CRLF (\r\n) correctly.
    ///
    /// Returns a tuple `(next_index, line_end_index)` where:
    /// - `next_index` is the absolute byte index just after the line feed, or the source length.
    /// - `line_end_index` is the absolute byte index where the line content ends (exclusive),
    ///   excluding a `\r` right before the line feed.
    fn current_line_bounds(&self) -> (usize, usize) {
        let rest = &self.source[self.index..];
        let Some(lf) = rest.find('\n') else {
            let end = self.source.len();
            let content_end = if rest.ends_with('\r') { end - 1 } else { end };
            return (end, content_end);
        };
        let lf_index = self.index + lf;
        let content_end = if rest[..lf].ends_with('\r') {
            lf_index - 1
        } else {
            lf_index
        };
        (lf_index + 1, content_end)
    }

    /// Move cursor through the current line, returning its content (without the line break)
    /// and the byte range of that content.
    pub fn next_line_with_range(&mut self) -> Option<(Range<usize>, &'a str)> {
        if self.is_end() {
            return None;
        }
        let (next_index, content_end) = self.current_line_bounds();
        let range = self.index..content_end;
        let line = &self.source[range.clone()];
        self.index = next_index;
        self.line += 1;
        Some((range, line))
    }
}

#[cfg(test)]
mod tests {
    use super::Cursor;

    #[test]
    fn lines_with_crlf() {
        let mut cursor = Cursor::new("[General]\r\nMode: 3\r\n\nlast");
        assert_eq!(cursor.next_line_with_range(), Some((0..9, "[General]")));
        assert_eq!(cursor.line(), 2);
        assert_eq!(cursor.next_line_with_range(), Some((11..18, "Mode: 3")));
        assert_eq!(cursor.next_line_with_range(), Some((20..20, "")));
        assert_eq!(cursor.next_line_with_range(), Some((21..25, "last")));
        assert_eq!(cursor.next_line_with_range(), None);
        assert!(cursor.is_end());
    }

    #[test]
    fn trailing_carriage_return_without_line_feed() {
        let mut cursor = Cursor::new("a\r");
        assert_eq!(cursor.next_line_with_range(), Some((0..1, "a")));
        assert_eq!(cursor.next_line_with_range(), None);
    }
}
