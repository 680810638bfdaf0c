//! Forward-only view over the lines of a notes document.
//!
//! Every parser receives a [`LineCursor`] and hands back a [`ParseResult`]
//! whose `remaining` cursor is a suffix of the one it was given. A parser
//! that does not match returns the cursor it received together with empty
//! output.

/// Immutable position within an ordered sequence of lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCursor<'a> {
    lines: &'a [&'a str],
    pos: usize,
}

impl<'a> LineCursor<'a> {
    /// Creates a cursor positioned at the first line.
    pub fn new(lines: &'a [&'a str]) -> Self {
        Self { lines, pos: 0 }
    }

    /// The next unconsumed line, if any.
    pub fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.pos).copied()
    }

    /// A cursor with the first `n` remaining lines dropped.
    ///
    /// Advancing past the end yields an empty cursor.
    pub fn advance(self, n: usize) -> Self {
        Self { lines: self.lines, pos: (self.pos + n).min(self.lines.len()) }
    }

    /// The unconsumed lines.
    pub fn remaining(&self) -> &'a [&'a str] {
        &self.lines[self.pos..]
    }

    /// Number of unconsumed lines.
    pub fn len(&self) -> usize {
        self.lines.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Absolute position within the original sequence.
    pub fn position(&self) -> usize {
        self.pos
    }
}

/// Output of a single parser application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResult<'a> {
    /// HTML produced for the consumed lines.
    pub parsed: String,
    /// Lines left for the next parser.
    pub remaining: LineCursor<'a>,
}

impl<'a> ParseResult<'a> {
    pub fn new(parsed: String, remaining: LineCursor<'a>) -> Self {
        Self { parsed, remaining }
    }

    /// The "did not match" outcome: nothing produced, nothing consumed.
    pub fn nothing(lines: LineCursor<'a>) -> Self {
        Self { parsed: String::new(), remaining: lines }
    }

    /// Number of lines consumed relative to the cursor the parser was given.
    pub fn consumed_from(&self, start: LineCursor<'a>) -> usize {
        self.remaining.position() - start.position()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_advance() {
        let lines = ["a", "b", "c"];
        let cursor = LineCursor::new(&lines);

        assert_eq!(cursor.peek(), Some("a"));
        assert_eq!(cursor.len(), 3);

        let next = cursor.advance(2);
        assert_eq!(next.peek(), Some("c"));
        assert_eq!(next.remaining(), &["c"]);
        assert_eq!(cursor.peek(), Some("a"));
    }

    #[test]
    fn test_cursor_advance_past_end() {
        let lines = ["a"];
        let cursor = LineCursor::new(&lines).advance(5);
        assert!(cursor.is_empty());
        assert_eq!(cursor.peek(), None);
    }

    #[test]
    fn test_nothing_consumes_nothing() {
        let lines = ["a", "b"];
        let cursor = LineCursor::new(&lines).advance(1);
        let result = ParseResult::nothing(cursor);
        assert!(result.parsed.is_empty());
        assert_eq!(result.consumed_from(cursor), 0);
    }
}
