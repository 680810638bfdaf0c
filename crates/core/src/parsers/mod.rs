//! Line-oriented parsers for the notes format.
//!
//! Each parser recognizes one shape at the front of a [`LineCursor`] and
//! consumes as many lines as that shape covers. Parsers are composed into
//! the document driver, [`NotesParser`]:
//!
//! - [`HeaderParser`]: a mostly-uppercase line becomes `<h3>`.
//! - [`ListHeaderParser`]: a run of hyphen items becomes nested `<ul>` lists,
//!   with nesting driven purely by indentation.
//! - [`BreakParser`]: a blank line becomes `<br/>`.
//!
//! Anything none of them accepts is free text and ends up in a `<p>`.
//!
//! # Example
//!
//! ```rust
//! use notesync_core::{LineCursor, NotesParser, Parser};
//!
//! let lines = ["AGENDA:", "-budget", " -travel", "-hiring"];
//! let result = NotesParser.parse(LineCursor::new(&lines));
//! assert!(result.parsed.starts_with("<h3>Agenda</h3>\n<ul>\n"));
//! assert!(result.remaining.is_empty());
//! ```

pub mod header;
pub mod line_break;
pub mod list;
pub mod notes;

pub use header::HeaderParser;
pub use line_break::BreakParser;
pub use list::{ListElementParser, ListGroupParser, ListHeaderParser, ListParser};
pub use notes::NotesParser;

use crate::cursor::{LineCursor, ParseResult};

/// A parser over a sequence of lines.
pub trait Parser {
    /// Consumes a prefix of `lines`, returning the HTML for it and the rest.
    ///
    /// A parser that does not match returns [`ParseResult::nothing`].
    fn parse<'a>(&self, lines: LineCursor<'a>) -> ParseResult<'a>;
}

/// Tries each candidate in order and returns the first result that consumed input.
pub struct FirstOf<'p> {
    candidates: Vec<&'p dyn Parser>,
}

impl<'p> FirstOf<'p> {
    pub fn new(candidates: Vec<&'p dyn Parser>) -> Self {
        Self { candidates }
    }
}

impl Parser for FirstOf<'_> {
    fn parse<'a>(&self, lines: LineCursor<'a>) -> ParseResult<'a> {
        for candidate in &self.candidates {
            let result = candidate.parse(lines);
            if result.consumed_from(lines) > 0 {
                return result;
            }
        }
        ParseResult::nothing(lines)
    }
}
