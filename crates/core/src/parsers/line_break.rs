use crate::cursor::{LineCursor, ParseResult};
use crate::lines::is_blank;
use crate::parsers::Parser;

/// Turns one whitespace-only line into `<br/>`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BreakParser;

impl Parser for BreakParser {
    fn parse<'a>(&self, lines: LineCursor<'a>) -> ParseResult<'a> {
        match lines.peek() {
            Some(line) if is_blank(line) => ParseResult::new("<br/>\n".to_string(), lines.advance(1)),
            _ => ParseResult::nothing(lines),
        }
    }
}
