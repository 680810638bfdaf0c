use crate::cursor::{LineCursor, ParseResult};
use crate::lines::{capitalize_words, escape_html, leading_whitespace, more_caps, trim_suffix};
use crate::parsers::Parser;

/// Recognizes a single header line.
///
/// A header starts in the first column, is not a hyphen item, and has more
/// uppercase than lowercase letters. A trailing `:` is dropped and the text
/// is title-cased: `PROJECT STATUS:` becomes `<h3>Project Status</h3>`.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeaderParser;

impl HeaderParser {
    pub fn is_header(line: &str) -> bool {
        !line.is_empty() && !line.starts_with('-') && leading_whitespace(line) == 0 && more_caps(line)
    }

    fn to_header(line: &str) -> String {
        let title = capitalize_words(trim_suffix(line, ":"));
        format!("<h3>{}</h3>\n", escape_html(&title))
    }
}

impl Parser for HeaderParser {
    fn parse<'a>(&self, lines: LineCursor<'a>) -> ParseResult<'a> {
        match lines.peek() {
            Some(line) if Self::is_header(line) => ParseResult::new(Self::to_header(line), lines.advance(1)),
            _ => ParseResult::nothing(lines),
        }
    }
}
