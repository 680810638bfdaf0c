use tracing::trace;

use crate::cursor::{LineCursor, ParseResult};
use crate::lines::{escape_html, join_with_single_space};
use crate::parsers::{BreakParser, FirstOf, HeaderParser, ListHeaderParser, Parser};

/// An empty document still reads as one empty line.
const EMPTY_DOCUMENT: &[&str] = &[""];

/// Top-level driver for a whole notes document.
///
/// Headers, lists and breaks are tried in that order on every line. A line
/// none of them accepts is free text: consecutive free-text lines are merged
/// into one `<p>`, which is closed as soon as another construct is emitted
/// or the input ends. The driver always consumes all of its input.
#[derive(Debug, Default, Clone, Copy)]
pub struct NotesParser;

impl NotesParser {
    /// Converts `lines` to an HTML fragment.
    pub fn parse_lines(&self, lines: &[&str]) -> String {
        self.parse(LineCursor::new(lines)).parsed
    }

    fn parse_document<'a>(&self, lines: LineCursor<'a>) -> ParseResult<'a> {
        let (header, list, line_break) = (HeaderParser, ListHeaderParser, BreakParser);
        let candidates: Vec<&dyn Parser> = vec![&header, &list, &line_break];
        let constructs = FirstOf::new(candidates);

        let mut parsed = String::new();
        let mut paragraph: Option<String> = None;
        let mut rest = lines;

        while let Some(line) = rest.peek() {
            let result = constructs.parse(rest);
            let consumed = result.consumed_from(rest);

            if consumed == 0 {
                let text = escape_html(line);
                paragraph = Some(match paragraph.take() {
                    Some(open) => join_with_single_space(&open, &text),
                    None => format!("{text} "),
                });
                rest = rest.advance(1);
                continue;
            }

            if let Some(open) = paragraph.take() {
                close_paragraph(&mut parsed, &open);
            }
            trace!(consumed, "emitting construct");
            parsed.push_str(&result.parsed);
            rest = result.remaining;
        }

        if let Some(open) = paragraph.take() {
            close_paragraph(&mut parsed, &open);
        }

        ParseResult::new(parsed, rest)
    }
}

fn close_paragraph(parsed: &mut String, text: &str) {
    parsed.push_str("<p>");
    parsed.push_str(text);
    parsed.push_str("</p>\n");
}

impl Parser for NotesParser {
    fn parse<'a>(&self, lines: LineCursor<'a>) -> ParseResult<'a> {
        if lines.is_empty() {
            let parsed = self.parse_document(LineCursor::new(EMPTY_DOCUMENT)).parsed;
            return ParseResult::new(parsed, lines);
        }
        self.parse_document(lines)
    }
}
