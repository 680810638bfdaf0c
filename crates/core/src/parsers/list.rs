//! Hyphen lists with indentation-driven nesting.
//!
//! There are no explicit open or close markers in the notes format. A line
//! whose first non-whitespace character is `-` starts a list item, and the
//! number of whitespace characters in front of it decides the nesting depth:
//!
//! ```text
//! -outer1
//!  -inner
//! -outer2
//! ```
//!
//! becomes
//!
//! ```text
//! <ul>
//! <li>outer1</li>
//! <ul>
//! <li>inner</li>
//! </ul>
//! <li>outer2</li>
//! </ul>
//! ```
//!
//! [`ListHeaderParser`] is the only parser that opens a `<ul>`. It hands the
//! body to [`ListParser`], which reads sibling items through
//! [`ListGroupParser`] and recurses into [`ListHeaderParser`] whenever it
//! meets a deeper item.

use tracing::trace;

use crate::cursor::{LineCursor, ParseResult};
use crate::lines::{escape_html, is_blank, is_list_item, is_list_item_at, join_with_single_space, leading_whitespace};
use crate::parsers::Parser;

/// Reads one list item, including its continuation lines.
///
/// Must be called on a line that is a hyphen item at `indent`. Following
/// lines are merged into the item while they are indented at least `indent`
/// characters, are not blank, and are not themselves hyphen items. The
/// result is the merged item text, without the `<li>` wrapper and not yet
/// escaped.
#[derive(Debug, Default, Clone, Copy)]
pub struct ListElementParser {
    pub indent: usize,
}

impl ListElementParser {
    pub fn new(indent: usize) -> Self {
        Self { indent }
    }

    fn continues_item(&self, line: &str) -> bool {
        leading_whitespace(line) >= self.indent && !is_blank(line) && !is_list_item(line)
    }
}

impl Parser for ListElementParser {
    fn parse<'a>(&self, lines: LineCursor<'a>) -> ParseResult<'a> {
        let Some(first) = lines.peek() else {
            return ParseResult::nothing(lines);
        };
        debug_assert!(
            is_list_item_at(first, self.indent),
            "list element parser called on {first:?} at indent {}",
            self.indent
        );

        let mut text = first.trim_start().strip_prefix('-').unwrap_or(first).to_string();
        let mut rest = lines.advance(1);

        while let Some(line) = rest.peek() {
            if !self.continues_item(line) {
                break;
            }
            text = join_with_single_space(&text, line.trim_start());
            rest = rest.advance(1);
        }

        ParseResult::new(text, rest)
    }
}

/// Reads consecutive sibling items at exactly `indent`, each as `<li>`.
///
/// Stops without consuming at the first line that is not a hyphen item at
/// that exact indentation, deeper items included.
#[derive(Debug, Default, Clone, Copy)]
pub struct ListGroupParser {
    pub indent: usize,
}

impl ListGroupParser {
    pub fn new(indent: usize) -> Self {
        Self { indent }
    }
}

impl Parser for ListGroupParser {
    fn parse<'a>(&self, lines: LineCursor<'a>) -> ParseResult<'a> {
        let element = ListElementParser::new(self.indent);
        let mut parsed = String::new();
        let mut rest = lines;

        while rest.peek().is_some_and(|line| is_list_item_at(line, self.indent)) {
            let item = element.parse(rest);
            parsed.push_str("<li>");
            parsed.push_str(&escape_html(&item.parsed));
            parsed.push_str("</li>\n");
            rest = item.remaining;
        }

        ParseResult::new(parsed, rest)
    }
}

/// Reads the body of a list whose `<ul>` is already open.
///
/// Items at `indent` go through [`ListGroupParser`], deeper items open a
/// nested list through [`ListHeaderParser`], and a shallower item or a
/// non-item line ends the list.
#[derive(Debug, Default, Clone, Copy)]
pub struct ListParser {
    pub indent: usize,
}

impl ListParser {
    pub fn new(indent: usize) -> Self {
        Self { indent }
    }
}

impl Parser for ListParser {
    fn parse<'a>(&self, lines: LineCursor<'a>) -> ParseResult<'a> {
        let mut parsed = String::new();
        let mut rest = lines;

        while let Some(line) = rest.peek().filter(|line| is_list_item(line)) {
            let leading = leading_whitespace(line);
            let result = if leading == self.indent {
                ListGroupParser::new(self.indent).parse(rest)
            } else if leading > self.indent {
                trace!(from = self.indent, to = leading, "nesting list");
                ListHeaderParser.parse(rest)
            } else {
                break;
            };

            parsed.push_str(&result.parsed);
            rest = result.remaining;
        }

        ParseResult::new(parsed, rest)
    }
}

/// Opens a `<ul>` at the indentation of the next hyphen item and reads the
/// whole list, nested lists included.
#[derive(Debug, Default, Clone, Copy)]
pub struct ListHeaderParser;

impl Parser for ListHeaderParser {
    fn parse<'a>(&self, lines: LineCursor<'a>) -> ParseResult<'a> {
        let Some(line) = lines.peek().filter(|line| is_list_item(line)) else {
            return ParseResult::nothing(lines);
        };

        let body = ListParser::new(leading_whitespace(line)).parse(lines);
        ParseResult::new(format!("<ul>\n{}</ul>\n", body.parsed), body.remaining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lines::to_lines;

    #[test]
    fn test_single_element() {
        let lines = to_lines("-moocow");
        assert_eq!(ListElementParser::new(0).parse(LineCursor::new(&lines)).parsed, "moocow");
    }

    #[test]
    fn test_element_stops_at_blank_line() {
        let lines = to_lines("-something\nor other\n\n-foo");
        let result = ListElementParser::new(0).parse(LineCursor::new(&lines));
        assert_eq!(result.parsed, "something or other");
        assert_eq!(result.remaining.remaining(), &["", "-foo"]);
    }

    #[test]
    fn test_element_merges_continuations() {
        let lines = to_lines("-some really1 really2\nreally3\n really4\n  really5\nreally6 long text");
        assert_eq!(
            ListElementParser::new(0).parse(LineCursor::new(&lines)).parsed,
            "some really1 really2 really3 really4 really5 really6 long text"
        );
    }

    #[test]
    fn test_element_stops_at_shallower_line() {
        let lines = to_lines("  -inner\n  more\nback out");
        let result = ListElementParser::new(2).parse(LineCursor::new(&lines));
        assert_eq!(result.parsed, "inner more");
        assert_eq!(result.remaining.remaining(), &["back out"]);
    }

    #[test]
    fn test_group() {
        let lines = to_lines("-outer1\n-outer2");
        assert_eq!(
            ListGroupParser::new(0).parse(LineCursor::new(&lines)).parsed,
            "<li>outer1</li>\n<li>outer2</li>\n"
        );
    }

    #[test]
    fn test_group_leaves_deeper_items() {
        let lines = to_lines("-outer\n -inner");
        let result = ListGroupParser::new(0).parse(LineCursor::new(&lines));
        assert_eq!(result.parsed, "<li>outer</li>\n");
        assert_eq!(result.remaining.remaining(), &[" -inner"]);
    }

    #[test]
    fn test_group_escapes_item_text() {
        let lines = ["-a < b"];
        assert_eq!(ListGroupParser::new(0).parse(LineCursor::new(&lines)).parsed, "<li>a &lt; b</li>\n");
    }

    #[test]
    fn test_list_header() {
        let lines = to_lines("-outer1\n-outer2");
        assert_eq!(
            ListHeaderParser.parse(LineCursor::new(&lines)).parsed,
            "<ul>\n<li>outer1</li>\n<li>outer2</li>\n</ul>\n"
        );
    }

    #[test]
    fn test_list_header_nested() {
        let lines = to_lines("-outer1\n -inner\n-outer2");
        assert_eq!(
            ListHeaderParser.parse(LineCursor::new(&lines)).parsed,
            "<ul>\n<li>outer1</li>\n<ul>\n<li>inner</li>\n</ul>\n<li>outer2</li>\n</ul>\n"
        );
    }

    #[test]
    fn test_list_header_deep_nesting_unwinds() {
        let lines = to_lines("-a\n -b\n  -c\n-d\n\ntext");
        let result = ListHeaderParser.parse(LineCursor::new(&lines));
        assert_eq!(
            result.parsed,
            "<ul>\n<li>a</li>\n<ul>\n<li>b</li>\n<ul>\n<li>c</li>\n</ul>\n</ul>\n<li>d</li>\n</ul>\n"
        );
        assert_eq!(result.remaining.remaining(), &["", "text"]);
    }

    #[test]
    fn test_list_header_indented_start() {
        let lines = to_lines("  -a\n  -b");
        assert_eq!(
            ListHeaderParser.parse(LineCursor::new(&lines)).parsed,
            "<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n"
        );
    }

    #[test]
    fn test_list_parser_stops_at_shallower_item() {
        let lines = to_lines(" -inner\n-outer");
        let result = ListParser::new(1).parse(LineCursor::new(&lines));
        assert_eq!(result.parsed, "<li>inner</li>\n");
        assert_eq!(result.remaining.remaining(), &["-outer"]);
    }

    #[test]
    fn test_list_header_ignores_text() {
        let lines = ["not a list"];
        let cursor = LineCursor::new(&lines);
        assert_eq!(ListHeaderParser.parse(cursor), ParseResult::nothing(cursor));
    }
}
