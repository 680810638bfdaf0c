//! Whole-document conversion for the notes format.
//!
//! [`NotesParser`] produces an HTML fragment; this module splits raw text
//! into lines, runs the parser, and optionally wraps the result in the fixed
//! XHTML root element that page uploads expect.
//!
//! # Example
//!
//! ```rust
//! use notesync_core::document::{notes_to_fragment, notes_to_html};
//!
//! assert_eq!(notes_to_fragment("TODO:"), "<h3>Todo</h3>\n");
//! assert!(notes_to_html("-item").ends_with("</ul>\n</html>\n"));
//! ```

use tracing::debug;

use crate::lines::to_lines;
use crate::parsers::NotesParser;

/// Opening tag of the XHTML envelope.
pub const XHTML_OPEN: &str = "<html xmlns=\"http://www.w3.org/1999/xhtml\" xml:lang=\"en\">";

/// Closing tag of the XHTML envelope.
pub const XHTML_CLOSE: &str = "</html>\n";

/// Wraps an HTML fragment in the XHTML root element.
pub fn wrap_document(fragment: &str) -> String {
    let mut html = String::with_capacity(XHTML_OPEN.len() + fragment.len() + XHTML_CLOSE.len());
    html.push_str(XHTML_OPEN);
    html.push_str(fragment);
    html.push_str(XHTML_CLOSE);
    html
}

/// Converts notes text to an HTML fragment.
pub fn notes_to_fragment(text: &str) -> String {
    let lines = to_lines(text);
    let fragment = NotesParser.parse_lines(&lines);
    debug!(lines = lines.len(), bytes = fragment.len(), "converted notes");
    fragment
}

/// Converts notes text to a complete XHTML document.
pub fn notes_to_html(text: &str) -> String {
    wrap_document(&notes_to_fragment(text))
}
