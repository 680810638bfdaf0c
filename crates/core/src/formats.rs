//! Source format detection and conversion to HTML.
//!
//! Notes files go through the notes parser and the XHTML envelope, Markdown
//! is rendered with pulldown-cmark, and HTML passes through untouched.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use crate::document::{notes_to_fragment, notes_to_html};
use crate::error::{NotesyncError, Result};
use crate::fetch::fetch_file;
use crate::lines::to_lines;

/// Format of a source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Plain-text notes (`.notes`, `.txt`).
    Notes,
    /// Markdown (`.md`, `.markdown`).
    Markdown,
    /// HTML uploaded as-is (`.html`, `.htm`).
    Html,
}

impl SourceFormat {
    /// Detects the format from a file extension, with or without the leading dot.
    pub fn from_extension(extension: &str) -> Result<Self> {
        let extension = extension.trim_start_matches('.');
        match extension.to_ascii_lowercase().as_str() {
            "notes" | "txt" => Ok(Self::Notes),
            "md" | "markdown" => Ok(Self::Markdown),
            "html" | "htm" => Ok(Self::Html),
            _ => Err(NotesyncError::UnsupportedFormat(format!(".{}", extension))),
        }
    }

    /// Detects the format from the extension of `path`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let extension = path.as_ref().extension().and_then(|ext| ext.to_str()).unwrap_or_default();
        Self::from_extension(extension)
    }
}

impl FromStr for SourceFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "notes" | "txt" => Ok(Self::Notes),
            "markdown" | "md" => Ok(Self::Markdown),
            "html" | "htm" => Ok(Self::Html),
            _ => Err(format!("Invalid format: {}. Valid options: notes, markdown, html", s)),
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Notes => write!(f, "notes"),
            Self::Markdown => write!(f, "markdown"),
            Self::Html => write!(f, "html"),
        }
    }
}

/// Options for [`convert`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ConvertOptions {
    /// Emit notes output without the XHTML envelope.
    pub fragment: bool,
}

/// Converts `text` in the given format to the HTML payload for a page.
pub fn convert(text: &str, format: SourceFormat, options: &ConvertOptions) -> Result<String> {
    debug!(%format, bytes = text.len(), "converting source");
    match format {
        SourceFormat::Notes if options.fragment => Ok(notes_to_fragment(text)),
        SourceFormat::Notes => Ok(notes_to_html(text)),
        SourceFormat::Markdown => markdown_to_html(text),
        SourceFormat::Html => Ok(to_lines(text).join("\n")),
    }
}

/// Reads `path` and converts it according to its extension.
pub fn convert_file<P: AsRef<Path>>(path: P, options: &ConvertOptions) -> Result<String> {
    let path = path.as_ref();
    let format = SourceFormat::from_path(path)?;
    let text = fetch_file(path)?;
    convert(&text, format, options)
}

/// Renders CommonMark to HTML using pulldown-cmark
#[cfg(feature = "markdown")]
fn markdown_to_html(text: &str) -> Result<String> {
    let parser = pulldown_cmark::Parser::new(text);
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    Ok(html)
}

#[cfg(not(feature = "markdown"))]
fn markdown_to_html(_text: &str) -> Result<String> {
    Err(NotesyncError::UnsupportedFormat(
        "markdown (built without the `markdown` feature)".to_string(),
    ))
}
