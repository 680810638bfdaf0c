pub mod config;
pub mod cursor;
pub mod document;
pub mod error;
pub mod fetch;
pub mod formats;
pub mod lines;
pub mod minutes;
pub mod parsers;

pub use config::{Config, ConfigLoader, ConfigLoaderBuilder, ConfigParser, ConfigSchema, Prompter, SyncConfig};
pub use cursor::{LineCursor, ParseResult};
pub use document::{notes_to_fragment, notes_to_html, wrap_document};
pub use error::{NotesyncError, Result};
#[cfg(feature = "fetch")]
pub use fetch::fetch_url;
pub use fetch::{FetchConfig, fetch_file, fetch_stdin, is_remote};
pub use formats::{ConvertOptions, SourceFormat, convert, convert_file};
pub use lines::to_lines;
pub use minutes::{MinutesPage, parse_yes_no};
pub use parsers::{
    BreakParser, FirstOf, HeaderParser, ListElementParser, ListGroupParser, ListHeaderParser, ListParser, NotesParser,
    Parser,
};
