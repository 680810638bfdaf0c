use crate::error::{NotesyncError, Result};
use regex::Regex;
use std::collections::BTreeMap;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;

/// `key: value`, either side optionally double-quoted. Quoted values may contain whitespace.
static LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*"?([^"\s:]+)"?\s*:\s*(?:"([^"]+)"|([^"\s]+))\s*$"#).expect("config line pattern")
});

/// A lone value as typed at a prompt.
static VALUE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^\s*(?:"([^"]+)"|([^"\s]+))\s*$"#).expect("config value pattern"));

/// Parser for `key: value` configuration files
#[derive(Debug)]
pub struct ConfigParser;

impl ConfigParser {
    /// Parse a configuration file
    pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<BTreeMap<String, String>> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(NotesyncError::FileNotFound(path.to_path_buf()));
        }

        let file = std::fs::File::open(path)?;
        Self::parse_reader(BufReader::new(file))
    }

    /// Parse configuration from a reader
    pub fn parse_reader<R: BufRead>(reader: R) -> Result<BTreeMap<String, String>> {
        let mut values = BTreeMap::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            Self::parse_line(&line, index + 1, &mut values)?;
        }

        Ok(values)
    }

    /// Parse configuration from a string
    pub fn parse_string(content: &str) -> Result<BTreeMap<String, String>> {
        let mut values = BTreeMap::new();

        for (index, line) in content.lines().enumerate() {
            Self::parse_line(line, index + 1, &mut values)?;
        }

        Ok(values)
    }

    /// Parse a single value, as typed in answer to a prompt
    pub fn parse_value(input: &str) -> Result<String> {
        VALUE_RE
            .captures(input)
            .and_then(|caps| caps.get(1).or_else(|| caps.get(2)))
            .map(|value| value.as_str().to_string())
            .ok_or_else(|| NotesyncError::MalformedValue(input.to_string()))
    }

    fn parse_line(line: &str, line_number: usize, values: &mut BTreeMap<String, String>) -> Result<()> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(());
        }

        let caps = LINE_RE
            .captures(line)
            .ok_or_else(|| NotesyncError::MalformedLine { line_number, line: line.to_string() })?;

        let key = caps[1].to_string();
        let value = caps.get(2).or_else(|| caps.get(3)).map(|m| m.as_str().to_string()).unwrap_or_default();
        values.insert(key, value);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_string_basic() {
        let content = r#"
# Example config
EMAIL: someone@example.com
SITE:   team-site
"MEETING_MINUTES": "/meetings/minutes"
"#;

        let values = ConfigParser::parse_string(content).unwrap();

        assert_eq!(values.len(), 3);
        assert_eq!(values["EMAIL"], "someone@example.com");
        assert_eq!(values["SITE"], "team-site");
        assert_eq!(values["MEETING_MINUTES"], "/meetings/minutes");
    }

    #[test]
    fn test_quoted_value_keeps_whitespace() {
        let values = ConfigParser::parse_string("APPLICATION_NAME: \"weekly notes\"").unwrap();
        assert_eq!(values["APPLICATION_NAME"], "weekly notes");
    }

    #[test]
    fn test_repeated_key_keeps_last() {
        let values = ConfigParser::parse_string("SITE: a\nSITE: b\n").unwrap();
        assert_eq!(values["SITE"], "b");
    }

    #[test]
    fn test_parse_reader() {
        let cursor = Cursor::new("EMAIL: a@b.c\nSITE: s\n");
        let values = ConfigParser::parse_reader(cursor).unwrap();

        assert_eq!(values.len(), 2);
    }

    #[test]
    fn test_parse_malformed_line() {
        let content = "EMAIL: a@b.c\nno colon here\n";

        let err = ConfigParser::parse_string(content).unwrap_err();
        assert!(matches!(err, NotesyncError::MalformedLine { line_number: 2, .. }));
    }

    #[test]
    fn test_unquoted_value_with_spaces_is_malformed() {
        assert!(ConfigParser::parse_string("SITE: my site").is_err());
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(ConfigParser::parse_value("  secret \n").unwrap(), "secret");
        assert_eq!(ConfigParser::parse_value("\"two words\"").unwrap(), "two words");
        assert!(ConfigParser::parse_value("").is_err());
        assert!(ConfigParser::parse_value("two words").is_err());
    }

    #[test]
    fn test_parse_file_missing() {
        let err = ConfigParser::parse_file("/nonexistent/notesync/config.txt").unwrap_err();
        assert!(matches!(err, NotesyncError::FileNotFound(_)));
    }
}
