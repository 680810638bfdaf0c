//! Reading source documents from files, stdin, and URLs.
//!
//! Notes are usually local files, but a page can also be pulled from a
//! URL (with the `fetch` feature) or piped in on standard input.

use std::fs;
use std::path::Path;
#[cfg(feature = "fetch")]
use std::time::Duration;

#[cfg(feature = "fetch")]
use reqwest::Client;
use url::Url;

use crate::{NotesyncError, Result};

/// HTTP client configuration for fetching remote notes.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// Custom User-Agent string.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self { timeout: 30, user_agent: format!("notesync/{}", env!("CARGO_PKG_VERSION")) }
    }
}

/// True when `input` names an http(s) URL rather than a local path.
pub fn is_remote(input: &str) -> bool {
    Url::parse(input).is_ok_and(|url| matches!(url.scheme(), "http" | "https"))
}

/// Fetches a document body from a URL.
#[cfg(feature = "fetch")]
pub async fn fetch_url(url: &str, config: &FetchConfig) -> Result<String> {
    let parsed_url = Url::parse(url).map_err(|e| NotesyncError::InvalidUrl(e.to_string()))?;

    if !matches!(parsed_url.scheme(), "http" | "https") {
        return Err(NotesyncError::InvalidUrl(format!(
            "unsupported scheme {}: expected http or https",
            parsed_url.scheme()
        )));
    }

    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()
        .map_err(NotesyncError::HttpError)?;

    let response = client
        .get(parsed_url)
        .header("User-Agent", &config.user_agent)
        .header("Accept", "text/plain,text/markdown,text/html;q=0.9,*/*;q=0.8")
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                NotesyncError::Timeout { timeout: config.timeout }
            } else {
                NotesyncError::HttpError(e)
            }
        })?
        .error_for_status()?;

    let content = response.text().await?;

    Ok(content)
}

/// Reads a document from a local file.
pub fn fetch_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();

    if !path.exists() {
        Err(NotesyncError::FileNotFound(path.to_path_buf()))
    } else {
        fs::read_to_string(path).map_err(NotesyncError::from)
    }
}

/// Reads a document from standard input until EOF.
pub fn fetch_stdin() -> Result<String> {
    use std::io::{self, Read};

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(NotesyncError::from)?;

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_config_default() {
        let config = FetchConfig::default();
        assert_eq!(config.timeout, 30);
        assert!(config.user_agent.starts_with("notesync/"));
    }

    #[cfg(feature = "fetch")]
    #[test]
    fn test_fetch_url_invalid() {
        let config = FetchConfig::default();
        let result = std::thread::spawn(move || {
            tokio::runtime::Runtime::new()
                .unwrap()
                .block_on(fetch_url("not-a-url", &config))
        })
        .join()
        .unwrap();

        assert!(matches!(result, Err(NotesyncError::InvalidUrl(_))));
    }

    #[cfg(feature = "fetch")]
    #[test]
    fn test_fetch_url_rejects_other_schemes() {
        let config = FetchConfig::default();
        let result = tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(fetch_url("file:///etc/hosts", &config));

        assert!(matches!(result, Err(NotesyncError::InvalidUrl(_))));
    }

    #[test]
    fn test_fetch_file_not_found() {
        let result = fetch_file("/nonexistent/path/minutes.notes");
        assert!(matches!(result, Err(NotesyncError::FileNotFound(_))));
    }

    #[test]
    fn test_is_remote() {
        assert!(is_remote("https://example.com/minutes.notes"));
        assert!(is_remote("http://example.com/a.md"));
        assert!(!is_remote("minutes.notes"));
        assert!(!is_remote("/tmp/minutes.notes"));
        assert!(!is_remote("-"));
    }
}
