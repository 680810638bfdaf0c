//! Configuration schemas and the values loaded against them.
//!
//! A [`ConfigSchema`] names the fields a configuration file may contain:
//! required fields (prompted for when missing), sensitive fields (prompted
//! for without echo), and optional fields with defaults. [`SyncConfig`] is
//! the typed view of the page-sync configuration.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::PathBuf;

use crate::error::{NotesyncError, Result};

pub const EMAIL: &str = "EMAIL";
pub const PASSWORD: &str = "PASSWORD";
pub const SITE: &str = "SITE";
pub const MEETING_MINUTES: &str = "MEETING_MINUTES";
pub const APPLICATION_NAME: &str = "APPLICATION_NAME";
pub const TOKEN_FILE: &str = "TOKEN_FILE";

/// Directory holding the sync configuration and auth token, relative to home.
pub const SYNC_DIR: &str = ".notes_sync";

/// Fields a configuration may contain.
#[derive(Debug, Clone, Default)]
pub struct ConfigSchema {
    required: BTreeSet<String>,
    sensitive: BTreeSet<String>,
    optional: BTreeMap<String, String>,
}

impl ConfigSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field that must be present, prompting for it when missing.
    pub fn required(mut self, field: &str) -> Self {
        self.required.insert(field.to_string());
        self
    }

    /// Marks a field whose value must not be echoed when prompted for.
    pub fn sensitive(mut self, field: &str) -> Self {
        self.sensitive.insert(field.to_string());
        self
    }

    /// Adds an optional field with its default value.
    pub fn optional(mut self, field: &str, default: &str) -> Self {
        self.optional.insert(field.to_string(), default.to_string());
        self
    }

    /// Schema of the page-sync configuration file.
    pub fn sync() -> Self {
        let token_file = sync_dir().join("auth_token.txt");
        Self::new()
            .required(EMAIL)
            .required(PASSWORD)
            .required(SITE)
            .required(MEETING_MINUTES)
            .sensitive(PASSWORD)
            .optional(APPLICATION_NAME, "notes-sync")
            .optional(TOKEN_FILE, &token_file.to_string_lossy())
    }

    pub fn is_sensitive(&self, field: &str) -> bool {
        self.sensitive.contains(field)
    }

    /// Keys in `values` that are neither required nor optional, sorted.
    pub fn unknown_fields(&self, values: &BTreeMap<String, String>) -> Vec<String> {
        values
            .keys()
            .filter(|key| !self.required.contains(*key) && !self.optional.contains_key(*key))
            .cloned()
            .collect()
    }

    /// Required fields absent from `values`, sorted.
    pub fn missing_fields(&self, values: &BTreeMap<String, String>) -> Vec<String> {
        self.required.iter().filter(|field| !values.contains_key(*field)).cloned().collect()
    }

    /// Optional fields and their defaults.
    pub fn defaults(&self) -> &BTreeMap<String, String> {
        &self.optional
    }
}

/// Values loaded against a schema.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Config {
    values: BTreeMap<String, String>,
    sensitive: BTreeSet<String>,
}

impl Config {
    pub fn new(values: BTreeMap<String, String>, schema: &ConfigSchema) -> Self {
        Self { values, sensitive: schema.sensitive.clone() }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// The value of `key`, or [`NotesyncError::MissingField`].
    pub fn require(&self, key: &str) -> Result<&str> {
        self.get(key).ok_or_else(|| NotesyncError::MissingField(key.to_string()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (key, value) in &self.values {
            if self.sensitive.contains(key) {
                map.entry(key, &"<redacted>");
            } else {
                map.entry(key, value);
            }
        }
        map.finish()
    }
}

/// Typed page-sync configuration.
#[derive(Clone, PartialEq, Eq)]
pub struct SyncConfig {
    pub email: String,
    pub password: String,
    pub site: String,
    /// Site-relative path of the page that meeting minutes are created under.
    pub meeting_minutes: String,
    pub application_name: String,
    pub token_file: PathBuf,
}

impl SyncConfig {
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            email: config.require(EMAIL)?.to_string(),
            password: config.require(PASSWORD)?.to_string(),
            site: config.require(SITE)?.to_string(),
            meeting_minutes: config.require(MEETING_MINUTES)?.to_string(),
            application_name: config.require(APPLICATION_NAME)?.to_string(),
            token_file: expand_home(config.require(TOKEN_FILE)?),
        })
    }
}

impl fmt::Debug for SyncConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncConfig")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("site", &self.site)
            .field("meeting_minutes", &self.meeting_minutes)
            .field("application_name", &self.application_name)
            .field("token_file", &self.token_file)
            .finish()
    }
}

/// `~/.notes_sync`, or a relative `.notes_sync` when there is no home directory.
pub fn sync_dir() -> PathBuf {
    dirs::home_dir().map(|home| home.join(SYNC_DIR)).unwrap_or_else(|| PathBuf::from(SYNC_DIR))
}

/// Replaces a leading `~` with the home directory.
pub fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix('~'), dirs::home_dir()) {
        (Some(rest), Some(home)) if rest.is_empty() => home,
        (Some(rest), Some(home)) if rest.starts_with('/') => home.join(rest.trim_start_matches('/')),
        _ => PathBuf::from(path),
    }
}
