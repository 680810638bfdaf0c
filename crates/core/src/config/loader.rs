use crate::config::parser::ConfigParser;
use crate::config::schema::{Config, ConfigSchema, sync_dir};
use crate::error::{NotesyncError, Result};
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Source of values for required fields missing from a configuration file.
pub trait Prompter {
    /// Asks the user for a value for `field`. Sensitive values must not be echoed.
    fn prompt(&mut self, field: &str, sensitive: bool) -> io::Result<String>;

    /// Called when an answer was rejected, before asking again.
    fn rejected(&mut self, _field: &str) {}
}

/// Loads a `key: value` configuration file against a schema
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    path: PathBuf,
    /// Accepted fields
    schema: ConfigSchema,
}

impl ConfigLoader {
    /// Create a loader for `path` with the given schema
    pub fn new<P: AsRef<Path>>(path: P, schema: ConfigSchema) -> Self {
        Self { path: path.as_ref().to_path_buf(), schema }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the file, reject unknown fields, prompt for missing ones, and apply defaults
    pub fn load(&self, prompter: &mut dyn Prompter) -> Result<Config> {
        let values = ConfigParser::parse_file(&self.path)?;
        debug!(path = %self.path.display(), fields = values.len(), "read configuration");
        self.resolve(values, prompter)
    }

    /// Validate and complete already-parsed values
    pub fn resolve(&self, mut values: BTreeMap<String, String>, prompter: &mut dyn Prompter) -> Result<Config> {
        let unknown = self.schema.unknown_fields(&values);
        if !unknown.is_empty() {
            return Err(NotesyncError::UnknownFields(unknown));
        }

        for field in self.schema.missing_fields(&values) {
            let value = self.ask(&field, prompter)?;
            values.insert(field, value);
        }

        for (field, default) in self.schema.defaults() {
            values.entry(field.clone()).or_insert_with(|| default.clone());
        }

        Ok(Config::new(values, &self.schema))
    }

    /// Prompt until the answer is a well-formed value
    fn ask(&self, field: &str, prompter: &mut dyn Prompter) -> Result<String> {
        let sensitive = self.schema.is_sensitive(field);
        loop {
            let answer = prompter
                .prompt(field, sensitive)
                .map_err(|e| NotesyncError::PromptError { field: field.to_string(), reason: e.to_string() })?;

            match ConfigParser::parse_value(&answer) {
                Ok(value) => return Ok(value),
                Err(_) => {
                    warn!(field, "malformed value, asking again");
                    prompter.rejected(field);
                }
            }
        }
    }
}

/// Builder for ConfigLoader
#[derive(Debug, Default)]
pub struct ConfigLoaderBuilder {
    path: Option<PathBuf>,
    schema: Option<ConfigSchema>,
}

impl ConfigLoaderBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self { path: None, schema: None }
    }

    /// Set the configuration file path
    pub fn path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the schema
    pub fn schema(mut self, schema: ConfigSchema) -> Self {
        self.schema = Some(schema);
        self
    }

    /// Build the ConfigLoader, defaulting to the sync configuration
    pub fn build(self) -> ConfigLoader {
        ConfigLoader {
            path: self.path.unwrap_or_else(ConfigLoader::default_path),
            schema: self.schema.unwrap_or_else(ConfigSchema::sync),
        }
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        ConfigLoaderBuilder::new().build()
    }
}

impl ConfigLoader {
    /// Default configuration path (~/.notes_sync/config.txt)
    pub fn default_path() -> PathBuf {
        sync_dir().join("config.txt")
    }
}
