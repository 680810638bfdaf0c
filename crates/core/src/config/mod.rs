pub mod loader;
pub mod parser;
pub mod schema;

pub use loader::{ConfigLoader, ConfigLoaderBuilder, Prompter};
pub use parser::ConfigParser;
pub use schema::{Config, ConfigSchema, SyncConfig};
