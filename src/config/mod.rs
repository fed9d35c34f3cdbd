//! Configuration loading.
//!
//! A single TOML file with `[server]`, `[store]` and `[client]` sections.
//! Missing file or missing keys fall back to defaults.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{default_database_path, ClientConfig, Config, ServerConfig, StoreConfig};
