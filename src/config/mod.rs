//! Configuration module for the host shell
//!
//! Provides types, discovery and loading for `pixhost.toml`.

pub mod loader;
pub mod schema;

pub use loader::{apply_overrides, find_config, load_config, CliOverrides, ConfigError};
pub use schema::*;
