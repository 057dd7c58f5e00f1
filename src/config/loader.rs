//! Configuration loading and discovery for `pixhost.toml`
//!
//! Provides functions to find, load, and override configuration.

use super::schema::ShellConfig;
use crate::scale::ScaleMode;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the configuration file looked up on disk.
pub const CONFIG_FILE_NAME: &str = "pixhost.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse pixhost.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Override source buffer width
    pub width: Option<u32>,
    /// Override source buffer height
    pub height: Option<u32>,
    /// Override frames per second
    pub fps: Option<u32>,
    /// Override present mode
    pub mode: Option<ScaleMode>,
    /// Override parallel filtering
    pub parallel: Option<bool>,
    /// Override padding clearing
    pub opaque: Option<bool>,
    /// Override maximum argument count
    pub max_args: Option<usize>,
}

/// Find pixhost.toml by walking up from the current working directory.
///
/// Search order:
/// 1. Walk up from current directory looking for pixhost.toml
/// 2. Check XDG_CONFIG_HOME/pixhost/pixhost.toml (or ~/.config/pixhost/pixhost.toml)
pub fn find_config() -> Option<PathBuf> {
    if let Ok(cwd) = env::current_dir() {
        if let Some(path) = find_config_from(cwd) {
            return Some(path);
        }
    }

    find_xdg_config()
}

/// Find pixhost.toml in the XDG config directory.
pub fn find_xdg_config() -> Option<PathBuf> {
    let xdg_config = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok()?;

    let config_path = xdg_config.join("pixhost").join(CONFIG_FILE_NAME);
    if config_path.exists() {
        Some(config_path)
    } else {
        None
    }
}

/// Find pixhost.toml by walking up from a specific directory.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration from a pixhost.toml file.
///
/// If a path is provided, loads from that file. Otherwise, uses
/// [`find_config`] to locate one, and falls back to defaults if none exists.
pub fn load_config(path: Option<&Path>) -> Result<ShellConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => load_config_file(&p),
        None => Ok(ShellConfig::default()),
    }
}

/// Load configuration from a specific file path.
fn load_config_file(path: &Path) -> Result<ShellConfig, ConfigError> {
    tracing::debug!(path = %path.display(), "loading config");
    let contents = fs::read_to_string(path)?;
    let config: ShellConfig = toml::from_str(&contents)?;
    check(config)
}

fn check(config: ShellConfig) -> Result<ShellConfig, ConfigError> {
    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }
    Ok(config)
}

/// Merge CLI overrides into a configuration and validate the result.
///
/// CLI arguments take precedence over config file values.
pub fn apply_overrides(
    mut config: ShellConfig,
    overrides: &CliOverrides,
) -> Result<ShellConfig, ConfigError> {
    if let Some(width) = overrides.width {
        config.screen.width = width;
    }
    if let Some(height) = overrides.height {
        config.screen.height = height;
    }
    if let Some(fps) = overrides.fps {
        config.screen.fps = fps;
    }
    if let Some(mode) = overrides.mode {
        config.present.mode = mode;
    }
    if let Some(parallel) = overrides.parallel {
        config.present.parallel = parallel;
    }
    if let Some(opaque) = overrides.opaque {
        config.present.opaque = opaque;
    }
    if let Some(max_args) = overrides.max_args {
        config.args.max = max_args;
    }

    check(config)
}
