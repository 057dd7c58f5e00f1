//! Configuration schema types for `pixhost.toml`
//!
//! Defines the structure and validation rules for the shell configuration.
//! Every section and field is optional; a missing file means all defaults.

use crate::buffer::MAX_DIMENSION;
use crate::cmdline::DEFAULT_MAX_ARGS;
use crate::scale::ScaleMode;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Off-screen buffer and pacing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenConfig {
    /// Source buffer width in pixels
    #[serde(default = "default_width")]
    pub width: u32,
    /// Source buffer height in pixels
    #[serde(default = "default_height")]
    pub height: u32,
    /// Target frames per second
    #[serde(default = "default_fps")]
    pub fps: u32,
    /// Window title, for hosts that have one
    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            fps: default_fps(),
            title: default_title(),
        }
    }
}

fn default_width() -> u32 {
    320
}

fn default_height() -> u32 {
    240
}

fn default_fps() -> u32 {
    30
}

fn default_title() -> String {
    "pixhost".to_string()
}

/// How frames are presented
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresentConfig {
    /// Identity copy or EPX upscaling
    #[serde(default)]
    pub mode: ScaleMode,
    /// Run the EPX filter on the rayon thread pool
    #[serde(default = "default_true")]
    pub parallel: bool,
    /// Zero the padding byte of the source before presenting
    #[serde(default)]
    pub opaque: bool,
}

impl Default for PresentConfig {
    fn default() -> Self {
        Self { mode: ScaleMode::default(), parallel: true, opaque: false }
    }
}

fn default_true() -> bool {
    true
}

/// Command-line handling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArgsConfig {
    /// Maximum number of arguments kept from the command line
    #[serde(default = "default_max_args")]
    pub max: usize,
}

impl Default for ArgsConfig {
    fn default() -> Self {
        Self { max: default_max_args() }
    }
}

fn default_max_args() -> usize {
    DEFAULT_MAX_ARGS
}

/// Root of `pixhost.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShellConfig {
    #[serde(default)]
    pub screen: ScreenConfig,
    #[serde(default)]
    pub present: PresentConfig,
    #[serde(default)]
    pub args: ArgsConfig,
}

/// Configuration validation error
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "screen.width")
    pub field: String,
    /// Error message
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "pixhost.toml: '{}' {}", self.field, self.message)
    }
}

impl ShellConfig {
    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        for (field, value) in [("screen.width", self.screen.width), ("screen.height", self.screen.height)] {
            if value == 0 {
                errors.push(ConfigValidationError {
                    field: field.to_string(),
                    message: "must be a positive integer".to_string(),
                });
            } else if value > MAX_DIMENSION {
                errors.push(ConfigValidationError {
                    field: field.to_string(),
                    message: format!("must be at most {}", MAX_DIMENSION),
                });
            }
        }

        if self.screen.fps == 0 {
            errors.push(ConfigValidationError {
                field: "screen.fps".to_string(),
                message: "must be a positive integer".to_string(),
            });
        }

        if self.args.max == 0 {
            errors.push(ConfigValidationError {
                field: "args.max".to_string(),
                message: "must be a positive integer".to_string(),
            });
        }

        errors
    }

    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Time between frame ticks.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.screen.fps.max(1)
    }
}
