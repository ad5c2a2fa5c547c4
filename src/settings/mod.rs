//! Session settings
//!
//! Settings are read from TOML, for example:
//!
//! ```toml
//! autosave = true
//! line_ending = "lf"
//! ```

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::generator::ini::LineEnding;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid settings: {0}")]
    Toml(#[from] toml::de::Error),
}

fn default_autosave() -> bool {
    false
}

/// Options applied when a session is opened
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSettings {
    /// Enable autosave right after the initial load
    #[serde(default = "default_autosave")]
    pub autosave: bool,
    /// Line terminator used when saving
    #[serde(default)]
    pub line_ending: LineEnding,
}

impl Default for SessionSettings {
    fn default() -> Self {
        SessionSettings {
            autosave: default_autosave(),
            line_ending: LineEnding::default(),
        }
    }
}

impl SessionSettings {
    /// Create settings with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse settings from TOML content
    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(content)?)
    }

    /// Read settings from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }
}
