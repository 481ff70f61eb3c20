//! Configuration struct definitions.

use serde::Deserialize;

use crate::fmt::DEFAULT_MAX_MESSAGE_LEN;

/// General configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Minimum log level.
    pub level: String,
    /// Append a line terminator to every record.
    pub append_newline: bool,
    /// Byte cap for the interpolated message body.
    pub max_message_len: usize,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
            append_newline: true,
            max_message_len: DEFAULT_MAX_MESSAGE_LEN,
        }
    }
}

/// Terminal output configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Enable ANSI styling.
    pub colors: bool,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self { colors: true }
    }
}

/// File output configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Log file path; `~` is expanded. Absent means no file.
    pub path: Option<String>,
}

/// Per-app overrides. Every field is optional so partial overrides work.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub level: Option<String>,
    pub append_newline: Option<bool>,
    pub colors: Option<bool>,
    pub file: Option<String>,
}
