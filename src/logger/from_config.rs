//! Logger configuration from clog config files.

use super::{Logger, LoggerBuilder};
use crate::config::Config;

impl Logger {
    /// Builds a logger from the sections of `config`.
    ///
    /// # Errors
    /// [`crate::Error::InvalidLevel`] when `general.level` names no level.
    pub fn from_config(config: &Config) -> Result<Self, crate::Error> {
        let mut builder = LoggerBuilder::new()
            .level(config.parse_level()?)
            .append_newline(config.general.append_newline)
            .max_message_len(config.general.max_message_len)
            .colors(config.terminal.colors);

        if let Some(path) = config.file_path() {
            builder = builder.file(path);
        }

        Ok(builder.build())
    }

    /// Same as [`Logger::from_config`] after applying `[apps.<app_name>]` overrides.
    ///
    /// # Errors
    /// [`crate::Error::InvalidLevel`] when the effective level names no level.
    pub fn from_config_for_app(config: &Config, app_name: &str) -> Result<Self, crate::Error> {
        Self::from_config(&config.for_app(app_name))
    }
}
