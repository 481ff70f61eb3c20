//! SGR escape sequences for the styled console rendering.
//!
//! The palette is the classic bold 8-color set rather than true color, so the
//! output renders the same on every terminal that understands ANSI at all.

use crate::level::Level;

/// Neutral gray used for the `[`, `]` brackets around the label.
pub const FRAME: &str = "\x1b[0;37m";

/// Terminates any active SGR styling so the message text uses the terminal default.
pub const RESET: &str = "\x1b[0m";

pub const BOLD_BLUE: &str = "\x1b[1;34m";
pub const BOLD_GREEN: &str = "\x1b[1;32m";
pub const BOLD_YELLOW: &str = "\x1b[1;33m";
pub const BOLD_RED: &str = "\x1b[1;31m";

/// Per-level label colors. Values are raw escape sequences, so callers can use any SGR code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    debug: String,
    info: String,
    warn: String,
    error: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            debug: BOLD_BLUE.to_string(),
            info: BOLD_GREEN.to_string(),
            warn: BOLD_YELLOW.to_string(),
            error: BOLD_RED.to_string(),
        }
    }
}

impl Palette {
    #[must_use]
    pub fn get(&self, level: Level) -> &str {
        match level {
            Level::Debug => &self.debug,
            Level::Info => &self.info,
            Level::Warn => &self.warn,
            Level::Error => &self.error,
        }
    }

    /// Default level colors may clash with the user's terminal theme.
    pub fn set(&mut self, level: Level, code: impl Into<String>) {
        let slot = match level {
            Level::Debug => &mut self.debug,
            Level::Info => &mut self.info,
            Level::Warn => &mut self.warn,
            Level::Error => &mut self.error,
        };
        *slot = code.into();
    }
}
