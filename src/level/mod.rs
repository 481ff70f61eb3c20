//! Severity levels and the threshold that gates which messages get rendered at all.

use std::fmt;
use std::str::FromStr;

/// Returned wherever an ordinal falls outside the four known severities.
pub const UNKNOWN_LABEL: &str = "UNKNOWN";

/// Derives `Ord` so the policy can compare a message's level against the configured minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// Development-time diagnostics; the default threshold lets these through.
    #[default]
    Debug = 0,
    /// Normal operational milestones.
    Info = 1,
    /// Non-fatal anomalies that may need attention.
    Warn = 2,
    /// Failures. The only level routed to stderr.
    Error = 3,
}

impl Level {
    /// Lowercase because config files and CLI args use lowercase level strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// Fixed five-column label used inside the `[...]` tag of every rendered line.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO ",
            Self::Warn => "WARN ",
            Self::Error => "ERROR",
        }
    }

    #[must_use]
    pub const fn ordinal(self) -> i32 {
        self as i32
    }

    /// C callers and raw thresholds speak in integers; anything outside 0..=3 has no level.
    #[must_use]
    pub const fn from_ordinal(ordinal: i32) -> Option<Self> {
        match ordinal {
            0 => Some(Self::Debug),
            1 => Some(Self::Info),
            2 => Some(Self::Warn),
            3 => Some(Self::Error),
            _ => None,
        }
    }

    /// Convenience for iteration — used by help output and tests.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Debug, Self::Info, Self::Warn, Self::Error]
    }
}

/// Diagnostic lookup by ordinal; unrecognized values get [`UNKNOWN_LABEL`] instead of failing.
#[must_use]
pub const fn label_for(ordinal: i32) -> &'static str {
    match Level::from_ordinal(ordinal) {
        Some(level) => level.label(),
        None => UNKNOWN_LABEL,
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown level" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" | "err" => Ok(Self::Error),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

/// Minimum severity a record needs to proceed.
///
/// Stored as a bare ordinal rather than a [`Level`]: an out-of-range threshold is
/// accepted as-is, so a negative value lets everything through and anything above
/// `3` filters everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LevelPolicy {
    threshold: i32,
}

impl LevelPolicy {
    #[must_use]
    pub const fn new(min: Level) -> Self {
        Self {
            threshold: min.ordinal(),
        }
    }

    pub const fn set(&mut self, min: Level) {
        self.threshold = min.ordinal();
    }

    pub const fn set_ordinal(&mut self, threshold: i32) {
        self.threshold = threshold;
    }

    #[must_use]
    pub const fn threshold(self) -> i32 {
        self.threshold
    }

    #[must_use]
    pub const fn allows(self, level: Level) -> bool {
        level.ordinal() >= self.threshold
    }
}
