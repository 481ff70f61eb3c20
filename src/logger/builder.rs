//! Stepwise construction for loggers that need more than the defaults.

use super::Logger;
use crate::callback::{Callback, PayloadMode, Subscriber};
use crate::fmt::{DEFAULT_MAX_MESSAGE_LEN, Palette};
use crate::level::{Level, LevelPolicy};
use crate::output::{FileOutput, Stream, TerminalOutput};
use std::path::PathBuf;

pub struct LoggerBuilder {
    min_level: Level,
    append_newline: bool,
    colors: bool,
    max_message_len: usize,
    palette: Palette,
    subscriber: Option<Subscriber>,
    streams: Option<(Stream, Stream)>,
    file: Option<PathBuf>,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    /// Debug threshold so nothing is hidden until the embedder asks for it.
    #[must_use]
    pub fn new() -> Self {
        Self {
            min_level: Level::Debug,
            append_newline: true,
            colors: true,
            max_message_len: DEFAULT_MAX_MESSAGE_LEN,
            palette: Palette::default(),
            subscriber: None,
            streams: None,
            file: None,
        }
    }

    #[must_use]
    pub const fn level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }

    /// Callers that emit their own terminators turn this off.
    #[must_use]
    pub const fn append_newline(mut self, enabled: bool) -> Self {
        self.append_newline = enabled;
        self
    }

    /// Piped output and color-incapable terminals break on ANSI escape codes.
    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors = enabled;
        self
    }

    /// Caps the interpolated message body in bytes; longer bodies are truncated.
    #[must_use]
    pub const fn max_message_len(mut self, len: usize) -> Self {
        self.max_message_len = len;
        self
    }

    /// Raw SGR sequence for one level's label, e.g. `"\x1b[1;35m"`.
    #[must_use]
    pub fn level_color(mut self, level: Level, code: impl Into<String>) -> Self {
        self.palette.set(level, code);
        self
    }

    #[must_use]
    pub fn callback(mut self, handler: impl Callback + 'static, mode: PayloadMode) -> Self {
        self.subscriber = Some(Subscriber::new(handler, mode));
        self
    }

    /// Replaces stdout and stderr, mainly so tests can capture both.
    #[must_use]
    pub fn console_streams(mut self, stdout: Stream, stderr: Stream) -> Self {
        self.streams = Some((stdout, stderr));
        self
    }

    /// Opened at build time; an open failure is logged through the new logger.
    #[must_use]
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    #[must_use]
    pub fn build(self) -> Logger {
        let terminal = match self.streams {
            Some((stdout, stderr)) => TerminalOutput::with_streams(stdout, stderr),
            None => TerminalOutput::new(),
        };

        let mut logger = Logger {
            policy: LevelPolicy::new(self.min_level),
            append_newline: self.append_newline,
            max_message_len: self.max_message_len,
            palette: self.palette,
            subscriber: self.subscriber,
            terminal: terminal.colors(self.colors),
            file: FileOutput::new(),
        };

        if let Some(path) = self.file {
            logger.set_output_file(path);
        }

        logger
    }
}
