//! Optional notification hook fired for every accepted record.
//!
//! # Reentrancy
//!
//! Handlers run synchronously on the logging thread before the log call returns.
//! A handler must not log into the logger that invoked it: a [`Logger`](crate::Logger)
//! borrow makes that impossible for an owned instance, but a handler that logs
//! through the process-wide default while being called from it will block on
//! the default's lock forever. Embedders who need that must add their own guard.

use crate::level::Level;

/// Receives `(level, text, byte length of text)`.
pub trait Callback: Send {
    fn call(&mut self, level: Level, text: &str, len: usize);
}

impl<F> Callback for F
where
    F: FnMut(Level, &str, usize) + Send,
{
    fn call(&mut self, level: Level, text: &str, len: usize) {
        self(level, text, len);
    }
}

/// Which rendering a callback is handed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PayloadMode {
    /// The interpolated message body only, before any rendering happens.
    #[default]
    Raw,
    /// The full plain line, label, timestamp and terminator included.
    Formatted,
}

/// A registered handler tagged with the payload it expects.
pub enum Subscriber {
    Raw(Box<dyn Callback>),
    Formatted(Box<dyn Callback>),
}

impl Subscriber {
    #[must_use]
    pub fn new(handler: impl Callback + 'static, mode: PayloadMode) -> Self {
        match mode {
            PayloadMode::Raw => Self::Raw(Box::new(handler)),
            PayloadMode::Formatted => Self::Formatted(Box::new(handler)),
        }
    }

    #[must_use]
    pub const fn mode(&self) -> PayloadMode {
        match self {
            Self::Raw(_) => PayloadMode::Raw,
            Self::Formatted(_) => PayloadMode::Formatted,
        }
    }

    /// Fires only if this subscriber wants the raw body.
    pub fn notify_raw(&mut self, level: Level, text: &str) {
        if let Self::Raw(handler) = self {
            handler.call(level, text, text.len());
        }
    }

    /// Fires only if this subscriber wants the plain rendering.
    pub fn notify_formatted(&mut self, level: Level, plain: &str) {
        if let Self::Formatted(handler) = self {
            handler.call(level, plain, plain.len());
        }
    }
}

impl std::fmt::Debug for Subscriber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Subscriber").field(&self.mode()).finish()
    }
}
