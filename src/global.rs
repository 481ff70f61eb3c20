//! The process-wide default logger behind the crate macros and the C ABI.
//!
//! Created with [`Logger::new`] defaults on first use. Statics are never dropped,
//! so call [`shutdown`] before exit to flush and close the log file. File writes
//! are unbuffered, so records already logged survive even without it.

use crate::callback::{Callback, PayloadMode};
use crate::level::Level;
use crate::logger::Logger;
use std::path::Path;
use std::sync::{Mutex, OnceLock, PoisonError};

static GLOBAL: OnceLock<Mutex<Logger>> = OnceLock::new();

/// Runs `f` with the default logger locked.
///
/// Calling back into this module from inside `f`, including from a registered
/// callback, deadlocks.
pub fn with<R>(f: impl FnOnce(&mut Logger) -> R) -> R {
    let lock = GLOBAL.get_or_init(|| Mutex::new(Logger::new()));
    // A panicking callback must not take logging down for the rest of the process.
    let mut logger = lock.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut logger)
}

pub fn set_min_level(level: Level) {
    with(|l| l.set_min_level(level));
}

pub fn set_min_ordinal(threshold: i32) {
    with(|l| l.set_min_ordinal(threshold));
}

pub fn set_append_newline(enabled: bool) {
    with(|l| l.set_append_newline(enabled));
}

pub fn set_colors(enabled: bool) {
    with(|l| l.set_colors(enabled));
}

pub fn set_output_file(path: impl AsRef<Path>) {
    with(|l| l.set_output_file(path));
}

pub fn close_output_file() {
    with(Logger::close_output_file);
}

pub fn set_callback(handler: impl Callback + 'static, mode: PayloadMode) {
    with(|l| l.set_callback(handler, mode));
}

pub fn clear_callback() {
    with(Logger::clear_callback);
}

pub fn log(level: Level, args: std::fmt::Arguments<'_>) {
    with(|l| l.log(level, args));
}

pub fn log_ordinal(ordinal: i32, args: std::fmt::Arguments<'_>) {
    with(|l| l.log_ordinal(ordinal, args));
}

/// Backs [`clog_assert!`](crate::clog_assert). Exits the process on failure.
pub fn assert_or_abort(condition: bool, expression: &str, location: &str) {
    if condition {
        return;
    }
    with(|l| l.assert_or_abort(condition, expression, location));
}

pub fn shutdown() {
    with(Logger::shutdown);
}
