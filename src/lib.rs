// Forbid unsafe code except when the C ABI is compiled in
#![cfg_attr(not(feature = "ffi"), forbid(unsafe_code))]

//! `clog` - a small embeddable leveled logger.
//!
//! Every accepted record is rendered twice from one timestamp:
//! - a styled line (ANSI colors) for the console, stdout or stderr by severity
//! - a plain line for the optional log file and for formatted-mode callbacks
//!
//! # Example
//!
//! ```
//! use clog::{Level, Logger, PayloadMode};
//!
//! let mut logger = Logger::builder()
//!     .level(Level::Info)
//!     .colors(false)
//!     .build();
//!
//! logger.set_callback(
//!     |_level: Level, text: &str, len: usize| assert_eq!(text.len(), len),
//!     PayloadMode::Raw,
//! );
//!
//! clog::log_to!(logger, Level::Info, "value={}", 7);
//! logger.debug(format_args!("filtered"));
//! ```
//!
//! The macros `log!`, `debug!`, `info!`, `warn!`, `error!` and `clog_assert!`
//! target the process-wide default logger in [`global`].
//!
//! # Features
//!
//! - `cli` (default): the `clog` binary
//! - `ffi`: C-ABI bindings mirroring the classic `clog_*` header

mod macros;

// Core modules (always available)
pub mod callback;
pub mod config;
pub mod error;
pub mod fmt;
pub mod global;
pub mod level;
pub mod logger;
pub mod output;

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;

// FFI module (feature-gated)
#[cfg(feature = "ffi")]
pub mod ffi;

// Re-exports for convenience
pub use callback::{Callback, PayloadMode, Subscriber};
pub use config::Config;
pub use error::Error;
pub use fmt::{DEFAULT_MAX_MESSAGE_LEN, Rendered};
pub use level::{Level, label_for};
pub use logger::{Logger, LoggerBuilder};
pub use output::{FileOutput, TerminalOutput};

// FFI re-exports
#[cfg(feature = "ffi")]
pub use ffi::{
    CLOG_LEVEL_DEBUG, CLOG_LEVEL_ERROR, CLOG_LEVEL_INFO, CLOG_LEVEL_WARN, ClogCallback,
    clog_assert_fail, clog_level_to_str, clog_log, clog_set_append_newline, clog_set_log_callback,
    clog_set_log_file, clog_set_log_level, clog_shutdown,
};
