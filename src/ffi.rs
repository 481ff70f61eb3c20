//! C-ABI bindings over the process-wide default logger, so C and C++ programs can
//! keep the `clog_*` calling convention.
//!
//! C has no way to hand Rust a `va_list` safely, so `clog_log` takes an already
//! formatted message; callers `snprintf` first.

#![allow(unsafe_code)]

use std::borrow::Cow;
use std::ffi::{CStr, CString, c_char, c_int};
use std::path::Path;

use crate::callback::PayloadMode;
use crate::global;
use crate::level::Level;

/// Named constants so FFI callers avoid magic numbers in their log calls.
pub const CLOG_LEVEL_DEBUG: c_int = 0;
pub const CLOG_LEVEL_INFO: c_int = 1;
pub const CLOG_LEVEL_WARN: c_int = 2;
pub const CLOG_LEVEL_ERROR: c_int = 3;

/// `void callback(int level, const char *message, int length)`.
pub type ClogCallback = extern "C" fn(c_int, *const c_char, c_int);

/// Lossy so a stray invalid byte doesn't swallow the whole message.
///
/// # Safety
/// `ptr` must be non-null and point to a null-terminated string.
unsafe fn lossy<'a>(ptr: *const c_char) -> Cow<'a, str> {
    // SAFETY: caller guarantees a valid null-terminated string
    unsafe { CStr::from_ptr(ptr) }.to_string_lossy()
}

/// Interior NULs can't cross into C; the text is cut at the first one and the
/// length reported alongside it is that of the cut string.
fn to_c_payload(text: &str) -> (CString, c_int) {
    let end = text.find('\0').unwrap_or(text.len());
    let c_text = CString::new(&text[..end]).unwrap_or_default();
    let len = c_int::try_from(c_text.as_bytes().len()).unwrap_or(c_int::MAX);
    (c_text, len)
}

// ============================================================================
// Configuration
// ============================================================================

/// Any integer is accepted; values outside 0..=3 filter everything or nothing.
#[unsafe(no_mangle)]
pub extern "C" fn clog_set_log_level(level: c_int) {
    global::set_min_ordinal(level);
}

#[unsafe(no_mangle)]
pub extern "C" fn clog_set_append_newline(append: c_int) {
    global::set_append_newline(append != 0);
}

/// Closes any current log file, then opens `filename` (truncating). `NULL` just closes.
///
/// # Safety
/// `filename` must be a valid null-terminated string or `NULL`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn clog_set_log_file(filename: *const c_char) {
    if filename.is_null() {
        global::close_output_file();
        return;
    }

    // SAFETY: filename is non-null and caller guarantees termination
    let name = unsafe { lossy(filename) };
    global::set_output_file(Path::new(name.as_ref()));
}

/// Registers `callback`, or unregisters when it is `NULL`. A non-zero `formatted`
/// hands the callback the full plain line instead of the bare message.
///
/// The callback must not call back into `clog_*`: the default logger is locked
/// while it runs.
#[unsafe(no_mangle)]
pub extern "C" fn clog_set_log_callback(callback: Option<ClogCallback>, formatted: c_int) {
    let Some(callback) = callback else {
        global::clear_callback();
        return;
    };

    let mode = if formatted == 0 {
        PayloadMode::Raw
    } else {
        PayloadMode::Formatted
    };

    global::set_callback(
        move |level: Level, text: &str, _len: usize| {
            let (c_text, len) = to_c_payload(text);
            callback(level.ordinal(), c_text.as_ptr(), len);
        },
        mode,
    );
}

// ============================================================================
// Logging
// ============================================================================

/// Logs a preformatted message. Unknown levels produce a warning and are discarded.
///
/// # Safety
/// `msg` must be a valid null-terminated string or `NULL` (ignored).
#[unsafe(no_mangle)]
pub unsafe extern "C" fn clog_log(level: c_int, msg: *const c_char) {
    if msg.is_null() {
        return;
    }

    // SAFETY: msg is non-null and caller guarantees termination
    let text = unsafe { lossy(msg) };
    global::log_ordinal(level, format_args!("{text}"));
}

/// Static label for `level`, `"UNKNOWN"` when out of range. Never free the result.
#[unsafe(no_mangle)]
pub extern "C" fn clog_level_to_str(level: c_int) -> *const c_char {
    let label: &'static CStr = match Level::from_ordinal(level) {
        Some(Level::Debug) => c"DEBUG",
        Some(Level::Info) => c"INFO ",
        Some(Level::Warn) => c"WARN ",
        Some(Level::Error) => c"ERROR",
        None => c"UNKNOWN",
    };
    label.as_ptr()
}

/// Backs a C-side `clog_assert(EX)` macro: logs the failure and exits with status 1.
///
/// # Safety
/// `expr` and `file` must be valid null-terminated strings or `NULL`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn clog_assert_fail(expr: *const c_char, file: *const c_char, line: c_int) {
    let expr = if expr.is_null() {
        Cow::Borrowed("<unknown>")
    } else {
        // SAFETY: expr is non-null and caller guarantees termination
        unsafe { lossy(expr) }
    };
    let file = if file.is_null() {
        Cow::Borrowed("<unknown>")
    } else {
        // SAFETY: file is non-null and caller guarantees termination
        unsafe { lossy(file) }
    };

    global::assert_or_abort(false, &expr, &format!("{file}:{line}"));
}

/// Flushes and closes the log file. Call before exit; Rust statics are never dropped.
#[unsafe(no_mangle)]
pub extern "C" fn clog_shutdown() {
    global::shutdown();
}
