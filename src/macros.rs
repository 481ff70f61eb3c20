//! `format!`-style entry points. The template is checked against its arguments at
//! compile time by `format_args!`.

/// Logs to the process-wide default logger.
///
/// ```no_run
/// clog::log!(clog::Level::Info, "value={}", 7);
/// ```
#[macro_export]
macro_rules! log {
    ($level:expr, $($arg:tt)+) => {
        $crate::global::log($level, ::std::format_args!($($arg)+))
    };
}

/// Logs to an explicit [`Logger`](crate::Logger).
///
/// ```
/// let mut logger = clog::Logger::builder().colors(false).build();
/// clog::log_to!(logger, clog::Level::Debug, "{} + {} = {}", 2, 2, 4);
/// ```
#[macro_export]
macro_rules! log_to {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, ::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => { $crate::log!($crate::Level::Debug, $($arg)+) };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => { $crate::log!($crate::Level::Info, $($arg)+) };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => { $crate::log!($crate::Level::Warn, $($arg)+) };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => { $crate::log!($crate::Level::Error, $($arg)+) };
}

/// Stand-in for `assert!` that reports through the default logger, then exits with status 1.
///
/// ```no_run
/// clog::clog_assert!(2 + 2 == 4);
/// ```
#[macro_export]
macro_rules! clog_assert {
    ($cond:expr $(,)?) => {
        $crate::global::assert_or_abort(
            $cond,
            ::std::stringify!($cond),
            ::std::concat!(::std::file!(), ":", ::std::line!()),
        )
    };
}
