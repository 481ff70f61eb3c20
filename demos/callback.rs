//! Registers a callback. Logging from inside it would block on the default
//! logger's lock, so it prints directly instead.

use clog::{Level, PayloadMode, label_for};

fn main() {
    clog::global::set_callback(
        |level: Level, message: &str, len: usize| {
            println!(
                "Callback called with level {}, message: '{}' ({len} bytes long)",
                label_for(level.ordinal()),
                message.trim_end(),
            );
        },
        PayloadMode::Raw,
    );
    clog::global::set_min_level(Level::Info);

    clog::info!("Sample log message.");
    clog::debug!("Callbacks are not called for messages that are filtered out.");

    clog::global::clear_callback();
    let mut logger = clog::Logger::builder()
        .callback(
            |_: Level, line: &str, len: usize| print!("formatted ({len} bytes): {line}"),
            PayloadMode::Formatted,
        )
        .build();
    clog::log_to!(logger, Level::Warn, "value={}", 7);
}
