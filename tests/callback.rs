//! Tests for callback dispatch in both payload modes.

mod common;

use clog::{Level, Logger, PayloadMode, log_to};
use common::{captured, plain_line};
use std::fs;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

type Calls = Arc<Mutex<Vec<(Level, String, usize)>>>;

fn recorder() -> (Calls, impl FnMut(Level, &str, usize) + Send + 'static) {
    let calls: Calls = Arc::default();
    let sink = Arc::clone(&calls);
    let handler = move |level: Level, text: &str, len: usize| {
        sink.lock().unwrap().push((level, text.to_string(), len));
    };
    (calls, handler)
}

#[test]
fn raw_mode_gets_interpolated_text() {
    let (calls, handler) = recorder();
    let (builder, _out, _err) = captured(Logger::builder());
    let mut logger = builder.build();
    logger.set_callback(handler, PayloadMode::Raw);

    log_to!(logger, Level::Info, "value={}", 7);

    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0], (Level::Info, "value=7".to_string(), 7));
}

#[test]
fn formatted_mode_gets_plain_line() {
    let (calls, handler) = recorder();
    let (builder, _out, _err) = captured(Logger::builder());
    let mut logger = builder.callback(handler, PayloadMode::Formatted).build();

    log_to!(logger, Level::Info, "value={}", 7);

    let calls = calls.lock().unwrap();
    let (level, text, len) = &calls[0];
    assert_eq!(*level, Level::Info);
    assert!(plain_line("INFO ", "value=7").is_match(text));
    assert_eq!(*len, text.len());
    assert_eq!(*len, "[INFO ] [00:00:00] value=7\n".len());
}

#[test]
fn formatted_mode_respects_newline_flag() {
    let (calls, handler) = recorder();
    let (builder, _out, _err) = captured(Logger::builder().append_newline(false));
    let mut logger = builder.callback(handler, PayloadMode::Formatted).build();

    logger.warn(format_args!("w"));

    let calls = calls.lock().unwrap();
    assert!(!calls[0].1.ends_with('\n'));
    assert_eq!(calls[0].2, "[WARN ] [00:00:00] w".len());
}

#[test]
fn formatted_payload_matches_file_contents() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("out.log");
    let (calls, handler) = recorder();
    let (builder, _out, _err) = captured(Logger::builder());
    let mut logger = builder.file(&path).build();
    logger.set_callback(handler, PayloadMode::Formatted);

    logger.info(format_args!("one"));
    logger.error(format_args!("two {}", 2));
    logger.close_output_file();

    let sent: String = calls.lock().unwrap().iter().map(|c| c.1.clone()).collect();
    assert_eq!(fs::read_to_string(&path).unwrap(), sent);
}

#[test]
fn filtered_records_do_not_notify() {
    let (calls, handler) = recorder();
    let (builder, _out, _err) = captured(Logger::builder().level(Level::Error));
    let mut logger = builder.callback(handler, PayloadMode::Raw).build();

    logger.debug(format_args!("no"));
    logger.warn(format_args!("no"));

    assert!(calls.lock().unwrap().is_empty());
}

#[test]
fn raw_mode_fires_before_console_write() {
    let (builder, out, _err) = captured(Logger::builder());
    let probe = out.clone();
    let seen: Arc<Mutex<Option<String>>> = Arc::default();
    let slot = Arc::clone(&seen);
    let mut logger = builder
        .callback(
            move |_: Level, _: &str, _: usize| {
                *slot.lock().unwrap() = Some(probe.contents());
            },
            PayloadMode::Raw,
        )
        .build();

    logger.info(format_args!("first"));

    assert_eq!(seen.lock().unwrap().as_deref(), Some(""));
    assert!(!out.contents().is_empty());
}

#[test]
fn raw_payload_is_truncated_like_the_line() {
    let (calls, handler) = recorder();
    let (builder, _out, _err) = captured(Logger::builder().max_message_len(3));
    let mut logger = builder.callback(handler, PayloadMode::Raw).build();

    logger.info(format_args!("{}", "abcdef"));

    assert_eq!(calls.lock().unwrap()[0], (Level::Info, "abc".to_string(), 3));
}

#[test]
fn clearing_and_replacing_callbacks() {
    let (first, first_handler) = recorder();
    let (second, second_handler) = recorder();
    let (builder, _out, _err) = captured(Logger::builder());
    let mut logger = builder.build();

    logger.set_callback(first_handler, PayloadMode::Raw);
    logger.set_callback(second_handler, PayloadMode::Formatted);
    assert_eq!(logger.callback_mode(), Some(PayloadMode::Formatted));
    logger.info(format_args!("a"));

    logger.clear_callback();
    assert_eq!(logger.callback_mode(), None);
    logger.info(format_args!("b"));

    assert!(first.lock().unwrap().is_empty());
    assert_eq!(second.lock().unwrap().len(), 1);
}
