//! Shared helpers for capturing console output.

#![allow(dead_code)]

use clog::{Logger, LoggerBuilder};
use regex::Regex;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Cloneable in-memory stream; every clone appends to the same buffer.
#[derive(Clone, Default)]
pub struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A builder whose console writes land in the returned `(stdout, stderr)` buffers.
pub fn captured(builder: LoggerBuilder) -> (LoggerBuilder, SharedBuf, SharedBuf) {
    let out = SharedBuf::default();
    let err = SharedBuf::default();
    let builder = builder.console_streams(Box::new(out.clone()), Box::new(err.clone()));
    (builder, out, err)
}

pub fn captured_logger() -> (Logger, SharedBuf, SharedBuf) {
    let (builder, out, err) = captured(Logger::builder());
    (builder.build(), out, err)
}

/// Matches one full plain line for `label` and `msg`, with any timestamp.
pub fn plain_line(label: &str, msg: &str) -> Regex {
    Regex::new(&format!(
        r"^\[{}\] \[\d{{2}}:\d{{2}}:\d{{2}}\] {}\n$",
        regex::escape(label),
        regex::escape(msg)
    ))
    .unwrap()
}
