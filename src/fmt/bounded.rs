//! Interpolation into a growable buffer with a hard byte cap.

use std::fmt::{self, Write};

/// Upper bound for the interpolated message text when nothing else is configured.
pub const DEFAULT_MAX_MESSAGE_LEN: usize = 2048;

/// `fmt::Write` sink that silently stops accepting bytes once `cap` is reached.
///
/// Never splits a UTF-8 sequence: a character that would straddle the cap is
/// dropped whole, so the result can be slightly shorter than `cap`.
#[derive(Debug)]
pub struct BoundedBuf {
    buf: String,
    cap: usize,
    truncated: bool,
}

impl BoundedBuf {
    #[must_use]
    pub const fn new(cap: usize) -> Self {
        Self {
            buf: String::new(),
            cap,
            truncated: false,
        }
    }

    #[cfg(test)]
    const fn is_truncated(&self) -> bool {
        self.truncated
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.buf
    }
}

impl Write for BoundedBuf {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.truncated {
            return Ok(());
        }

        let room = self.cap - self.buf.len();
        if s.len() <= room {
            self.buf.push_str(s);
            return Ok(());
        }

        let mut end = room;
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        self.buf.push_str(&s[..end]);
        self.truncated = true;
        Ok(())
    }
}

/// Renders `args` into at most `cap` bytes. Overflow is dropped, not reported.
#[must_use]
pub fn interpolate(args: fmt::Arguments<'_>, cap: usize) -> String {
    // Fast path for literal-only templates.
    if let Some(literal) = args.as_str().filter(|l| l.len() <= cap) {
        return literal.to_string();
    }

    let mut out = BoundedBuf::new(cap);
    // Only a user `Display` impl can fail here; whatever it wrote so far is kept.
    let _ = out.write_fmt(args);
    out.into_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_short_messages_intact() {
        assert_eq!(interpolate(format_args!("value={}", 7), 64), "value=7");
    }

    #[test]
    fn truncates_at_cap() {
        let text = interpolate(format_args!("{}", "abcdefghij"), 4);
        assert_eq!(text, "abcd");
    }

    #[test]
    fn literal_longer_than_cap_is_truncated() {
        assert_eq!(interpolate(format_args!("abcdefghij"), 3), "abc");
    }

    #[test]
    fn never_splits_a_character() {
        // "é" is two bytes; a cap of 4 leaves room for "a" + "é" only.
        let text = interpolate(format_args!("{}", "aéé"), 4);
        assert_eq!(text, "aé");
        let text = interpolate(format_args!("{}", "aéé"), 2);
        assert_eq!(text, "a");
    }

    #[test]
    fn stops_after_first_overflow() {
        let mut buf = BoundedBuf::new(3);
        buf.write_str("ab").unwrap();
        buf.write_str("cd").unwrap();
        buf.write_str("e").unwrap();
        assert!(buf.is_truncated());
        assert_eq!(buf.into_string(), "abc");
    }
}
