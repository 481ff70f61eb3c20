//! Builds the two views of one record: styled for the console, plain for the file
//! and for formatted-mode callbacks.

use super::color::{self, Palette};
use crate::level::Level;
use chrono::{Local, NaiveTime, Timelike};

/// Terminator appended when newline-append is enabled.
pub const LINE_END: &str = "\n";

/// `[` + 5-char label + `] [HH:MM:SS] `.
const PLAIN_FURNITURE: usize = 19;

/// Wall-clock `HH:MM:SS`, zero padded. All views of a record share one value.
#[must_use]
pub fn timestamp() -> String {
    format_time(Local::now().time())
}

#[must_use]
pub fn format_time(time: NaiveTime) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        time.hour(),
        time.minute(),
        time.second()
    )
}

/// The styled and plain renderings of a single record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub level: Level,
    pub styled: String,
    pub plain: String,
}

impl Rendered {
    /// `text` is the already-interpolated (and already capped) message body.
    #[must_use]
    pub fn new(
        level: Level,
        timestamp: &str,
        text: &str,
        append_newline: bool,
        palette: &Palette,
    ) -> Self {
        let label = level.label();
        let end = if append_newline { LINE_END } else { "" };

        let level_color = palette.get(level);
        let escapes = color::FRAME.len() * 2 + level_color.len() + color::RESET.len();
        let mut styled =
            String::with_capacity(PLAIN_FURNITURE + escapes + text.len() + end.len());
        styled.push_str(color::FRAME);
        styled.push('[');
        styled.push_str(level_color);
        styled.push_str(label);
        styled.push_str(color::FRAME);
        styled.push_str("] [");
        styled.push_str(timestamp);
        styled.push_str("] ");
        styled.push_str(color::RESET);
        styled.push_str(text);
        styled.push_str(end);

        let mut plain = String::with_capacity(PLAIN_FURNITURE + text.len() + end.len());
        plain.push('[');
        plain.push_str(label);
        plain.push_str("] [");
        plain.push_str(timestamp);
        plain.push_str("] ");
        plain.push_str(text);
        plain.push_str(end);

        Self {
            level,
            styled,
            plain,
        }
    }

    /// The console gets the plain view when styling is switched off.
    #[must_use]
    pub fn console(&self, colors: bool) -> &str {
        if colors { &self.styled } else { &self.plain }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_layout() {
        let r = Rendered::new(Level::Info, "01:02:03", "value=7", true, &Palette::default());
        assert_eq!(r.plain, "[INFO ] [01:02:03] value=7\n");
    }

    #[test]
    fn styled_layout() {
        let r = Rendered::new(Level::Error, "23:59:59", "boom", false, &Palette::default());
        assert_eq!(
            r.styled,
            "\x1b[0;37m[\x1b[1;31mERROR\x1b[0;37m] [23:59:59] \x1b[0mboom"
        );
    }

    #[test]
    fn furniture_width_matches_plain_prefix() {
        let r = Rendered::new(Level::Warn, "00:00:00", "", false, &Palette::default());
        assert_eq!(r.plain.len(), PLAIN_FURNITURE);
    }

    #[test]
    fn time_is_zero_padded() {
        let t = NaiveTime::from_hms_opt(4, 5, 6).unwrap();
        assert_eq!(format_time(t), "04:05:06");
    }
}
