use std::{
    fmt::{Display, Write},
    panic::Location,
};

use chrono::{DateTime, Local, TimeZone, Utc};

use crate::flags::FormatFlags;

/// Source location written in front of a message when a file flag is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller<'a> {
    pub file: &'a str,
    pub line: u32,
}

impl From<&'static Location<'static>> for Caller<'static> {
    fn from(location: &'static Location<'static>) -> Self {
        Self {
            file: location.file(),
            line: location.line(),
        }
    }
}

/// Text after the last path separator.
fn short_file(file: &str) -> &str {
    file.rsplit(['/', '\\']).next().unwrap_or(file)
}

/// Renders single log lines for one fixed prefix and flag set.
///
/// Layout, left to right: prefix (unless `MSG_PREFIX`), `YYYY/MM/DD `,
/// `HH:MM:SS[.ffffff] `, `file:line: `, prefix (if `MSG_PREFIX`), message.
/// The line always ends with exactly one added `\n` unless the message
/// already ends with one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineFormat {
    prefix: String,
    flags: FormatFlags,
}

impl LineFormat {
    pub fn new(prefix: impl Into<String>, flags: FormatFlags) -> Self {
        Self {
            prefix: prefix.into(),
            flags,
        }
    }

    pub fn flags(&self) -> FormatFlags {
        self.flags
    }

    /// Formats `message` as it would be logged at instant `now`.
    /// `caller` is only read when a file flag is set; a missing caller renders as `???:0`.
    pub fn format_line(&self, now: DateTime<Utc>, caller: Option<Caller<'_>>, message: &str) -> String {
        let mut line = String::with_capacity(self.prefix.len() + message.len() + 48);
        self.write_header(&mut line, now, caller);
        line.push_str(message);
        if !message.ends_with('\n') {
            line.push('\n');
        }
        line
    }

    fn write_header(&self, buf: &mut String, now: DateTime<Utc>, caller: Option<Caller<'_>>) {
        let flags = self.flags;
        if !flags.contains(FormatFlags::MSG_PREFIX) {
            buf.push_str(&self.prefix);
        }
        if flags.intersects(FormatFlags::DATE | FormatFlags::TIME | FormatFlags::MICROSECONDS) {
            if flags.contains(FormatFlags::UTC) {
                self.write_timestamp(buf, &now);
            } else {
                self.write_timestamp(buf, &now.with_timezone(&Local));
            }
        }
        if flags.with_caller() {
            let Caller { file, line } = caller.unwrap_or(Caller { file: "???", line: 0 });
            // Long wins when both file flags are set.
            let file = if flags.contains(FormatFlags::LONG_FILE) {
                file
            } else {
                short_file(file)
            };
            let _ = write!(buf, "{file}:{line}: ");
        }
        if flags.contains(FormatFlags::MSG_PREFIX) {
            buf.push_str(&self.prefix);
        }
    }

    fn write_timestamp<Tz: TimeZone>(&self, buf: &mut String, time: &DateTime<Tz>)
    where
        Tz::Offset: Display,
    {
        if self.flags.contains(FormatFlags::DATE) {
            let _ = write!(buf, "{} ", time.format("%Y/%m/%d"));
        }
        if self.flags.contains(FormatFlags::MICROSECONDS) {
            let _ = write!(buf, "{} ", time.format("%H:%M:%S%.6f"));
        } else if self.flags.contains(FormatFlags::TIME) {
            let _ = write!(buf, "{} ", time.format("%H:%M:%S"));
        }
    }
}
