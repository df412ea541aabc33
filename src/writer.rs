use crate::LogLevel;
use chrono::Local;
use std::io::{self, Write};

const RESET: &str = "\x1b[0m";

/// Layout of the timestamp between the level bracket and the message.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// ANSI colour a whole picolog line is wrapped in, per level.
fn line_colour(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Info => "\x1b[34m",
        LogLevel::Debug => "\x1b[35m",
        LogLevel::Warning => "\x1b[33m",
        LogLevel::Error => "\x1b[31m",
        LogLevel::Ok => "\x1b[32m",
    }
}

/// Emits log lines in the picolog wire format, the same shape the
/// counting tools parse back out:
///
/// ```text
/// [LEVEL] - 2024-01-01 12:00:00 : message - At package: pkg_name
/// ```
pub struct Logger {
    /// Names the emitting package in the `At package:` postfix.
    pkg_name: String,
    /// Levels below this are dropped.
    min_level: LogLevel,
    /// Wrap each line in the level's ANSI colour.
    colours: bool,
}

impl Logger {
    pub fn new(pkg_name: impl Into<String>, min_level: LogLevel, colours: bool) -> Self {
        Self { pkg_name: pkg_name.into(), min_level, colours }
    }

    /// Format one line without writing it. Returns `None` when `level`
    /// sits below the logger's minimum.
    ///
    /// An error payload, when given, rides inside the message segment
    /// before the closing ` -` boundary, so downstream message counting
    /// sees `message error` as one text.
    pub fn format_line(
        &self,
        level: LogLevel,
        timestamp: &str,
        message: &str,
        error: Option<&str>,
    ) -> Option<String> {
        if level < self.min_level {
            return None;
        }
        let message = match error {
            Some(error) => format!("{} {}", message, error),
            None => message.to_string(),
        };
        let line = format!("[{}] - {} : {} - At package: {}", level, timestamp, message, self.pkg_name);
        Some(if self.colours {
            format!("{}{}{}", line_colour(level), line, RESET)
        } else {
            line
        })
    }

    /// Stamp the current local time and write the line to `out`.
    pub fn log<W: Write>(
        &self,
        out: &mut W,
        level: LogLevel,
        message: &str,
        error: Option<&str>,
    ) -> io::Result<()> {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        match self.format_line(level, &timestamp, message, error) {
            Some(line) => writeln!(out, "{}", line),
            None => Ok(()),
        }
    }
}
