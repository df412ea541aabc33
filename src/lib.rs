use anyhow::{Context, Result};
use log::debug;
use std::{
    collections::HashMap,
    fmt,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    str::FromStr,
};
use thiserror::Error;

pub mod chart;
pub mod grammar;
pub mod writer;

/// The closed set of severity markers a picolog line can carry.
///
/// Declaration order is both the severity order (`Info` lowest) and the
/// order the level chart presents its bars in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Info,
    Debug,
    Warning,
    Error,
    Ok,
}

impl LogLevel {
    /// Every level, in declaration order.
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Ok,
    ];

    /// The uppercase token as it appears bracketed at the start of a log line.
    pub fn token(self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Ok => "OK",
        }
    }

    /// Colour of this level's bar in the level chart.
    pub fn chart_colour(self) -> chart::Colour {
        match self {
            LogLevel::Info => chart::Colour::Blue,
            LogLevel::Debug => chart::Colour::Green,
            LogLevel::Warning => chart::Colour::Yellow,
            LogLevel::Error => chart::Colour::Red,
            LogLevel::Ok => chart::Colour::Magenta,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// A bracketed token that is not one of the five known levels.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown log level token: {0}")]
pub struct UnknownLevel(pub String);

impl FromStr for LogLevel {
    type Err = UnknownLevel;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "INFO" => Ok(LogLevel::Info),
            "DEBUG" => Ok(LogLevel::Debug),
            "WARNING" => Ok(LogLevel::Warning),
            "ERROR" => Ok(LogLevel::Error),
            "OK" => Ok(LogLevel::Ok),
            other => Err(UnknownLevel(other.to_string())),
        }
    }
}

/// Occurrence counts for the five levels.
///
/// The table always holds exactly the known levels: it is seeded at zero,
/// and unknown tokens never create a key.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LevelCounts([u64; LogLevel::ALL.len()]);

impl LevelCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, level: LogLevel) {
        self.0[level as usize] += 1;
    }

    pub fn get(&self, level: LogLevel) -> u64 {
        self.0[level as usize]
    }

    /// `(level, count)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (LogLevel, u64)> + '_ {
        LogLevel::ALL.iter().map(move |&level| (level, self.get(level)))
    }

    /// Number of lines that carried a known level.
    pub fn total(&self) -> u64 {
        self.0.iter().sum()
    }
}

/// Open a log file and iterate its lines in file order.
///
/// An unreadable file is the only hard failure in the toolkit. Lines that
/// fail to decode are skipped like any other non-matching line.
pub fn scan_lines(path: impl AsRef<Path>) -> Result<impl Iterator<Item = String>> {
    let path = path.as_ref();
    debug!("scanning {}", path.display());
    let file = File::open(path).with_context(|| format!("failed to open log file {}", path.display()))?;
    Ok(BufReader::new(file).lines().flatten())
}

/// Count how often each known level appears across the given lines.
///
/// Lines without a bracketed token, and tokens outside the known
/// vocabulary, contribute nothing.
pub fn count_levels<I>(lines: I) -> LevelCounts
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut counts = LevelCounts::new();
    for line in lines {
        if let Some(token) = grammar::level_token(line.as_ref()) {
            if let Ok(level) = token.parse::<LogLevel>() {
                counts.increment(level);
            }
        }
    }
    counts
}

/// Tally distinct message texts across the ERROR lines.
///
/// A message gains a key on first sight, so every count present is
/// strictly positive. Lines at any other level are discarded.
pub fn count_error_messages<I>(lines: I) -> HashMap<String, u64>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut counts: HashMap<String, u64> = HashMap::new();
    for line in lines {
        if let Some((token, message)) = grammar::level_and_message(line.as_ref()) {
            if token.parse() == Ok(LogLevel::Error) {
                *counts.entry(message.to_string()).or_default() += 1;
            }
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::hashmap;

    const SAMPLE: [&str; 4] = [
        "[INFO] - t : service up -",
        "[ERROR] - t : disk full - cleanup started",
        "[ERROR] - t : disk full - retry scheduled",
        "[WARNING] - t : low memory -",
    ];

    #[test]
    fn counts_levels_across_sample_lines() {
        let counts = count_levels(SAMPLE);
        assert_eq!(counts.get(LogLevel::Info), 1);
        assert_eq!(counts.get(LogLevel::Debug), 0);
        assert_eq!(counts.get(LogLevel::Warning), 1);
        assert_eq!(counts.get(LogLevel::Error), 2);
        assert_eq!(counts.get(LogLevel::Ok), 0);
        assert_eq!(counts.total(), 4);
    }

    #[test]
    fn counts_error_messages_across_sample_lines() {
        assert_eq!(
            count_error_messages(SAMPLE),
            hashmap! { String::from("disk full") => 2 }
        );
    }

    #[test]
    fn empty_input_keeps_every_level_at_zero() {
        let counts = count_levels(Vec::<String>::new());
        assert_eq!(counts.iter().count(), LogLevel::ALL.len());
        assert!(counts.iter().all(|(_, count)| count == 0));
        assert!(count_error_messages(Vec::<String>::new()).is_empty());
    }

    #[test]
    fn unknown_token_counts_nowhere() {
        let lines = ["[TRACE] - t : nothing to see -"];
        assert_eq!(count_levels(lines).total(), 0);
        assert!(count_error_messages(lines).is_empty());
    }

    #[test]
    fn non_error_levels_never_reach_the_message_table() {
        let lines = ["[WARNING] - t : disk full - almost"];
        assert!(count_error_messages(lines).is_empty());
    }

    #[test]
    fn unknown_token_is_a_typed_parse_error() {
        assert_eq!(
            "TRACE".parse::<LogLevel>(),
            Err(UnknownLevel(String::from("TRACE")))
        );
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(scan_lines("no_such_file.txt").is_err());
    }
}
