// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


//! Severity levels and the lenient level parsers.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;

/// The severity of a log message.
///
/// Levels are ordered from the most verbose to the most severe:
///
/// ```text
/// Trace < Debug < Info < Warn < Error < Fatal < Panic
/// ```
///
/// A message at level `S` is emitted only when the configured minimum level is `<= S`.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Very fine-grained diagnostics.
    Trace = 0,
    /// Diagnostics useful while developing.
    Debug = 1,
    /// Normal operational messages.
    Info = 2,
    /// Something unexpected that does not stop the program.
    Warn = 3,
    /// A failed operation.
    Error = 4,
    /// Logged, then the process exits.
    Fatal = 5,
    /// Logged, then the current thread panics.
    Panic = 6,
}

impl Level {
    /// All levels, from the most verbose to the most severe.
    pub const ALL: [Level; 7] = [
        Level::Trace,
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Fatal,
        Level::Panic,
    ];

    /// The upper-case name of the level, as printed by layouts.
    pub const fn name(&self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
            Level::Panic => "PANIC",
        }
    }

    /// The lower-case token of the level, as accepted by [`parse_level`].
    pub const fn as_str(&self) -> &'static str {
        match self {
            Level::Trace => "trace",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Fatal => "fatal",
            Level::Panic => "panic",
        }
    }

    pub(crate) const fn from_u8(value: u8) -> Level {
        match value {
            0 => Level::Trace,
            1 => Level::Debug,
            2 => Level::Info,
            3 => Level::Warn,
            4 => Level::Error,
            5 => Level::Fatal,
            _ => Level::Panic,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Parse a level name, defaulting to [`Level::Info`].
///
/// The input is trimmed and compared case-insensitively against `trace`, `debug`, `info`,
/// `warn`, `warning`, `error`, `fatal` and `panic`. `warn` and `warning` are the same level.
/// Anything else, including the empty string, yields [`Level::Info`]; this function never fails.
///
/// # Examples
///
/// ```
/// use klogger::Level;
/// use klogger::parse_level;
///
/// assert_eq!(parse_level("  DeBug "), Level::Debug);
/// assert_eq!(parse_level("warning"), Level::Warn);
/// assert_eq!(parse_level("verbose"), Level::Info);
/// ```
pub fn parse_level(input: &str) -> Level {
    match input.trim().to_lowercase().as_str() {
        "trace" => Level::Trace,
        "debug" => Level::Debug,
        "info" => Level::Info,
        "warn" | "warning" => Level::Warn,
        "error" => Level::Error,
        "fatal" => Level::Fatal,
        "panic" => Level::Panic,
        _ => Level::Info,
    }
}

/// Parse a level name into a [`log::LevelFilter`], defaulting to [`log::LevelFilter::Info`].
///
/// Accepts the same vocabulary as [`parse_level`]. The `log` facade has no levels above
/// `Error`, so `fatal` and `panic` map to [`log::LevelFilter::Error`].
///
/// ```
/// use log::LevelFilter;
///
/// assert_eq!(klogger::parse_level_filter("PANIC"), LevelFilter::Error);
/// assert_eq!(klogger::parse_level_filter(""), LevelFilter::Info);
/// ```
pub fn parse_level_filter(input: &str) -> log::LevelFilter {
    log::Level::from(parse_level(input)).to_level_filter()
}

impl FromStr for Level {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse_level(s))
    }
}

impl From<&str> for Level {
    fn from(value: &str) -> Self {
        parse_level(value)
    }
}

impl From<Level> for log::Level {
    fn from(level: Level) -> Self {
        match level {
            Level::Trace => log::Level::Trace,
            Level::Debug => log::Level::Debug,
            Level::Info => log::Level::Info,
            Level::Warn => log::Level::Warn,
            Level::Error | Level::Fatal | Level::Panic => log::Level::Error,
        }
    }
}

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Trace => Level::Trace,
            log::Level::Debug => Level::Debug,
            log::Level::Info => Level::Info,
            log::Level::Warn => Level::Warn,
            log::Level::Error => Level::Error,
        }
    }
}

impl Serialize for Level {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        Ok(parse_level(&text))
    }
}
