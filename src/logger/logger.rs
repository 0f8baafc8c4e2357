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


use std::io::Write;
use std::sync::atomic::AtomicU8;
use std::sync::atomic::Ordering;

use crate::Error;
use crate::Level;
use crate::append::Append;
use crate::append::Stderr;
use crate::kv::Fields;
use crate::layout::Layout;
use crate::layout::TextLayout;
use crate::logger::Entry;
use crate::record::Record;

/// A structured logger: a minimum level, a layout and the appenders records are written to.
///
/// A fresh logger logs at [`Level::Info`] and above, formats with [`TextLayout`] and writes to
/// stderr.
///
/// `Fatal` records are followed by a call to the exit handler with status `1` (by default
/// [`std::process::exit`]); `Panic` records are followed by a panic carrying the message.
///
/// # Examples
///
/// ```
/// use klogger::Level;
/// use klogger::Logger;
/// use klogger::append;
/// use klogger::layout::JsonLayout;
///
/// let logger = Logger::new()
///     .with_level(Level::Debug)
///     .with_layout(JsonLayout::default())
///     .with_append(append::Stdout::default());
///
/// logger.with_fields(&Default::default()).debug("ready");
/// ```
#[derive(Debug)]
pub struct Logger {
    level: AtomicU8,
    layout: Box<dyn Layout>,
    appends: Vec<Box<dyn Append>>,
    exit_handler: fn(i32),
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

fn exit_process(code: i32) {
    std::process::exit(code)
}

impl Logger {
    /// Create a new [`Logger`] with the default configuration.
    pub fn new() -> Logger {
        Self {
            level: AtomicU8::new(Level::Info as u8),
            layout: Box::new(TextLayout::default()),
            appends: vec![Box::new(Stderr::default())],
            exit_handler: exit_process,
        }
    }

    /// Set the minimum level.
    #[must_use = "the configured logger should be used"]
    pub fn with_level(self, level: Level) -> Self {
        self.set_level(level);
        self
    }

    /// Set the layout records are formatted with.
    #[must_use = "the configured logger should be used"]
    pub fn with_layout(mut self, layout: impl Into<Box<dyn Layout>>) -> Self {
        self.layout = layout.into();
        self
    }

    /// Replace all appenders with `append`.
    #[must_use = "the configured logger should be used"]
    pub fn with_append(mut self, append: impl Into<Box<dyn Append>>) -> Self {
        self.appends = vec![append.into()];
        self
    }

    /// Add one more appender.
    #[must_use = "the configured logger should be used"]
    pub fn add_append(mut self, append: impl Into<Box<dyn Append>>) -> Self {
        self.appends.push(append.into());
        self
    }

    /// Set the function called after a `Fatal` record has been written.
    #[must_use = "the configured logger should be used"]
    pub fn with_exit_handler(mut self, handler: fn(i32)) -> Self {
        self.exit_handler = handler;
        self
    }

    /// Change the minimum level of a logger that may already be shared.
    pub fn set_level(&self, level: Level) {
        self.level.store(level as u8, Ordering::Relaxed);
    }

    /// The current minimum level.
    pub fn level(&self) -> Level {
        Level::from_u8(self.level.load(Ordering::Relaxed))
    }

    /// Whether a record at `level` would be written.
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.level()
    }

    /// Bind a set of fields for the next emitted record.
    pub fn with_fields<'a>(&'a self, fields: &'a Fields) -> Entry<'a> {
        Entry::new(self, fields)
    }

    /// Write `message` with `fields` at `level`.
    ///
    /// Append errors are reported on stderr and never returned.
    pub fn log(&self, level: Level, message: &str, fields: &Fields) {
        if self.enabled(level) {
            let record = Record::new(level, message, fields);
            for append in &self.appends {
                if let Err(err) = append.append(&record, self.layout.as_ref()) {
                    handle_log_error(&record, err);
                }
            }
        }

        match level {
            Level::Fatal => {
                self.flush();
                (self.exit_handler)(1);
            }
            Level::Panic if self.enabled(level) => {
                self.flush();
                panic!("{message}");
            }
            _ => {}
        }
    }

    /// Flush all appenders.
    pub fn flush(&self) {
        for append in &self.appends {
            if let Err(err) = append.flush() {
                handle_flush_error(err);
            }
        }
    }
}

fn handle_log_error(record: &Record, error: Error) {
    let Err(fallback_error) = write!(
        std::io::stderr(),
        r###"
Error perform logging.
    Attempted to log: {message}
    Record: {record:?}
    Error: {error:?}
"###,
        message = record.message(),
        record = record,
        error = error,
    ) else {
        return;
    };

    panic!(
        r###"
Error performing stderr logging after error occurred during regular logging.
    Attempted to log: {message}
    Record: {record:?}
    Error: {error:?}
    Fallback error: {fallback_error}
"###,
        message = record.message(),
        record = record,
        error = error,
        fallback_error = fallback_error,
    );
}

fn handle_flush_error(error: Error) {
    let Err(fallback_error) = write!(
        std::io::stderr(),
        r###"
Error perform flush.
    Error: {error:?}
"###,
    ) else {
        return;
    };

    panic!(
        r###"
Error performing stderr logging after error occurred during regular flush.
    Error: {error:?}
    Fallback error: {fallback_error}
"###,
    );
}
