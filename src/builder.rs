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


//! The fluent message builder.

use std::backtrace::Backtrace;
use std::fmt;
use std::sync::Arc;

use crate::Level;
use crate::Logger;
use crate::kv::ERROR_KEY;
use crate::kv::Fields;
use crate::kv::STACK_KEY;
use crate::kv::Value;

/// A rendered message plus the fields to attach to it, waiting for a severity.
///
/// Builders are usually created with [`logf!`](crate::logf!), which seeds them with the default
/// fields and the shared logger. Every method consumes the builder and hands it back, so calls
/// chain; the terminal severity methods ([`info`](Self::info), [`error`](Self::error), ...)
/// forward the message when the builder's level allows it.
///
/// The message text never changes after construction. Fields only grow, and the last write to
/// a key wins.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use klogger::Logger;
/// use klogger::MessageBuilder;
///
/// let logger = Arc::new(Logger::new());
/// MessageBuilder::new(logger, "cache warmed")
///     .add("entries", 512)
///     .add("region", "eu-west-1")
///     .info();
/// ```
#[derive(Debug, Clone)]
pub struct MessageBuilder {
    logger: Arc<Logger>,
    message: String,
    level: Level,
    data: Fields,
}

impl MessageBuilder {
    /// Create a builder that dispatches `message` to `logger`.
    ///
    /// The builder starts without fields and with a [`Level::Trace`] threshold, leaving the
    /// filtering to the logger.
    pub fn new(logger: Arc<Logger>, message: impl Into<String>) -> Self {
        Self {
            logger,
            message: message.into(),
            level: Level::Trace,
            data: Fields::new(),
        }
    }

    /// The rendered message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The fields collected so far.
    pub fn fields(&self) -> &Fields {
        &self.data
    }

    /// The builder's threshold.
    pub fn level(&self) -> Level {
        self.level
    }

    /// The logger this builder dispatches to.
    pub fn logger(&self) -> &Arc<Logger> {
        &self.logger
    }

    /// Set `key` to `value`, replacing any previous value.
    pub fn add(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// Merge `data` into the fields; keys already present are overwritten.
    pub fn add_data<K, V>(mut self, data: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        for (key, value) in data {
            self.data.insert(key.into(), value.into());
        }
        self
    }

    /// Record `err` under [`ERROR_KEY`] and the current backtrace under [`STACK_KEY`].
    ///
    /// Capturing the backtrace walks the stack; call this only on paths that actually failed.
    pub fn add_error<E>(mut self, err: &E) -> Self
    where
        E: fmt::Display + ?Sized,
    {
        let stack = Backtrace::force_capture();
        self.data
            .insert(ERROR_KEY.to_string(), Value::String(err.to_string()));
        self.data
            .insert(STACK_KEY.to_string(), Value::String(stack.to_string()));
        self
    }

    /// Set the builder's threshold.
    ///
    /// This also sets the minimum level of the logger the builder dispatches to, which is
    /// usually the process-wide logger, so it affects every later message.
    pub fn set_log_level(mut self, level: Level) -> Self {
        self.level = level;
        self.logger.set_level(level);
        self
    }

    /// Emit at [`Level::Debug`].
    pub fn debug(self) -> Self {
        self.emit(Level::Debug);
        self
    }

    /// Emit at [`Level::Info`].
    pub fn info(self) -> Self {
        self.emit(Level::Info);
        self
    }

    /// Emit at [`Level::Warn`].
    pub fn warn(self) -> Self {
        self.emit(Level::Warn);
        self
    }

    /// Emit at [`Level::Error`].
    pub fn error(self) -> Self {
        self.emit(Level::Error);
        self
    }

    /// Emit at [`Level::Fatal`]. The logger then runs its exit handler, which terminates the
    /// process by default.
    pub fn fatal(self) -> Self {
        self.emit(Level::Fatal);
        self
    }

    /// Emit at [`Level::Panic`]. The logger then panics with the message.
    pub fn panic(self) -> Self {
        self.emit(Level::Panic);
        self
    }

    fn emit(&self, level: Level) {
        if self.level <= level {
            self.logger
                .with_fields(&self.data)
                .log(level, &self.message);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::atomic::AtomicI32;
    use std::sync::atomic::Ordering;

    use serde_json::json;

    use super::*;
    use crate::recorder::Recorder;

    fn recording_logger(level: Level) -> (Arc<Logger>, Recorder) {
        let recorder = Recorder::default();
        let logger = Logger::new()
            .with_level(level)
            .with_append(recorder.clone());
        (Arc::new(logger), recorder)
    }

    #[test]
    fn add_overwrites_duplicate_keys() {
        let (logger, _) = recording_logger(Level::Trace);
        let builder = MessageBuilder::new(logger, "m")
            .add("k", "first")
            .add("n", 1)
            .add("k", "second");

        assert_eq!(builder.fields()["k"], json!("second"));
        assert_eq!(builder.fields()["n"], json!(1));
        assert_eq!(builder.fields().len(), 2);
        assert_eq!(builder.message(), "m");
    }

    #[test]
    fn add_data_merges() {
        let (logger, _) = recording_logger(Level::Trace);
        let mut extra = Fields::new();
        extra.insert("a".to_string(), json!("from map"));
        extra.insert("b".to_string(), json!(true));

        let builder = MessageBuilder::new(logger, "m")
            .add("a", "original")
            .add_data(extra)
            .add_data([("c", 3)]);

        assert_eq!(builder.fields()["a"], json!("from map"));
        assert_eq!(builder.fields()["b"], json!(true));
        assert_eq!(builder.fields()["c"], json!(3));
    }

    #[test]
    fn add_error_records_text_and_stack() {
        let (logger, _) = recording_logger(Level::Trace);
        let err = io::Error::new(io::ErrorKind::NotFound, "config.toml missing");

        let builder = MessageBuilder::new(logger, "m").add_error(&err);

        assert_eq!(builder.fields()[ERROR_KEY], json!("config.toml missing"));
        let stack = builder.fields()[STACK_KEY].as_str().unwrap();
        assert!(!stack.is_empty());
    }

    #[test]
    fn forwards_message_and_fields() {
        let (logger, recorder) = recording_logger(Level::Trace);

        MessageBuilder::new(logger, "Hello World")
            .add("foo", "bar")
            .info();

        let records = recorder.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].level, Level::Info);
        assert_eq!(records[0].message, "Hello World");
        assert_eq!(records[0].fields["foo"], json!("bar"));
    }

    #[test]
    fn each_terminal_uses_its_level() {
        let (logger, recorder) = recording_logger(Level::Trace);

        MessageBuilder::new(logger, "m").debug().info().warn().error();

        assert_eq!(
            recorder.levels(),
            [Level::Debug, Level::Info, Level::Warn, Level::Error]
        );
    }

    #[test]
    fn threshold_above_severity_forwards_nothing() {
        let (logger, recorder) = recording_logger(Level::Trace);

        let builder = MessageBuilder::new(logger.clone(), "m").set_log_level(Level::Error);
        // reopen the logger so only the builder threshold filters
        logger.set_level(Level::Trace);

        builder.debug().info().warn().error();

        assert_eq!(recorder.levels(), [Level::Error]);
    }

    #[test]
    fn set_log_level_changes_the_logger() {
        let (logger, recorder) = recording_logger(Level::Trace);

        let builder = MessageBuilder::new(logger.clone(), "m").set_log_level(Level::Warn);

        assert_eq!(builder.level(), Level::Warn);
        assert_eq!(logger.level(), Level::Warn);

        MessageBuilder::new(logger, "other").info();
        assert!(recorder.records().is_empty());
    }

    #[test]
    fn logger_level_still_applies() {
        let (logger, recorder) = recording_logger(Level::Error);

        MessageBuilder::new(logger, "m").warn();

        assert!(recorder.records().is_empty());
    }

    static EXIT_CODE: AtomicI32 = AtomicI32::new(-1);

    #[test]
    fn fatal_reaches_exit_handler() {
        fn record_exit(code: i32) {
            EXIT_CODE.store(code, Ordering::SeqCst);
        }

        let recorder = Recorder::default();
        let logger = Logger::new()
            .with_append(recorder.clone())
            .with_exit_handler(record_exit);

        MessageBuilder::new(Arc::new(logger), "bye").fatal();

        assert_eq!(recorder.levels(), [Level::Fatal]);
        assert_eq!(EXIT_CODE.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn gated_fatal_does_not_exit() {
        fn unexpected_exit(code: i32) {
            panic!("exit handler called with {code}");
        }

        let logger = Logger::new()
            .with_append(Recorder::default())
            .with_exit_handler(unexpected_exit);

        MessageBuilder::new(Arc::new(logger), "bye")
            .set_log_level(Level::Panic)
            .fatal();
    }

    #[test]
    #[should_panic(expected = "boom")]
    fn panic_panics() {
        let (logger, _) = recording_logger(Level::Trace);
        MessageBuilder::new(logger, "boom").panic();
    }
}
