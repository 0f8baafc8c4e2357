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


//! Process-wide logger state.

use std::fmt;
use std::sync::Arc;
use std::sync::LazyLock;
use std::sync::OnceLock;

use arc_swap::ArcSwap;

use crate::Level;
use crate::Logger;
use crate::MessageBuilder;
use crate::kv::Fields;
use crate::layout::JsonLayout;
use crate::layout::Layout;

/// The level the shared logger gets when [`logf`] initializes it lazily.
pub const DEFAULT_LOG_LEVEL: Level = Level::Debug;

/// The shared logging configuration: one replaceable logger and the default fields.
///
/// The logger is created at most once, by [`Context::initialize`] or lazily by the first
/// [`Context::logf`] (with [`DEFAULT_LOG_LEVEL`] and [`JsonLayout`]). [`Context::set_logger`]
/// swaps it at any time afterwards; builders created before the swap keep the logger they
/// captured.
///
/// The free functions of this crate ([`logf`], [`initialize_global_logger`], ...) operate on
/// one static `Context`. Construct your own to keep configurations apart, for example in tests.
///
/// # Examples
///
/// ```
/// use klogger::Context;
/// use klogger::Level;
/// use klogger::layout::TextLayout;
///
/// let context = Context::new();
/// context.initialize(Level::Warn, TextLayout::default());
/// context.initialize(Level::Trace, TextLayout::default()); // no effect
/// assert_eq!(context.logger().level(), Level::Warn);
/// ```
pub struct Context {
    logger: OnceLock<ArcSwap<Logger>>,
    default_fields: ArcSwap<Fields>,
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("logger", &self.logger.get().map(|slot| slot.load_full()))
            .field("default_fields", &self.default_fields.load_full())
            .finish()
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Create an empty context; no logger is constructed until first use.
    pub fn new() -> Self {
        Self {
            logger: OnceLock::new(),
            default_fields: ArcSwap::from_pointee(Fields::new()),
        }
    }

    /// Create the logger with `level` and `layout`, unless one already exists.
    ///
    /// Only the first call has an effect. Concurrent first calls construct exactly one logger,
    /// and every caller returns after it is visible.
    pub fn initialize(&self, level: Level, layout: impl Into<Box<dyn Layout>>) {
        let layout = layout.into();
        self.logger.get_or_init(|| {
            ArcSwap::from_pointee(Logger::new().with_level(level).with_layout(layout))
        });
    }

    /// Whether a logger has been created or installed.
    pub fn is_initialized(&self) -> bool {
        self.logger.get().is_some()
    }

    /// Replace the logger.
    ///
    /// Last writer wins; a log call already running keeps the logger it started with. A
    /// replacement also counts as initialization, so [`Context::initialize`] never overwrites
    /// it.
    pub fn set_logger(&self, logger: impl Into<Arc<Logger>>) {
        if let Err(rejected) = self.logger.set(ArcSwap::new(logger.into())) {
            if let Some(slot) = self.logger.get() {
                slot.store(rejected.into_inner());
            }
        }
    }

    /// The current logger, created with the defaults if needed.
    pub fn logger(&self) -> Arc<Logger> {
        self.slot().load_full()
    }

    /// Replace the fields copied into every new builder.
    pub fn set_default_fields(&self, fields: Fields) {
        self.default_fields.store(Arc::new(fields));
    }

    /// A copy of the default fields.
    pub fn default_fields(&self) -> Fields {
        Fields::clone(&self.default_fields.load())
    }

    /// Render `args` and return a builder seeded with the default fields.
    ///
    /// Usually reached through the [`logf!`](crate::logf!) macro.
    pub fn logf(&self, args: fmt::Arguments<'_>) -> MessageBuilder {
        MessageBuilder::new(self.logger(), fmt::format(args)).add_data(self.default_fields())
    }

    fn slot(&self) -> &ArcSwap<Logger> {
        self.logger.get_or_init(|| {
            ArcSwap::from_pointee(
                Logger::new()
                    .with_level(DEFAULT_LOG_LEVEL)
                    .with_layout(JsonLayout::default()),
            )
        })
    }
}

static GLOBAL: LazyLock<Context> = LazyLock::new(Context::new);

/// The process-wide [`Context`].
pub fn global() -> &'static Context {
    &GLOBAL
}

/// Create the process-wide logger with `level` and `layout`, unless one already exists.
///
/// Call this before the first [`logf`] to choose the configuration; afterwards it has no effect.
/// Safe to call from many threads at once.
pub fn initialize_global_logger(level: Level, layout: impl Into<Box<dyn Layout>>) {
    GLOBAL.initialize(level, layout);
}

/// Replace the process-wide logger.
///
/// Meant for program startup: there is no coordination with log calls in flight beyond each
/// call seeing either the old or the new logger.
pub fn set_logger(logger: impl Into<Arc<Logger>>) {
    GLOBAL.set_logger(logger);
}

/// The process-wide logger, created with the defaults if needed.
pub fn global_logger() -> Arc<Logger> {
    GLOBAL.logger()
}

/// Replace the fields attached to every message built afterwards.
///
/// Typical entries are `app_name`, `app_version` and the like.
pub fn set_default_fields(fields: Fields) {
    GLOBAL.set_default_fields(fields);
}

/// A copy of the process-wide default fields.
pub fn default_fields() -> Fields {
    GLOBAL.default_fields()
}

/// Render `args` and return a builder seeded with the default fields and bound to the
/// process-wide logger. See [`logf!`](crate::logf!).
pub fn logf(args: fmt::Arguments<'_>) -> MessageBuilder {
    GLOBAL.logf(args)
}

#[cfg(test)]
mod tests {
    use std::sync::Barrier;

    use serde_json::json;

    use super::*;
    use crate::layout::TextLayout;
    use crate::recorder::Recorder;

    #[test]
    fn lazy_initialization_uses_defaults() {
        let context = Context::new();
        assert!(!context.is_initialized());

        let builder = context.logf(format_args!("x"));

        assert!(context.is_initialized());
        assert_eq!(builder.logger().level(), DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn initialize_is_idempotent() {
        let context = Context::new();
        context.initialize(Level::Warn, TextLayout::default());
        let first = context.logger();

        context.initialize(Level::Trace, JsonLayout::default());

        assert_eq!(context.logger().level(), Level::Warn);
        assert!(Arc::ptr_eq(&first, &context.logger()));
    }

    #[test]
    fn concurrent_first_use_initializes_once() {
        let context = Context::new();
        let barrier = Barrier::new(8);

        let loggers: Vec<Arc<Logger>> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|i| {
                    let context = &context;
                    let barrier = &barrier;
                    s.spawn(move || {
                        barrier.wait();
                        let level = Level::ALL[i % Level::ALL.len()];
                        context.initialize(level, TextLayout::default());
                        context.logger()
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        for logger in &loggers {
            assert!(Arc::ptr_eq(logger, &loggers[0]));
        }
    }

    #[test]
    fn logf_renders_once_and_copies_defaults() {
        let context = Context::new();
        let mut defaults = Fields::new();
        defaults.insert("foo".to_string(), json!("bar"));
        context.set_default_fields(defaults.clone());

        let builder = context.logf(format_args!("Hello {}", "World")).add("k", "v");

        assert_eq!(builder.message(), "Hello World");
        assert_eq!(builder.fields()["foo"], json!("bar"));
        assert_eq!(builder.fields()["k"], json!("v"));
        assert_eq!(builder.fields().len(), 2);

        let builder = builder.add("foo", "changed").add("more", 1);
        assert_eq!(builder.message(), "Hello World");
        assert_eq!(context.default_fields(), defaults);
        assert_eq!(context.logf(format_args!("next")).fields(), &defaults);
    }

    #[test]
    fn set_logger_routes_new_builders() {
        let context = Context::new();
        let old = Recorder::default();
        let new = Recorder::default();

        context.set_logger(Logger::new().with_append(old.clone()));
        let before = context.logf(format_args!("before"));
        context.set_logger(Logger::new().with_append(new.clone()));

        context.logf(format_args!("after")).info();
        before.info();

        assert_eq!(new.messages(), ["after"]);
        assert_eq!(old.messages(), ["before"]);
    }

    #[test]
    fn set_logger_before_first_use_wins_over_lazy_defaults() {
        let context = Context::new();
        context.set_logger(Logger::new().with_level(Level::Error));

        context.initialize(Level::Trace, TextLayout::default());

        assert_eq!(context.logger().level(), Level::Error);
    }

    #[test]
    fn set_log_level_reaches_the_shared_logger() {
        let context = Context::new();
        context.set_logger(Logger::new().with_level(Level::Trace));

        let _ = context.logf(format_args!("quiet")).set_log_level(Level::Error);

        assert_eq!(context.logger().level(), Level::Error);
    }
}
