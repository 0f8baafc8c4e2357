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


//! Klogger is a small convenience layer for structured logging: format a message, attach
//! key-value fields, then emit it at a severity.
//!
//! # Overview
//!
//! - [`logf!`] renders a message and returns a [`MessageBuilder`] seeded with the process-wide
//!   default fields.
//! - The builder collects fields with [`add`](MessageBuilder::add),
//!   [`add_data`](MessageBuilder::add_data) and [`add_error`](MessageBuilder::add_error), and
//!   emits with one of [`debug`](MessageBuilder::debug), [`info`](MessageBuilder::info),
//!   [`warn`](MessageBuilder::warn), [`error`](MessageBuilder::error),
//!   [`fatal`](MessageBuilder::fatal) or [`panic`](MessageBuilder::panic).
//! - Messages go to one process-wide [`Logger`], created once by [`initialize_global_logger`]
//!   or lazily on first use, and replaceable with [`set_logger`].
//! - [`parse_level`] turns configuration text into a [`Level`], defaulting to `Info`.
//!
//! # Examples
//!
//! ```
//! use klogger::Level;
//! use klogger::layout::TextLayout;
//!
//! let mut fields = klogger::Fields::new();
//! fields.insert("app".to_string(), "billing".into());
//! klogger::set_default_fields(fields);
//!
//! klogger::initialize_global_logger(Level::Info, TextLayout::default().no_color());
//!
//! klogger::logf!("Hello {}", "World").add("request_id", 42).info();
//!
//! if let Err(err) = std::fs::read_to_string("/definitely/not/here") {
//!     klogger::logf!("cannot read settings").add_error(&err).warn();
//! }
//! ```
//!
//! Routing into the [`log`] crate instead of writing directly:
//!
//! ```
//! use klogger::Logger;
//! use klogger::append::Facade;
//!
//! klogger::set_logger(Logger::new().with_append(Facade::new("billing")));
//! klogger::logf!("forwarded to the installed log implementation").info();
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]

pub mod append;
pub mod config;
pub mod layout;

mod builder;
mod context;
mod error;
mod kv;
mod level;
mod logger;
mod record;

#[cfg(test)]
mod recorder;

pub use self::builder::MessageBuilder;
pub use self::context::Context;
pub use self::context::DEFAULT_LOG_LEVEL;
pub use self::context::default_fields;
pub use self::context::global;
pub use self::context::global_logger;
pub use self::context::initialize_global_logger;
pub use self::context::logf;
pub use self::context::set_default_fields;
pub use self::context::set_logger;
pub use self::error::Error;
pub use self::kv::ERROR_KEY;
pub use self::kv::Fields;
pub use self::kv::STACK_KEY;
pub use self::kv::Value;
pub use self::level::Level;
pub use self::level::parse_level;
pub use self::level::parse_level_filter;
pub use self::logger::Entry;
pub use self::logger::Logger;
pub use self::record::Record;

/// Render a message with [`format!`] syntax and return a [`MessageBuilder`] bound to the
/// process-wide logger.
///
/// The message is rendered immediately, exactly once. The builder starts with a copy of the
/// process-wide default fields; the first call also creates the process-wide logger if
/// [`initialize_global_logger`] has not run.
///
/// ```
/// let builder = klogger::logf!("Hello {}", "World");
/// assert_eq!(builder.message(), "Hello World");
/// ```
#[macro_export]
macro_rules! logf {
    ($($arg:tt)+) => {
        $crate::logf(::std::format_args!($($arg)+))
    };
}
