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


use crate::Level;
use crate::kv::Fields;
use crate::logger::Logger;

/// A [`Logger`] bound to a set of fields, with one emit method per level.
///
/// Created by [`Logger::with_fields`].
#[derive(Debug, Clone, Copy)]
pub struct Entry<'a> {
    logger: &'a Logger,
    fields: &'a Fields,
}

impl<'a> Entry<'a> {
    pub(super) fn new(logger: &'a Logger, fields: &'a Fields) -> Self {
        Self { logger, fields }
    }

    /// The fields this entry attaches.
    pub fn fields(&self) -> &'a Fields {
        self.fields
    }

    /// Emit `message` at `level`.
    pub fn log(&self, level: Level, message: &str) {
        self.logger.log(level, message, self.fields);
    }

    /// Emit at [`Level::Trace`].
    pub fn trace(&self, message: &str) {
        self.log(Level::Trace, message);
    }

    /// Emit at [`Level::Debug`].
    pub fn debug(&self, message: &str) {
        self.log(Level::Debug, message);
    }

    /// Emit at [`Level::Info`].
    pub fn info(&self, message: &str) {
        self.log(Level::Info, message);
    }

    /// Emit at [`Level::Warn`].
    pub fn warn(&self, message: &str) {
        self.log(Level::Warn, message);
    }

    /// Emit at [`Level::Error`].
    pub fn error(&self, message: &str) {
        self.log(Level::Error, message);
    }

    /// Emit at [`Level::Fatal`], then call the logger's exit handler with status `1`.
    pub fn fatal(&self, message: &str) {
        self.log(Level::Fatal, message);
    }

    /// Emit at [`Level::Panic`], then panic with `message`.
    pub fn panic(&self, message: &str) {
        self.log(Level::Panic, message);
    }
}
