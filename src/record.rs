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


//! The log record handed to layouts and appenders.

use std::time::SystemTime;

use crate::Level;
use crate::kv::Fields;

/// The payload of one emitted log message.
#[derive(Clone, Debug)]
pub struct Record<'a> {
    // the observed time
    now: SystemTime,

    level: Level,
    message: &'a str,

    // structural logging
    fields: &'a Fields,
}

impl<'a> Record<'a> {
    /// Create a record observed now.
    pub fn new(level: Level, message: &'a str, fields: &'a Fields) -> Self {
        Self {
            now: SystemTime::now(),
            level,
            message,
            fields,
        }
    }

    /// Override the observed time.
    pub fn with_time(mut self, now: SystemTime) -> Self {
        self.now = now;
        self
    }

    /// The observed time.
    pub fn time(&self) -> SystemTime {
        self.now
    }

    /// The severity of the message.
    pub fn level(&self) -> Level {
        self.level
    }

    /// The rendered message.
    pub fn message(&self) -> &'a str {
        self.message
    }

    /// The fields attached to the message.
    pub fn fields(&self) -> &'a Fields {
        self.fields
    }
}
