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


use std::borrow::Cow;

use crate::Error;
use crate::append::Append;
use crate::kv::display_value;
use crate::layout::Layout;
use crate::record::Record;

/// An appender that forwards records to the logger installed in the [`log`] crate.
///
/// Levels are mapped with `From<Level> for log::Level`, so `FATAL` and `PANIC` records arrive as
/// `ERROR`. Fields are passed as key-values rendered to text. The logger's layout is not used:
/// formatting is up to the `log` implementation.
///
/// # Examples
///
/// ```
/// use klogger::Logger;
/// use klogger::append::Facade;
///
/// let logger = Logger::new().with_append(Facade::new("my_app"));
/// ```
#[derive(Debug, Clone)]
pub struct Facade {
    target: String,
}

impl Default for Facade {
    fn default() -> Self {
        Self::new(env!("CARGO_PKG_NAME"))
    }
}

impl Facade {
    /// Create a facade appender that logs under the given target.
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }
}

impl Append for Facade {
    fn append(&self, record: &Record, _: &dyn Layout) -> Result<(), Error> {
        let rendered: Vec<(&str, Cow<'_, str>)> = record
            .fields()
            .iter()
            .map(|(key, value)| (key.as_str(), display_value(value)))
            .collect();
        let kvs: Vec<(&str, &str)> = rendered
            .iter()
            .map(|(key, value)| (*key, value.as_ref()))
            .collect();
        let kvs = kvs.as_slice();

        log::logger().log(
            &log::Record::builder()
                .args(format_args!("{}", record.message()))
                .level(record.level().into())
                .target(&self.target)
                .key_values(&kvs)
                .build(),
        );
        Ok(())
    }

    fn flush(&self) -> Result<(), Error> {
        log::logger().flush();
        Ok(())
    }
}
