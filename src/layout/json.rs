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


use jiff::Timestamp;
use jiff::tz::TimeZone;
use serde::Serialize;

use crate::Error;
use crate::kv::Fields;
use crate::layout::Layout;
use crate::record::Record;

/// A JSON layout for formatting log records.
///
/// Output format:
///
/// ```json
/// {"timestamp":"2024-08-11T22:44:57.172051+08:00","level":"INFO","message":"Hello World","fields":{"baz":"qux","foo":"bar"}}
/// {"timestamp":"2024-08-11T22:44:57.172187+08:00","level":"WARN","message":"disk almost full"}
/// ```
///
/// The `fields` object is omitted when the record carries no fields.
///
/// # Examples
///
/// ```
/// use klogger::layout::JsonLayout;
///
/// let json_layout = JsonLayout::default();
/// ```
#[derive(Default, Debug, Clone)]
pub struct JsonLayout {
    tz: Option<TimeZone>,
    disable_timestamp: bool,
}

impl JsonLayout {
    /// Set the timezone for timestamps.
    ///
    /// # Examples
    ///
    /// ```
    /// use jiff::tz::TimeZone;
    /// use klogger::layout::JsonLayout;
    ///
    /// let layout = JsonLayout::default().timezone(TimeZone::UTC);
    /// ```
    pub fn timezone(mut self, tz: TimeZone) -> Self {
        self.tz = Some(tz);
        self
    }

    /// Omit the `timestamp` key.
    pub fn disable_timestamp(mut self) -> Self {
        self.disable_timestamp = true;
        self
    }
}

#[derive(Debug, Clone, Serialize)]
struct RecordLine<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<String>,
    level: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "is_empty")]
    fields: &'a Fields,
}

fn is_empty(fields: &&Fields) -> bool {
    fields.is_empty()
}

impl Layout for JsonLayout {
    fn format(&self, record: &Record) -> Result<Vec<u8>, Error> {
        let timestamp = if self.disable_timestamp {
            None
        } else {
            let ts = Timestamp::try_from(record.time())
                .map_err(|err| Error::new("record time is out of range").with_source(err))?;
            let tz = self.tz.clone().unwrap_or_else(TimeZone::system);
            let offset = tz.to_offset(ts);
            Some(format!("{:.6}", ts.display_with_offset(offset)))
        };

        let record_line = RecordLine {
            timestamp,
            level: record.level().name(),
            message: record.message(),
            fields: record.fields(),
        };

        serde_json::to_vec(&record_line).map_err(Error::from_json_error)
    }
}
