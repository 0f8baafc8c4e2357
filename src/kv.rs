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


//! Key-value fields attached to log messages.

use std::borrow::Cow;

/// A field value.
///
/// Values are opaque to the builder; layouts decide how to render them.
pub type Value = serde_json::Value;

/// A set of fields, kept sorted by key so rendered output is stable.
pub type Fields = serde_json::Map<String, Value>;

/// The field [`MessageBuilder::add_error`](crate::MessageBuilder::add_error) stores the error
/// text under.
pub const ERROR_KEY: &str = "error";

/// The field [`MessageBuilder::add_error`](crate::MessageBuilder::add_error) stores the captured
/// backtrace under.
pub const STACK_KEY: &str = "stack";

/// Render a value as plain text: strings without quotes, everything else as JSON.
pub(crate) fn display_value(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        other => Cow::Owned(other.to_string()),
    }
}
