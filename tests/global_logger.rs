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


//! The process-wide surface shares one state per test binary, so it is exercised as a single
//! sequence.

use std::sync::Arc;
use std::sync::Mutex;

use klogger::Error;
use klogger::Fields;
use klogger::Level;
use klogger::Logger;
use klogger::Record;
use klogger::append::Append;
use klogger::layout::JsonLayout;
use klogger::layout::Layout;
use klogger::layout::TextLayout;
use klogger::logf;
use serde_json::json;

#[derive(Debug, Clone, Default)]
struct Lines(Arc<Mutex<Vec<String>>>);

impl Lines {
    fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.0.lock().unwrap())
    }
}

impl Append for Lines {
    fn append(&self, record: &Record, layout: &dyn Layout) -> Result<(), Error> {
        let bytes = layout.format(record)?;
        self.0
            .lock()
            .unwrap()
            .push(String::from_utf8(bytes).unwrap());
        Ok(())
    }
}

#[test]
fn global_logger_lifecycle() {
    let mut defaults = Fields::new();
    defaults.insert("foo".to_string(), json!("bar"));
    klogger::set_default_fields(defaults.clone());

    // the first initialization wins
    klogger::initialize_global_logger(Level::Warn, TextLayout::default().no_color());
    klogger::initialize_global_logger(Level::Trace, JsonLayout::default());
    assert_eq!(klogger::global_logger().level(), Level::Warn);

    // builders copy the defaults and render eagerly
    let builder = logf!("Hello {}", "World").add("k", "v");
    assert_eq!(builder.message(), "Hello World");
    let mut expected = defaults.clone();
    expected.insert("k".to_string(), json!("v"));
    assert_eq!(builder.fields(), &expected);
    assert_eq!(klogger::default_fields(), defaults);

    // a replacement logger receives everything built afterwards
    let lines = Lines::default();
    klogger::set_logger(
        Logger::new()
            .with_level(Level::Info)
            .with_layout(JsonLayout::default().disable_timestamp())
            .with_append(lines.clone()),
    );

    logf!("Hello {}", "World").add("k", "v").debug().info();
    logf!("defaults overridden").add_data([("foo", json!(null))]).warn();
    builder.info();

    assert_eq!(
        lines.take(),
        [
            r#"{"level":"INFO","message":"Hello World","fields":{"foo":"bar","k":"v"}}"#,
            r#"{"level":"WARN","message":"defaults overridden","fields":{"foo":null}}"#,
        ]
    );

    // set_log_level changes the shared logger for later builders
    let _ = logf!("raising the bar").set_log_level(Level::Error);
    assert_eq!(klogger::global_logger().level(), Level::Error);
    logf!("dropped").warn();
    logf!("kept").error();
    assert_eq!(
        lines.take(),
        [r#"{"level":"ERROR","message":"kept","fields":{"foo":"bar"}}"#]
    );

    // replacing the defaults only affects builders created afterwards
    let before = logf!("before");
    klogger::set_default_fields(Fields::new());
    assert_eq!(before.fields(), &defaults);
    assert!(logf!("after").fields().is_empty());
}
