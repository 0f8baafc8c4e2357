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


//! An example of a custom layout.

use klogger::Error;
use klogger::Level;
use klogger::Logger;
use klogger::Record;
use klogger::append;
use klogger::layout::Layout;
use klogger::logf;

#[derive(Debug)]
struct AlertLayout;

impl Layout for AlertLayout {
    fn format(&self, record: &Record) -> Result<Vec<u8>, Error> {
        let keys: Vec<&str> = record.fields().keys().map(String::as_str).collect();
        Ok(format!(
            "[Alert:{}] {} ({})",
            record.level(),
            record.message(),
            keys.join(", ")
        )
        .into_bytes())
    }
}

fn main() {
    klogger::set_logger(
        Logger::new()
            .with_level(Level::Debug)
            .with_layout(AlertLayout)
            .with_append(append::Stdout::default()),
    );

    logf!("Hello {}!", "error").add("code", 500).error();
    logf!("Hello {}!", "warn").warn();
    logf!("Hello {}!", "info").add("user", "ada").add("tries", 2).info();
    logf!("Hello {}!", "debug").debug();
}
