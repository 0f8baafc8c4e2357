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


use klogger::Fields;
use klogger::Level;
use klogger::Logger;
use klogger::layout::TextLayout;
use klogger::logf;

fn main() {
    // fields added to every message
    let mut defaults = Fields::new();
    defaults.insert("foo".to_string(), "bar".into());
    defaults.insert("baz".to_string(), "qux".into());
    klogger::set_default_fields(defaults);

    // choose the configuration before the first message
    klogger::initialize_global_logger(Level::Warn, TextLayout::default().disable_timestamp());

    logf!("Hello {}", "World").warn();

    // filtered out: the logger only takes WARN and above
    logf!("Hello {}", "World").add("foo", "overridden").info();

    if let Err(err) = "forty-two".parse::<u32>() {
        logf!("cannot parse the answer").add_error(&err).error();
    }

    // swap the logger; builders created from now on use the new one
    klogger::set_logger(Logger::new().with_level(Level::Info));
    logf!("Hello from a new logger!").info();
}
