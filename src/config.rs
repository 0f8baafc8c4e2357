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


//! Deserializable logger configuration.

use serde::Deserialize;

use crate::Context;
use crate::Level;
use crate::Logger;
use crate::kv::Fields;
use crate::layout::JsonLayout;
use crate::layout::Layout;
use crate::layout::TextLayout;

/// The output format of the logger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// [`TextLayout`].
    Text,
    /// [`JsonLayout`].
    #[default]
    Json,
}

/// Logger settings as they appear in an application's configuration file.
///
/// Every key is optional. `level` goes through [`parse_level`](crate::parse_level), so an
/// unknown value means `info` rather than an error.
///
/// ```
/// use klogger::Level;
/// use klogger::config::Config;
/// use klogger::config::Format;
///
/// let config: Config = serde_json::from_str(
///     r#"{"level": " Warning ", "format": "text", "default_fields": {"app": "billing"}}"#,
/// )
/// .unwrap();
///
/// assert_eq!(config.level, Level::Warn);
/// assert_eq!(config.format, Format::Text);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Minimum level of the logger.
    pub level: Level,
    /// Output format.
    pub format: Format,
    /// Disable colors in text output.
    pub no_color: bool,
    /// Omit timestamps.
    pub disable_timestamp: bool,
    /// Fields attached to every message.
    pub default_fields: Fields,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: crate::DEFAULT_LOG_LEVEL,
            format: Format::default(),
            no_color: false,
            disable_timestamp: false,
            default_fields: Fields::new(),
        }
    }
}

impl Config {
    /// The layout this configuration describes.
    pub fn layout(&self) -> Box<dyn Layout> {
        match self.format {
            Format::Text => {
                let mut layout = TextLayout::default();
                if self.no_color {
                    layout = layout.no_color();
                }
                if self.disable_timestamp {
                    layout = layout.disable_timestamp();
                }
                Box::new(layout)
            }
            Format::Json => {
                let mut layout = JsonLayout::default();
                if self.disable_timestamp {
                    layout = layout.disable_timestamp();
                }
                Box::new(layout)
            }
        }
    }

    /// A standalone logger writing to stderr with this configuration.
    pub fn build_logger(&self) -> Logger {
        Logger::new()
            .with_level(self.level)
            .with_layout(self.layout())
    }

    /// Install the default fields and initialize the process-wide logger.
    ///
    /// The logger part has no effect if the process-wide logger already exists.
    pub fn apply(self) {
        self.apply_to(crate::global());
    }

    /// Install the default fields and initialize the logger of `context`.
    pub fn apply_to(self, context: &Context) {
        let layout = self.layout();
        context.set_default_fields(self.default_fields);
        context.initialize(self.level, layout);
    }
}
