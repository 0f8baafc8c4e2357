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


use std::fmt::Write;

use colored::Color;
use colored::ColoredString;
use colored::Colorize;
use jiff::Timestamp;
use jiff::tz::TimeZone;

use crate::Error;
use crate::Level;
use crate::kv::display_value;
use crate::layout::Layout;
use crate::record::Record;

/// A layout that formats log records as optionally colored text.
///
/// Output format:
///
/// ```text
/// 2024-08-11T22:44:57.172105+08:00  INFO Hello World baz=qux foo=bar
/// 2024-08-11T22:44:57.172219+08:00  WARN disk almost full free_mb=112
/// 2024-08-11T22:44:57.172276+08:00 ERROR request failed error="connection reset"
/// ```
///
/// Fields follow the message in key order. Values containing whitespace, `=` or `"` are quoted
/// and escaped.
///
/// # Examples
///
/// ```
/// use jiff::tz::TimeZone;
/// use klogger::layout::TextLayout;
///
/// let layout = TextLayout::default().no_color().timezone(TimeZone::UTC);
/// ```
#[derive(Debug, Clone)]
pub struct TextLayout {
    colors: LevelColor,
    no_color: bool,
    disable_timestamp: bool,
    timezone: TimeZone,
}

impl Default for TextLayout {
    fn default() -> Self {
        Self {
            colors: LevelColor::default(),
            no_color: false,
            disable_timestamp: false,
            timezone: TimeZone::system(),
        }
    }
}

impl TextLayout {
    /// Customize the colors of each level.
    ///
    /// No effect if `no_color` is set.
    pub fn colors(mut self, colors: LevelColor) -> Self {
        self.colors = colors;
        self
    }

    /// Disable colored output.
    pub fn no_color(mut self) -> Self {
        self.no_color = true;
        self
    }

    /// Omit the timestamp from every line.
    pub fn disable_timestamp(mut self) -> Self {
        self.disable_timestamp = true;
        self
    }

    /// Set the timezone for timestamps.
    ///
    /// Defaults to the system timezone if not set.
    pub fn timezone(mut self, tz: TimeZone) -> Self {
        self.timezone = tz;
        self
    }

    fn format_level(&self, level: Level) -> ColoredString {
        let name = ColoredString::from(level.name());
        if self.no_color {
            name
        } else {
            name.color(self.colors.color_of(level))
        }
    }
}

/// Colors for the different log levels.
#[derive(Debug, Clone)]
pub struct LevelColor {
    /// Color for panic level logs.
    pub panic: Color,
    /// Color for fatal level logs.
    pub fatal: Color,
    /// Color for error level logs.
    pub error: Color,
    /// Color for warn level logs.
    pub warn: Color,
    /// Color for info level logs.
    pub info: Color,
    /// Color for debug level logs.
    pub debug: Color,
    /// Color for trace level logs.
    pub trace: Color,
}

impl Default for LevelColor {
    fn default() -> Self {
        Self {
            panic: Color::BrightMagenta,
            fatal: Color::BrightRed,
            error: Color::Red,
            warn: Color::Yellow,
            info: Color::Green,
            debug: Color::Blue,
            trace: Color::Magenta,
        }
    }
}

impl LevelColor {
    fn color_of(&self, level: Level) -> Color {
        match level {
            Level::Panic => self.panic,
            Level::Fatal => self.fatal,
            Level::Error => self.error,
            Level::Warn => self.warn,
            Level::Info => self.info,
            Level::Debug => self.debug,
            Level::Trace => self.trace,
        }
    }
}

fn needs_quoting(value: &str) -> bool {
    value.is_empty() || value.contains(|c: char| c.is_whitespace() || c == '=' || c == '"')
}

impl Layout for TextLayout {
    fn format(&self, record: &Record) -> Result<Vec<u8>, Error> {
        let mut text = String::new();

        if !self.disable_timestamp {
            let ts = Timestamp::try_from(record.time())
                .map_err(|err| Error::new("record time is out of range").with_source(err))?;
            let offset = self.timezone.to_offset(ts);
            write!(&mut text, "{:.6} ", ts.display_with_offset(offset))
                .map_err(Error::from_fmt_error)?;
        }

        let level = self.format_level(record.level());
        write!(&mut text, "{level:>5} {}", record.message()).map_err(Error::from_fmt_error)?;

        for (key, value) in record.fields() {
            let value = display_value(value);
            let written = if needs_quoting(&value) {
                write!(&mut text, " {key}=\"{}\"", value.escape_debug())
            } else {
                write!(&mut text, " {key}={value}")
            };
            written.map_err(Error::from_fmt_error)?;
        }

        Ok(text.into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;
    use std::time::UNIX_EPOCH;

    use serde_json::json;

    use super::*;
    use crate::kv::Fields;

    fn fields() -> Fields {
        let mut fields = Fields::new();
        fields.insert("foo".to_string(), json!("bar"));
        fields.insert("attempt".to_string(), json!(3));
        fields.insert("reason".to_string(), json!("timed out"));
        fields
    }

    #[test]
    fn plain_line_with_fields() {
        let fields = fields();
        let record = Record::new(Level::Error, "Hello World", &fields);
        let layout = TextLayout::default().no_color().disable_timestamp();

        let line = String::from_utf8(layout.format(&record).unwrap()).unwrap();
        insta::assert_snapshot!(line, @r#"ERROR Hello World attempt=3 foo=bar reason="timed out""#);
    }

    #[test]
    fn empty_and_multiline_values_are_quoted() {
        let mut fields = Fields::new();
        fields.insert("empty".to_string(), json!(""));
        fields.insert("stack".to_string(), json!("a\nb"));
        let record = Record::new(Level::Fatal, "oops", &fields);
        let layout = TextLayout::default().no_color().disable_timestamp();

        let line = String::from_utf8(layout.format(&record).unwrap()).unwrap();
        assert_eq!(line, r#"FATAL oops empty="" stack="a\nb""#);
    }

    #[test]
    fn timestamp_uses_configured_timezone() {
        let fields = Fields::new();
        let record = Record::new(Level::Info, "tick", &fields)
            .with_time(UNIX_EPOCH + Duration::from_secs(1_700_000_000));
        let layout = TextLayout::default().no_color().timezone(TimeZone::UTC);

        let line = String::from_utf8(layout.format(&record).unwrap()).unwrap();
        assert!(line.starts_with("2023-11-14T22:13:20"), "{line}");
        assert!(line.ends_with(" INFO tick"), "{line}");
    }
}
