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


//! An in-memory appender for unit tests.

use std::sync::Arc;
use std::sync::Mutex;

use crate::Error;
use crate::Level;
use crate::append::Append;
use crate::kv::Fields;
use crate::layout::Layout;
use crate::record::Record;

#[derive(Debug, Clone)]
pub(crate) struct Recorded {
    pub level: Level,
    pub message: String,
    pub fields: Fields,
    pub line: String,
}

#[derive(Debug, Default)]
struct Inner {
    records: Vec<Recorded>,
    flushes: usize,
}

/// Keeps every appended record; clones share the same storage.
#[derive(Debug, Clone, Default)]
pub(crate) struct Recorder {
    inner: Arc<Mutex<Inner>>,
}

impl Recorder {
    pub(crate) fn records(&self) -> Vec<Recorded> {
        self.inner.lock().unwrap().records.clone()
    }

    pub(crate) fn messages(&self) -> Vec<String> {
        self.records().into_iter().map(|r| r.message).collect()
    }

    pub(crate) fn levels(&self) -> Vec<Level> {
        self.records().into_iter().map(|r| r.level).collect()
    }

    pub(crate) fn flushes(&self) -> usize {
        self.inner.lock().unwrap().flushes
    }
}

impl Append for Recorder {
    fn append(&self, record: &Record, layout: &dyn Layout) -> Result<(), Error> {
        let line = String::from_utf8_lossy(&layout.format(record)?).into_owned();
        self.inner.lock().unwrap().records.push(Recorded {
            level: record.level(),
            message: record.message().to_string(),
            fields: record.fields().clone(),
            line,
        });
        Ok(())
    }

    fn flush(&self) -> Result<(), Error> {
        self.inner.lock().unwrap().flushes += 1;
        Ok(())
    }
}
