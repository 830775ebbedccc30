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

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::PoisonError;

use crate::Error;
use crate::Layout;
use crate::append::Append;
use crate::append::Stream;
use crate::layout::TextLayout;
use crate::record::Record;

/// A line captured by the [`Testing`] appender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captured {
    /// The stream the line would have gone to on the console.
    pub stream: Stream,
    /// The formatted line, without its trailing newline.
    pub line: String,
}

/// An appender that keeps formatted lines in memory, so tests can assert on them.
///
/// Clones share the same buffer: hand one clone to a
/// [`DispatcherBuilder`](crate::DispatcherBuilder) and keep the other to read the output.
///
/// # Examples
///
/// ```
/// use logdispatch::Dispatcher;
/// use logdispatch::append::Testing;
///
/// let console = Testing::default();
/// let dispatcher = Dispatcher::builder().console(console.clone()).build();
///
/// dispatcher.info(&[&"a", &1]);
/// assert_eq!(console.lines(), vec!["a 1".to_string()]);
/// ```
#[derive(Debug, Clone)]
pub struct Testing {
    layout: Arc<dyn Layout>,
    captured: Arc<Mutex<Vec<Captured>>>,
}

impl Default for Testing {
    fn default() -> Self {
        Self::with_layout(TextLayout::console().no_color())
    }
}

impl Testing {
    /// Create a [`Testing`] appender that formats with `layout`.
    ///
    /// The default layout is [`TextLayout::console`] without color.
    pub fn with_layout(layout: impl Layout) -> Self {
        Self {
            layout: Arc::new(layout),
            captured: Arc::new(Mutex::new(vec![])),
        }
    }

    /// Every captured line with its stream, oldest first.
    pub fn captured(&self) -> Vec<Captured> {
        self.captured
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Every captured line, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.captured().into_iter().map(|c| c.line).collect()
    }

    /// Drop every captured line.
    pub fn clear(&self) {
        self.captured
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Append for Testing {
    fn append(&self, record: &Record) -> Result<(), Error> {
        let bytes = self.layout.format(record)?;
        let captured = Captured {
            stream: Stream::of(record.category()),
            line: String::from_utf8_lossy(&bytes).into_owned(),
        };
        self.captured
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(captured);
        Ok(())
    }
}
