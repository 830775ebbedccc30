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

use std::io::Write;

use crate::Category;
use crate::Error;
use crate::Layout;
use crate::append::Append;
use crate::layout::TextLayout;
use crate::record::Record;

/// The standard stream a console line goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stream {
    /// Standard output.
    Stdout,
    /// Standard error.
    Stderr,
}

impl Stream {
    /// Error lines go to stderr, everything else to stdout.
    pub fn of(category: Category) -> Stream {
        match category {
            Category::Error => Stream::Stderr,
            _ => Stream::Stdout,
        }
    }
}

/// An appender that prints log records to the standard streams.
///
/// Records of [`Category::Error`] are written to stderr, all others to stdout. Each line is
/// written while holding the stream lock, so concurrent lines do not interleave.
///
/// # Examples
///
/// ```
/// use logdispatch::append::Console;
/// use logdispatch::layout::TextLayout;
///
/// let console = Console::default().with_layout(TextLayout::console().no_color());
/// ```
#[derive(Debug)]
pub struct Console {
    layout: Box<dyn Layout>,
}

impl Default for Console {
    fn default() -> Self {
        Self {
            layout: Box::new(TextLayout::console()),
        }
    }
}

impl Console {
    /// Set the layout for the [`Console`] appender.
    ///
    /// Default to [`TextLayout::console`].
    pub fn with_layout(mut self, layout: impl Into<Box<dyn Layout>>) -> Self {
        self.layout = layout.into();
        self
    }
}

impl Append for Console {
    fn append(&self, record: &Record) -> Result<(), Error> {
        let mut bytes = self.layout.format(record)?;
        bytes.push(b'\n');
        match Stream::of(record.category()) {
            Stream::Stdout => std::io::stdout().lock().write_all(&bytes),
            Stream::Stderr => std::io::stderr().lock().write_all(&bytes),
        }
        .map_err(Error::from_io_error)
    }

    fn flush(&self) -> Result<(), Error> {
        std::io::stdout().flush().map_err(Error::from_io_error)?;
        std::io::stderr().flush().map_err(Error::from_io_error)?;
        Ok(())
    }
}
