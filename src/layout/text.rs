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

use std::fmt;
use std::fmt::Write;

use crate::Category;
use crate::Error;
use crate::color::CategoryColor;
use crate::layout::Layout;
use crate::record::Record;

/// The timestamp prefix of file lines, always rendered in UTC.
const TIMESTAMP_FORMAT: &str = "[%Y-%m-%d %H:%M:%S]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flavor {
    Console,
    File,
}

/// A layout that formats log records as space-separated text.
///
/// Console output (the default):
///
/// ```text
/// server started on 8080
/// [DEBUG]: app::serve : accepted connection 42
/// [SUCCESS]: app::serve
/// [ERROR]: src/main.rs : 10 : app::main : boom
/// ```
///
/// File output, see [`TextLayout::file`]:
///
/// ```text
/// [2024-08-11 14:44:57] server started on 8080
/// [2024-08-11 14:44:57] [DEBUG]: app::serve : accepted connection 42
/// [2024-08-11 14:44:57] [SUCCESS]: app::serve
/// [2024-08-11 14:44:57] [ERROR]: 10 : app::main : boom
/// ```
///
/// Console tags are colored: debug yellow, success green, error red. Customize them with
/// [`TextLayout::colors`] or drop them with [`TextLayout::no_color`]. File lines never carry
/// color and start with the UTC time of the record.
#[derive(Debug, Clone)]
pub struct TextLayout {
    colors: CategoryColor,
    no_color: bool,
    flavor: Flavor,
}

impl Default for TextLayout {
    fn default() -> Self {
        Self::console()
    }
}

impl TextLayout {
    /// The layout of console lines: colored tags, full error location, no timestamp.
    pub fn console() -> Self {
        Self {
            colors: CategoryColor::default(),
            no_color: false,
            flavor: Flavor::Console,
        }
    }

    /// The layout of file lines: UTC timestamp, plain tags, error line without file name.
    pub fn file() -> Self {
        Self {
            colors: CategoryColor::default(),
            no_color: true,
            flavor: Flavor::File,
        }
    }

    /// Customize the tag colors.
    ///
    /// # Examples
    ///
    /// ```
    /// use colored::Color;
    /// use logdispatch::CategoryColor;
    /// use logdispatch::layout::TextLayout;
    ///
    /// let layout = TextLayout::console().colors(CategoryColor {
    ///     debug: Color::Blue,
    ///     ..Default::default()
    /// });
    /// ```
    pub fn colors(mut self, colors: CategoryColor) -> Self {
        self.colors = colors;
        self
    }

    /// Disable colored tags.
    pub fn no_color(mut self) -> Self {
        self.no_color = true;
        self
    }

    fn write_line(&self, record: &Record, line: &mut Line) -> fmt::Result {
        let category = record.category();
        let location = record.location();

        if self.flavor == Flavor::File {
            line.field(record.time().strftime(TIMESTAMP_FORMAT))?;
        }

        if let Some(tag) = self.colors.colorize_tag(self.no_color, category) {
            line.field(tag)?;
        }

        match category {
            Category::Debug => {
                line.field(location.function_name())?;
                line.field(":")?;
            }
            Category::Error => {
                if self.flavor == Flavor::Console {
                    line.field(location.file())?;
                    line.field(":")?;
                }
                line.field(location.line())?;
                line.field(":")?;
                line.field(location.function_name())?;
                line.field(":")?;
            }
            Category::Success => {
                line.field(location.function_name())?;
                // success lines carry no caller items
                return Ok(());
            }
            Category::Info | Category::All => {}
        }

        for item in record.items() {
            line.field(item)?;
        }
        Ok(())
    }
}

impl Layout for TextLayout {
    fn format(&self, record: &Record) -> Result<Vec<u8>, Error> {
        let mut line = Line::default();
        self.write_line(record, &mut line)
            .map_err(Error::from_fmt_error)?;
        Ok(line.buf.into_bytes())
    }
}

/// Joins fields with a single space.
#[derive(Default)]
struct Line {
    buf: String,
    started: bool,
}

impl Line {
    fn field(&mut self, value: impl fmt::Display) -> fmt::Result {
        if self.started {
            self.buf.push(' ');
        }
        self.started = true;
        write!(self.buf, "{value}")
    }
}
