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

use std::path::PathBuf;

use crate::Append;
use crate::Category;
use crate::Dispatcher;
use crate::Sink;
use crate::append;
use crate::dispatcher::set_default_dispatcher;
use crate::filter::CategoryFilter;

/// A builder for configuring a [`Dispatcher`].
///
/// Defaults: [`Sink::Console`], categories `{All}`, a [`Console`](append::Console) appender and
/// a [`File`](append::File) appender writing to [`DEFAULT_LOG_FILE`](append::DEFAULT_LOG_FILE).
///
/// # Examples
///
/// ```
/// use logdispatch::Category;
/// use logdispatch::Dispatcher;
/// use logdispatch::Sink;
///
/// let dispatcher = Dispatcher::builder()
///     .sink(Sink::File)
///     .categories([Category::Error, Category::Success])
///     .log_file("my_service.log")
///     .build();
/// ```
#[must_use = "call `build` to create the dispatcher or `apply` to install it globally"]
#[derive(Debug)]
pub struct DispatcherBuilder {
    sink: Sink,
    filter: CategoryFilter,
    console: Box<dyn Append>,
    file: Box<dyn Append>,
}

impl Default for DispatcherBuilder {
    fn default() -> Self {
        Self {
            sink: Sink::default(),
            filter: CategoryFilter::default(),
            console: Box::new(append::Console::default()),
            file: Box::new(append::File::default()),
        }
    }
}

impl DispatcherBuilder {
    /// Set the initial sink.
    pub fn sink(mut self, sink: Sink) -> Self {
        self.sink = sink;
        self
    }

    /// Set the initial categories, replacing the default `{All}`.
    pub fn categories(mut self, categories: impl IntoIterator<Item = Category>) -> Self {
        self.filter = CategoryFilter::new(categories);
        self
    }

    /// Set the initial category filter.
    pub fn filter(mut self, filter: CategoryFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Set the appender used when the sink is [`Sink::Console`].
    pub fn console(mut self, append: impl Into<Box<dyn Append>>) -> Self {
        self.console = append.into();
        self
    }

    /// Set the appender used when the sink is [`Sink::File`].
    pub fn file(mut self, append: impl Into<Box<dyn Append>>) -> Self {
        self.file = append.into();
        self
    }

    /// Write file-sink lines to `path` with the default file layout.
    pub fn log_file(self, path: impl Into<PathBuf>) -> Self {
        self.file(append::File::new(path))
    }

    /// Build the [`Dispatcher`].
    pub fn build(self) -> Dispatcher {
        Dispatcher::new(self.sink, self.filter, self.console, self.file)
    }

    /// Install the built dispatcher as the default dispatcher.
    ///
    /// # Errors
    ///
    /// Returns the dispatcher back if the default dispatcher has already been initialized,
    /// either by an earlier call or by a log call that used the lazily-created default.
    pub fn try_apply(self) -> Result<(), Dispatcher> {
        set_default_dispatcher(self.build())
    }

    /// Install the built dispatcher as the default dispatcher.
    ///
    /// This should be called early in the execution of a program, before the first log call.
    ///
    /// # Panics
    ///
    /// Panics if the default dispatcher has already been initialized.
    pub fn apply(self) {
        if self.try_apply().is_err() {
            panic!("DispatcherBuilder::apply must be called before the default dispatcher is used");
        }
    }
}
