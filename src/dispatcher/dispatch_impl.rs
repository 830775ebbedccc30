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

use std::fmt::Display;
use std::sync::OnceLock;
use std::sync::PoisonError;
use std::sync::RwLock;

use crate::Append;
use crate::Category;
use crate::Sink;
use crate::dispatcher::DispatcherBuilder;
use crate::filter::CategoryFilter;
use crate::record::Location;
use crate::record::Record;

static DEFAULT_DISPATCHER: OnceLock<Dispatcher> = OnceLock::new();

/// Return the default dispatcher, creating it with default settings on first use.
///
/// The default dispatcher is the one targeted by the [`info!`](crate::info),
/// [`debug!`](crate::debug), [`success!`](crate::success) and [`error!`](crate::error) macros.
pub fn default_dispatcher() -> &'static Dispatcher {
    DEFAULT_DISPATCHER.get_or_init(Dispatcher::default)
}

/// Install `dispatcher` as the default dispatcher.
///
/// # Errors
///
/// Returns `dispatcher` back if the default dispatcher has already been initialized.
pub fn set_default_dispatcher(dispatcher: Dispatcher) -> Result<(), Dispatcher> {
    DEFAULT_DISPATCHER.set(dispatcher)
}

/// Replace the sink of the default dispatcher.
pub fn set_sink(sink: Sink) {
    default_dispatcher().set_sink(sink);
}

/// Replace the active categories of the default dispatcher.
pub fn set_categories(categories: impl IntoIterator<Item = Category>) {
    default_dispatcher().set_categories(categories);
}

#[derive(Debug, Clone)]
struct State {
    sink: Sink,
    filter: CategoryFilter,
}

/// Filters log calls by category and routes the formatted lines to the active sink.
///
/// A dispatcher holds the active [`Sink`] and the active set of categories, plus one appender
/// per sink. Every emit call checks the category filter, picks the appender of the active sink
/// and writes exactly one line. Emit calls never fail: when the appender cannot write (for
/// example because the log file cannot be opened) the line is dropped.
///
/// The configuration is kept behind a lock, so a dispatcher can be shared between threads and
/// reconfigured at any point between log calls.
///
/// # Examples
///
/// ```
/// use logdispatch::Category;
/// use logdispatch::Dispatcher;
/// use logdispatch::Location;
/// use logdispatch::Sink;
///
/// let dispatcher = Dispatcher::default();
/// dispatcher.set_categories([Category::Info, Category::Error]);
///
/// dispatcher.info(&[&"listening on", &8080]);
/// dispatcher.debug("main", &[&"filtered out"]);
/// dispatcher.error(Location::new(file!(), line!(), "main"), &[&"boom"]);
///
/// dispatcher.set_sink(Sink::None);
/// dispatcher.info(&[&"discarded"]);
/// ```
#[derive(Debug)]
pub struct Dispatcher {
    state: RwLock<State>,
    console: Box<dyn Append>,
    file: Box<dyn Append>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Dispatcher::builder().build()
    }
}

impl Dispatcher {
    /// Create a new [`DispatcherBuilder`].
    pub fn builder() -> DispatcherBuilder {
        DispatcherBuilder::default()
    }

    pub(super) fn new(
        sink: Sink,
        filter: CategoryFilter,
        console: Box<dyn Append>,
        file: Box<dyn Append>,
    ) -> Self {
        Self {
            state: RwLock::new(State { sink, filter }),
            console,
            file,
        }
    }

    /// Replace the active sink.
    pub fn set_sink(&self, sink: Sink) {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .sink = sink;
    }

    /// The active sink.
    pub fn sink(&self) -> Sink {
        self.state.read().unwrap_or_else(PoisonError::into_inner).sink
    }

    /// Replace the active categories with exactly `categories`.
    ///
    /// The previous set is discarded, not merged. An empty list disables all output until
    /// categories are set again.
    pub fn set_categories(&self, categories: impl IntoIterator<Item = Category>) {
        self.set_filter(CategoryFilter::new(categories));
    }

    /// Replace the active category filter.
    pub fn set_filter(&self, filter: CategoryFilter) {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .filter = filter;
    }

    /// The active category filter.
    pub fn filter(&self) -> CategoryFilter {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .filter
            .clone()
    }

    /// Whether a log call of `category` would produce output.
    pub fn enabled(&self, category: Category) -> bool {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state.sink != Sink::None && state.filter.enabled(category)
    }

    /// Emit an info line made of `items`.
    pub fn info(&self, items: &[&dyn Display]) {
        self.emit(Category::Info, Location::default(), items);
    }

    /// Emit a debug line for the calling `function`.
    pub fn debug(&self, function: &str, items: &[&dyn Display]) {
        self.emit(Category::Debug, Location::function(function), items);
    }

    /// Emit a success marker for the calling `function`.
    pub fn success(&self, function: &str) {
        self.emit(Category::Success, Location::function(function), &[]);
    }

    /// Emit an error line for the call site at `location`.
    pub fn error(&self, location: Location<'_>, items: &[&dyn Display]) {
        self.emit(Category::Error, location, items);
    }

    fn emit(&self, category: Category, location: Location<'_>, items: &[&dyn Display]) {
        if !self.enabled(category) {
            return;
        }

        let record = Record::builder()
            .category(category)
            .location(location)
            .items(items)
            .build();
        self.log(&record);
    }

    /// Dispatch a prepared record.
    ///
    /// The record is dropped when its category is filtered out or the sink is [`Sink::None`].
    pub fn log(&self, record: &Record) {
        let sink = {
            let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
            if !state.filter.enabled(record.category()) {
                return;
            }
            state.sink
        };

        let append = match sink {
            Sink::None => return,
            Sink::Console => &self.console,
            Sink::File => &self.file,
        };

        // logging is best effort: a sink that cannot be written is skipped
        let _ = append.append(record);
    }

    /// Flush both appenders, ignoring failures.
    pub fn flush(&self) {
        let _ = self.console.flush();
        let _ = self.file.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::append::Testing;

    fn dispatcher() -> (Dispatcher, Testing, Testing) {
        let console = Testing::default();
        let file = Testing::default();
        let dispatcher = Dispatcher::builder()
            .console(console.clone())
            .file(file.clone())
            .build();
        (dispatcher, console, file)
    }

    #[test]
    fn test_defaults() {
        let dispatcher = Dispatcher::default();
        assert_eq!(dispatcher.sink(), Sink::Console);
        assert_eq!(dispatcher.filter(), CategoryFilter::default());
    }

    #[test]
    fn test_sink_selects_appender() {
        let (dispatcher, console, file) = dispatcher();

        dispatcher.info(&[&"to console"]);
        dispatcher.set_sink(Sink::File);
        dispatcher.info(&[&"to file"]);
        dispatcher.set_sink(Sink::None);
        dispatcher.info(&[&"nowhere"]);

        assert_eq!(console.lines(), vec!["to console"]);
        assert_eq!(file.lines(), vec!["to file"]);
    }

    #[test]
    fn test_none_sink_is_not_enabled() {
        let (dispatcher, ..) = dispatcher();
        assert!(dispatcher.enabled(Category::Info));
        dispatcher.set_sink(Sink::None);
        assert!(!dispatcher.enabled(Category::Info));
    }

    #[test]
    fn test_log_prepared_record() {
        let (dispatcher, console, _) = dispatcher();
        let items: [&dyn Display; 1] = [&"prepared"];
        let record = Record::builder()
            .category(Category::Debug)
            .location(Location::function("worker"))
            .items(&items)
            .build();

        dispatcher.log(&record);
        dispatcher.set_categories([Category::Info]);
        dispatcher.log(&record);

        assert_eq!(console.lines(), vec!["[DEBUG]: worker : prepared"]);
    }
}
