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

//! Configuration from environment variables.

use std::path::PathBuf;

use crate::Dispatcher;
use crate::DispatcherBuilder;
use crate::Error;
use crate::Sink;
use crate::filter::CategoryFilter;

/// Selects the sink: `none`, `console` or `file`.
pub const SINK_ENV: &str = "LOGDISPATCH_SINK";
/// Selects the active categories as a comma-separated list, e.g. `info,error`.
pub const CATEGORIES_ENV: &str = "LOGDISPATCH_CATEGORIES";
/// Sets the path of the log file.
pub const FILE_ENV: &str = "LOGDISPATCH_FILE";

/// Dispatcher settings read from the environment.
///
/// Unset variables leave the corresponding setting untouched. An empty
/// [`CATEGORIES_ENV`] selects no category at all.
///
/// # Examples
///
/// ```
/// use logdispatch::Config;
/// use logdispatch::Sink;
///
/// let config = Config::from_lookup(|key| match key {
///     "LOGDISPATCH_SINK" => Some("file".to_string()),
///     "LOGDISPATCH_CATEGORIES" => Some("error,success".to_string()),
///     _ => None,
/// })
/// .unwrap();
/// assert_eq!(config.sink, Some(Sink::File));
///
/// let dispatcher = config.to_builder().build();
/// assert_eq!(dispatcher.sink(), Sink::File);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// The sink, from [`SINK_ENV`].
    pub sink: Option<Sink>,
    /// The active categories, from [`CATEGORIES_ENV`].
    pub categories: Option<CategoryFilter>,
    /// The log file path, from [`FILE_ENV`].
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Read the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if [`SINK_ENV`] or [`CATEGORIES_ENV`] holds an unknown name.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`, which maps a variable name to its value.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink or category value holds an unknown name.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let sink = lookup(SINK_ENV)
            .map(|value| value.parse::<Sink>())
            .transpose()
            .map_err(|err| err.with_context("variable", SINK_ENV))?;
        let categories = lookup(CATEGORIES_ENV)
            .map(|value| value.parse::<CategoryFilter>())
            .transpose()
            .map_err(|err| err.with_context("variable", CATEGORIES_ENV))?;
        let log_file = lookup(FILE_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            sink,
            categories,
            log_file,
        })
    }

    /// A [`DispatcherBuilder`] with these settings applied over the defaults.
    pub fn to_builder(&self) -> DispatcherBuilder {
        let mut builder = Dispatcher::builder();
        if let Some(sink) = self.sink {
            builder = builder.sink(sink);
        }
        if let Some(filter) = &self.categories {
            builder = builder.filter(filter.clone());
        }
        if let Some(path) = &self.log_file {
            builder = builder.log_file(path);
        }
        builder
    }

    /// Push the sink and category settings into an existing dispatcher.
    ///
    /// The log file of an existing dispatcher cannot change; use [`Config::to_builder`] for it.
    pub fn apply(&self, dispatcher: &Dispatcher) {
        if let Some(sink) = self.sink {
            dispatcher.set_sink(sink);
        }
        if let Some(filter) = &self.categories {
            dispatcher.set_filter(filter.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::Category;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_unset_keeps_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());

        let dispatcher = config.to_builder().build();
        assert_eq!(dispatcher.sink(), Sink::Console);
        assert_eq!(dispatcher.filter(), CategoryFilter::default());
    }

    #[test]
    fn test_parse_all_variables() {
        let config = Config::from_lookup(lookup(&[
            (SINK_ENV, "none"),
            (CATEGORIES_ENV, "debug, SUCCESS"),
            (FILE_ENV, "/tmp/app.log"),
        ]))
        .unwrap();

        assert_eq!(config.sink, Some(Sink::None));
        assert_eq!(
            config.categories,
            Some(CategoryFilter::new([Category::Debug, Category::Success]))
        );
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/app.log")));
    }

    #[test]
    fn test_empty_categories_disable_everything() {
        let config = Config::from_lookup(lookup(&[(CATEGORIES_ENV, "")])).unwrap();
        assert_eq!(config.categories, Some(CategoryFilter::none()));

        let dispatcher = Dispatcher::default();
        config.apply(&dispatcher);
        for category in Category::EMITTED {
            assert!(!dispatcher.enabled(category));
        }
    }

    #[test]
    fn test_invalid_values() {
        let err = Config::from_lookup(lookup(&[(SINK_ENV, "syslog")])).unwrap_err();
        assert_eq!(err.context("variable"), Some(SINK_ENV));
        assert_eq!(err.context("sink"), Some("syslog"));

        let err = Config::from_lookup(lookup(&[(CATEGORIES_ENV, "info,trace")])).unwrap_err();
        assert_eq!(err.context("variable"), Some(CATEGORIES_ENV));
        assert_eq!(err.context("category"), Some("trace"));
    }
}
