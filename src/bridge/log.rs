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

use crate::Category;
use crate::default_dispatcher;
use crate::record::Location;
use crate::record::Record;

struct LogCrateDispatcher(());

impl log::Log for LogCrateDispatcher {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        default_dispatcher().enabled(category_of(metadata.level()))
    }

    fn log(&self, record: &log::Record) {
        let category = category_of(record.level());
        let function = record.module_path().unwrap_or(record.target());
        let location = Location::new(
            record.file().unwrap_or_default(),
            record.line().unwrap_or_default(),
            function,
        );

        let items: [&dyn Display; 1] = [record.args()];
        let record = Record::builder()
            .category(category)
            .location(location)
            .items(&items)
            .build();
        default_dispatcher().log(&record);
    }

    fn flush(&self) {
        default_dispatcher().flush();
    }
}

/// The category a [`log::Level`] is dispatched as.
///
/// `Error` and `Warn` become [`Category::Error`], `Info` stays [`Category::Info`], `Debug` and
/// `Trace` become [`Category::Debug`]. The module path of the `log` call stands in for the
/// function name.
pub fn category_of(level: log::Level) -> Category {
    match level {
        log::Level::Error | log::Level::Warn => Category::Error,
        log::Level::Info => Category::Info,
        log::Level::Debug | log::Level::Trace => Category::Debug,
    }
}

/// Route records of the `log` crate to the [default dispatcher](crate::default_dispatcher).
///
/// # Errors
///
/// Returns an error if the `log` crate's global logger has already been set.
pub fn try_setup_log_crate() -> Result<(), log::SetLoggerError> {
    static LOGGER: LogCrateDispatcher = LogCrateDispatcher(());
    log::set_logger(&LOGGER)?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}

/// Route records of the `log` crate to the [default dispatcher](crate::default_dispatcher).
///
/// # Panics
///
/// Panics if the `log` crate's global logger has already been set.
pub fn setup_log_crate() {
    if try_setup_log_crate().is_err() {
        panic!(
            "logdispatch::bridge::setup_log_crate must be called before the log crate global logger initialized"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_mapping() {
        assert_eq!(category_of(log::Level::Error), Category::Error);
        assert_eq!(category_of(log::Level::Warn), Category::Error);
        assert_eq!(category_of(log::Level::Info), Category::Info);
        assert_eq!(category_of(log::Level::Debug), Category::Debug);
        assert_eq!(category_of(log::Level::Trace), Category::Debug);
    }
}
