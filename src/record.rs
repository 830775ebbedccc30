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

//! Log record and call-site location.

use std::fmt;

use jiff::Timestamp;

use crate::Category;

/// Where in the calling code a log call was made.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Location<'a> {
    file: &'a str,
    line: u32,
    function: &'a str,
}

impl<'a> Location<'a> {
    /// Create a location from its parts.
    pub const fn new(file: &'a str, line: u32, function: &'a str) -> Self {
        Self {
            file,
            line,
            function,
        }
    }

    /// A location that only knows the calling function.
    pub const fn function(function: &'a str) -> Self {
        Self::new("", 0, function)
    }

    /// The source file of the call.
    pub fn file(&self) -> &'a str {
        self.file
    }

    /// The line of the call.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// The name of the calling function.
    pub fn function_name(&self) -> &'a str {
        self.function
    }
}

/// The payload of one log call.
///
/// A record borrows its items from the caller and lives for a single emit.
#[derive(Clone)]
pub struct Record<'a> {
    now: Timestamp,
    category: Category,
    location: Location<'a>,
    items: &'a [&'a dyn fmt::Display],
}

impl<'a> Record<'a> {
    /// Start building a record.
    pub fn builder() -> RecordBuilder<'a> {
        RecordBuilder::default()
    }

    /// The observed time.
    pub fn time(&self) -> Timestamp {
        self.now
    }

    /// The category of the call.
    pub fn category(&self) -> Category {
        self.category
    }

    /// The call site.
    pub fn location(&self) -> &Location<'a> {
        &self.location
    }

    /// The caller-supplied items, in order.
    pub fn items(&self) -> &'a [&'a dyn fmt::Display] {
        self.items
    }
}

impl fmt::Debug for Record<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Item<'a>(&'a dyn fmt::Display);

        impl fmt::Debug for Item<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(self.0, f)
            }
        }

        struct Items<'a>(&'a [&'a dyn fmt::Display]);

        impl fmt::Debug for Items<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_list()
                    .entries(self.0.iter().map(|item| Item(*item)))
                    .finish()
            }
        }

        f.debug_struct("Record")
            .field("now", &self.now)
            .field("category", &self.category)
            .field("location", &self.location)
            .field("items", &Items(self.items))
            .finish()
    }
}

/// Builder for [`Record`].
///
/// The time defaults to now, the category to [`Category::Info`].
#[derive(Debug)]
pub struct RecordBuilder<'a> {
    record: Record<'a>,
}

impl Default for RecordBuilder<'_> {
    fn default() -> Self {
        Self {
            record: Record {
                now: Timestamp::now(),
                category: Category::Info,
                location: Location::default(),
                items: &[],
            },
        }
    }
}

impl<'a> RecordBuilder<'a> {
    /// Set [`time`](Record::time).
    pub fn time(mut self, now: Timestamp) -> Self {
        self.record.now = now;
        self
    }

    /// Set [`category`](Record::category).
    pub fn category(mut self, category: Category) -> Self {
        self.record.category = category;
        self
    }

    /// Set [`location`](Record::location).
    pub fn location(mut self, location: Location<'a>) -> Self {
        self.record.location = location;
        self
    }

    /// Set [`items`](Record::items).
    pub fn items(mut self, items: &'a [&'a dyn fmt::Display]) -> Self {
        self.record.items = items;
        self
    }

    /// Invoke the builder and return a [`Record`].
    pub fn build(self) -> Record<'a> {
        self.record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let record = Record::builder().build();
        assert_eq!(record.category(), Category::Info);
        assert_eq!(record.location(), &Location::default());
        assert!(record.items().is_empty());
    }

    #[test]
    fn test_debug_renders_items() {
        let items: [&dyn fmt::Display; 2] = [&"boom", &42];
        let record = Record::builder()
            .category(Category::Error)
            .location(Location::new("x.rs", 10, "main"))
            .items(&items)
            .build();

        let debug = format!("{record:?}");
        assert!(debug.contains("items: [boom, 42]"), "{debug}");
        assert!(debug.contains("category: Error"), "{debug}");
    }
}
