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
use std::str::FromStr;

/// The kind of a log call.
///
/// [`Info`](Category::Info), [`Debug`](Category::Debug), [`Success`](Category::Success) and
/// [`Error`](Category::Error) are emitted by the matching [`Dispatcher`](crate::Dispatcher)
/// methods. [`All`](Category::All) is only meaningful in a
/// [`CategoryFilter`](crate::filter::CategoryFilter), where it lets every category through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// Plain informational output, no tag.
    Info,
    /// Diagnostic output tagged with the calling function.
    Debug,
    /// A success marker for the calling function.
    Success,
    /// An error tagged with the full call site.
    Error,
    /// Matches every category when active.
    All,
}

impl Category {
    /// The categories an emit call can carry, in declaration order.
    pub const EMITTED: [Category; 4] = [
        Category::Info,
        Category::Debug,
        Category::Success,
        Category::Error,
    ];

    /// Every category, [`All`](Category::All) included.
    pub const ALL: [Category; 5] = [
        Category::Info,
        Category::Debug,
        Category::Success,
        Category::Error,
        Category::All,
    ];

    /// The upper-case name of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Info => "INFO",
            Category::Debug => "DEBUG",
            Category::Success => "SUCCESS",
            Category::Error => "ERROR",
            Category::All => "ALL",
        }
    }

    /// The tag literal that prefixes lines of this category, if it carries one.
    pub fn tag(&self) -> Option<&'static str> {
        match self {
            Category::Debug => Some("[DEBUG]:"),
            Category::Success => Some("[SUCCESS]:"),
            Category::Error => Some("[ERROR]:"),
            Category::Info | Category::All => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Category::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| crate::Error::new("unknown log category").with_context("category", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags() {
        assert_eq!(Category::Info.tag(), None);
        assert_eq!(Category::Debug.tag(), Some("[DEBUG]:"));
        assert_eq!(Category::Success.tag(), Some("[SUCCESS]:"));
        assert_eq!(Category::Error.tag(), Some("[ERROR]:"));
        assert_eq!(Category::All.tag(), None);
    }

    #[test]
    fn test_parse_ignores_case_and_whitespace() {
        assert_eq!("info".parse::<Category>().unwrap(), Category::Info);
        assert_eq!(" Debug ".parse::<Category>().unwrap(), Category::Debug);
        assert_eq!("SUCCESS".parse::<Category>().unwrap(), Category::Success);
        assert_eq!("error".parse::<Category>().unwrap(), Category::Error);
        assert_eq!("all".parse::<Category>().unwrap(), Category::All);

        let err = "warn".parse::<Category>().unwrap_err();
        assert_eq!(err.context("category"), Some("warn"));
    }

    #[test]
    fn test_display_parses_back() {
        for category in Category::ALL {
            assert_eq!(category.to_string().parse::<Category>().unwrap(), category);
        }
    }
}
