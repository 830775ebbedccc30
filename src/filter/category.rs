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

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::Category;
use crate::Error;

/// The set of active categories.
///
/// A log call of category `c` passes the filter iff the set contains `c` or
/// [`Category::All`]. The default set is `{All}`; an empty set rejects everything.
///
/// # Examples
///
/// ```
/// use logdispatch::Category;
/// use logdispatch::filter::CategoryFilter;
///
/// let filter = CategoryFilter::new([Category::Info, Category::Error]);
/// assert!(filter.enabled(Category::Error));
/// assert!(!filter.enabled(Category::Debug));
///
/// let filter: CategoryFilter = "debug,success".parse().unwrap();
/// assert!(filter.enabled(Category::Success));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFilter {
    categories: BTreeSet<Category>,
}

impl Default for CategoryFilter {
    fn default() -> Self {
        Self::new([Category::All])
    }
}

impl CategoryFilter {
    /// Create a filter holding exactly the given categories.
    pub fn new(categories: impl IntoIterator<Item = Category>) -> Self {
        Self {
            categories: categories.into_iter().collect(),
        }
    }

    /// A filter that rejects every category.
    pub fn none() -> Self {
        Self {
            categories: BTreeSet::new(),
        }
    }

    /// Whether a log call of `category` passes the filter.
    pub fn enabled(&self, category: Category) -> bool {
        self.categories.contains(&category) || self.categories.contains(&Category::All)
    }

    /// Whether no category is active.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// The active categories, in declaration order.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.categories.iter().copied()
    }
}

impl FromIterator<Category> for CategoryFilter {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<const N: usize> From<[Category; N]> for CategoryFilter {
    fn from(categories: [Category; N]) -> Self {
        Self::new(categories)
    }
}

impl From<&[Category]> for CategoryFilter {
    fn from(categories: &[Category]) -> Self {
        Self::new(categories.iter().copied())
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, category) in self.categories().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{category}")?;
        }
        Ok(())
    }
}

/// Parses a comma-separated list of category names. A blank string yields the empty set.
impl FromStr for CategoryFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(Category::from_str)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_enables_everything() {
        let filter = CategoryFilter::default();
        for category in Category::EMITTED {
            assert!(filter.enabled(category), "{category} should pass");
        }
    }

    #[test]
    fn test_enabled_iff_member_or_all() {
        // every subset of the five categories
        for mask in 0u32..(1 << Category::ALL.len()) {
            let set = Category::ALL
                .into_iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, category)| category)
                .collect::<Vec<_>>();
            let filter = CategoryFilter::new(set.iter().copied());

            for category in Category::EMITTED {
                let expected = set.contains(&category) || set.contains(&Category::All);
                assert_eq!(
                    filter.enabled(category),
                    expected,
                    "category {category} with set {set:?}"
                );
            }
        }
    }

    #[test]
    fn test_empty_rejects_everything() {
        let filter = CategoryFilter::none();
        assert!(filter.is_empty());
        for category in Category::ALL {
            assert!(!filter.enabled(category));
        }
    }

    #[test]
    fn test_parse_list() {
        let filter = "info, Error".parse::<CategoryFilter>().unwrap();
        assert_eq!(filter, CategoryFilter::new([Category::Info, Category::Error]));
        assert_eq!(filter.to_string(), "INFO,ERROR");

        assert!("".parse::<CategoryFilter>().unwrap().is_empty());
        assert!(" , ".parse::<CategoryFilter>().unwrap().is_empty());
        assert!("info,verbose".parse::<CategoryFilter>().is_err());
    }
}
