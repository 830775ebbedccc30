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

use colored::Color;

use crate::Category;

/// Colors of the console tag for each category.
#[derive(Debug, Clone)]
pub struct CategoryColor {
    /// Color for debug tags.
    pub debug: Color,
    /// Color for success tags.
    pub success: Color,
    /// Color for error tags.
    pub error: Color,
}

impl Default for CategoryColor {
    fn default() -> Self {
        Self {
            debug: Color::Yellow,
            success: Color::Green,
            error: Color::Red,
        }
    }
}

impl CategoryColor {
    /// Colorize the tag of `category`, or return `None` for untagged categories.
    ///
    /// The escape codes are written whether or not the output is a terminal; pass
    /// `no_color` to get the plain tag.
    pub fn colorize_tag(&self, no_color: bool, category: Category) -> Option<String> {
        let tag = category.tag()?;
        if no_color {
            return Some(tag.to_string());
        }

        let color = match category {
            Category::Debug => self.debug,
            Category::Success => self.success,
            Category::Error => self.error,
            Category::Info | Category::All => return Some(tag.to_string()),
        };
        Some(format!("\x1b[{}m{tag}\x1b[0m", color.to_fg_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untagged_categories() {
        let colors = CategoryColor::default();
        assert!(colors.colorize_tag(false, Category::Info).is_none());
        assert!(colors.colorize_tag(true, Category::All).is_none());
    }

    #[test]
    fn test_no_color_keeps_plain_tag() {
        let colors = CategoryColor::default();
        assert_eq!(
            colors.colorize_tag(true, Category::Error).as_deref(),
            Some("[ERROR]:")
        );
    }

    #[test]
    fn test_default_colors_are_always_written() {
        let colors = CategoryColor::default();
        let tag = |category| colors.colorize_tag(false, category).unwrap();
        assert_eq!(tag(Category::Error), "\u{1b}[31m[ERROR]:\u{1b}[0m");
        assert_eq!(tag(Category::Debug), "\u{1b}[33m[DEBUG]:\u{1b}[0m");
        assert_eq!(tag(Category::Success), "\u{1b}[32m[SUCCESS]:\u{1b}[0m");
    }

    #[test]
    fn test_custom_color() {
        let colors = CategoryColor {
            debug: Color::Blue,
            ..Default::default()
        };
        assert_eq!(
            colors.colorize_tag(false, Category::Debug).unwrap(),
            "\u{1b}[34m[DEBUG]:\u{1b}[0m"
        );
    }
}
