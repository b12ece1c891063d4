//! Data model shared by the scanner, the writer and the CLI report.
//!
//! The manifest is serialized with its categories as plain struct fields so
//! the JSON key order is always `"4"`, `"6"`, `"9"`, independent of any map
//! ordering.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A puzzle size. Each one owns a subdirectory of the image root named after
/// its key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Four,
    Six,
    Nine,
}

impl Category {
    /// All categories in manifest order.
    pub const ALL: [Category; 3] = [Category::Four, Category::Six, Category::Nine];

    /// JSON key and directory name (`"4"`, `"6"`, `"9"`).
    pub fn key(self) -> &'static str {
        match self {
            Category::Four => "4",
            Category::Six => "6",
            Category::Nine => "9",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One discovered image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImageEntry {
    /// Display label: extension stripped, `_` and `-` turned into spaces
    pub name: String,
    /// Original filename, extension included
    pub file: String,
}

/// Category → images, in enumeration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(rename = "4")]
    pub four: Vec<ImageEntry>,
    #[serde(rename = "6")]
    pub six: Vec<ImageEntry>,
    #[serde(rename = "9")]
    pub nine: Vec<ImageEntry>,
}

impl Manifest {
    pub fn images(&self, category: Category) -> &[ImageEntry] {
        match category {
            Category::Four => &self.four,
            Category::Six => &self.six,
            Category::Nine => &self.nine,
        }
    }

    pub(crate) fn images_mut(&mut self, category: Category) -> &mut Vec<ImageEntry> {
        match category {
            Category::Four => &mut self.four,
            Category::Six => &mut self.six,
            Category::Nine => &mut self.nine,
        }
    }

    pub fn count(&self, category: Category) -> usize {
        self.images(category).len()
    }

    /// Number of images across all categories.
    pub fn total(&self) -> usize {
        Category::ALL.iter().map(|&c| self.count(c)).sum()
    }
}
