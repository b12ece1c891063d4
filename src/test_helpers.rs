//! Shared test utilities for the images-list test suite.
//!
//! Builds throwaway base directories shaped like a deployed puzzle site:
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_base_dir(&[
//!     ("4", &["cat.png", "dog_1.jpg"]),
//!     ("9", &["fox-cub.JPEG"]),
//! ]);
//! let manifest = build_manifest(tmp.path()).unwrap();
//! assert_eq!(files(&manifest, Category::Four), vec!["cat.png", "dog_1.jpg"]);
//! ```

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::types::{Category, Manifest};

// =========================================================================
// Fixture setup
// =========================================================================

/// Create a temp base directory with `images/<category>/<file>` for every
/// listed file. Categories not listed get no directory at all.
pub fn setup_base_dir(layout: &[(&str, &[&str])]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for (category, files) in layout {
        let dir = tmp.path().join("images").join(category);
        fs::create_dir_all(&dir).unwrap();
        for file in *files {
            touch(&dir.join(file));
        }
    }
    tmp
}

/// Write a small placeholder file. Content is irrelevant: nothing decodes it.
pub fn touch(path: &Path) {
    fs::write(path, b"not really an image").unwrap();
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// Filenames of one category in manifest order.
pub fn files(manifest: &Manifest, category: Category) -> Vec<&str> {
    manifest
        .images(category)
        .iter()
        .map(|e| e.file.as_str())
        .collect()
}

/// Display names of one category in manifest order.
pub fn names(manifest: &Manifest, category: Category) -> Vec<&str> {
    manifest
        .images(category)
        .iter()
        .map(|e| e.name.as_str())
        .collect()
}

/// Filenames of one category, sorted. For assertions that must not depend on
/// directory listing order.
pub fn sorted_files(manifest: &Manifest, category: Category) -> Vec<&str> {
    let mut out = files(manifest, category);
    out.sort_unstable();
    out
}
