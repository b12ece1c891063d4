//! Filesystem scanning and manifest construction.
//!
//! ## Directory Structure
//!
//! ```text
//! <base>/
//! ├── images-list.toml       # Optional config
//! ├── images_list.json       # Output (overwritten on every run)
//! └── images/
//!     ├── 4/                 # 4-piece puzzles
//!     │   ├── red_fox.png
//!     │   └── owl-night.JPG
//!     ├── 6/
//!     └── 9/                 # Missing category directories are fine
//! ```
//!
//! ## Matching
//!
//! Each category directory is matched against [`IMAGE_EXTENSIONS`] in order.
//! For every extension, matching files are listed in the order the directory
//! read returns them; nothing is sorted. All `.png` files therefore come before
//! any `.jpg` file, and so on.
//!
//! Hidden entries (leading `.`), subdirectories and dangling symlinks are
//! skipped. Extension matching is case-sensitive, so a file can match at most
//! one pattern and the result never contains duplicates.

use crate::config;
use crate::naming::parse_image_name;
use crate::types::{Category, ImageEntry, Manifest};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Cannot list directory: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Extension patterns, in match order.
pub const IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "PNG", "JPG", "JPEG"];

/// Build the manifest for a base directory using the stock `images/` root.
pub fn build_manifest(base_dir: &Path) -> Result<Manifest, ScanError> {
    scan_images_root(&base_dir.join(config::DEFAULT_IMAGES_DIR))
}

/// Build the manifest from `<images_root>/{4,6,9}`.
pub fn scan_images_root(images_root: &Path) -> Result<Manifest, ScanError> {
    let mut manifest = Manifest::default();
    for category in Category::ALL {
        let dir = images_root.join(category.key());
        let entries = enumerate(&dir)?;
        debug!(category = %category, count = entries.len(), "scanned {}", dir.display());
        *manifest.images_mut(category) = entries;
    }
    Ok(manifest)
}

/// List the images of a single category directory.
///
/// A missing directory yields an empty list, as does a path that is not a
/// directory. Failing to read an existing directory is an error.
pub fn enumerate(dir: &Path) -> Result<Vec<ImageEntry>, ScanError> {
    if !dir.is_dir() {
        if dir.exists() {
            warn!("{} is not a directory, treating as empty", dir.display());
        } else {
            debug!("{} does not exist, treating as empty", dir.display());
        }
        return Ok(Vec::new());
    }

    let names = collect_file_names(dir)?;

    let entries = IMAGE_EXTENSIONS
        .iter()
        .flat_map(|ext| {
            names.iter().filter_map(move |name| {
                parse_image_name(name, ext).map(|parsed| ImageEntry {
                    name: parsed.display_name,
                    file: name.clone(),
                })
            })
        })
        .collect();

    Ok(entries)
}

/// Names of the visible regular files in `dir`, in directory listing order.
fn collect_file_names(dir: &Path) -> Result<Vec<String>, ScanError> {
    let mut names = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry?;
        // Follows symlinks, so links to files count and dangling links don't
        if !entry.path().is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            warn!("skipping non UTF-8 filename in {}: {:?}", dir.display(), entry.file_name());
            continue;
        };
        if name.starts_with('.') {
            continue;
        }
        names.push(name.to_string());
    }
    Ok(names)
}
