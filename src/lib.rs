//! # images-list
//!
//! Regenerates `images_list.json`, the index the puzzle page reads to fill its
//! picture selector. The filesystem is the data source: drop an image into
//! `images/4`, `images/6` or `images/9` and rerun the tool.
//!
//! # Pipeline
//!
//! ```text
//! 1. Scan   images/{4,6,9}/  →  Manifest          (directory listing → entries)
//! 2. Write  Manifest         →  images_list.json  (pretty JSON, overwritten)
//! 3. Report Manifest         →  stdout            (JSON dump + per-category totals)
//! ```
//!
//! Every run starts from scratch; the previous `images_list.json` is never
//! read except by `check`, which only compares.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Lists category directories and builds the [`types::Manifest`] |
//! | [`naming`] | Extension matching and filename → display name |
//! | [`manifest`] | JSON rendering, writing and reading of the manifest file |
//! | [`config`] | Optional `images-list.toml` loading and validation |
//! | [`output`] | Stdout report formatting |
//! | [`logging`] | `tracing` subscriber on stderr |
//! | [`types`] | `Category`, `ImageEntry`, `Manifest` |

pub mod config;
pub mod logging;
pub mod manifest;
pub mod naming;
pub mod output;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
