//! CLI output formatting.
//!
//! # Output Format
//!
//! ## Update (default command)
//!
//! ```text
//! 正在扫描图片文件...
//! ✅ images_list.json 已更新！
//!
//! 当前图片列表：
//! {
//!   "4": [ ... ],
//!   "6": [],
//!   "9": []
//! }
//!
//! 总计：4块=1, 6块=0, 9块=0, 共1张图片
//! ```
//!
//! ## Check
//!
//! ```text
//! 正在扫描图片文件...
//! 4块: 1
//! 6块: 0
//! 9块: 0
//! 总计：4块=1, 6块=0, 9块=0, 共1张图片
//! ⚠️ images_list.json 需要更新
//! ```
//!
//! Each report has a `format_*` function (returns `Vec<String>`, no I/O) and
//! a `print_*` wrapper that writes the lines to stdout.

use crate::types::{Category, Manifest};
use std::path::Path;

/// Printed before scanning starts.
pub const SCAN_NOTICE: &str = "正在扫描图片文件...";

/// Label used for a category in summaries, e.g. `4块`.
fn category_label(category: Category) -> String {
    format!("{}块", category.key())
}

/// Display name of the output file for status lines.
fn file_label(output: &Path) -> String {
    output
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| output.display().to_string())
}

/// `总计：4块=<n4>, 6块=<n6>, 9块=<n9>, 共<total>张图片`
pub fn format_summary(manifest: &Manifest) -> String {
    let counts: Vec<String> = Category::ALL
        .iter()
        .map(|&c| format!("{}={}", category_label(c), manifest.count(c)))
        .collect();
    format!("总计：{}, 共{}张图片", counts.join(", "), manifest.total())
}

/// Lines printed after the manifest has been written.
///
/// `json` is the document exactly as written to `output`.
pub fn format_update_report(manifest: &Manifest, json: &str, output: &Path) -> Vec<String> {
    vec![
        format!("✅ {} 已更新！", file_label(output)),
        String::new(),
        "当前图片列表：".to_string(),
        json.to_string(),
        String::new(),
        format_summary(manifest),
    ]
}

/// Lines printed by `check`: per-category counts and whether the file on disk
/// matches the scan.
pub fn format_check_report(manifest: &Manifest, output: &Path, up_to_date: bool) -> Vec<String> {
    let mut lines: Vec<String> = Category::ALL
        .iter()
        .map(|&c| format!("{}: {}", category_label(c), manifest.count(c)))
        .collect();
    lines.push(format_summary(manifest));
    if up_to_date {
        lines.push(format!("✅ {} 是最新的", file_label(output)));
    } else {
        lines.push(format!("⚠️ {} 需要更新", file_label(output)));
    }
    lines
}

pub fn print_update_report(manifest: &Manifest, json: &str, output: &Path) {
    for line in format_update_report(manifest, json, output) {
        println!("{}", line);
    }
}

pub fn print_check_report(manifest: &Manifest, output: &Path, up_to_date: bool) {
    for line in format_check_report(manifest, output, up_to_date) {
        println!("{}", line);
    }
}
