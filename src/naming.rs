//! Filename parsing for image entries.
//!
//! A file matches an extension only when its name ends in `.<ext>` exactly,
//! case included: `cat.png` matches `png`, `cat.PNG` matches `PNG`, and
//! `cat.PnG` matches nothing.
//!
//! ## Display Names
//!
//! The stem (everything before the matched extension) becomes the display
//! name with underscores and dashes converted to spaces:
//! - `foo_bar.png` → "foo bar"
//! - `baz-qux.JPG` → "baz qux"
//! - `my.cat.jpeg` → "my.cat" (only the matched extension is stripped)

/// Result of matching a filename against one extension.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedImageName<'a> {
    /// Filename without `.<extension>`
    pub stem: &'a str,
    /// The extension that matched, without the dot
    pub extension: &'a str,
    /// Stem with `_` and `-` converted to spaces
    pub display_name: String,
}

/// Match `file_name` against a single extension.
///
/// Returns `None` if the name does not end in `.<extension>`.
pub fn parse_image_name<'a>(file_name: &'a str, extension: &'a str) -> Option<ParsedImageName<'a>> {
    let stem = file_name.strip_suffix(extension)?.strip_suffix('.')?;
    Some(ParsedImageName {
        stem,
        extension,
        display_name: display_name(stem),
    })
}

/// Convert a filename stem into a display label.
///
/// Spaces are not trimmed or collapsed: `a__b` becomes `"a  b"`.
pub fn display_name(stem: &str) -> String {
    stem.replace(['_', '-'], " ")
}
