use serde::{Deserialize, Serialize};

/// CSS font-weight at or above which text is reported as bold.
pub const BOLD_WEIGHT_THRESHOLD: i32 = 500;

/// Font family reported when the loader-encoded family name cannot be parsed.
pub const DEFAULT_FONT_NAME: &str = "Inter";

/// Fallback font size in pixels (the browser default) when the computed
/// value cannot be parsed.
pub const DEFAULT_FONT_SIZE_PX: i32 = 16;

/// Resolved font styling for a run of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    /// Font family name, decoded from the page's font-loader naming scheme.
    pub name: String,
    /// Font size in whole CSS pixels.
    pub size: i32,
    /// True when the rendered weight is at least 500.
    pub bold: bool,
    /// The raw rendered weight (CSS font-weight), typically a multiple of 100.
    pub weight: i32,
    /// Text color as six hex digits without a `#` prefix.
    pub color: String,
}

/// Decodes the font family name out of a computed `font-family` string.
///
/// The deck pages load fonts through a loader that encodes family names as
/// `prefix_prefix_FontName` (e.g. `__Inter_d65c78`), so the third
/// underscore-delimited segment carries the human-readable name. This is a
/// documented contract with the page, not a general CSS parser: when the
/// segment is absent or empty the name falls back to `"Inter"`.
pub fn font_name_from_family(family: &str) -> String {
    let name = family
        .split('_')
        .nth(2)
        .map(|segment| {
            segment
                .split(',')
                .next()
                .unwrap_or("")
                .trim()
                .trim_matches(|c| c == '"' || c == '\'')
        })
        .unwrap_or("");

    if name.is_empty() {
        DEFAULT_FONT_NAME.to_string()
    } else {
        name.to_string()
    }
}

/// Parses a computed CSS pixel length (e.g. `"17.5px"`) to a rounded whole
/// pixel count. Unparseable values yield `fallback`.
pub fn parse_px(value: &str, fallback: i32) -> i32 {
    let digits: String = value
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    digits
        .parse::<f64>()
        .map(|px| px.round() as i32)
        .unwrap_or(fallback)
}

/// Parses a computed CSS font-weight. Computed styles report numeric weights;
/// anything else falls back to 400 (normal).
pub fn parse_weight(value: &str) -> i32 {
    value.trim().parse::<i32>().unwrap_or(400)
}
