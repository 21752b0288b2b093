use serde::{Deserialize, Serialize};

/// Theme name that activates the custom color overrides.
pub const CUSTOM_THEME: &str = "custom";

/// Custom color overrides applied when the deck uses the `custom` theme.
///
/// Arrives camelCase from the editor UI over the local bridge; each field
/// maps onto one `--custom-slide-*` CSS custom property on the document
/// root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomColors {
    /// Slide background color.
    pub slide_bg: String,
    /// Title text color.
    pub slide_title: String,
    /// Heading text color.
    pub slide_heading: String,
    /// Body/description text color.
    pub slide_description: String,
    /// Accent box fill color.
    pub slide_box: String,
}

/// Theme configuration consumed once per extraction. Never echoed back in
/// the output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeParams {
    /// Named theme to stamp onto every slide-theme node.
    pub theme: String,
    /// Custom overrides; only honored when `theme` is `"custom"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_colors: Option<CustomColors>,
}
