//! Theme injection into the loaded deck page.
//!
//! The theme must be applied through the DOM (attribute + CSS custom
//! properties) rather than passed as data: the computed colors read back by
//! the walker, and the pixels captured by the rasterizer, both come from the
//! live stylesheet. The mutation is idempotent: it assigns fixed values, so
//! applying the same parameters twice leaves the document in the same state
//! as applying them once.

use chromiumoxide::Page;
use log::debug;

use crate::errors::{ExtractorError, Result};
use crate::models::theme::{CustomColors, ThemeParams, CUSTOM_THEME};

/// Stamps `data-theme` on every slide-theme node and, for the custom theme
/// with colors supplied, writes the five `--custom-slide-*` properties on
/// the document root. When the custom theme arrives without colors the
/// stylesheet's existing values are left untouched; that is not an error.
pub(crate) async fn apply_theme(
    page: &Page,
    theme: &str,
    custom_colors: Option<&CustomColors>,
) -> Result<()> {
    debug!("applying theme '{theme}' (custom colors: {})", custom_colors.is_some());
    let script = build_theme_script(theme, custom_colors)?;
    page.evaluate(script)
        .await
        .map_err(|e| ExtractorError::ThemeApplication(e.to_string()))?;
    Ok(())
}

/// Builds the injection script. The parameters travel as a JSON literal so
/// arbitrary theme names and color strings cannot break out of the script.
fn build_theme_script(theme: &str, custom_colors: Option<&CustomColors>) -> Result<String> {
    let params = ThemeParams {
        theme: theme.to_string(),
        custom_colors: custom_colors.cloned(),
    };
    let payload = serde_json::to_string(&params)?;

    Ok(format!(
        r#"(() => {{
    const cfg = {payload};
    for (const node of document.querySelectorAll('.slide-theme')) {{
        node.setAttribute('data-theme', cfg.theme);
    }}
    if (cfg.theme === '{CUSTOM_THEME}' && cfg.customColors) {{
        const root = document.documentElement.style;
        root.setProperty('--custom-slide-bg', cfg.customColors.slideBg);
        root.setProperty('--custom-slide-title', cfg.customColors.slideTitle);
        root.setProperty('--custom-slide-heading', cfg.customColors.slideHeading);
        root.setProperty('--custom-slide-description', cfg.customColors.slideDescription);
        root.setProperty('--custom-slide-box', cfg.customColors.slideBox);
    }}
}})()"#
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_colors() -> CustomColors {
        CustomColors {
            slide_bg: "#101020".to_string(),
            slide_title: "#ffffff".to_string(),
            slide_heading: "#e0e0ff".to_string(),
            slide_description: "#c0c0d0".to_string(),
            slide_box: "#202040".to_string(),
        }
    }

    #[test]
    fn script_embeds_theme_as_json() {
        let script = build_theme_script("royal_blue", None).unwrap();
        assert!(script.contains(r#""theme":"royal_blue""#));
        assert!(script.contains("setAttribute('data-theme', cfg.theme)"));
        // Without custom colors the payload carries no customColors key.
        assert!(!script.contains("customColors\""));
    }

    #[test]
    fn custom_colors_reach_all_five_properties() {
        let colors = sample_colors();
        let script = build_theme_script("custom", Some(&colors)).unwrap();
        assert!(script.contains(r##""slideBg":"#101020""##));
        for property in [
            "--custom-slide-bg",
            "--custom-slide-title",
            "--custom-slide-heading",
            "--custom-slide-description",
            "--custom-slide-box",
        ] {
            assert!(script.contains(property), "missing {property}");
        }
    }

    #[test]
    fn script_is_a_pure_function_of_its_inputs() {
        // Idempotence of the page mutation rests on the script assigning
        // fixed values; the same inputs must produce the identical script.
        let colors = sample_colors();
        let first = build_theme_script("custom", Some(&colors)).unwrap();
        let second = build_theme_script("custom", Some(&colors)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn hostile_theme_names_stay_inside_the_json_literal() {
        let script = build_theme_script("x'); alert(1); ('", None).unwrap();
        assert!(script.contains(r#""theme":"x'); alert(1); ('""#));
    }
}
