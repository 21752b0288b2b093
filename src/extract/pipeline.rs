//! The extraction pipeline: browser acquisition, theme injection, scene
//! walk, chart rasterization, and guaranteed session release.

use std::path::PathBuf;
use std::time::Duration;

use chromiumoxide::Page;
use log::{error, info};

use crate::browser::BrowserSession;
use crate::errors::{ExtractorError, Result};
use crate::models::elements::SlideElement;
use crate::models::slide::SlideMetadata;
use crate::models::theme::CustomColors;

use super::constants::{CONTENT_TIMEOUT, NAVIGATION_TIMEOUT};
use super::{rasterizer, scene, theme, walker};

/// Caller-tunable extraction parameters.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Directory receiving rasterized chart snapshots. The crate creates it
    /// if needed but never deletes anything from it.
    pub asset_dir: PathBuf,
    /// Hard limit for navigation to settle.
    pub navigation_timeout: Duration,
    /// Hard limit for slide containers to appear after navigation.
    pub content_timeout: Duration,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        ExtractOptions {
            asset_dir: std::env::temp_dir(),
            navigation_timeout: NAVIGATION_TIMEOUT,
            content_timeout: CONTENT_TIMEOUT,
        }
    }
}

/// Extracts the scene description of every slide rendered at `url`.
///
/// The page must render the full deck with all slides present in the DOM at
/// once, each wrapped in a marked container (see
/// [`super::constants`] for the contract). The returned slides follow
/// container document order; graph elements reference rasterized snapshot
/// files under the default asset directory (the process temp dir).
///
/// The result is all-or-nothing: on any failure the error propagates and no
/// partial deck is returned, with the browser session torn down either way.
pub async fn get_slide_metadata(
    url: &str,
    theme_name: &str,
    custom_colors: Option<&CustomColors>,
) -> Result<Vec<SlideMetadata>> {
    get_slide_metadata_with_options(url, theme_name, custom_colors, &ExtractOptions::default())
        .await
}

/// [`get_slide_metadata`] with caller-configured timeouts and asset
/// directory.
pub async fn get_slide_metadata_with_options(
    url: &str,
    theme_name: &str,
    custom_colors: Option<&CustomColors>,
    options: &ExtractOptions,
) -> Result<Vec<SlideMetadata>> {
    let session = BrowserSession::acquire(
        url,
        options.navigation_timeout,
        options.content_timeout,
    )
    .await?;

    // The session must outlive every fallible step below and be released on
    // every path, so the steps run in a helper and the outcome is inspected
    // only after close() has run.
    let outcome = extract_scene(session.page(), theme_name, custom_colors, options).await;
    session.close().await;

    match outcome {
        Ok(slides) => {
            verify_resolved(&slides)?;
            info!(
                "extracted {} slide(s) from '{url}'",
                slides.len()
            );
            Ok(slides)
        }
        Err(e) => {
            error!("slide metadata extraction failed for '{url}': {e}");
            Err(ExtractorError::ExtractionFailed(Box::new(e)))
        }
    }
}

/// Steps 2-4: theme, walk, rasterize, resolve.
async fn extract_scene(
    page: &Page,
    theme_name: &str,
    custom_colors: Option<&CustomColors>,
    options: &ExtractOptions,
) -> Result<Vec<SlideMetadata>> {
    theme::apply_theme(page, theme_name, custom_colors).await?;

    let raw = walker::extract_raw(page).await?;
    let pending = scene::build_pending(raw);

    let assets = rasterizer::rasterize_graphs(page, &options.asset_dir).await?;
    info!("captured {} chart snapshot(s)", assets.len());

    rasterizer::resolve_pending(pending, &assets)
}

/// Hard post-condition: every graph in the returned data references a real
/// snapshot path. The typed pending representation makes an unresolved
/// graph unrepresentable, so this only guards against an empty capture path
/// slipping through.
fn verify_resolved(slides: &[SlideMetadata]) -> Result<()> {
    for slide in slides {
        for element in &slide.elements {
            if let SlideElement::Graph(graph) = element {
                if graph.picture.path.is_empty() {
                    return Err(ExtractorError::Rasterization {
                        element_id: format!("<slide {}>", slide.slide_index),
                        reason: "graph resolved to an empty snapshot path".to_string(),
                    });
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::common::Position;
    use crate::models::elements::GraphElement;
    use crate::models::picture::PictureSource;

    fn graph_slide(path: &str) -> SlideMetadata {
        SlideMetadata {
            slide_index: 0,
            background_color: "ffffff".to_string(),
            elements: vec![SlideElement::Graph(GraphElement {
                position: Position {
                    left: 0,
                    top: 0,
                    width: 640,
                    height: 360,
                },
                picture: PictureSource {
                    is_network: true,
                    path: path.to_string(),
                },
                border_radius: [0, 0, 0, 0],
            })],
        }
    }

    #[test]
    fn resolved_graphs_pass_the_post_condition() {
        let slides = vec![graph_slide("/tmp/chart-g1-1700000000000.jpg")];
        assert!(verify_resolved(&slides).is_ok());
    }

    #[test]
    fn empty_graph_paths_fail_the_post_condition() {
        let slides = vec![graph_slide("")];
        assert!(matches!(
            verify_resolved(&slides),
            Err(ExtractorError::Rasterization { .. })
        ));
    }

    #[test]
    fn default_options_carry_the_fixed_timeouts() {
        let options = ExtractOptions::default();
        assert_eq!(options.navigation_timeout, Duration::from_secs(60));
        assert_eq!(options.content_timeout, Duration::from_secs(80));
    }
}
