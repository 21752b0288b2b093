//! Chart rasterization.
//!
//! Charts cannot be described compactly as structured data, so each one is
//! captured as a JPEG snapshot of its rendered DOM subtree and referenced by
//! file path from the scene. This stage queries the live page for
//! graph-marked nodes independently of the walker pass, captures each one,
//! and resolves the walker's pending graph variants by element-id lookup.
//!
//! The written files are never deleted by this crate: retention and cleanup
//! of the asset directory belong to the caller, and consumers must read the
//! paths before any external cleanup runs.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use chromiumoxide::cdp::browser_protocol::page::{CaptureScreenshotFormat, Viewport};
use chromiumoxide::page::ScreenshotParams;
use chromiumoxide::Page;
use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;

use crate::errors::{ExtractorError, Result};
use crate::models::slide::SlideMetadata;

use super::scene::PendingSlide;

/// Returns the page rectangle of every graph-marked element, in document
/// order. Coordinates include the scroll offset so they can be used directly
/// as screenshot clips.
const GRAPH_RECTS_SCRIPT: &str = r#"
(() => {
    const selector = '[data-slide-element][data-element-type="graph"]';
    return Array.from(document.querySelectorAll(selector)).map((node) => {
        const rect = node.getBoundingClientRect();
        return {
            elementId: node.getAttribute('data-element-id') || '',
            x: rect.left + window.scrollX,
            y: rect.top + window.scrollY,
            width: rect.width,
            height: rect.height,
        };
    });
})()
"#;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GraphRect {
    element_id: String,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

/// The element-id to snapshot-path map produced by a rasterization pass.
/// Insertion order follows document order of the graph nodes.
#[derive(Debug, Default)]
pub(crate) struct RasterizedAssets {
    paths: IndexMap<String, PathBuf>,
}

impl RasterizedAssets {
    /// Absolute path of the snapshot captured for `element_id`, if any.
    pub fn path_for(&self, element_id: &str) -> Option<&Path> {
        self.paths.get(element_id).map(PathBuf::as_path)
    }

    /// Number of captured snapshots.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    #[cfg(test)]
    pub fn insert(&mut self, element_id: &str, path: PathBuf) {
        self.paths.insert(element_id.to_string(), path);
    }
}

/// Captures a JPEG snapshot of every graph element on the page and writes
/// each to `asset_dir` as `chart-<elementId>-<epochMillis>.jpg`.
///
/// A capture or write failure fails the whole pass, attributed to the
/// element: the pipeline is all-or-nothing, and continuing would guarantee
/// an unresolvable pending graph downstream.
pub(crate) async fn rasterize_graphs(page: &Page, asset_dir: &Path) -> Result<RasterizedAssets> {
    let rects: Vec<GraphRect> = page.evaluate(GRAPH_RECTS_SCRIPT).await?.into_value()?;
    debug!("rasterizing {} graph element(s)", rects.len());

    let mut assets = RasterizedAssets::default();
    if rects.is_empty() {
        return Ok(assets);
    }

    let asset_dir = prepare_asset_dir(asset_dir)?;
    for rect in rects {
        let path = capture_graph(page, &rect, &asset_dir).await?;
        assets.paths.insert(rect.element_id.clone(), path);
    }
    Ok(assets)
}

/// Creates the asset directory if needed and returns its canonical form so
/// every recorded snapshot path is absolute, regardless of how the caller
/// spelled the directory.
fn prepare_asset_dir(asset_dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(asset_dir)?;
    Ok(asset_dir.canonicalize()?)
}

/// Captures one graph element, clipped to its page rectangle, with the
/// transparent background preserved.
async fn capture_graph(page: &Page, rect: &GraphRect, asset_dir: &Path) -> Result<PathBuf> {
    let params = ScreenshotParams::builder()
        .format(CaptureScreenshotFormat::Jpeg)
        .quality(100)
        .clip(Viewport {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            scale: 1.0,
        })
        .omit_background(true)
        .build();

    let bytes = page
        .screenshot(params)
        .await
        .map_err(|e| ExtractorError::Rasterization {
            element_id: rect.element_id.clone(),
            reason: format!("screenshot capture failed: {e}"),
        })?;

    let filename = format!("chart-{}-{}.jpg", rect.element_id, epoch_millis());
    let path = asset_dir.join(filename);
    tokio::fs::write(&path, &bytes)
        .await
        .map_err(|e| ExtractorError::Rasterization {
            element_id: rect.element_id.clone(),
            reason: format!("failed to write '{}': {e}", path.display()),
        })?;

    debug!(
        "captured graph '{}' -> {}",
        rect.element_id,
        path.display()
    );
    Ok(path)
}

/// Attaches each captured snapshot path to its pending graph by element id.
pub(crate) fn resolve_pending(
    slides: Vec<PendingSlide>,
    assets: &RasterizedAssets,
) -> Result<Vec<SlideMetadata>> {
    slides
        .into_iter()
        .map(|slide| {
            slide.into_metadata(|element_id| {
                assets
                    .path_for(element_id)
                    .map(|p| p.display().to_string())
            })
        })
        .collect()
}

/// Milliseconds since the Unix epoch; the uniqueness component of snapshot
/// filenames. Collision-resistant only down to millisecond granularity
/// across concurrent extractions, which matches the consumer's tolerance.
fn epoch_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}
