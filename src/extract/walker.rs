//! The in-page walk over slide containers.
//!
//! One script evaluation does the whole traversal (per-element round trips
//! over CDP would dominate extraction time). The script forces every slide
//! container to the canonical 1280x720 frame, reads geometry and computed
//! styles, and returns flat raw records; all classification and
//! normalization happens on the Rust side in [`super::scene`].

use chromiumoxide::Page;
use log::debug;
use serde::Deserialize;

use crate::errors::Result;

/// Runs inside the page. Ordering invariant: each container's inline size
/// is forced BEFORE its rectangle is read; reading first would measure the
/// responsive layout and skew every child coordinate.
const WALK_SCRIPT: &str = r#"
(() => {
    const slides = [];
    const containers = Array.from(document.querySelectorAll('[data-slide-container]'));
    for (const container of containers) {
        container.style.width = '1280px';
        container.style.height = '720px';
        container.style.transform = 'none';
        const containerRect = container.getBoundingClientRect();
        const containerStyle = window.getComputedStyle(container);
        const elements = [];
        const nodes = Array.from(container.querySelectorAll('[data-slide-element]'));
        for (const node of nodes) {
            if (node.hasAttribute('data-slide-container')) continue;
            const rect = node.getBoundingClientRect();
            const style = window.getComputedStyle(node);
            const img = node.tagName === 'IMG' ? node : node.querySelector('img');
            elements.push({
                kind: node.getAttribute('data-element-type') || '',
                elementId: node.getAttribute('data-element-id') || '',
                left: rect.left - containerRect.left,
                top: rect.top - containerRect.top,
                width: rect.width,
                height: rect.height,
                alignCenter: node.getAttribute('data-is-align-center') === 'true',
                richText: node.getAttribute('data-rich-text'),
                rawText: node.innerText || '',
                fontFamily: style.fontFamily || '',
                fontSize: style.fontSize || '',
                fontWeight: style.fontWeight || '',
                color: style.color || '',
                borderRadius: style.borderRadius || '',
                hasImage: img !== null,
                imgSrc: img ? (img.src || null) : null,
                imgOriginalPath: img ? img.getAttribute('data-image-path') : null,
                shape: node.getAttribute('data-shape'),
                objectFit: node.getAttribute('data-object-fit'),
                focusX: node.getAttribute('data-focus-x'),
                focusY: node.getAttribute('data-focus-y'),
                isIcon: node.hasAttribute('data-is-icon'),
            });
        }
        const parsedIndex = parseInt(container.getAttribute('data-slide-index') || '0', 10);
        slides.push({
            slideIndex: Number.isNaN(parsedIndex) ? 0 : parsedIndex,
            backgroundColor: containerStyle.backgroundColor || '',
            elements,
        });
    }
    return slides;
})()
"#;

/// One slide container as the walk script reports it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawSlide {
    #[serde(default)]
    pub slide_index: i64,
    #[serde(default)]
    pub background_color: String,
    #[serde(default)]
    pub elements: Vec<RawElement>,
}

/// One marked descendant as the walk script reports it: geometry relative
/// to the forced container, marker attributes, and the computed styles the
/// classifier needs. Fields irrelevant to a given kind are simply unused.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawElement {
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub element_id: String,
    #[serde(default)]
    pub left: f64,
    #[serde(default)]
    pub top: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
    #[serde(default)]
    pub align_center: bool,
    #[serde(default)]
    pub rich_text: Option<String>,
    #[serde(default)]
    pub raw_text: String,
    #[serde(default)]
    pub font_family: String,
    #[serde(default)]
    pub font_size: String,
    #[serde(default)]
    pub font_weight: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub border_radius: String,
    #[serde(default)]
    pub has_image: bool,
    #[serde(default)]
    pub img_src: Option<String>,
    #[serde(default)]
    pub img_original_path: Option<String>,
    #[serde(default)]
    pub shape: Option<String>,
    #[serde(default)]
    pub object_fit: Option<String>,
    #[serde(default)]
    pub focus_x: Option<String>,
    #[serde(default)]
    pub focus_y: Option<String>,
    #[serde(default)]
    pub is_icon: bool,
}

/// Walks every slide container on the page and returns the raw records.
pub(crate) async fn extract_raw(page: &Page) -> Result<Vec<RawSlide>> {
    let slides: Vec<RawSlide> = page.evaluate(WALK_SCRIPT).await?.into_value()?;
    debug!("walker returned {} slide container(s)", slides.len());
    Ok(slides)
}
