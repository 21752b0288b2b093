use serde::{Deserialize, Serialize};

use crate::models::elements::SlideElement;

/// The reconstructed scene description of one slide.
///
/// Slides appear in the output in DOM document order of their containers,
/// which is the deck's intended slide sequence. Elements appear in DOM
/// traversal order within the container; that order has no semantic weight
/// beyond rendering, but it is stable and reproducible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideMetadata {
    /// Zero-based slide position, read from the container's index attribute.
    pub slide_index: i64,
    /// Slide background as six hex digits without a `#` prefix.
    pub background_color: String,
    /// The slide's visual elements, in traversal order.
    pub elements: Vec<SlideElement>,
}
