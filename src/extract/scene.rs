//! Classification of raw walker records into typed slide elements.
//!
//! Graph elements come out of this stage as a distinct pending variant
//! carrying only the element id; [`super::rasterizer`] converts them into
//! final [`GraphElement`]s by key lookup once the chart snapshots exist.
//! An unresolved graph therefore cannot be expressed in the final model at
//! all, only in the intermediate one.

use log::debug;

use crate::errors::{ExtractorError, Result};
use crate::models::colors::css_color_to_hex;
use crate::models::common::Position;
use crate::models::elements::{GraphElement, PictureElement, SlideElement, TextElement};
use crate::models::font::{
    font_name_from_family, parse_px, parse_weight, Font, BOLD_WEIGHT_THRESHOLD,
    DEFAULT_FONT_SIZE_PX,
};
use crate::models::picture::{ObjectFit, PictureSource};
use crate::models::slide::SlideMetadata;
use crate::models::text::{Alignment, Paragraph};

use super::walker::{RawElement, RawSlide};

/// A classified element that may still await chart rasterization.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum PendingElement {
    /// Fully extracted; nothing left to resolve.
    Ready(SlideElement),
    /// A graph whose rasterized snapshot has not been attached yet.
    PendingGraph {
        position: Position,
        element_id: String,
    },
}

/// A slide whose graph elements may still be pending.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PendingSlide {
    pub slide_index: i64,
    pub background_color: String,
    pub elements: Vec<PendingElement>,
}

impl PendingSlide {
    /// Converts into final metadata, resolving each pending graph through
    /// `resolve`, which maps an element id to the snapshot path for it.
    pub fn into_metadata<F>(self, mut resolve: F) -> Result<SlideMetadata>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let elements = self
            .elements
            .into_iter()
            .map(|element| match element {
                PendingElement::Ready(e) => Ok(e),
                PendingElement::PendingGraph {
                    position,
                    element_id,
                } => {
                    let path = resolve(&element_id).ok_or_else(|| {
                        ExtractorError::Rasterization {
                            element_id: element_id.clone(),
                            reason: "no rasterized image was captured for this element"
                                .to_string(),
                        }
                    })?;
                    Ok(SlideElement::Graph(GraphElement {
                        position,
                        picture: PictureSource {
                            is_network: true,
                            path,
                        },
                        border_radius: [0, 0, 0, 0],
                    }))
                }
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(SlideMetadata {
            slide_index: self.slide_index,
            background_color: self.background_color,
            elements,
        })
    }
}

/// Classifies every raw slide, preserving container order and the traversal
/// order of elements within each container.
pub(crate) fn build_pending(raw_slides: Vec<RawSlide>) -> Vec<PendingSlide> {
    raw_slides.into_iter().map(build_slide).collect()
}

fn build_slide(raw: RawSlide) -> PendingSlide {
    let background_color = css_color_to_hex(&raw.background_color);
    let elements = raw.elements.into_iter().filter_map(classify).collect();
    PendingSlide {
        slide_index: raw.slide_index,
        background_color,
        elements,
    }
}

/// Dispatches one raw record on its declared type marker. Unrecognized
/// markers are dropped: the renderer may introduce element kinds before
/// this extractor handles them, and an unknown kind must not fail the deck.
fn classify(mut raw: RawElement) -> Option<PendingElement> {
    let position = Position::from_rect(raw.left, raw.top, raw.width, raw.height);
    let kind = std::mem::take(&mut raw.kind);
    match kind.as_str() {
        "text" => Some(PendingElement::Ready(SlideElement::Text(build_text(
            position, raw,
        )))),
        "picture" => build_picture(position, raw)
            .map(|p| PendingElement::Ready(SlideElement::Picture(p))),
        "graph" => Some(PendingElement::PendingGraph {
            position,
            element_id: raw.element_id,
        }),
        other => {
            debug!("skipping element of unhandled kind '{other}'");
            None
        }
    }
}

fn build_text(position: Position, raw: RawElement) -> TextElement {
    // The rich-text attribute preserves inline formatting the flattened DOM
    // text loses; fall back to the raw text only when it is absent.
    let text = raw
        .rich_text
        .filter(|t| !t.is_empty())
        .unwrap_or(raw.raw_text);

    let weight = parse_weight(&raw.font_weight);
    let font = Font {
        name: font_name_from_family(&raw.font_family),
        size: parse_px(&raw.font_size, DEFAULT_FONT_SIZE_PX),
        bold: weight >= BOLD_WEIGHT_THRESHOLD,
        weight,
        color: css_color_to_hex(&raw.color),
    };
    let alignment = if raw.align_center {
        Alignment::Center
    } else {
        Alignment::Left
    };

    TextElement {
        position,
        paragraphs: vec![Paragraph {
            alignment,
            text,
            font,
        }],
    }
}

/// Builds a picture element, or `None` when the node carries no `<img>` at
/// all; such markers produce no output element rather than a malformed one.
fn build_picture(position: Position, raw: RawElement) -> Option<PictureElement> {
    if !raw.has_image {
        return None;
    }

    let src = raw.img_src.unwrap_or_default();
    let is_network = src.starts_with("http");
    let path = if src.is_empty() {
        raw.img_original_path.unwrap_or_default()
    } else {
        src
    };

    let radius = parse_px(&raw.border_radius, 0);
    let focus = [parse_focus(raw.focus_x), parse_focus(raw.focus_y)];

    Some(PictureElement {
        position,
        picture: PictureSource { is_network, path },
        shape: raw.shape,
        object_fit: ObjectFit {
            fit: raw.object_fit,
            focus,
        },
        overlay: raw.is_icon.then(|| "ffffff".to_string()),
        border_radius: [radius; 4],
    })
}

fn parse_focus(value: Option<String>) -> f64 {
    value
        .and_then(|v| v.trim().parse::<f64>().ok())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw_slide(value: serde_json::Value) -> RawSlide {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn text_elements_prefer_rich_text_and_resolve_fonts() {
        let slides = build_pending(vec![raw_slide(json!({
            "slideIndex": 0,
            "backgroundColor": "rgb(255, 255, 255)",
            "elements": [{
                "kind": "text",
                "elementId": "t1",
                "left": 100.2, "top": 50.7, "width": 299.6, "height": 48.0,
                "alignCenter": true,
                "richText": "**Agenda**",
                "rawText": "Agenda",
                "fontFamily": "__Inter_d65c78",
                "fontSize": "31.5px",
                "fontWeight": "600",
                "color": "rgb(16, 16, 32)"
            }]
        }))]);

        assert_eq!(slides.len(), 1);
        assert_eq!(slides[0].background_color, "ffffff");
        let element = match &slides[0].elements[0] {
            PendingElement::Ready(SlideElement::Text(t)) => t,
            other => panic!("expected text element, got {other:?}"),
        };
        assert_eq!(
            element.position,
            Position {
                left: 100,
                top: 51,
                width: 300,
                height: 48
            }
        );
        assert_eq!(element.paragraphs.len(), 1);
        let paragraph = &element.paragraphs[0];
        assert_eq!(paragraph.alignment, Alignment::Center);
        assert_eq!(paragraph.text, "**Agenda**");
        assert_eq!(paragraph.font.name, "Inter");
        assert_eq!(paragraph.font.size, 32);
        assert_eq!(paragraph.font.weight, 600);
        assert!(paragraph.font.bold);
        assert_eq!(paragraph.font.color, "101020");
    }

    #[test]
    fn normalized_half_scale_geometry_doubles_cleanly() {
        // A container originally rendered at 50% scale reports doubled
        // coordinates once the walker has forced it to 1280x720; the
        // conversion must carry those through within rounding.
        let slides = build_pending(vec![raw_slide(json!({
            "slideIndex": 0,
            "backgroundColor": "#FFFFFF",
            "elements": [{
                "kind": "text",
                "elementId": "t1",
                "left": 200.0, "top": 100.0, "width": 400.0, "height": 200.4,
                "rawText": "scaled"
            }]
        }))]);

        let position = match &slides[0].elements[0] {
            PendingElement::Ready(element) => *element.position(),
            other => panic!("unexpected {other:?}"),
        };
        assert_eq!(
            position,
            Position {
                left: 200,
                top: 100,
                width: 400,
                height: 200
            }
        );
    }

    #[test]
    fn picture_without_image_is_skipped() {
        let slides = build_pending(vec![raw_slide(json!({
            "slideIndex": 1,
            "backgroundColor": "rgb(0, 0, 0)",
            "elements": [
                {"kind": "picture", "elementId": "p1", "hasImage": false},
                {"kind": "text", "elementId": "t1", "rawText": "kept"}
            ]
        }))]);

        // The imageless picture contributes nothing; the text survives.
        assert_eq!(slides[0].elements.len(), 1);
        assert!(matches!(
            slides[0].elements[0],
            PendingElement::Ready(SlideElement::Text(_))
        ));
    }

    #[test]
    fn picture_fields_resolve_network_icon_and_radius() {
        let slides = build_pending(vec![raw_slide(json!({
            "slideIndex": 0,
            "backgroundColor": "#fff",
            "elements": [{
                "kind": "picture",
                "elementId": "p1",
                "left": 40.0, "top": 40.0, "width": 320.0, "height": 240.0,
                "hasImage": true,
                "imgSrc": "https://cdn.example.com/photo.png",
                "imgOriginalPath": "/assets/photo.png",
                "shape": "circle",
                "objectFit": "cover",
                "focusX": "0.25", "focusY": "-0.5",
                "isIcon": true,
                "borderRadius": "12px"
            }]
        }))]);

        let picture = match &slides[0].elements[0] {
            PendingElement::Ready(SlideElement::Picture(p)) => p,
            other => panic!("expected picture, got {other:?}"),
        };
        assert!(picture.picture.is_network);
        assert_eq!(picture.picture.path, "https://cdn.example.com/photo.png");
        assert_eq!(picture.shape.as_deref(), Some("circle"));
        assert_eq!(picture.object_fit.fit.as_deref(), Some("cover"));
        assert_eq!(picture.object_fit.focus, [0.25, -0.5]);
        assert_eq!(picture.overlay.as_deref(), Some("ffffff"));
        assert_eq!(picture.border_radius, [12, 12, 12, 12]);
    }

    #[test]
    fn picture_with_empty_src_falls_back_to_original_path() {
        let slides = build_pending(vec![raw_slide(json!({
            "slideIndex": 0,
            "backgroundColor": "#fff",
            "elements": [{
                "kind": "picture",
                "elementId": "p1",
                "hasImage": true,
                "imgSrc": "",
                "imgOriginalPath": "images/local.png"
            }]
        }))]);

        let picture = match &slides[0].elements[0] {
            PendingElement::Ready(SlideElement::Picture(p)) => p,
            other => panic!("expected picture, got {other:?}"),
        };
        assert!(!picture.picture.is_network);
        assert_eq!(picture.picture.path, "images/local.png");
        assert!(picture.overlay.is_none());
        assert_eq!(picture.border_radius, [0, 0, 0, 0]);
    }

    #[test]
    fn graphs_become_pending_and_unknown_kinds_drop() {
        let slides = build_pending(vec![raw_slide(json!({
            "slideIndex": 0,
            "backgroundColor": "#fff",
            "elements": [
                {"kind": "graph", "elementId": "g1",
                 "left": 0.0, "top": 0.0, "width": 640.0, "height": 360.0},
                {"kind": "decoration", "elementId": "d1"}
            ]
        }))]);

        assert_eq!(slides[0].elements.len(), 1);
        assert_eq!(
            slides[0].elements[0],
            PendingElement::PendingGraph {
                position: Position {
                    left: 0,
                    top: 0,
                    width: 640,
                    height: 360
                },
                element_id: "g1".to_string(),
            }
        );
    }

    #[test]
    fn slide_order_follows_container_order() {
        let slides = build_pending(vec![
            raw_slide(json!({"slideIndex": 0, "backgroundColor": "#fff", "elements": []})),
            raw_slide(json!({"slideIndex": 1, "backgroundColor": "#fff", "elements": []})),
        ]);
        let indices: Vec<i64> = slides.iter().map(|s| s.slide_index).collect();
        assert_eq!(indices, vec![0, 1]);
    }

    #[test]
    fn pending_graph_resolves_by_element_id() {
        let slide = PendingSlide {
            slide_index: 0,
            background_color: "ffffff".to_string(),
            elements: vec![PendingElement::PendingGraph {
                position: Position {
                    left: 10,
                    top: 10,
                    width: 100,
                    height: 100,
                },
                element_id: "g1".to_string(),
            }],
        };

        let metadata = slide
            .into_metadata(|id| (id == "g1").then(|| "/tmp/chart-g1-1.jpg".to_string()))
            .unwrap();
        match &metadata.elements[0] {
            SlideElement::Graph(graph) => {
                assert_eq!(graph.picture.path, "/tmp/chart-g1-1.jpg");
                assert!(graph.picture.is_network);
                assert_eq!(graph.border_radius, [0, 0, 0, 0]);
            }
            other => panic!("expected graph, got {other:?}"),
        }
    }

    #[test]
    fn unresolved_graph_fails_with_element_attribution() {
        let slide = PendingSlide {
            slide_index: 0,
            background_color: "ffffff".to_string(),
            elements: vec![PendingElement::PendingGraph {
                position: Position {
                    left: 0,
                    top: 0,
                    width: 1,
                    height: 1,
                },
                element_id: "ghost".to_string(),
            }],
        };

        let err = slide.into_metadata(|_| None).unwrap_err();
        match err {
            ExtractorError::Rasterization { element_id, .. } => {
                assert_eq!(element_id, "ghost")
            }
            other => panic!("expected rasterization error, got {other:?}"),
        }
    }
}
