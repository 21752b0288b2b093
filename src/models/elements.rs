use serde::{Deserialize, Serialize};

use crate::models::common::Position;
use crate::models::picture::{ObjectFit, PictureSource};
use crate::models::text::Paragraph;

/// A visual object reproduced from a slide, discriminated by the `kind`
/// marker read off the DOM at extraction time.
///
/// The walker only ever emits `Text`, `Picture`, and `Graph`. `Box` and
/// `Line` are carried for the downstream deck consumer, which models them;
/// no extraction case populates them yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SlideElement {
    /// A run of styled text.
    Text(TextElement),
    /// An image, icon, or other raster/vector picture.
    Picture(PictureElement),
    /// A chart, represented by a rasterized snapshot of its rendered form.
    Graph(GraphElement),
    /// A filled/stroked rectangle. Not emitted by the walker.
    Box(BoxElement),
    /// A straight connector line. Not emitted by the walker.
    Line(LineElement),
}

impl SlideElement {
    /// Position of the element regardless of its kind.
    pub fn position(&self) -> &Position {
        match self {
            SlideElement::Text(e) => &e.position,
            SlideElement::Picture(e) => &e.position,
            SlideElement::Graph(e) => &e.position,
            SlideElement::Box(e) => &e.position,
            SlideElement::Line(e) => &e.position,
        }
    }
}

/// A text element carrying a single styled paragraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextElement {
    pub position: Position,
    /// Always exactly one paragraph in current extractions.
    pub paragraphs: Vec<Paragraph>,
}

/// A picture element with its fit, overlay, and corner rounding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PictureElement {
    pub position: Position,
    pub picture: PictureSource,
    /// Shape keyword declared on the element, if any.
    pub shape: Option<String>,
    pub object_fit: ObjectFit,
    /// Six-hex-digit tint applied over the picture; `ffffff` for icons.
    pub overlay: Option<String>,
    /// Corner radii in pixels, one per corner. The page declares a single
    /// radius so all four entries are currently identical.
    pub border_radius: [i32; 4],
}

/// A chart element. The picture path points at the rasterized snapshot
/// written during extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphElement {
    pub position: Position,
    pub picture: PictureSource,
    pub border_radius: [i32; 4],
}

/// Outline stroke of a box element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    /// Stroke color as six hex digits.
    pub color: String,
    /// Stroke thickness in pixels.
    pub thickness: f64,
}

/// Drop shadow of a box element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    /// Shadow color as six hex digits.
    pub color: String,
    pub offset_x: f64,
    pub offset_y: f64,
    pub blur: f64,
}

/// A filled rectangle. Structurally defined for the downstream consumer;
/// the walker has no case that produces one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxElement {
    pub position: Position,
    /// Fill color as six hex digits, if filled.
    pub fill: Option<String>,
    pub stroke: Option<Stroke>,
    pub shadow: Option<Shadow>,
}

/// A straight line. Structurally defined for the downstream consumer;
/// the walker has no case that produces one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineElement {
    pub position: Position,
    /// Line style keyword (e.g. solid, dashed), if declared.
    pub line_type: Option<String>,
    /// Line thickness in pixels.
    pub thickness: f64,
    /// Line color as six hex digits.
    pub color: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::font::Font;
    use crate::models::text::Alignment;

    #[test]
    fn elements_serialize_with_kind_tag() {
        let element = SlideElement::Text(TextElement {
            position: Position {
                left: 10,
                top: 20,
                width: 300,
                height: 40,
            },
            paragraphs: vec![Paragraph {
                alignment: Alignment::Center,
                text: "Quarterly Review".to_string(),
                font: Font {
                    name: "Inter".to_string(),
                    size: 24,
                    bold: true,
                    weight: 700,
                    color: "1a1a2e".to_string(),
                },
            }],
        });

        let json = serde_json::to_value(&element).unwrap();
        assert_eq!(json["kind"], "text");
        assert_eq!(json["paragraphs"][0]["alignment"], 2);
        assert_eq!(json["position"]["left"], 10);
    }

    #[test]
    fn graph_elements_round_trip() {
        let element = SlideElement::Graph(GraphElement {
            position: Position {
                left: 0,
                top: 0,
                width: 640,
                height: 360,
            },
            picture: PictureSource {
                is_network: true,
                path: "/tmp/chart-el7-1700000000000.jpg".to_string(),
            },
            border_radius: [0, 0, 0, 0],
        });

        let json = serde_json::to_string(&element).unwrap();
        let back: SlideElement = serde_json::from_str(&json).unwrap();
        assert_eq!(back, element);
    }
}
