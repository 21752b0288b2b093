use crate::models::elements::SlideElement;
use crate::models::slide::SlideMetadata;
use std::cmp::Ordering;
use std::fmt::Write;

// --- Helper Functions for Sorting ---

/// Compares two elements by their vertical position so the outline reads
/// top to bottom regardless of DOM traversal order.
fn compare_elements_by_top(a: &SlideElement, b: &SlideElement) -> Ordering {
    a.position().top.cmp(&b.position().top)
}

// --- Text Extraction Logic ---

/// Extracts the text carried by a single element, if it is a text element
/// with non-empty content.
fn extract_text_from_element(element: &SlideElement) -> Option<String> {
    if let SlideElement::Text(text_element) = element {
        let combined: String = text_element
            .paragraphs
            .iter()
            .map(|p| p.text.trim())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join("\n");
        if !combined.is_empty() {
            return Some(combined);
        }
    }
    None // Pictures, graphs, and empty runs contribute nothing
}

/// Extracts and concatenates text from all elements of a slide, sorted
/// vertically.
fn extract_text_from_slide(slide: &SlideMetadata) -> Option<String> {
    let mut sorted: Vec<&SlideElement> = slide.elements.iter().collect();
    sorted.sort_by(|a, b| compare_elements_by_top(a, b));

    let parts: Vec<String> = sorted
        .iter()
        .filter_map(|element| extract_text_from_element(element))
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join("\n"))
    }
}

// --- Public API Function ---

/// Renders an extracted deck as a Markdown outline: one section per slide
/// that carries text, sorted top to bottom within each slide.
///
/// Slides without any text content are skipped entirely rather than
/// rendered as empty sections.
pub fn deck_outline(slides: &[SlideMetadata]) -> String {
    let mut full_text = String::new();

    writeln!(full_text, "# Deck\n").expect("Writing to String failed");

    let mut first_slide = true;
    for slide in slides {
        if let Some(slide_content) = extract_text_from_slide(slide) {
            if !first_slide {
                writeln!(full_text, "\n---\n").expect("Writing to String failed");
            } else {
                first_slide = false;
            }

            // 1-based slide numbering for human readers
            writeln!(full_text, "## Slide {}\n", slide.slide_index + 1)
                .expect("Writing to String failed");
            writeln!(full_text, "{}", slide_content).expect("Writing to String failed");
        }
    }

    full_text
}
