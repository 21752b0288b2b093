use serde::{Deserialize, Serialize};

use crate::models::font::Font;

/// Horizontal paragraph alignment, serialized as the numeric codes the
/// downstream deck consumer expects: 1 = default/left, 2 = center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Alignment {
    /// Default alignment (left).
    Left,
    /// Centered text.
    Center,
}

impl From<Alignment> for u8 {
    fn from(alignment: Alignment) -> u8 {
        match alignment {
            Alignment::Left => 1,
            Alignment::Center => 2,
        }
    }
}

impl TryFrom<u8> for Alignment {
    type Error = String;

    fn try_from(code: u8) -> std::result::Result<Self, Self::Error> {
        match code {
            1 => Ok(Alignment::Left),
            2 => Ok(Alignment::Center),
            other => Err(format!("unknown alignment code: {other}")),
        }
    }
}

/// A single paragraph of styled text.
///
/// The walker emits exactly one paragraph per text element; the sequence
/// type exists for the downstream consumer, which models multi-paragraph
/// runs. Preserve the length-1 arity when producing these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Paragraph alignment code.
    pub alignment: Alignment,
    /// Text content. Prefers the pre-serialized rich-text attribute over the
    /// raw DOM text so inline formatting survives.
    pub text: String,
    /// Resolved font styling for the paragraph.
    pub font: Font,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alignment_serializes_as_numeric_code() {
        assert_eq!(serde_json::to_string(&Alignment::Left).unwrap(), "1");
        assert_eq!(serde_json::to_string(&Alignment::Center).unwrap(), "2");
    }

    #[test]
    fn alignment_round_trips() {
        let center: Alignment = serde_json::from_str("2").unwrap();
        assert_eq!(center, Alignment::Center);
        assert!(serde_json::from_str::<Alignment>("3").is_err());
    }
}
