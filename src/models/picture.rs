use serde::{Deserialize, Serialize};

/// Where a picture's bytes live.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PictureSource {
    /// True when the resolved source is fetched over the network
    /// (the `src` starts with `http`).
    pub is_network: bool,
    /// Resolved image source. Prefers the live `src`; falls back to the
    /// page-declared original path, which may be relative.
    pub path: String,
}

/// How an image is fitted inside its frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectFit {
    /// CSS object-fit keyword declared on the element, if any.
    pub fit: Option<String>,
    /// Focal point as a pair of fractional offsets. Defaults to (0, 0).
    pub focus: [f64; 2],
}

impl Default for ObjectFit {
    fn default() -> Self {
        ObjectFit {
            fit: None,
            focus: [0.0, 0.0],
        }
    }
}
