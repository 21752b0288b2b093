pub mod constants;
pub mod pipeline;

pub(crate) mod rasterizer;
pub(crate) mod scene;
pub(crate) mod theme;
pub(crate) mod walker;

pub use pipeline::{get_slide_metadata, get_slide_metadata_with_options, ExtractOptions};
