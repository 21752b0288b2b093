pub mod browser;
pub mod convert;
pub mod errors;
pub mod extract;
pub mod models;

pub use convert::markdown::deck_outline;
pub use errors::{ExtractorError, Result};
pub use extract::{get_slide_metadata, get_slide_metadata_with_options, ExtractOptions};
pub use models::elements::SlideElement;
pub use models::slide::SlideMetadata;
pub use models::theme::CustomColors;
