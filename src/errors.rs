use thiserror::Error;

/// Represents errors that can occur while extracting slide scene metadata
/// from a rendered deck page.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// The headless browser rejected its launch configuration.
    #[error("Browser launch configuration rejected: {0}")]
    BrowserLaunch(String),

    /// Error originating from the Chrome DevTools Protocol session (`chromiumoxide`).
    #[error("Browser protocol error: {0}")]
    Browser(#[from] chromiumoxide::error::CdpError),

    /// Navigation did not settle within the allotted time. May be transient;
    /// callers can retry with backoff.
    #[error("Navigation to '{url}' did not settle within {timeout_secs}s")]
    NavigationTimeout { url: String, timeout_secs: u64 },

    /// The page navigated but no slide container ever appeared. Usually a
    /// wrong URL or a client-side rendering failure, not a transient condition.
    #[error("No slide container appeared within {timeout_secs}s after navigation settled")]
    ContentNotReady { timeout_secs: u64 },

    /// The theme injection script failed inside the page. Almost always means
    /// the page does not carry the expected slide markers.
    #[error("Theme injection failed: {0}")]
    ThemeApplication(String),

    /// A specific chart element could not be captured or written to disk.
    #[error("Failed to rasterize chart element '{element_id}': {reason}")]
    Rasterization { element_id: String, reason: String },

    /// The scene payload returned by the in-page walker script could not be
    /// deserialized into the expected shape.
    #[error("Failed to deserialize scene data from page: {0}")]
    SceneDeserialization(#[from] serde_json::Error),

    /// An I/O error occurred, typically while persisting a rasterized chart.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catch-all wrapper for any failure between theme injection and chart
    /// resolution. The browser session has already been torn down by the time
    /// this is returned.
    #[error("Slide metadata extraction failed: {0}")]
    ExtractionFailed(#[source] Box<ExtractorError>),
}

/// A type alias for `Result<T, ExtractorError>` for convenience within the crate.
pub type Result<T> = std::result::Result<T, ExtractorError>;
