//! Fixed parameters of the extraction pipeline and the DOM marker contract
//! the rendered deck page must satisfy.
//!
//! The marker attributes below are the wire format between the deck renderer
//! and this crate: a slide container node carries `data-slide-container` and
//! a numeric `data-slide-index`; each visual object inside it carries
//! `data-slide-element` with a `data-element-type` of
//! `text | picture | graph | box | line` plus type-specific data attributes;
//! nodes classed `slide-theme` receive the injected `data-theme`.

use std::time::Duration;

/// Headless viewport width. Sized above the canonical 1280x720 slide frame
/// so measurement never happens through sub-pixel scaling.
pub const VIEWPORT_WIDTH: u32 = 1440;
/// Headless viewport height.
pub const VIEWPORT_HEIGHT: u32 = 900;

/// Hard limit for page navigation to settle.
pub const NAVIGATION_TIMEOUT: Duration = Duration::from_secs(60);
/// Hard limit for slide containers to appear after navigation settles.
/// Longer than the navigation limit: client-side rendering of the deck can
/// lag well behind network idle.
pub const CONTENT_TIMEOUT: Duration = Duration::from_secs(80);
/// Poll interval for the container readiness wait.
pub const CONTENT_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Selector for slide container nodes, used by the readiness wait. The
/// in-page scripts repeat the marker selectors in their own source; this
/// module's doc comment is the single description of the full contract.
pub const SLIDE_CONTAINER_SELECTOR: &str = "[data-slide-container]";
