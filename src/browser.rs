//! Scoped acquisition of a headless browser page pointed at a rendered deck.

use std::time::Duration;

use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::handler::viewport::Viewport;
use chromiumoxide::Page;
use futures::StreamExt;
use log::{debug, warn};
use tokio::task::JoinHandle;
use tokio::time::{sleep, timeout, Instant};

use crate::errors::{ExtractorError, Result};
use crate::extract::constants::{
    CONTENT_POLL_INTERVAL, SLIDE_CONTAINER_SELECTOR, VIEWPORT_HEIGHT, VIEWPORT_WIDTH,
};

/// A live headless-browser session scoped to one extraction.
///
/// Each acquisition launches its own browser process; nothing is shared
/// across concurrent extractions. The session is held by value and released
/// exactly once via [`BrowserSession::close`]; an orphaned headless browser
/// is the failure mode this type exists to prevent, so every path out of an
/// extraction must run the teardown, including failures during acquisition
/// itself (handled internally here).
pub struct BrowserSession {
    browser: Browser,
    handler_task: JoinHandle<()>,
    page: Page,
}

impl BrowserSession {
    /// Launches a headless browser, navigates to `url`, and waits for the
    /// deck to finish rendering.
    ///
    /// Readiness is two-staged: navigation must settle within
    /// `navigation_timeout` ([`ExtractorError::NavigationTimeout`]
    /// otherwise), then at least one slide container must appear within
    /// `content_timeout` ([`ExtractorError::ContentNotReady`] otherwise).
    ///
    /// On any failure the just-launched browser is torn down before the
    /// error is returned.
    pub async fn acquire(
        url: &str,
        navigation_timeout: Duration,
        content_timeout: Duration,
    ) -> Result<Self> {
        debug!("launching headless browser for '{url}'");
        let (browser, handler_task) = launch().await?;

        match open_deck(&browser, url, navigation_timeout, content_timeout).await {
            Ok(page) => Ok(BrowserSession {
                browser,
                handler_task,
                page,
            }),
            Err(e) => {
                teardown(browser, handler_task).await;
                Err(e)
            }
        }
    }

    /// The page the deck is rendered on.
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Terminates the browser process and its event handler.
    pub async fn close(self) {
        teardown(self.browser, self.handler_task).await;
    }
}

/// Launches the browser process and spawns the CDP event loop.
async fn launch() -> Result<(Browser, JoinHandle<()>)> {
    let config = BrowserConfig::builder()
        // Container/CI environments lack the user namespaces the Chromium
        // sandbox needs.
        .no_sandbox()
        .window_size(VIEWPORT_WIDTH, VIEWPORT_HEIGHT)
        .viewport(Viewport {
            width: VIEWPORT_WIDTH,
            height: VIEWPORT_HEIGHT,
            device_scale_factor: Some(1.0),
            ..Viewport::default()
        })
        .build()
        .map_err(ExtractorError::BrowserLaunch)?;

    let (browser, mut handler) = Browser::launch(config).await?;
    let handler_task = tokio::spawn(async move {
        while let Some(event) = handler.next().await {
            if event.is_err() {
                break;
            }
        }
    });
    Ok((browser, handler_task))
}

/// Opens `url` and waits out both readiness stages.
async fn open_deck(
    browser: &Browser,
    url: &str,
    navigation_timeout: Duration,
    content_timeout: Duration,
) -> Result<Page> {
    let page = browser.new_page("about:blank").await?;

    let navigation = async {
        page.goto(url).await?;
        page.wait_for_navigation().await?;
        Ok::<(), ExtractorError>(())
    };
    timeout(navigation_timeout, navigation)
        .await
        .map_err(|_| ExtractorError::NavigationTimeout {
            url: url.to_string(),
            timeout_secs: navigation_timeout.as_secs(),
        })??;

    debug!("navigation settled; waiting for slide containers");
    let deadline = Instant::now() + content_timeout;
    loop {
        if page.find_element(SLIDE_CONTAINER_SELECTOR).await.is_ok() {
            return Ok(page);
        }
        if Instant::now() >= deadline {
            return Err(ExtractorError::ContentNotReady {
                timeout_secs: content_timeout.as_secs(),
            });
        }
        sleep(CONTENT_POLL_INTERVAL).await;
    }
}

/// Closes the browser and drains its event loop. If the close command fails
/// the handler is aborted instead; the browser process itself is killed on
/// drop by the underlying driver, so no path leaves a process behind.
async fn teardown(mut browser: Browser, handler_task: JoinHandle<()>) {
    match browser.close().await {
        Ok(_) => {
            let _ = handler_task.await;
        }
        Err(e) => {
            warn!("browser close failed ({e}); aborting event handler");
            handler_task.abort();
        }
    }
}
