//! Headless Chrome render backend.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use headless_chrome::protocol::cdp::Page::CaptureScreenshotFormatOption;
use headless_chrome::{Browser, LaunchOptions, Tab};

use crate::renderer::{RenderError, Renderer};

/// Renders documents in a headless Chrome tab with a fixed viewport and a
/// fixed post-load settle delay, screenshotting the `body` element.
///
/// One browser and one tab are reused across the whole batch; renders are
/// strictly sequential.
pub struct ChromeRenderer {
    // Keeps the browser process alive for the lifetime of the renderer.
    _browser: Browser,
    tab: Arc<Tab>,
    settle: Duration,
    scratch: PathBuf,
}

impl ChromeRenderer {
    /// Launch a headless browser with the given viewport size.
    pub fn launch(viewport: (u32, u32), settle: Duration) -> Result<Self, RenderError> {
        let options = LaunchOptions::default_builder()
            .headless(true)
            .window_size(Some(viewport))
            .build()
            .map_err(|e| RenderError::Browser(e.to_string()))?;

        let browser = Browser::new(options).map_err(|e| RenderError::Browser(e.to_string()))?;
        let tab = browser
            .new_tab()
            .map_err(|e| RenderError::Browser(e.to_string()))?;

        let scratch = std::env::temp_dir().join(format!(
            "blockforge-preview-{}.html",
            std::process::id()
        ));

        Ok(Self {
            _browser: browser,
            tab,
            settle,
            scratch,
        })
    }
}

impl Renderer for ChromeRenderer {
    fn render(&mut self, html: &str) -> Result<Vec<u8>, RenderError> {
        // Chrome loads the document from a scratch file; data: URLs would
        // need their own encoding pass and break remote script tags in some
        // versions.
        fs::write(&self.scratch, html)?;
        let url = format!("file://{}", self.scratch.display());

        self.tab
            .navigate_to(&url)
            .and_then(|tab| tab.wait_until_navigated())
            .map_err(|e| RenderError::Browser(e.to_string()))?;

        // Fixed settle delay for any dynamic rendering (CDN stylesheets,
        // scripts) before the screenshot.
        std::thread::sleep(self.settle);

        let png = self
            .tab
            .find_element("body")
            .and_then(|body| body.capture_screenshot(CaptureScreenshotFormatOption::Png))
            .map_err(|e| RenderError::Browser(e.to_string()))?;

        Ok(png)
    }
}

impl Drop for ChromeRenderer {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.scratch);
    }
}
