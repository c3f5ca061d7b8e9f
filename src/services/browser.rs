// src/services/browser.rs

//! Headless browser rendering of search-result pages.

use std::time::Duration;

use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig as CdpConfig};
use chromiumoxide::handler::viewport::Viewport;
use chromiumoxide::page::Page;
use futures::StreamExt;
use tokio::task::JoinHandle;
use url::Url;

use crate::error::{AppError, Result};
use crate::models::BrowserConfig;

/// A stateful browser session that renders pages to markup.
#[async_trait]
pub trait PageRenderer: Send {
    /// Navigate to `url` and return the rendered document markup.
    async fn render(&mut self, url: &Url) -> Result<String>;

    /// Release the session. Called exactly once, on every exit path.
    async fn close(&mut self) -> Result<()>;
}

/// Chrome session driven over CDP.
pub struct ChromeRenderer {
    browser: Browser,
    page: Page,
    handler: JoinHandle<()>,
}

impl ChromeRenderer {
    /// Launch Chrome with the configured viewport and open a blank tab.
    pub async fn launch(config: &BrowserConfig) -> Result<Self> {
        let viewport = Viewport {
            width: config.window_width,
            height: config.window_height,
            ..Viewport::default()
        };

        let mut builder = CdpConfig::builder()
            .window_size(config.window_width, config.window_height)
            .viewport(viewport)
            .request_timeout(Duration::from_secs(config.request_timeout_secs))
            .arg("--no-first-run")
            .arg("--no-default-browser-check")
            .arg("--disable-dev-shm-usage");

        if !config.headless {
            builder = builder.with_head();
        }
        if let Some(path) = &config.executable {
            builder = builder.chrome_executable(path);
        }

        let cdp_config = builder.build().map_err(AppError::browser)?;

        log::debug!(
            "Launching Chrome (headless={}, {}x{})",
            config.headless,
            config.window_width,
            config.window_height
        );
        let (mut browser, mut handler) = Browser::launch(cdp_config)
            .await
            .map_err(|e| AppError::browser(format!("launch failed: {e}")))?;

        let handler = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    log::debug!("Browser handler event error: {}", e);
                }
            }
        });

        let page = match browser.new_page("about:blank").await {
            Ok(page) => page,
            Err(e) => {
                let _ = browser.close().await;
                let _ = browser.wait().await;
                handler.abort();
                return Err(AppError::browser(format!("failed to open page: {e}")));
            }
        };

        Ok(Self {
            browser,
            page,
            handler,
        })
    }
}

#[async_trait]
impl PageRenderer for ChromeRenderer {
    async fn render(&mut self, url: &Url) -> Result<String> {
        self.page
            .goto(url.as_str())
            .await
            .map_err(|e| AppError::browser(format!("navigation to {url} failed: {e}")))?;

        let html = self
            .page
            .content()
            .await
            .map_err(|e| AppError::browser(format!("reading {url} failed: {e}")))?;
        Ok(html)
    }

    async fn close(&mut self) -> Result<()> {
        let closed = self.browser.close().await.map(|_| ());
        if let Err(e) = self.browser.wait().await {
            log::debug!("Waiting for Chrome to exit failed: {}", e);
        }
        self.handler.abort();
        closed.map_err(|e| AppError::browser(format!("close failed: {e}")))
    }
}
