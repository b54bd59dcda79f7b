use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::Page;
use futures::StreamExt;
use tokio::sync::Mutex;
use url::Url;

use crate::app::{MillraceError, Result};
use crate::domain::Entry;
use crate::readability::extractor::ContentExtractor;
use crate::readability::{ContentFetcher, FetchConfig};

/// Chrome-based content fetcher using chromiumoxide.
///
/// One browser, one page at a time: `fetch` opens a page and holds onto
/// it, `release` closes it. Enrichment runs strictly sequentially, so
/// there is never more than one live page.
pub struct ChromeFetcher {
    browser: Browser,
    config: FetchConfig,
    extractor: ContentExtractor,
    page: Mutex<Option<Page>>,
}

impl ChromeFetcher {
    /// Launch the browser with the given configuration.
    pub async fn new(config: FetchConfig) -> Result<Self> {
        let mut builder = BrowserConfig::builder()
            .arg("--no-sandbox")
            .arg("--disable-gpu")
            .arg("--disable-dev-shm-usage")
            .arg("--disable-software-rasterizer");

        if !config.headless {
            builder = builder.with_head();
        }

        let browser_config = builder
            .build()
            .map_err(|e| MillraceError::Fetch(format!("Failed to build browser config: {}", e)))?;

        let (browser, mut handler) = Browser::launch(browser_config)
            .await
            .map_err(|e| MillraceError::Fetch(format!(
                "Failed to launch browser: {}. Is Chrome or Chromium installed and in PATH?",
                e
            )))?;

        // Drive the browser's event loop
        tokio::spawn(async move { while handler.next().await.is_some() {} });

        let extractor = ContentExtractor::new(config.clone());

        Ok(Self {
            browser,
            config,
            extractor,
            page: Mutex::new(None),
        })
    }

    /// Launch with default configuration.
    pub async fn with_defaults() -> Result<Self> {
        Self::new(FetchConfig::default()).await
    }

    async fn extract(&self, url: &str) -> Result<Option<String>> {
        let page = self
            .browser
            .new_page(url)
            .await
            .map_err(|e| MillraceError::Fetch(format!("Failed to create page: {}", e)))?;

        // Hand the page to release() before anything can fail
        *self.page.lock().await = Some(page.clone());

        if let Some(ref ua) = self.config.user_agent {
            page.set_user_agent(ua)
                .await
                .map_err(|e| MillraceError::Fetch(format!("Failed to set user agent: {}", e)))?;
        }

        page.wait_for_navigation()
            .await
            .map_err(|e| MillraceError::Fetch(format!("Navigation failed: {}", e)))?;

        // Additional wait for dynamic content
        tokio::time::sleep(self.config.wait_after_load()).await;

        let script = self.extractor.extraction_script();
        let result: serde_json::Value = page
            .evaluate(script)
            .await
            .map_err(|e| MillraceError::Fetch(format!("Script execution failed: {}", e)))?
            .into_value()
            .map_err(|e| MillraceError::Fetch(format!("Failed to parse result: {:?}", e)))?;

        let html = result["html"].as_str().unwrap_or("").to_string();
        if html.is_empty() {
            Ok(None)
        } else {
            Ok(Some(html))
        }
    }
}

#[async_trait]
impl ContentFetcher for ChromeFetcher {
    async fn fetch(&self, entry: &Entry) -> Result<Option<String>> {
        let url = Url::parse(&entry.link)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Ok(None);
        }

        self.extract(url.as_str()).await
    }

    async fn release(&self) {
        if let Some(page) = self.page.lock().await.take() {
            let _ = page.close().await;
        }
    }
}
