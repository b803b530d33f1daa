//! Playwright-backed implementation of [`BrowserDriver`].
//!
//! A thin I/O adapter: every method maps directly onto a page operation, and
//! all waiting is a poll loop with a deadline so a dead page surfaces as a
//! timeout error instead of a hang.

use anyhow::{Context, Result};
use async_trait::async_trait;
use playwright::api::{Browser, BrowserContext, Page, Viewport};
use playwright::Playwright;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

use super::traits::{BrowserDriver, Locator, WaitCondition};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Web driver configuration.
#[derive(Debug, Clone)]
pub struct WebDriverConfig {
    pub headless: bool,
    pub viewport_width: u32,
    pub viewport_height: u32,
}

impl Default for WebDriverConfig {
    fn default() -> Self {
        let headed = std::env::var("LOGINPROBE_HEADED")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

        Self {
            headless: !headed,
            viewport_width: 1280,
            viewport_height: 720,
        }
    }
}

/// Chromium session driven through Playwright. The browser closes when the
/// driver is dropped.
pub struct PlaywrightDriver {
    #[allow(dead_code)]
    playwright: Arc<Playwright>,
    #[allow(dead_code)]
    browser: Arc<Browser>,
    #[allow(dead_code)]
    context: Arc<BrowserContext>,
    page: Arc<Mutex<Page>>,
    config: WebDriverConfig,
}

impl PlaywrightDriver {
    pub async fn launch(config: WebDriverConfig) -> Result<Self> {
        let playwright = Playwright::initialize()
            .await
            .context("Failed to initialize Playwright")?;

        let browser = playwright
            .chromium()
            .launcher()
            .headless(config.headless)
            .launch()
            .await
            .context("Failed to launch Chromium")?;

        let context = browser.context_builder().build().await?;
        let page = context.new_page().await?;

        page.set_viewport_size(Viewport {
            width: config.viewport_width as i32,
            height: config.viewport_height as i32,
        })
        .await?;

        log::debug!(
            "launched chromium (headless={}, viewport={}x{})",
            config.headless,
            config.viewport_width,
            config.viewport_height
        );

        Ok(Self {
            playwright: Arc::new(playwright),
            browser: Arc::new(browser),
            context: Arc::new(context),
            page: Arc::new(Mutex::new(page)),
            config,
        })
    }

    pub fn viewport(&self) -> String {
        format!("{}x{}", self.config.viewport_width, self.config.viewport_height)
    }

    fn to_playwright_selector(locator: &Locator) -> String {
        match locator {
            Locator::Css(css) => css.clone(),
            Locator::Name(name) => format!("[name=\"{}\"]", name),
            Locator::Xpath(xpath) => format!("xpath={}", xpath),
        }
    }
}

#[async_trait]
impl BrowserDriver for PlaywrightDriver {
    fn browser_name(&self) -> &str {
        "chromium"
    }

    async fn navigate(&self, url: &str) -> Result<()> {
        let page = self.page.lock().await;
        page.goto_builder(url)
            .goto()
            .await
            .with_context(|| format!("Failed to navigate to {}", url))?;
        Ok(())
    }

    async fn current_url(&self) -> Result<String> {
        let page = self.page.lock().await;
        Ok(page.url()?)
    }

    async fn clear(&self, locator: &Locator) -> Result<()> {
        let page = self.page.lock().await;
        let selector = Self::to_playwright_selector(locator);
        match page.query_selector(&selector).await? {
            Some(element) => {
                element.fill_builder("").fill().await?;
                Ok(())
            }
            None => anyhow::bail!("Element not found: {}", locator),
        }
    }

    async fn send_text(&self, locator: &Locator, text: &str) -> Result<()> {
        let page = self.page.lock().await;
        let selector = Self::to_playwright_selector(locator);
        match page.query_selector(&selector).await? {
            Some(element) => {
                element.fill_builder(text).fill().await?;
                Ok(())
            }
            None => anyhow::bail!("Element not found: {}", locator),
        }
    }

    async fn click(&self, locator: &Locator) -> Result<()> {
        let page = self.page.lock().await;
        let selector = Self::to_playwright_selector(locator);
        match page.query_selector(&selector).await? {
            Some(element) => {
                element.click_builder().click().await?;
                Ok(())
            }
            None => anyhow::bail!("Element not found: {}", locator),
        }
    }

    async fn is_displayed(&self, locator: &Locator) -> Result<bool> {
        let page = self.page.lock().await;
        let selector = Self::to_playwright_selector(locator);
        match page.query_selector(&selector).await? {
            Some(element) => Ok(element.is_visible().await?),
            None => Ok(false),
        }
    }

    async fn wait_until(&self, condition: &WaitCondition, timeout: Duration) -> Result<()> {
        let deadline = Instant::now() + timeout;
        loop {
            let satisfied = match condition {
                WaitCondition::UrlChangesFrom(origin) => self.current_url().await? != *origin,
                WaitCondition::Visible(locator) => self.is_displayed(locator).await?,
            };
            if satisfied {
                return Ok(());
            }
            if Instant::now() >= deadline {
                anyhow::bail!(
                    "Timeout after {:.1}s waiting for {}",
                    timeout.as_secs_f64(),
                    condition
                );
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_mapping() {
        assert_eq!(
            PlaywrightDriver::to_playwright_selector(&Locator::Name("username".into())),
            "[name=\"username\"]"
        );
        assert_eq!(
            PlaywrightDriver::to_playwright_selector(&Locator::Css(".error-message".into())),
            ".error-message"
        );
        assert_eq!(
            PlaywrightDriver::to_playwright_selector(&Locator::Xpath(
                "//button[@type='submit']".into()
            )),
            "xpath=//button[@type='submit']"
        );
    }
}
