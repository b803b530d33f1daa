use anyhow::Result;
use async_trait::async_trait;
use std::fmt;
use std::time::Duration;

/// Element locator on the page under test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    /// CSS selector
    Css(String),
    /// `name` attribute of a form control
    Name(String),
    /// XPath expression
    Xpath(String),
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locator::Css(s) => write!(f, "css={}", s),
            Locator::Name(s) => write!(f, "name={}", s),
            Locator::Xpath(s) => write!(f, "xpath={}", s),
        }
    }
}

/// Condition a `wait_until` call polls for.
#[derive(Debug, Clone)]
pub enum WaitCondition {
    /// The page URL is no longer the given one (login redirect happened).
    UrlChangesFrom(String),
    /// The located element exists and is visible.
    Visible(Locator),
}

impl fmt::Display for WaitCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WaitCondition::UrlChangesFrom(url) => write!(f, "url change from {}", url),
            WaitCondition::Visible(locator) => write!(f, "visibility of {}", locator),
        }
    }
}

/// Browser-agnostic driver interface consumed by the live backend.
///
/// The orchestrator core never depends on a driver implementation, only on
/// the `Result` outcome of the scenario procedure built on top of it. A
/// `wait_until` whose condition is never satisfied must return an error
/// within its timeout, never hang.
#[async_trait]
pub trait BrowserDriver: Send + Sync {
    /// Browser identifier recorded in outcome metadata (e.g. "chromium").
    fn browser_name(&self) -> &str;

    async fn navigate(&self, url: &str) -> Result<()>;

    async fn current_url(&self) -> Result<String>;

    /// Clear the value of a form control.
    async fn clear(&self, locator: &Locator) -> Result<()>;

    /// Type text into a form control.
    async fn send_text(&self, locator: &Locator, text: &str) -> Result<()>;

    async fn click(&self, locator: &Locator) -> Result<()>;

    async fn is_displayed(&self, locator: &Locator) -> Result<bool>;

    /// Poll for a condition, failing with a timeout error when it is not
    /// satisfied within `timeout`.
    async fn wait_until(&self, condition: &WaitCondition, timeout: Duration) -> Result<()>;
}
