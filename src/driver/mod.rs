pub mod login;
pub mod traits;
pub mod web;

pub use login::{LiveBackend, LoginCredentials};
pub use traits::{BrowserDriver, Locator, WaitCondition};
pub use web::{PlaywrightDriver, WebDriverConfig};
