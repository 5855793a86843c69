//! Browser automation for pages that only render client-side
//!
//! The scrapers never talk to Chrome directly: they go through the
//! [`PageDriver`] trait, which [`BrowserScraper`] implements on top of a
//! `headless_chrome` tab.
//!
//! # Example
//!
//! ```no_run
//! use imdb_scraper::browser::{BrowserConfig, BrowserScraper, PageDriver};
//! use std::time::Duration;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut driver = BrowserScraper::launch(BrowserConfig::headless())?;
//!
//! driver.navigate("https://www.imdb.com/chart/top/")?;
//! driver.wait_for_class("ipc-metadata-list-summary-item", Duration::from_secs(10));
//! let html = driver.page_source()?;
//!
//! println!("Extracted {} bytes of HTML", html.len());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod driver;
pub mod manager;
pub mod scraper;

pub use config::BrowserConfig;
pub use driver::PageDriver;
pub use manager::{BrowserError, BrowserManager};
pub use self::scraper::{poll_until, BrowserScraper};
