#![allow(dead_code)]
use imdb_scraper::browser::{BrowserError, PageDriver};
use std::collections::{HashMap, HashSet};
use std::time::Duration;

/// Serves fixed HTML by URL and records what the scraper asked for.
/// Settle pauses are recorded, never slept.
#[derive(Default)]
pub struct FixtureDriver {
    pages: HashMap<String, String>,
    slow: HashSet<String>,
    current: Option<String>,
    pub visited: Vec<String>,
    pub waited_for: Vec<(String, Duration)>,
    pub settled: Vec<Duration>,
}

impl FixtureDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(url.to_string(), html.to_string());
        self
    }

    /// A page that keeps loading: the marker wait always runs out, but
    /// whatever markup is there is still handed back afterwards.
    pub fn slow_page(mut self, url: &str, html: &str) -> Self {
        self.slow.insert(url.to_string());
        self.page(url, html)
    }
}

impl PageDriver for FixtureDriver {
    fn navigate(&mut self, url: &str) -> Result<(), BrowserError> {
        self.visited.push(url.to_string());
        if !self.pages.contains_key(url) {
            return Err(BrowserError::NavigationError(format!("no fixture for {}", url)));
        }
        self.current = Some(url.to_string());
        Ok(())
    }

    fn wait_for_class(&mut self, class_name: &str, timeout: Duration) -> bool {
        self.waited_for.push((class_name.to_string(), timeout));
        if self.current.as_ref().is_some_and(|url| self.slow.contains(url)) {
            return false;
        }
        // Crude but enough for fixtures: the class name appears in the markup
        self.current
            .as_ref()
            .and_then(|url| self.pages.get(url))
            .map(|html| html.contains(class_name))
            .unwrap_or(false)
    }

    fn settle(&mut self, delay: Duration) {
        self.settled.push(delay);
    }

    fn page_source(&mut self) -> Result<String, BrowserError> {
        self.current
            .as_ref()
            .and_then(|url| self.pages.get(url))
            .cloned()
            .ok_or_else(|| BrowserError::HtmlExtractionError("no page loaded".to_string()))
    }
}

pub const MATRIX_URL: &str = "https://www.imdb.com/title/tt0133093/";
pub const MATRIX_CREDITS_URL: &str = "https://www.imdb.com/title/tt0133093/fullcredits";

pub fn fixture(name: &str) -> String {
    let path = format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("reading {}: {}", path, e))
}
