use super::manager::BrowserError;
use std::time::Duration;

/// The browser capabilities the page scrapers rely on.
///
/// One driver is one navigated page: every call mutates or reads the same
/// page, so a driver is used from one place at a time (`&mut self`).
/// Tests substitute a fixture-backed implementation so that parsing and
/// the load/wait/settle sequence run without Chrome or real delays.
pub trait PageDriver {
    /// Navigate to `url`. Errors only when the navigation cannot be started;
    /// a page that is slow to finish loading is logged and left to
    /// `wait_for_class`.
    fn navigate(&mut self, url: &str) -> Result<(), BrowserError>;

    /// Block until an element carrying `class_name` is present or `timeout`
    /// elapses. Returns whether the element showed up.
    fn wait_for_class(&mut self, class_name: &str, timeout: Duration) -> bool;

    /// Give client-side rendering extra time after the wait.
    fn settle(&mut self, delay: Duration);

    /// Full rendered HTML of the current page
    fn page_source(&mut self) -> Result<String, BrowserError>;
}

