use super::driver::PageDriver;
use super::config::BrowserConfig;
use super::manager::{BrowserError, BrowserManager};
use headless_chrome::Tab;
use std::sync::Arc;
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Poll `predicate` until it holds or `timeout` elapses.
///
/// The predicate is always evaluated at least once, so a zero timeout still
/// reports an element that is already there.
pub fn poll_until<F>(timeout: Duration, interval: Duration, mut predicate: F) -> bool
where
    F: FnMut() -> bool,
{
    let start = Instant::now();

    loop {
        if predicate() {
            return true;
        }
        if start.elapsed() >= timeout {
            return false;
        }
        std::thread::sleep(interval.min(timeout.saturating_sub(start.elapsed())));
    }
}

/// `PageDriver` backed by a real Chrome tab
pub struct BrowserScraper {
    tab: Arc<Tab>,
    // Chrome exits when its manager is dropped
    _manager: BrowserManager,
}

impl BrowserScraper {
    /// Launch a browser and drive its first tab for the scraper's lifetime
    pub fn launch(config: BrowserConfig) -> Result<Self, BrowserError> {
        let manager = BrowserManager::new(config)?;
        let tab = manager.new_tab()?;

        Ok(Self {
            tab,
            _manager: manager,
        })
    }

    fn has_class(&self, class_name: &str) -> Result<bool, BrowserError> {
        let result = self
            .tab
            .evaluate(&class_probe_script(class_name), false)
            .map_err(|e| BrowserError::JavaScriptError(e.to_string()))?;

        Ok(result.value.and_then(|v| v.as_bool()).unwrap_or(false))
    }
}

/// Script answering whether any element carries `class_name`
fn class_probe_script(class_name: &str) -> String {
    format!(
        r#"document.getElementsByClassName('{}').length > 0"#,
        class_name.replace('\\', "\\\\").replace('\'', "\\'")
    )
}

impl PageDriver for BrowserScraper {
    fn navigate(&mut self, url: &str) -> Result<(), BrowserError> {
        self.tab
            .navigate_to(url)
            .map_err(|e| BrowserError::NavigationError(format!("Failed to navigate to {}: {}", url, e)))?;

        // A page that never fires its load event is still usable; the marker
        // wait decides how much of it has rendered.
        if let Err(e) = self.tab.wait_until_navigated() {
            log::warn!("{} did not finish loading, continuing: {}", url, e);
        }

        Ok(())
    }

    fn wait_for_class(&mut self, class_name: &str, timeout: Duration) -> bool {
        poll_until(timeout, POLL_INTERVAL, || match self.has_class(class_name) {
            Ok(found) => found,
            // Evaluation fails while the document is being replaced
            Err(e) => {
                log::debug!("Probe for .{} failed: {}", class_name, e);
                false
            }
        })
    }

    fn settle(&mut self, delay: Duration) {
        std::thread::sleep(delay);
    }

    fn page_source(&mut self) -> Result<String, BrowserError> {
        self.tab
            .get_content()
            .map_err(|e| BrowserError::HtmlExtractionError(e.to_string()))
    }
}
