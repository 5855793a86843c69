use super::config::BrowserConfig;
use headless_chrome::{Browser, LaunchOptions, Tab};
use std::ffi::OsStr;
use std::sync::Arc;

/// Owns the Chrome process and hands out tabs
pub struct BrowserManager {
    browser: Browser,
}

impl BrowserManager {
    /// Launch Chrome with the given configuration
    pub fn new(config: BrowserConfig) -> Result<Self, BrowserError> {
        let args = config.launch_args();
        let launch_options = Self::build_launch_options(&config, &args)?;

        log::info!(
            "Launching Chrome (headless={}, {} extra args)",
            config.headless,
            args.len()
        );

        let browser = Browser::new(launch_options)
            .map_err(|e| BrowserError::InitializationError(e.to_string()))?;

        Ok(Self { browser })
    }

    // `args` is owned by the caller because LaunchOptions only borrows it.
    fn build_launch_options<'a>(
        config: &BrowserConfig,
        args: &'a [String],
    ) -> Result<LaunchOptions<'a>, BrowserError> {
        LaunchOptions::default_builder()
            .headless(config.headless)
            .window_size(Some(config.window_size))
            .idle_browser_timeout(config.idle_timeout)
            .args(args.iter().map(|a| OsStr::new(a.as_str())).collect())
            .build()
            .map_err(|e| BrowserError::ConfigurationError(e.to_string()))
    }

    /// Open a new tab
    pub fn new_tab(&self) -> Result<Arc<Tab>, BrowserError> {
        self.browser
            .new_tab()
            .map_err(|e| BrowserError::TabCreationError(e.to_string()))
    }
}

/// Errors that can occur during browser operations
#[derive(Debug, thiserror::Error)]
pub enum BrowserError {
    #[error("Browser initialization failed: {0}")]
    InitializationError(String),

    #[error("Browser configuration error: {0}")]
    ConfigurationError(String),

    #[error("Tab creation failed: {0}")]
    TabCreationError(String),

    #[error("Navigation error: {0}")]
    NavigationError(String),

    #[error("JavaScript execution error: {0}")]
    JavaScriptError(String),

    #[error("HTML extraction error: {0}")]
    HtmlExtractionError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launch_options_build() {
        let config = BrowserConfig::headless();
        let args = config.launch_args();
        let options = BrowserManager::build_launch_options(&config, &args).unwrap();

        assert!(options.headless);
        assert!(options
            .args
            .iter()
            .any(|arg| arg.to_string_lossy().contains("--disable-gpu")));
    }

    #[test]
    fn test_visible_launch_options() {
        let config = BrowserConfig::visible();
        let args = config.launch_args();
        let options = BrowserManager::build_launch_options(&config, &args).unwrap();

        assert!(!options.headless);
        assert!(options.args.is_empty());
    }

    #[test]
    #[ignore] // Requires Chrome to be installed
    fn test_browser_manager_creation() {
        let manager = BrowserManager::new(BrowserConfig::headless()).unwrap();
        assert!(manager.new_tab().is_ok());
    }
}
