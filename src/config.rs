use crate::browser::BrowserConfig;
use crate::imdb::{Timings, TOP_CHART_URL};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub browser: BrowserSection,
    #[serde(default)]
    pub scraper: ScraperSection,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BrowserSection {
    /// Run Chrome without a window
    #[serde(default = "default_true")]
    pub headless: bool,

    /// Override the user agent (headless mode has its own default)
    #[serde(default)]
    pub user_agent: Option<String>,

    #[serde(default = "default_window_width")]
    pub window_width: u32,

    #[serde(default = "default_window_height")]
    pub window_height: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ScraperSection {
    #[serde(default = "default_top_chart_url")]
    pub top_chart_url: String,

    /// Ceiling for the marker element wait on every page
    #[serde(default = "default_load_timeout")]
    pub load_timeout_secs: u64,

    /// Pause after the chart page wait
    #[serde(default = "default_list_settle")]
    pub list_settle_secs: u64,

    /// Pause after the title page wait
    #[serde(default = "default_detail_settle")]
    pub detail_settle_secs: u64,

    /// Pause after the credits page wait
    #[serde(default = "default_credits_settle")]
    pub credits_settle_secs: u64,

    /// How many chart entries the binary enriches with details
    #[serde(default = "default_max_titles")]
    pub max_titles: usize,
}

fn default_true() -> bool { true }
fn default_window_width() -> u32 { 1920 }
fn default_window_height() -> u32 { 1080 }
fn default_top_chart_url() -> String { TOP_CHART_URL.to_string() }
fn default_load_timeout() -> u64 { 10 }
fn default_list_settle() -> u64 { 5 }
fn default_detail_settle() -> u64 { 1 }
fn default_credits_settle() -> u64 { 3 }
fn default_max_titles() -> usize { 10 }

impl Default for BrowserSection {
    fn default() -> Self {
        Self {
            headless: true,
            user_agent: None,
            window_width: 1920,
            window_height: 1080,
        }
    }
}

impl Default for ScraperSection {
    fn default() -> Self {
        Self {
            top_chart_url: TOP_CHART_URL.to_string(),
            load_timeout_secs: 10,
            list_settle_secs: 5,
            detail_settle_secs: 1,
            credits_settle_secs: 3,
            max_titles: 10,
        }
    }
}

impl Config {
    /// Read `config.toml` from the working directory, falling back to defaults
    pub fn load() -> Self {
        Self::load_from(Path::new("config.toml"))
    }

    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(content) => match Self::from_toml_str(&content) {
                    Ok(cfg) => return cfg,
                    Err(e) => log::warn!("Ignoring {}: {}", path.display(), e),
                },
                Err(e) => log::warn!("Could not read {}: {}", path.display(), e),
            }
        }
        Self::default()
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

impl BrowserSection {
    /// Browser preset for the configured mode, with any overrides applied
    pub fn browser_config(&self) -> BrowserConfig {
        let mut config = BrowserConfig::for_mode(self.headless);
        config.window_size = (self.window_width, self.window_height);
        if self.user_agent.is_some() {
            config.user_agent = self.user_agent.clone();
        }
        config
    }
}

impl ScraperSection {
    pub fn timings(&self) -> Timings {
        Timings {
            load_timeout: Duration::from_secs(self.load_timeout_secs),
            list_settle: Duration::from_secs(self.list_settle_secs),
            detail_settle: Duration::from_secs(self.detail_settle_secs),
            credits_settle: Duration::from_secs(self.credits_settle_secs),
        }
    }
}
