use std::time::Duration;

/// User agent presented by headless sessions. Without it IMDb serves a
/// reduced page to the default `HeadlessChrome` agent.
pub const HEADLESS_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/123.0.0.0 Safari/537.36";

/// Configuration for the browser session
#[derive(Debug, Clone)]
pub struct BrowserConfig {
    /// Run browser in headless mode
    pub headless: bool,

    /// Browser window size
    pub window_size: (u32, u32),

    /// Custom user agent
    pub user_agent: Option<String>,

    /// Additional Chrome flags
    pub chrome_flags: Vec<String>,

    /// How long Chrome may sit idle before the connection is dropped.
    /// Must outlast the longest settle pause.
    pub idle_timeout: Duration,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self::headless()
    }
}

impl BrowserConfig {
    /// Headless session able to run without a display
    pub fn headless() -> Self {
        Self {
            headless: true,
            window_size: (1920, 1080),
            user_agent: Some(HEADLESS_USER_AGENT.to_string()),
            chrome_flags: vec![
                "--disable-gpu".to_string(),
                "--no-sandbox".to_string(),
                "--disable-dev-shm-usage".to_string(),
                "--enable-javascript".to_string(),
            ],
            idle_timeout: Duration::from_secs(120),
        }
    }

    /// Visible browser window with Chrome's stock settings
    pub fn visible() -> Self {
        Self {
            headless: false,
            user_agent: None,
            chrome_flags: vec![],
            ..Self::headless()
        }
    }

    /// Pick the headless or visible preset
    pub fn for_mode(headless: bool) -> Self {
        if headless {
            Self::headless()
        } else {
            Self::visible()
        }
    }

    /// Command line arguments handed to Chrome on launch
    pub fn launch_args(&self) -> Vec<String> {
        let mut args = self.chrome_flags.clone();
        if let Some(ua) = &self.user_agent {
            args.push(format!("--user-agent={}", ua));
        }
        args
    }
}
