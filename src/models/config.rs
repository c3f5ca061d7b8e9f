//! Application configuration structures.

use std::fs;
use std::path::{Path, PathBuf};

use scraper::Selector;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::JobSelectors;

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// HTTP settings for detail-page fetches
    #[serde(default)]
    pub crawler: CrawlerConfig,

    /// Browser session settings
    #[serde(default)]
    pub browser: BrowserConfig,

    /// Search URL and pagination settings
    #[serde(default)]
    pub search: SearchConfig,

    /// Listing and description selectors
    #[serde(default)]
    pub selectors: JobSelectors,

    /// Export settings
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| AppError::config(format!("cannot read {}: {e}", path.display())))?;
        Ok(toml::from_str(&content)?)
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.crawler.user_agent.trim().is_empty() {
            return Err(AppError::validation("crawler.user_agent is empty"));
        }
        if self.crawler.timeout_secs == 0 {
            return Err(AppError::validation("crawler.timeout_secs must be > 0"));
        }
        if self.browser.window_width == 0 || self.browser.window_height == 0 {
            return Err(AppError::validation("browser window size must be > 0"));
        }
        if self.browser.request_timeout_secs == 0 {
            return Err(AppError::validation(
                "browser.request_timeout_secs must be > 0",
            ));
        }
        if self.search.page_size == 0 {
            return Err(AppError::validation("search.page_size must be > 0"));
        }
        if self.search.max_pages == Some(0) {
            return Err(AppError::validation("search.max_pages must be > 0 when set"));
        }
        url::Url::parse(&self.search.base_url)
            .map_err(|e| AppError::validation(format!("search.base_url: {e}")))?;
        for (name, selector) in self.selectors.labelled() {
            Selector::parse(selector).map_err(|e| {
                AppError::validation(format!("selectors.{name} '{selector}': {e:?}"))
            })?;
        }
        if self.selectors.link_attr.trim().is_empty() {
            return Err(AppError::validation("selectors.link_attr is empty"));
        }
        if self.output.preview_length == 0 {
            return Err(AppError::validation("output.preview_length must be > 0"));
        }
        Ok(())
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlerConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Headless browser settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserConfig {
    #[serde(default = "defaults::headless")]
    pub headless: bool,

    #[serde(default = "defaults::window_width")]
    pub window_width: u32,

    #[serde(default = "defaults::window_height")]
    pub window_height: u32,

    /// Chrome binary; auto-detected when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub executable: Option<PathBuf>,

    /// CDP request timeout in seconds
    #[serde(default = "defaults::browser_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: defaults::headless(),
            window_width: defaults::window_width(),
            window_height: defaults::window_height(),
            executable: None,
            request_timeout_secs: defaults::browser_timeout(),
        }
    }
}

/// Search URL and pagination settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Search endpoint; keywords, location and start are appended as query
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// Offset increment between result pages
    #[serde(default = "defaults::page_size")]
    pub page_size: usize,

    /// Optional hard cap on pages visited in one run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_pages: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            page_size: defaults::page_size(),
            max_pages: None,
        }
    }
}

/// Export settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory receiving both the CSV and the text export
    #[serde(default = "defaults::output_dir")]
    pub dir: PathBuf,

    /// Description prefix length shown in the console table
    #[serde(default = "defaults::preview_length")]
    pub preview_length: usize,

    /// Width of the rule separating records in the text export
    #[serde(default = "defaults::rule_width")]
    pub rule_width: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: defaults::output_dir(),
            preview_length: defaults::preview_length(),
            rule_width: defaults::rule_width(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "defaults::log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
        }
    }
}

mod defaults {
    use std::path::PathBuf;

    // Crawler defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".into()
    }
    pub fn timeout() -> u64 {
        30
    }

    // Browser defaults
    pub fn headless() -> bool {
        true
    }
    pub fn window_width() -> u32 {
        1920
    }
    pub fn window_height() -> u32 {
        1080
    }
    pub fn browser_timeout() -> u64 {
        30
    }

    // Search defaults
    pub fn base_url() -> String {
        "https://www.linkedin.com/jobs/search/".into()
    }
    pub fn page_size() -> usize {
        25
    }

    // Output defaults
    pub fn output_dir() -> PathBuf {
        PathBuf::from(".")
    }
    pub fn preview_length() -> usize {
        20
    }
    pub fn rule_width() -> usize {
        50
    }

    pub fn log_level() -> String {
        "info".into()
    }
}
