use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::app::{MillraceError, Result};

/// Configuration for the headless content fetcher.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Whether to run the browser in headless mode (default: true)
    pub headless: bool,

    /// Page load timeout in seconds (default: 30)
    pub timeout_secs: u64,

    /// Wait time after page load for dynamic content in milliseconds (default: 1000)
    pub wait_after_load_ms: u64,

    /// Minimum text length for a selector match to count as article content (default: 100)
    pub min_content_length: usize,

    /// CSS selectors to try for article content extraction, in priority order
    pub content_selectors: Vec<String>,

    /// CSS selectors for elements to remove (ads, navigation, etc.)
    pub remove_selectors: Vec<String>,

    /// User agent string to use
    pub user_agent: Option<String>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            headless: true,
            timeout_secs: 30,
            wait_after_load_ms: 1000,
            min_content_length: 100,
            content_selectors: vec![
                // Common article content selectors in priority order
                "article".to_string(),
                "[role=\"main\"]".to_string(),
                "main".to_string(),
                ".post-content".to_string(),
                ".article-content".to_string(),
                ".entry-content".to_string(),
                ".content".to_string(),
                "#content".to_string(),
                ".post".to_string(),
                ".article".to_string(),
            ],
            remove_selectors: vec![
                // Common elements to remove
                "nav".to_string(),
                "header".to_string(),
                "footer".to_string(),
                "aside".to_string(),
                ".sidebar".to_string(),
                ".advertisement".to_string(),
                ".ad".to_string(),
                ".ads".to_string(),
                ".social-share".to_string(),
                ".comments".to_string(),
                "script".to_string(),
                "style".to_string(),
                "noscript".to_string(),
            ],
            user_agent: Some(
                "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 \
                 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36"
                    .to_string(),
            ),
        }
    }
}

impl FetchConfig {
    /// Load from a TOML file. Missing fields fall back to defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            MillraceError::Config(format!("failed to parse {}: {}", path.display(), e))
        })
    }

    /// Get the page load timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Get the wait time after load as a Duration
    pub fn wait_after_load(&self) -> Duration {
        Duration::from_millis(self.wait_after_load_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        let config = FetchConfig::default();
        assert!(config.headless);
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.wait_after_load_ms, 1000);
        assert_eq!(config.min_content_length, 100);
        assert!(!config.content_selectors.is_empty());
        assert!(!config.remove_selectors.is_empty());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: FetchConfig = toml::from_str("headless = false\ntimeout_secs = 5").unwrap();
        assert!(!config.headless);
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.wait_after_load_ms, 1000);
    }

    #[test]
    fn test_load_missing_file_is_error() {
        assert!(FetchConfig::load(Path::new("/nonexistent/fetch.toml")).is_err());
    }

    #[test]
    fn test_durations() {
        let config = FetchConfig::default();
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.wait_after_load(), Duration::from_millis(1000));
    }
}
