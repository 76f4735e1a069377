use std::path::PathBuf;
use std::time::Duration;

use crate::release::resolver::DEFAULT_MAX_PAGES;
use crate::release::sources::github::DEFAULT_API_URL;

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for talking to the release registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
    pub max_pages: u32,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            max_pages: DEFAULT_MAX_PAGES,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Reads BINARY_SOURCE_GITHUB_API, BINARY_SOURCE_MAX_PAGES and
    /// BINARY_SOURCE_TIMEOUT_SECS, falling back to defaults for anything unset
    /// or unparsable.
    pub fn from_env() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    fn from_env_with(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let api_url = var("BINARY_SOURCE_GITHUB_API")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.api_url);

        let max_pages = var("BINARY_SOURCE_MAX_PAGES")
            .and_then(|v| v.trim().parse::<u32>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(defaults.max_pages);

        let timeout = var("BINARY_SOURCE_TIMEOUT_SECS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|n| *n > 0)
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout);

        Self {
            api_url,
            max_pages,
            timeout,
        }
    }
}

/// Returns the path to the data directory for binary-source.
/// Uses $XDG_DATA_HOME/binary-source if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/binary-source,
/// or ./binary-source if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Name of the log file inside the data directory.
pub const LOG_FILE_NAME: &str = "binary-source.log";

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join(LOG_FILE_NAME)
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("binary-source")
}
