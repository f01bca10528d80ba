//! Client configuration
//!
//! Where the agent endpoints live and where client state is kept, read from
//! environment variables with defaults.

use std::env;
use std::path::PathBuf;

const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8080";
const DATA_DIR_NAME: &str = ".theioptera";

/// Dashboard client configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the agent endpoint server
    pub api_base_url: String,
    /// Directory holding the JSON state files
    pub data_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            data_dir: default_data_dir(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    match env::var_os("HOME") {
        Some(home) if !home.is_empty() => PathBuf::from(home).join(DATA_DIR_NAME),
        _ => PathBuf::from(DATA_DIR_NAME),
    }
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: env::var("API_BASE_URL")
                .ok()
                .filter(|url| !url.trim().is_empty())
                .unwrap_or(defaults.api_base_url),
            data_dir: env::var_os("DATA_DIR")
                .filter(|dir| !dir.is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
        }
    }
}
