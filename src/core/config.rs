//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use std::path::PathBuf;

/// Default location of the lead store, relative to the working directory.
const DEFAULT_LEADS_FILE: &str = "leads.json";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path of the JSON file contact submissions are appended to.
    /// Overridden via LEADS_FILE.
    pub leads_file: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            leads_file: std::env::var("LEADS_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_LEADS_FILE)),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            leads_file: PathBuf::from(DEFAULT_LEADS_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_leads_json() {
        let config = Config::default();
        assert_eq!(config.leads_file, PathBuf::from("leads.json"));
    }

    #[test]
    fn test_from_env_returns_config() {
        // Actual values depend on the environment; the call itself must
        // always succeed and produce a non-empty path.
        let config = Config::from_env();
        assert!(!config.leads_file.as_os_str().is_empty());
    }

    #[test]
    fn test_config_clone_and_eq() {
        let config = Config {
            leads_file: PathBuf::from("/var/lib/ilnaj/leads.json"),
        };
        assert_eq!(config.clone(), config);
    }
}
