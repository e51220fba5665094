use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

const DEFAULT_API_URL: &str = "http://localhost:3001/api/v1";

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("No config directory available on this platform")]
    NoConfigDir,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Application configuration.
///
/// Loaded from `.env` (if present) and environment variables, with compiled
/// defaults. Nothing here is secret; the session token lives in the
/// `TokenStore`.
#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the marketplace API, e.g. `http://localhost:3001/api/v1`.
    pub api_url: String,
    /// Directory for persisted client state (the durable token file).
    pub config_dir: PathBuf,
}

impl Config {
    /// Load configuration. Reads `.env` when present, then env overrides
    /// (`ZOCO_API_URL`, `ZOCO_CONFIG_DIR`), then defaults.
    pub fn load() -> Result<Self, ConfigError> {
        if dotenvy::dotenv().is_ok() {
            info!("Loaded environment from .env");
        }

        let api_url = std::env::var("ZOCO_API_URL")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let config_dir = match std::env::var("ZOCO_CONFIG_DIR").ok().filter(|s| !s.is_empty()) {
            Some(dir) => PathBuf::from(dir),
            None => dirs::config_dir()
                .ok_or(ConfigError::NoConfigDir)?
                .join("zoco"),
        };

        Ok(Self {
            api_url,
            config_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_api_url_is_local_dev_server() {
        assert_eq!(DEFAULT_API_URL, "http://localhost:3001/api/v1");
    }

    #[test]
    fn config_is_cloneable() {
        let config = Config {
            api_url: DEFAULT_API_URL.to_string(),
            config_dir: PathBuf::from("/tmp/zoco-test"),
        };
        let copy = config.clone();
        assert_eq!(copy.api_url, config.api_url);
        assert_eq!(copy.config_dir, config.config_dir);
    }
}
