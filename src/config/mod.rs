//! Configuration for the dot3 client

mod logging;
mod server;
mod session;

pub use logging::{init_logging, LogFormat, LogLevel, LoggingConfig};
pub use server::{ServerConfig, DEFAULT_API_URL, DEFAULT_USER_AGENT};
pub use session::{QueryConfig, SessionConfig};

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

/// Main client configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Remote service
    #[serde(default)]
    pub server: ServerConfig,
    /// Session cookie persistence
    #[serde(default)]
    pub session: SessionConfig,
    /// Query defaults
    #[serde(default)]
    pub query: QueryConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file and validate it.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parsed base URL of the remote service
    pub fn base_url(&self) -> Result<Url> {
        Url::parse(&self.server.base_url)
            .map_err(|e| anyhow::anyhow!("Invalid base_url '{}': {}", self.server.base_url, e))
    }

    /// Validate all configuration fields.
    ///
    /// Every problem is collected and reported in a single error.
    pub fn validate(&self) -> Result<()> {
        let mut errors: Vec<String> = Vec::new();

        match Url::parse(&self.server.base_url) {
            Ok(url) => {
                if url.scheme() != "http" && url.scheme() != "https" {
                    errors.push(format!(
                        "base_url must use http or https, got '{}'",
                        url.scheme()
                    ));
                }
                if url.cannot_be_a_base() {
                    errors.push("base_url cannot be used as a base URL".to_string());
                }
            }
            Err(e) => errors.push(format!("base_url is not a valid URL: {}", e)),
        }

        if self.server.timeout_secs == Some(0) {
            errors.push("timeout_secs must be positive when set".to_string());
        }

        if self.server.user_agent.trim().is_empty() {
            errors.push("user_agent must not be empty".to_string());
        }

        if self.query.top_k == 0 {
            errors.push("top_k must be positive".to_string());
        }

        if self.session.file.as_os_str().is_empty() {
            errors.push("session file must not be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            anyhow::bail!(
                "Configuration validation failed:\n  - {}",
                errors.join("\n  - ")
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn valid_config() -> Config {
        Config::default()
    }

    #[test]
    fn default_config_passes_validation() {
        assert!(valid_config().validate().is_ok(), "default config should be valid");
    }

    #[test]
    fn default_values() {
        let cfg = valid_config();
        assert_eq!(cfg.server.base_url, DEFAULT_API_URL);
        assert!(cfg.server.timeout_secs.is_none());
        assert_eq!(cfg.query.top_k, 3);
        assert!(cfg.session.persist);
        assert!(cfg.session.file.ends_with("session.json"));
        assert_eq!(cfg.logging.level, LogLevel::Warn);
    }

    #[test]
    fn validate_rejects_unparsable_base_url() {
        let mut cfg = valid_config();
        cfg.server.base_url = "not a url".to_string();
        let err = cfg.validate().unwrap_err();
        assert!(
            err.to_string().contains("base_url is not a valid URL"),
            "unexpected error message: {}",
            err
        );
    }

    #[test]
    fn validate_rejects_non_http_scheme() {
        let mut cfg = valid_config();
        cfg.server.base_url = "ftp://example.com".to_string();
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("base_url must use http or https"));
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let mut cfg = valid_config();
        cfg.server.timeout_secs = Some(0);
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("timeout_secs must be positive"));
    }

    #[test]
    fn validate_rejects_zero_top_k() {
        let mut cfg = valid_config();
        cfg.query.top_k = 0;
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("top_k must be positive"));
    }

    #[test]
    fn validate_collects_multiple_errors() {
        let mut cfg = valid_config();
        cfg.query.top_k = 0;
        cfg.session.file = PathBuf::from("");
        cfg.server.user_agent = " ".to_string();
        let msg = cfg.validate().unwrap_err().to_string();
        assert!(msg.contains("top_k must be positive"));
        assert!(msg.contains("session file must not be empty"));
        assert!(msg.contains("user_agent must not be empty"));
    }

    #[test]
    fn load_partial_file_fills_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("dot3.toml");
        std::fs::write(
            &path,
            "[server]\nbase_url = \"http://localhost:8000\"\n\n[query]\ntop_k = 5\n",
        )
        .unwrap();

        let cfg = Config::load(&path).unwrap();
        assert_eq!(cfg.server.base_url, "http://localhost:8000");
        assert_eq!(cfg.server.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(cfg.query.top_k, 5);
        assert_eq!(cfg.base_url().unwrap().host_str(), Some("localhost"));
    }

    #[test]
    fn load_rejects_invalid_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("dot3.toml");
        std::fs::write(&path, "[query]\ntop_k = 0\n").unwrap();
        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn load_or_default_without_file() {
        let tmp = tempfile::tempdir().unwrap();
        let cfg = Config::load_or_default(&tmp.path().join("missing.toml")).unwrap();
        assert_eq!(cfg.server.base_url, DEFAULT_API_URL);
    }
}
