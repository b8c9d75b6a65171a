//! Remote service configuration

use serde::{Deserialize, Serialize};

/// Base URL of the hosted filtering/query service
pub const DEFAULT_API_URL: &str =
    "https://dot3test.niceglacier-a3547b95.westus2.azurecontainerapps.io";

/// Default user agent sent with every request
pub const DEFAULT_USER_AGENT: &str = concat!("dot3-client/", env!("CARGO_PKG_VERSION"));

/// Remote service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Base URL all endpoint paths are joined onto
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// User agent header value
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Request timeout in seconds (unset = wait indefinitely)
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            timeout_secs: None,
        }
    }
}
