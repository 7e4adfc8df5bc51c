use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Platform REST API configuration.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the platform backend (e.g. "https://api.ody.example").
    ///
    /// Required for every command that talks to the backend. There is no
    /// localhost fallback; an empty value is a hard error at client
    /// construction time.
    pub base_url: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout_secs: 30,
        }
    }
}

impl ApiConfig {
    /// Returns the trimmed base URL, or `None` when it is unset.
    pub fn base_url(&self) -> Option<&str> {
        let trimmed = self.base_url.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    }
}
