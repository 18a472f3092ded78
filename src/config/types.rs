use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Connection settings for a CMIS server
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BindingConfig {
    /// Service URL of the browser binding, e.g. `http://host/cmis/browser`
    pub service_url: String,
    /// Repository the service is bound to, if any
    pub repository_id: Option<String>,
    /// Basic auth user name
    pub username: Option<String>,
    /// Basic auth password
    pub password: Option<String>,
    /// Global transport settings
    pub global: Option<GlobalConfig>,
}

/// Global transport settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GlobalConfig {
    /// Request timeout in seconds
    pub timeout_seconds: Option<u64>,
    /// Whether to follow redirects
    pub follow_redirects: Option<bool>,
    /// Headers sent with every request
    pub headers: Option<HashMap<String, String>>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: Some(DEFAULT_TIMEOUT_SECONDS),
            follow_redirects: Some(true),
            headers: None,
        }
    }
}

impl BindingConfig {
    /// Create a config with only a service URL
    pub fn new<S: Into<String>>(service_url: S) -> Self {
        Self {
            service_url: service_url.into(),
            repository_id: None,
            username: None,
            password: None,
            global: None,
        }
    }

    pub fn timeout(&self) -> Duration {
        let seconds = self
            .global
            .as_ref()
            .and_then(|g| g.timeout_seconds)
            .unwrap_or(DEFAULT_TIMEOUT_SECONDS);
        Duration::from_secs(seconds)
    }

    pub fn follow_redirects(&self) -> bool {
        self.global
            .as_ref()
            .and_then(|g| g.follow_redirects)
            .unwrap_or(true)
    }

    /// Headers sent with every request
    pub fn headers(&self) -> HashMap<String, String> {
        self.global
            .as_ref()
            .and_then(|g| g.headers.clone())
            .unwrap_or_default()
    }
}
