use crate::config::types::{BindingConfig, GlobalConfig};
use crate::config::validator::ConfigValidatorImpl;
use crate::error::Result;
use crate::traits::ConfigValidator;

/// Builder for BindingConfig
pub struct BindingConfigBuilder {
    config: BindingConfig,
}

impl BindingConfigBuilder {
    /// Create a new config builder for a service URL
    pub fn new<S: Into<String>>(service_url: S) -> Self {
        Self {
            config: BindingConfig::new(service_url),
        }
    }

    /// Bind to a repository
    #[must_use]
    pub fn repository<S: Into<String>>(mut self, repository_id: S) -> Self {
        self.config.repository_id = Some(repository_id.into());
        self
    }

    /// Use basic auth credentials
    #[must_use]
    pub fn credentials<S: Into<String>>(mut self, username: S, password: S) -> Self {
        self.config.username = Some(username.into());
        self.config.password = Some(password.into());
        self
    }

    /// Set timeout in seconds
    #[must_use]
    pub fn timeout(mut self, seconds: u64) -> Self {
        self.global_mut().timeout_seconds = Some(seconds);
        self
    }

    /// Set whether to follow redirects
    #[must_use]
    pub fn follow_redirects(mut self, follow: bool) -> Self {
        self.global_mut().follow_redirects = Some(follow);
        self
    }

    /// Add a header sent with every request
    #[must_use]
    pub fn header<S: Into<String>>(mut self, key: S, value: S) -> Self {
        self.global_mut()
            .headers
            .get_or_insert_with(Default::default)
            .insert(key.into(), value.into());
        self
    }

    fn global_mut(&mut self) -> &mut GlobalConfig {
        self.config.global.get_or_insert_with(GlobalConfig::default)
    }

    /// Build the configuration
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid (e.g., a malformed service URL)
    pub fn build(self) -> Result<BindingConfig> {
        ConfigValidatorImpl::new().validate(&self.config)?;
        Ok(self.config)
    }
}
