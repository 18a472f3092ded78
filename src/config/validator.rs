use crate::config::types::BindingConfig;
use crate::error::{BindingError, Result};
use crate::traits::ConfigValidator;
use std::path::Path;

/// Configuration validator implementation
pub struct ConfigValidatorImpl;

impl ConfigValidator for ConfigValidatorImpl {
    type Config = BindingConfig;

    fn validate(&self, config: &BindingConfig) -> Result<()> {
        self.validate_with_context(config, "configuration")
    }
}

impl ConfigValidatorImpl {
    /// Create a new validator
    pub fn new() -> Self {
        Self
    }

    /// Validation naming the source of the configuration in errors
    pub fn validate_with_context<P: AsRef<Path>>(
        &self,
        config: &BindingConfig,
        config_path: P,
    ) -> Result<()> {
        let config_path_str = config_path.as_ref().to_string_lossy();

        let service_url = url::Url::parse(&config.service_url).map_err(|_| {
            BindingError::invalid_config(format!(
                "Invalid service_url '{}' in {}. Must be a valid URL.",
                config.service_url, config_path_str
            ))
        })?;

        if !matches!(service_url.scheme(), "http" | "https") {
            return Err(BindingError::invalid_config(format!(
                "service_url in {} must use http or https, got '{}'",
                config_path_str,
                service_url.scheme()
            )));
        }

        if config.password.is_some() && config.username.is_none() {
            return Err(BindingError::invalid_config(format!(
                "password is set without a username in {}",
                config_path_str
            )));
        }

        if let Some(repository_id) = &config.repository_id {
            if repository_id.trim().is_empty() {
                return Err(BindingError::invalid_config(format!(
                    "repository_id in {} must not be empty",
                    config_path_str
                )));
            }
        }

        if let Some(timeout) = config.global.as_ref().and_then(|g| g.timeout_seconds) {
            if timeout == 0 {
                return Err(BindingError::invalid_config(format!(
                    "timeout_seconds in {} must be greater than 0",
                    config_path_str
                )));
            }
        }

        Ok(())
    }
}

impl Default for ConfigValidatorImpl {
    fn default() -> Self {
        Self::new()
    }
}
