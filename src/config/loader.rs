use crate::config::types::BindingConfig;
use crate::config::validator::ConfigValidatorImpl;
use crate::error::{BindingError, Result};
use std::path::Path;

/// Configuration loader trait
pub trait ConfigLoader {
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<BindingConfig>;
    fn load_with_validation<P: AsRef<Path>>(path: P) -> Result<BindingConfig>;
}

/// Default configuration loader implementation
pub struct DefaultConfigLoader;

impl ConfigLoader for DefaultConfigLoader {
    /// Load configuration from a TOML file
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<BindingConfig> {
        let content = std::fs::read_to_string(&path).map_err(|_| BindingError::ConfigNotFound {
            path: path.as_ref().to_path_buf(),
        })?;

        let config: BindingConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load and validate configuration, naming the file in any error
    fn load_with_validation<P: AsRef<Path>>(path: P) -> Result<BindingConfig> {
        let path_ref = path.as_ref();

        if !path_ref.exists() {
            return Err(BindingError::ConfigNotFound {
                path: path_ref.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path_ref)?;

        let config: BindingConfig = toml::from_str(&content).map_err(|e| {
            BindingError::invalid_config(format!(
                "Failed to parse TOML in {}: {}",
                path_ref.display(),
                e
            ))
        })?;

        ConfigValidatorImpl::new().validate_with_context(&config, path_ref)?;
        Ok(config)
    }
}

impl BindingConfig {
    /// Create a new config builder
    pub fn builder<S: Into<String>>(service_url: S) -> crate::config::builder::BindingConfigBuilder {
        crate::config::builder::BindingConfigBuilder::new(service_url)
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        DefaultConfigLoader::load_from_file(path)
    }

    /// Load configuration and validate it
    pub fn load_with_validation<P: AsRef<Path>>(path: P) -> Result<Self> {
        DefaultConfigLoader::load_with_validation(path)
    }
}
