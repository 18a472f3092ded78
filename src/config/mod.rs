pub mod builder;
pub mod loader;
pub mod types;
pub mod validator;

pub use builder::BindingConfigBuilder;
pub use loader::{ConfigLoader, DefaultConfigLoader};
pub use types::{BindingConfig, GlobalConfig};
pub use validator::ConfigValidatorImpl;
