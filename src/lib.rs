//! CMIS binding layer
//!
//! Translates failed responses from a CMIS repository server into typed
//! errors and defines the repository discovery contract that every binding
//! implements. A browser binding (JSON over HTTP) is provided on top.

// Core modules
pub mod classifier;
pub mod config;
pub mod error;
pub mod traits;
pub mod types;

// Transport and binding implementations
pub mod browser;
pub mod http;

pub mod testing;

// Re-export main types for convenience
pub use browser::{BrowserBinding, BrowserRepositoryService};
pub use classifier::{classify, extract_message, fail, kind_for_status};
pub use config::{BindingConfig, BindingConfigBuilder};
pub use error::{BindingError, CmisError, FailureKind, Result};
pub use http::CmisClient;
pub use traits::{Binding, RepositoryService};
pub use types::{RepositoryInfo, RepositorySummary, ResponseDescriptor};
