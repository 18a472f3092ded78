use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Snapshot of a failed HTTP exchange, as handed to the classifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseDescriptor {
    pub status_code: u16,
    pub body: String,
}

impl ResponseDescriptor {
    /// Create a new response descriptor
    pub fn new<S: Into<String>>(status_code: u16, body: S) -> Self {
        Self {
            status_code,
            body: body.into(),
        }
    }

    /// Build a descriptor for a response whose body could not be read.
    /// A missing body is indistinguishable from an empty one.
    pub fn without_body(status_code: u16) -> Self {
        Self::new(status_code, String::new())
    }
}

/// One entry of the repository list advertised by a server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositorySummary {
    pub repository_id: String,
    #[serde(default)]
    pub repository_name: String,
}

/// Descriptive metadata of a single repository
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryInfo {
    pub repository_id: String,
    #[serde(default)]
    pub repository_name: String,
    #[serde(default)]
    pub repository_description: String,
    #[serde(default)]
    pub vendor_name: String,
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub product_version: String,
    #[serde(default)]
    pub cmis_version_supported: String,
    #[serde(default)]
    pub root_folder_id: String,
    /// Capability name to advertised value (booleans or enumerated strings)
    #[serde(default)]
    pub capabilities: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    pub repository_url: Option<String>,
    #[serde(default)]
    pub root_folder_url: Option<String>,
}

impl RepositoryInfo {
    /// Reduce the full info to its list entry
    pub fn summary(&self) -> RepositorySummary {
        RepositorySummary {
            repository_id: self.repository_id.clone(),
            repository_name: self.repository_name.clone(),
        }
    }

    /// Look up a boolean capability such as `capabilityGetDescendants`
    pub fn capability_flag(&self, name: &str) -> Option<bool> {
        self.capabilities.get(name).and_then(|v| v.as_bool())
    }
}
