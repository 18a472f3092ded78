use crate::error::{CmisError, Result};
use crate::traits::{Binding, RepositoryService};
use crate::types::{RepositoryInfo, RepositorySummary, ResponseDescriptor};
use std::collections::BTreeMap;

/// Client stand-in that records which server it points at
#[derive(Clone, Debug, Default)]
pub struct MockClient {
    pub service_url: String,
    /// Failure the server answers with, if any
    pub failure: Option<ResponseDescriptor>,
}

/// Mock repository service for testing
#[derive(Clone, Default)]
pub struct MockRepositoryService {
    pub repositories: BTreeMap<String, RepositoryInfo>,
    pub bound_repository: Option<String>,
}

impl MockRepositoryService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_repository(mut self, info: RepositoryInfo) -> Self {
        self.repositories.insert(info.repository_id.clone(), info);
        self
    }

    pub fn bound_to<S: Into<String>>(mut self, repository_id: S) -> Self {
        self.bound_repository = Some(repository_id.into());
        self
    }
}

impl RepositoryService for MockRepositoryService {
    type Client = MockClient;

    async fn get_repositories(&self, client: &MockClient) -> Result<Vec<RepositorySummary>> {
        if let Some(failure) = &client.failure {
            return Err(crate::classifier::classify(failure, &client.service_url).into());
        }
        Ok(self
            .repositories
            .values()
            .map(RepositoryInfo::summary)
            .collect())
    }

    async fn get_repository_info(&self) -> Result<RepositoryInfo> {
        let repository_id = self
            .bound_repository
            .as_deref()
            .ok_or_else(|| CmisError::invalid_argument("No repository is bound", "mock://"))?;
        self.repositories
            .get(repository_id)
            .cloned()
            .ok_or_else(|| CmisError::object_not_found(repository_id, "mock://").into())
    }
}

/// Mock binding handing out a preconfigured service
pub struct MockBinding {
    pub service: MockRepositoryService,
}

impl Binding for MockBinding {
    type Service = MockRepositoryService;

    fn repository_service(&self) -> MockRepositoryService {
        self.service.clone()
    }
}

/// Helper functions for creating test data
pub mod test_helpers {
    use super::*;

    pub fn create_repository_info(id: &str, name: &str) -> RepositoryInfo {
        RepositoryInfo {
            repository_id: id.to_string(),
            repository_name: name.to_string(),
            repository_description: String::new(),
            vendor_name: "Mock Vendor".to_string(),
            product_name: "Mock Repository".to_string(),
            product_version: "1.0".to_string(),
            cmis_version_supported: "1.1".to_string(),
            root_folder_id: format!("{id}-root"),
            capabilities: BTreeMap::new(),
            repository_url: None,
            root_folder_url: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_helpers::create_repository_info;
    use super::*;
    use crate::error::FailureKind;

    fn service() -> MockRepositoryService {
        MockRepositoryService::new()
            .with_repository(create_repository_info("B", "Second"))
            .with_repository(create_repository_info("A", "First"))
    }

    #[test]
    fn test_get_repositories_lists_all() {
        let repositories =
            tokio_test::block_on(service().get_repositories(&MockClient::default())).unwrap();

        let ids: Vec<_> = repositories.iter().map(|r| r.repository_id.as_str()).collect();
        assert_eq!(ids, vec!["A", "B"]);
    }

    #[test]
    fn test_get_repositories_surfaces_classified_failure() {
        let client = MockClient {
            service_url: "https://repo/cmis".to_string(),
            failure: Some(ResponseDescriptor::new(401, "denied")),
        };

        let err = tokio_test::block_on(service().get_repositories(&client)).unwrap_err();
        let cmis = err.as_cmis().unwrap();
        assert_eq!(cmis.kind(), FailureKind::PermissionDenied);
        assert_eq!(cmis.url(), "https://repo/cmis");
    }

    #[test]
    fn test_unbound_service_is_invalid_argument() {
        let err = tokio_test::block_on(service().get_repository_info()).unwrap_err();
        assert_eq!(
            err.as_cmis().map(CmisError::kind),
            Some(FailureKind::InvalidArgument)
        );
    }

    #[test]
    fn test_bound_service_returns_info() {
        let info = tokio_test::block_on(service().bound_to("B").get_repository_info()).unwrap();
        assert_eq!(info.repository_name, "Second");
        assert_eq!(info.root_folder_id, "B-root");
    }

    #[test]
    fn test_binding_shares_common_error_table() {
        let binding = MockBinding { service: service() };
        let err = binding.process_common_errors(
            &ResponseDescriptor::new(405, "<!--message-->no PUT here<!--/message-->"),
            "https://repo/z",
        );

        assert_eq!(err.kind(), FailureKind::NotSupported);
        assert_eq!(err.message(), "405: no PUT here");
        assert_eq!(binding.repository_service().repositories.len(), 2);
    }
}
