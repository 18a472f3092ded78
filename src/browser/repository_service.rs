use crate::error::{CmisError, Result};
use crate::http::CmisClient;
use crate::traits::RepositoryService;
use crate::types::{RepositoryInfo, RepositorySummary};
use std::collections::BTreeMap;
use tracing::debug;

/// Repository discovery over the browser binding's JSON service document
#[derive(Clone)]
pub struct BrowserRepositoryService {
    client: CmisClient,
    repository_id: Option<String>,
}

impl BrowserRepositoryService {
    /// Create a service, bound to the configured repository if there is one
    pub fn new(client: CmisClient) -> Self {
        let repository_id = client.config().repository_id.clone();
        Self {
            client,
            repository_id,
        }
    }

    /// Bind to a specific repository
    #[must_use]
    pub fn bind<S: Into<String>>(mut self, repository_id: S) -> Self {
        self.repository_id = Some(repository_id.into());
        self
    }

    pub fn repository_id(&self) -> Option<&str> {
        self.repository_id.as_deref()
    }

    /// The service document maps each repository id to its info
    async fn fetch_service_document(
        client: &CmisClient,
    ) -> Result<BTreeMap<String, RepositoryInfo>> {
        let url = client.service_url();
        let document: BTreeMap<String, RepositoryInfo> = client.get_json(url).await?;
        debug!(url, repositories = document.len(), "fetched service document");
        Ok(document)
    }
}

impl RepositoryService for BrowserRepositoryService {
    type Client = CmisClient;

    async fn get_repositories(&self, client: &CmisClient) -> Result<Vec<RepositorySummary>> {
        let document = Self::fetch_service_document(client).await?;
        Ok(document.values().map(RepositoryInfo::summary).collect())
    }

    async fn get_repository_info(&self) -> Result<RepositoryInfo> {
        let service_url = self.client.service_url();
        let repository_id = self.repository_id.as_deref().ok_or_else(|| {
            CmisError::invalid_argument("No repository is bound to this service", service_url)
        })?;

        let mut document = Self::fetch_service_document(&self.client).await?;
        let info = document.remove(repository_id).ok_or_else(|| {
            CmisError::object_not_found(
                format!("Repository '{repository_id}' is not advertised by the server"),
                service_url,
            )
        })?;
        Ok(info)
    }
}
