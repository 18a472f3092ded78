use crate::classifier;
use crate::error::{CmisError, Result};
use crate::types::{RepositoryInfo, RepositorySummary, ResponseDescriptor};
use std::future::Future;

/// Repository discovery surface every binding must expose
///
/// There are no provided methods: each binding supplies its own transport.
pub trait RepositoryService: Send + Sync {
    /// Session or client the service talks to the server through
    type Client: Send + Sync;

    /// List the repositories advertised by the server reachable via `client`
    fn get_repositories(
        &self,
        client: &Self::Client,
    ) -> impl Future<Output = Result<Vec<RepositorySummary>>> + Send;

    /// Fetch the info of the repository this service is bound to.
    ///
    /// Fails with [`CmisError::InvalidArgument`] when no repository is bound.
    /// These precondition failures, and a bound id the server does not
    /// advertise, carry a free-text message rather than the
    /// `"<status>: ..."` form produced by the classifier.
    fn get_repository_info(&self) -> impl Future<Output = Result<RepositoryInfo>> + Send;
}

/// A transport-specific way of talking to a CMIS server
pub trait Binding: Send + Sync {
    type Service: RepositoryService;

    /// The repository service specific to this binding
    fn repository_service(&self) -> Self::Service;

    /// Map failures that are common to all operations, such as 401, to typed
    /// errors. Callers handle their own operation-specific codes first.
    fn process_common_errors(&self, response: &ResponseDescriptor, url: &str) -> CmisError {
        classifier::classify(response, url)
    }
}

/// Trait for configuration validation
pub trait ConfigValidator: Send + Sync {
    type Config;

    /// Validate configuration
    fn validate(&self, config: &Self::Config) -> Result<()>;
}
