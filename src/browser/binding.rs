use crate::browser::BrowserRepositoryService;
use crate::config::BindingConfig;
use crate::error::Result;
use crate::http::CmisClient;
use crate::traits::Binding;

/// CMIS Browser Binding (JSON over HTTP)
#[derive(Clone)]
pub struct BrowserBinding {
    client: CmisClient,
}

impl BrowserBinding {
    /// Create a new binding with configuration
    pub fn new(config: BindingConfig) -> Result<Self> {
        Ok(Self {
            client: CmisClient::new(config)?,
        })
    }

    pub fn client(&self) -> &CmisClient {
        &self.client
    }
}

impl Binding for BrowserBinding {
    type Service = BrowserRepositoryService;

    fn repository_service(&self) -> BrowserRepositoryService {
        BrowserRepositoryService::new(self.client.clone())
    }
}
