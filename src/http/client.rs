use crate::classifier;
use crate::config::BindingConfig;
use crate::error::Result;
use crate::http::{RequestBuilderImpl, ResponseConverterImpl};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// HTTP session shared by the binding's services
#[derive(Clone)]
pub struct CmisClient {
    client: Client,
    config: BindingConfig,
    request_builder: RequestBuilderImpl,
    response_converter: ResponseConverterImpl,
}

impl CmisClient {
    /// Create a new client from configuration
    pub fn new(config: BindingConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .redirect(if config.follow_redirects() {
                reqwest::redirect::Policy::default()
            } else {
                reqwest::redirect::Policy::none()
            })
            .build()?;

        let request_builder = RequestBuilderImpl::new(client.clone(), config.clone());

        Ok(Self {
            client,
            config,
            request_builder,
            response_converter: ResponseConverterImpl::new(),
        })
    }

    pub fn config(&self) -> &BindingConfig {
        &self.config
    }

    pub fn service_url(&self) -> &str {
        &self.config.service_url
    }

    /// GET `url` and return the body. Non-2xx responses are classified into
    /// a typed CMIS error carrying `url` as requested.
    pub async fn get(&self, url: &str) -> Result<String> {
        let request = self.request_builder.build_request(Method::GET, url)?;
        debug!(url, "sending CMIS request");

        let response = self.client.execute(request).await?;
        if response.status().is_success() {
            return Ok(response.text().await?);
        }

        let descriptor = self.response_converter.convert_failure(response).await;
        warn!(status = descriptor.status_code, url, "CMIS request failed");
        Err(classifier::classify(&descriptor, url).into())
    }

    /// GET `url` and deserialize the JSON body
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.get(url).await?;
        Ok(serde_json::from_str(&body)?)
    }
}
