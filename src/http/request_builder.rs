use crate::config::BindingConfig;
use crate::error::Result;
use reqwest::{Client, Method, Request};

/// Builds authenticated requests against the configured server
#[derive(Clone)]
pub struct RequestBuilderImpl {
    client: Client,
    config: BindingConfig,
}

impl RequestBuilderImpl {
    /// Create a new request builder
    pub fn new(client: Client, config: BindingConfig) -> Self {
        Self { client, config }
    }

    /// Build a request for `url` with credentials and configured headers
    pub fn build_request(&self, method: Method, url: &str) -> Result<Request> {
        let url = url::Url::parse(url)?;
        let mut request_builder = self.client.request(method, url);

        if let Some(username) = &self.config.username {
            request_builder = request_builder.basic_auth(username, self.config.password.as_ref());
        }

        for (key, value) in self.config.headers() {
            request_builder = request_builder.header(key, value);
        }

        request_builder.build().map_err(Into::into)
    }
}
