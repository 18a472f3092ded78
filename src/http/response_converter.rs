use crate::types::ResponseDescriptor;
use reqwest::Response;

/// Turns a failed reqwest response into the descriptor the classifier reads
#[derive(Clone)]
pub struct ResponseConverterImpl;

impl ResponseConverterImpl {
    /// Create a new response converter
    pub fn new() -> Self {
        Self
    }

    /// Capture status and body. An unreadable body is treated as empty.
    pub async fn convert_failure(&self, response: Response) -> ResponseDescriptor {
        let status = response.status().as_u16();
        match response.text().await {
            Ok(body) => ResponseDescriptor::new(status, body),
            Err(_) => ResponseDescriptor::without_body(status),
        }
    }
}

impl Default for ResponseConverterImpl {
    fn default() -> Self {
        Self::new()
    }
}
