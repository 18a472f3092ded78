//! Shared helpers for cmis-binding integration tests

#![allow(dead_code)]

use cmis_binding::{BindingConfig, BrowserBinding};
use serde_json::{json, Value};
use wiremock::MockServer;

pub const SERVICE_PATH: &str = "/cmis/browser";

/// Service URL of the browser binding on a mock server
pub fn service_url(server: &MockServer) -> String {
    format!("{}{}", server.uri(), SERVICE_PATH)
}

/// Binding against a mock server, optionally bound to a repository
pub fn create_binding(server: &MockServer, repository_id: Option<&str>) -> BrowserBinding {
    let mut builder = BindingConfig::builder(service_url(server)).timeout(5);
    if let Some(id) = repository_id {
        builder = builder.repository(id);
    }
    BrowserBinding::new(builder.build().unwrap()).unwrap()
}

/// Service document advertising two repositories
pub fn service_document() -> Value {
    json!({
        "main": {
            "repositoryId": "main",
            "repositoryName": "Main Repository",
            "repositoryDescription": "Production content",
            "vendorName": "Acme",
            "productName": "Acme Content Server",
            "productVersion": "7.4.0",
            "cmisVersionSupported": "1.1",
            "rootFolderId": "f-root-main",
            "capabilities": {
                "capabilityGetDescendants": true,
                "capabilityQuery": "bothcombined"
            },
            "repositoryUrl": "http://localhost/cmis/browser/main",
            "rootFolderUrl": "http://localhost/cmis/browser/main/root"
        },
        "archive": {
            "repositoryId": "archive",
            "repositoryName": "Archive",
            "rootFolderId": "f-root-archive",
            "capabilities": {}
        }
    })
}

/// Error page the way CMIS servers render it
pub fn error_page(message: &str) -> String {
    format!(
        "<html><body><h1>Error</h1><!--exception-->x<!--/exception--><!--message-->{}<!--/message--></body></html>",
        message
    )
}
