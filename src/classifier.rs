//! Common error classification shared by every binding operation
//!
//! Maps a failed response to one of the typed [`CmisError`] kinds. Only
//! conditions that are global to all operations belong in the status table;
//! operation-specific codes are handled by the caller before falling back here.

use crate::error::{CmisError, FailureKind};
use crate::types::ResponseDescriptor;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Marker the server writes before the human-readable message in an error page
pub const MESSAGE_START_MARKER: &str = "<!--message-->";
/// Marker the server writes after the human-readable message in an error page
pub const MESSAGE_END_MARKER: &str = "<!--/message-->";

/// Status codes with a dedicated kind. Anything absent maps to [`DEFAULT_KIND`].
pub const STATUS_KINDS: &[(u16, FailureKind)] = &[
    (400, FailureKind::InvalidArgument),
    (401, FailureKind::PermissionDenied),
    (403, FailureKind::PermissionDenied),
    (404, FailureKind::ObjectNotFound),
    (405, FailureKind::NotSupported),
    (409, FailureKind::UpdateConflict),
    (500, FailureKind::Runtime),
];

pub const DEFAULT_KIND: FailureKind = FailureKind::Generic;

static EMBEDDED_MESSAGE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        "{}(.*?){}",
        regex::escape(MESSAGE_START_MARKER),
        regex::escape(MESSAGE_END_MARKER)
    ))
    .expect("Failed to compile embedded message regex")
});

/// Find the first message wrapped in the diagnostic markers, if any
pub fn extract_message(body: &str) -> Option<String> {
    EMBEDDED_MESSAGE_PATTERN
        .captures(body)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Look up the failure kind for a status code
pub fn kind_for_status(status_code: u16) -> FailureKind {
    STATUS_KINDS
        .iter()
        .find(|(code, _)| *code == status_code)
        .map(|(_, kind)| *kind)
        .unwrap_or(DEFAULT_KIND)
}

/// Compose the diagnostic: `"<status>"` or `"<status>: <embedded message>"`
pub fn compose_message(response: &ResponseDescriptor) -> String {
    match extract_message(&response.body) {
        Some(message) => format!("{}: {}", response.status_code, message),
        None => response.status_code.to_string(),
    }
}

/// Classify a failed response into its typed failure.
///
/// Always produces a failure; callers propagate it with `return Err(..)` or
/// use [`fail`].
pub fn classify(response: &ResponseDescriptor, url: &str) -> CmisError {
    let kind = kind_for_status(response.status_code);
    let message = compose_message(response);
    debug!(
        status = response.status_code,
        kind = ?kind,
        url,
        "classified failed CMIS response"
    );
    CmisError::new(kind, message, url)
}

/// [`classify`] as an always-failing `Result`, for use with `?`
pub fn fail<T>(response: &ResponseDescriptor, url: &str) -> Result<T, CmisError> {
    Err(classify(response, url))
}
