use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for binding operations
pub type Result<T> = std::result::Result<T, BindingError>;

/// The seven kinds of typed failure a failed CMIS exchange can map to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    PermissionDenied,
    InvalidArgument,
    ObjectNotFound,
    NotSupported,
    UpdateConflict,
    Runtime,
    Generic,
}

impl FailureKind {
    /// Every kind, in declaration order
    pub const ALL: [FailureKind; 7] = [
        FailureKind::PermissionDenied,
        FailureKind::InvalidArgument,
        FailureKind::ObjectNotFound,
        FailureKind::NotSupported,
        FailureKind::UpdateConflict,
        FailureKind::Runtime,
        FailureKind::Generic,
    ];
}

/// Typed CMIS failure carrying the composed diagnostic and the request URL
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CmisError {
    #[error("Permission denied: {message} ({url})")]
    PermissionDenied { message: String, url: String },

    #[error("Invalid argument: {message} ({url})")]
    InvalidArgument { message: String, url: String },

    #[error("Object not found: {message} ({url})")]
    ObjectNotFound { message: String, url: String },

    #[error("Not supported: {message} ({url})")]
    NotSupported { message: String, url: String },

    #[error("Update conflict: {message} ({url})")]
    UpdateConflict { message: String, url: String },

    #[error("Runtime error: {message} ({url})")]
    Runtime { message: String, url: String },

    #[error("CMIS error: {message} ({url})")]
    Generic { message: String, url: String },
}

impl CmisError {
    /// Build a failure of the given kind
    pub fn new<M: Into<String>, U: Into<String>>(kind: FailureKind, message: M, url: U) -> Self {
        let message = message.into();
        let url = url.into();
        match kind {
            FailureKind::PermissionDenied => Self::PermissionDenied { message, url },
            FailureKind::InvalidArgument => Self::InvalidArgument { message, url },
            FailureKind::ObjectNotFound => Self::ObjectNotFound { message, url },
            FailureKind::NotSupported => Self::NotSupported { message, url },
            FailureKind::UpdateConflict => Self::UpdateConflict { message, url },
            FailureKind::Runtime => Self::Runtime { message, url },
            FailureKind::Generic => Self::Generic { message, url },
        }
    }

    /// Create a new invalid argument failure
    pub fn invalid_argument<M: Into<String>, U: Into<String>>(message: M, url: U) -> Self {
        Self::new(FailureKind::InvalidArgument, message, url)
    }

    /// Create a new object not found failure
    pub fn object_not_found<M: Into<String>, U: Into<String>>(message: M, url: U) -> Self {
        Self::new(FailureKind::ObjectNotFound, message, url)
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            Self::PermissionDenied { .. } => FailureKind::PermissionDenied,
            Self::InvalidArgument { .. } => FailureKind::InvalidArgument,
            Self::ObjectNotFound { .. } => FailureKind::ObjectNotFound,
            Self::NotSupported { .. } => FailureKind::NotSupported,
            Self::UpdateConflict { .. } => FailureKind::UpdateConflict,
            Self::Runtime { .. } => FailureKind::Runtime,
            Self::Generic { .. } => FailureKind::Generic,
        }
    }

    /// The composed diagnostic, e.g. `"409: Conflict on update"` or `"404"`
    pub fn message(&self) -> &str {
        match self {
            Self::PermissionDenied { message, .. }
            | Self::InvalidArgument { message, .. }
            | Self::ObjectNotFound { message, .. }
            | Self::NotSupported { message, .. }
            | Self::UpdateConflict { message, .. }
            | Self::Runtime { message, .. }
            | Self::Generic { message, .. } => message,
        }
    }

    /// The URL of the request that produced this failure
    pub fn url(&self) -> &str {
        match self {
            Self::PermissionDenied { url, .. }
            | Self::InvalidArgument { url, .. }
            | Self::ObjectNotFound { url, .. }
            | Self::NotSupported { url, .. }
            | Self::UpdateConflict { url, .. }
            | Self::Runtime { url, .. }
            | Self::Generic { url, .. } => url,
        }
    }
}

/// Comprehensive error type for binding operations
#[derive(Debug, Error)]
pub enum BindingError {
    #[error(transparent)]
    Cmis(#[from] CmisError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to deserialize response: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl BindingError {
    /// Create a new invalid configuration error
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// The typed CMIS failure, if this error is one
    pub fn as_cmis(&self) -> Option<&CmisError> {
        match self {
            Self::Cmis(err) => Some(err),
            _ => None,
        }
    }

    /// Get a user-friendly message for command line display
    pub fn user_message(&self) -> String {
        match self {
            Self::Cmis(err) => match err.kind() {
                FailureKind::PermissionDenied => {
                    format!("Access denied by the repository ({})", err.message())
                }
                FailureKind::ObjectNotFound => {
                    format!("Repository object not found at {}", err.url())
                }
                _ => err.to_string(),
            },
            Self::Io(err) => format!("I/O operation failed: {err}"),
            Self::Http(err) => format!("Could not reach the repository: {err}"),
            Self::Deserialize(err) => format!("Repository returned an unreadable payload: {err}"),
            Self::UrlParse(err) => format!("Invalid URL: {err}"),
            Self::ConfigParse(err) => format!("Failed to parse configuration: {err}"),
            Self::ConfigNotFound { path } => {
                format!("Configuration file not found at: {}", path.display())
            }
            Self::InvalidConfig { message } => format!("Invalid configuration: {message}"),
        }
    }
}
