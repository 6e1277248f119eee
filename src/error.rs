use std::io;
use thiserror::Error;

/// Custom error type for the monkey viewer
#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// One of the monkey artifacts could not be fetched
    #[error("{resource} not found (status {status})")]
    ResourceNotFound { resource: String, status: u16 },

    /// An artifact was fetched but its body could not be parsed
    #[error("Malformed {resource}: {reason}")]
    MalformedResponse { resource: String, reason: String },

    #[error("No monkey to download!")]
    NoSubjectToExport,

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for the viewer
pub type Result<T> = std::result::Result<T, ViewerError>;

impl ViewerError {
    /// Create a resource-not-found error
    pub fn not_found<S: Into<String>>(resource: S, status: u16) -> Self {
        ViewerError::ResourceNotFound {
            resource: resource.into(),
            status,
        }
    }

    /// Create a malformed-response error
    pub fn malformed<S: Into<String>, R: ToString>(resource: S, reason: R) -> Self {
        ViewerError::MalformedResponse {
            resource: resource.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        ViewerError::Config(msg.into())
    }

    /// True for failures that belong to a load cycle (fetch or parse)
    pub fn is_load_failure(&self) -> bool {
        matches!(
            self,
            ViewerError::ResourceNotFound { .. }
                | ViewerError::MalformedResponse { .. }
                | ViewerError::Http(_)
                | ViewerError::Io(_)
        )
    }
}
