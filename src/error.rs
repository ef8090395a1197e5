// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ViewerError>;

#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Access denied: {doc_id}")]
    AccessDenied { doc_id: String },

    #[error("File not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("File operation failed for {}: {source}", .path.display())]
    FileOperation {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Dictionary lookup failed: {0}")]
    Lookup(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ViewerError {
    /// HTTP-style status code this error maps to in the response envelope.
    pub fn status_code(&self) -> u16 {
        match self {
            ViewerError::AccessDenied { .. } => 403,
            ViewerError::NotFound { .. } => 404,
            _ => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        let denied = ViewerError::AccessDenied {
            doc_id: "../x".to_string(),
        };
        assert_eq!(denied.status_code(), 403);

        let missing = ViewerError::NotFound {
            path: PathBuf::from("gone.pdf"),
        };
        assert_eq!(missing.status_code(), 404);

        let io = ViewerError::Io(std::io::Error::other("disk"));
        assert_eq!(io.status_code(), 500);
    }
}
