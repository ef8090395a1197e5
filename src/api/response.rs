// file: src/api/response.rs
// description: response envelope shared by every backend operation

use crate::error::ViewerError;
use serde::Serialize;

/// The `{code, data | message}` envelope a frontend consumes: 200 success,
/// 403 path traversal, 404 missing file, 500 persistence failure.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            code: 200,
            data: Some(data),
            message: None,
        }
    }

    pub fn ok_with_message(data: T, message: &str) -> Self {
        Self {
            code: 200,
            data: Some(data),
            message: Some(message.to_string()),
        }
    }

    pub fn message(message: &str) -> Self {
        Self {
            code: 200,
            data: None,
            message: Some(message.to_string()),
        }
    }

    pub fn from_error(err: &ViewerError) -> Self {
        Self {
            code: err.status_code(),
            data: None,
            message: Some(err.to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == 200
    }
}
