//! Shared response bodies for API handlers.

use serde::Serialize;

/// `{"message": ...}` greeting body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Acknowledgement returned by write endpoints: `{"status": "success", "message": ...}`.
///
/// Deliberately carries no entity.
#[derive(Debug, Serialize)]
pub struct Acknowledgement {
    pub status: &'static str,
    pub message: &'static str,
}

impl Acknowledgement {
    pub fn success(message: &'static str) -> Self {
        Self {
            status: "success",
            message,
        }
    }
}

/// Uniform failure body: `{"status": "error", "code": ..., "detail": ...}`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub code: &'static str,
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(code: &'static str, detail: String) -> Self {
        Self {
            status: "error",
            code,
            detail,
        }
    }
}
