//! Response body types shared by the target timeframe handlers.
//!
//! Successful reads return the record (or an array of records) unwrapped.
//! Failures use one of two shapes depending on the endpoint: most return
//! [`ErrorResponse`], while updates report through [`StatusResponse`].

use serde::Serialize;

/// `{ "error": "..." }`
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// `{ "success": bool, "message": "..." }`
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub success: bool,
    pub message: String,
}

impl StatusResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
