use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use timeframe_core::error::CoreError;

use crate::response::{ErrorResponse, StatusResponse};

/// The endpoint a failure happened in.
///
/// Existing clients depend on per-endpoint error bodies, so the response
/// shape is chosen by operation as well as by error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    List,
    Get,
    ListByTarget,
    Update,
    Delete,
}

pub const MSG_CREATE_FAILED: &str = "Error creating target timeframe";
pub const MSG_LIST_FAILED: &str = "Error retrieving target timeframes";
pub const MSG_GET_FAILED: &str = "Error retrieving target timeframe";
pub const MSG_DELETE_FAILED: &str = "Error deleting target timeframe";
pub const MSG_INVALID_ID: &str = "Invalid id";
pub const MSG_UPDATED: &str = "Target timeframe updated successfully";
pub const MSG_UPDATE_NOT_FOUND: &str = "Target timeframe not found";
pub const MSG_UPDATE_INVALID: &str = "Invalid data in request body";
pub const MSG_UPDATE_FAILED: &str = "Error updating target timeframe";

/// Application-level error type for HTTP handlers.
///
/// Wraps a [`CoreError`] with the [`Operation`] it came from and implements
/// [`IntoResponse`] to produce the JSON body that endpoint is known for.
#[derive(Debug, thiserror::Error)]
#[error("{operation:?} failed: {source}")]
pub struct AppError {
    pub operation: Operation,
    pub source: CoreError,
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn new(operation: Operation, source: CoreError) -> Self {
        Self { operation, source }
    }

    /// Adapter for `map_err`: tag a [`CoreError`] with its operation.
    pub fn during(operation: Operation) -> impl Fn(CoreError) -> AppError {
        move |source| AppError::new(operation, source)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let CoreError::Validation(msg) = &self.source {
            tracing::debug!(operation = ?self.operation, reason = %msg, "Request rejected");
        }

        let status = match &self.source {
            CoreError::NotFound { .. } => StatusCode::NOT_FOUND,
            CoreError::Validation(_) => StatusCode::BAD_REQUEST,
            CoreError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        match self.operation {
            // Any create failure, including a rejected payload, is reported
            // as a generic creation failure.
            Operation::Create => error_body(StatusCode::INTERNAL_SERVER_ERROR, MSG_CREATE_FAILED),

            Operation::Update => {
                let message = match &self.source {
                    CoreError::NotFound { .. } => MSG_UPDATE_NOT_FOUND,
                    CoreError::Validation(_) => MSG_UPDATE_INVALID,
                    CoreError::Internal(_) => MSG_UPDATE_FAILED,
                };
                (status, Json(StatusResponse::failed(message))).into_response()
            }

            Operation::List | Operation::ListByTarget | Operation::Get | Operation::Delete => {
                let message = match &self.source {
                    // "Target timeframe with id <id> not found"
                    CoreError::NotFound { .. } => self.source.to_string(),
                    CoreError::Validation(msg) => msg.clone(),
                    CoreError::Internal(_) => internal_message(self.operation).to_string(),
                };
                error_body(status, message)
            }
        }
    }
}

fn internal_message(operation: Operation) -> &'static str {
    match operation {
        Operation::Create => MSG_CREATE_FAILED,
        Operation::List | Operation::ListByTarget => MSG_LIST_FAILED,
        Operation::Get => MSG_GET_FAILED,
        Operation::Update => MSG_UPDATE_FAILED,
        Operation::Delete => MSG_DELETE_FAILED,
    }
}

fn error_body(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}
