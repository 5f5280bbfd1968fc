//! Handlers for the `/api/targettimeframes` resource.
//!
//! Thin translation only: pull the path id and raw JSON body out of the
//! request, hand them to [`TimeframeService`](crate::services::TimeframeService),
//! and shape the response. Extractor rejections are turned into validation
//! failures of the operation so every endpoint keeps its own error body.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::Value;
use timeframe_core::error::CoreError;
use timeframe_core::types::DbId;

use crate::error::{AppError, AppResult, Operation, MSG_INVALID_ID, MSG_UPDATED};
use crate::response::StatusResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/targettimeframes
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let body = json_body(Operation::Create, body)?;
    let created = state
        .timeframes
        .create(&body)
        .await
        .map_err(AppError::during(Operation::Create))?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/targettimeframes
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let timeframes = state
        .timeframes
        .list()
        .await
        .map_err(AppError::during(Operation::List))?;
    Ok(Json(timeframes))
}

/// GET /api/targettimeframes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let id = path_id(Operation::Get, id)?;
    let timeframe = state
        .timeframes
        .get(id)
        .await
        .map_err(AppError::during(Operation::Get))?;
    Ok(Json(timeframe))
}

/// GET /api/targettimeframes/target/{target_id}
///
/// Returns an empty array when the target has no timeframes.
pub async fn list_by_target(
    State(state): State<AppState>,
    target_id: Result<Path<DbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let target_id = path_id(Operation::ListByTarget, target_id)?;
    let timeframes = state
        .timeframes
        .list_by_target(target_id)
        .await
        .map_err(AppError::during(Operation::ListByTarget))?;
    Ok(Json(timeframes))
}

/// PUT /api/targettimeframes/{id}
///
/// Partial update; fields absent from the body are left untouched.
pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let id = path_id(Operation::Update, id)?;
    let body = json_body(Operation::Update, body)?;
    state
        .timeframes
        .update(id, &body)
        .await
        .map_err(AppError::during(Operation::Update))?;
    Ok(Json(StatusResponse::ok(MSG_UPDATED)))
}

/// DELETE /api/targettimeframes/{id}
pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<StatusCode> {
    let id = path_id(Operation::Delete, id)?;
    state
        .timeframes
        .delete(id)
        .await
        .map_err(AppError::during(Operation::Delete))?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Extraction helpers
// ---------------------------------------------------------------------------

/// Rejected ids answer with a fixed message; the extractor's text names
/// internal types and stays in the logs.
fn path_id(operation: Operation, id: Result<Path<DbId>, PathRejection>) -> AppResult<DbId> {
    id.map(|Path(id)| id).map_err(|rejection| {
        tracing::debug!(operation = ?operation, reason = %rejection.body_text(), "Bad path id");
        AppError::new(operation, CoreError::Validation(MSG_INVALID_ID.to_string()))
    })
}

fn json_body(operation: Operation, body: Result<Json<Value>, JsonRejection>) -> AppResult<Value> {
    body.map(|Json(value)| value).map_err(|rejection| {
        AppError::new(
            operation,
            CoreError::Validation(format!("invalid JSON body: {}", rejection.body_text())),
        )
    })
}
