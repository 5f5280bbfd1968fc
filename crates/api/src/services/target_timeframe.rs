//! Target timeframe service.
//!
//! Each operation runs validate, then exactly one store call, then maps the
//! outcome. Validation always completes before the store is touched, so a
//! rejected payload never produces a partial write. Outcomes are reported as
//! [`CoreError`] values:
//!
//! - [`CoreError::Validation`]: malformed input, store not accessed
//! - [`CoreError::NotFound`]: no row with the requested id
//! - [`CoreError::Internal`]: the store failed; detail is logged here

use std::sync::Arc;

use serde_json::Value;
use timeframe_core::error::CoreError;
use timeframe_core::target_timeframe::{validate_create, validate_update, ENTITY_NAME};
use timeframe_core::types::DbId;
use timeframe_db::models::target_timeframe::TargetTimeframe;
use timeframe_db::store::TargetTimeframeStore;

/// Stateless between calls; the store is the only durable state.
#[derive(Clone)]
pub struct TimeframeService {
    store: Arc<dyn TargetTimeframeStore>,
}

impl TimeframeService {
    pub fn new(store: Arc<dyn TargetTimeframeStore>) -> Self {
        Self { store }
    }

    /// Validate and insert a new record, returning it with its assigned id.
    pub async fn create(&self, body: &Value) -> Result<TargetTimeframe, CoreError> {
        let input = validate_create(body)?;
        let created = self
            .store
            .insert(&input)
            .await
            .map_err(|e| store_failure("create", None, e))?;
        tracing::info!(
            id = created.id,
            target_id = created.target_id,
            "Target timeframe created"
        );
        Ok(created)
    }

    pub async fn list(&self) -> Result<Vec<TargetTimeframe>, CoreError> {
        self.store
            .select_all()
            .await
            .map_err(|e| store_failure("list", None, e))
    }

    pub async fn get(&self, id: DbId) -> Result<TargetTimeframe, CoreError> {
        self.store
            .select_by_id(id)
            .await
            .map_err(|e| store_failure("get", Some(id), e))?
            .ok_or_else(|| not_found(id))
    }

    /// All records for a target. No matches is an empty vec, not an error.
    pub async fn list_by_target(&self, target_id: DbId) -> Result<Vec<TargetTimeframe>, CoreError> {
        self.store
            .select_by_target(target_id)
            .await
            .map_err(|e| store_failure("list_by_target", Some(target_id), e))
    }

    /// Apply a partial update. Only supplied fields change.
    pub async fn update(&self, id: DbId, body: &Value) -> Result<(), CoreError> {
        let changes = validate_update(body)?;
        let matched = self
            .store
            .update_by_id(id, &changes)
            .await
            .map_err(|e| store_failure("update", Some(id), e))?;
        if !matched {
            return Err(not_found(id));
        }
        tracing::info!(id, "Target timeframe updated");
        Ok(())
    }

    /// Hard-delete a record.
    pub async fn delete(&self, id: DbId) -> Result<(), CoreError> {
        let deleted = self
            .store
            .delete_by_id(id)
            .await
            .map_err(|e| store_failure("delete", Some(id), e))?;
        if !deleted {
            return Err(not_found(id));
        }
        tracing::info!(id, "Target timeframe deleted");
        Ok(())
    }

    /// Whether the record store is reachable.
    pub async fn is_healthy(&self) -> bool {
        match self.store.ping().await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Record store health check failed");
                false
            }
        }
    }
}

fn not_found(id: DbId) -> CoreError {
    CoreError::NotFound {
        entity: ENTITY_NAME,
        id,
    }
}

fn store_failure(operation: &'static str, id: Option<DbId>, err: sqlx::Error) -> CoreError {
    tracing::error!(operation, id = ?id, error = %err, "Target timeframe store failure");
    CoreError::Internal(format!("{operation} failed: {err}"))
}
