//! Record store seam for target timeframes.
//!
//! The service layer depends on [`TargetTimeframeStore`] rather than on a
//! pool directly, so the store is injected at construction and tests can
//! substitute their own implementation.

use async_trait::async_trait;
use timeframe_core::target_timeframe::{NewTargetTimeframe, TargetTimeframeUpdate};
use timeframe_core::types::DbId;

use crate::models::target_timeframe::TargetTimeframe;
use crate::repositories::TargetTimeframeRepo;
use crate::DbPool;

/// One domain intent, one store interaction.
///
/// Absence is reported as a value (`None` / `false`); `Err` is reserved for
/// genuine store failures such as constraint violations or an unreachable
/// database.
#[async_trait]
pub trait TargetTimeframeStore: Send + Sync {
    /// Insert a record and return it with its store-assigned id.
    async fn insert(&self, input: &NewTargetTimeframe) -> Result<TargetTimeframe, sqlx::Error>;

    /// Every record, unfiltered.
    async fn select_all(&self) -> Result<Vec<TargetTimeframe>, sqlx::Error>;

    async fn select_by_id(&self, id: DbId) -> Result<Option<TargetTimeframe>, sqlx::Error>;

    /// Records whose `target_id` matches; empty when none do.
    async fn select_by_target(&self, target_id: DbId)
        -> Result<Vec<TargetTimeframe>, sqlx::Error>;

    /// Apply field changes. `false` when no row has this id.
    async fn update_by_id(
        &self,
        id: DbId,
        changes: &TargetTimeframeUpdate,
    ) -> Result<bool, sqlx::Error>;

    /// Remove the row. `false` when no row has this id.
    async fn delete_by_id(&self, id: DbId) -> Result<bool, sqlx::Error>;

    /// Confirm the backing store is reachable.
    async fn ping(&self) -> Result<(), sqlx::Error>;
}

/// PostgreSQL-backed store. Each call checks a connection out of the pool
/// for the duration of one statement.
#[derive(Clone)]
pub struct PgTargetTimeframeStore {
    pool: DbPool,
}

impl PgTargetTimeframeStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TargetTimeframeStore for PgTargetTimeframeStore {
    async fn insert(&self, input: &NewTargetTimeframe) -> Result<TargetTimeframe, sqlx::Error> {
        TargetTimeframeRepo::create(&self.pool, input).await
    }

    async fn select_all(&self) -> Result<Vec<TargetTimeframe>, sqlx::Error> {
        TargetTimeframeRepo::list(&self.pool).await
    }

    async fn select_by_id(&self, id: DbId) -> Result<Option<TargetTimeframe>, sqlx::Error> {
        TargetTimeframeRepo::find_by_id(&self.pool, id).await
    }

    async fn select_by_target(
        &self,
        target_id: DbId,
    ) -> Result<Vec<TargetTimeframe>, sqlx::Error> {
        TargetTimeframeRepo::list_by_target(&self.pool, target_id).await
    }

    async fn update_by_id(
        &self,
        id: DbId,
        changes: &TargetTimeframeUpdate,
    ) -> Result<bool, sqlx::Error> {
        TargetTimeframeRepo::update(&self.pool, id, changes).await
    }

    async fn delete_by_id(&self, id: DbId) -> Result<bool, sqlx::Error> {
        TargetTimeframeRepo::delete(&self.pool, id).await
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }
}
