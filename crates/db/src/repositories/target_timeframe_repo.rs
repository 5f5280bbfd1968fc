//! Repository for the `targettimeframes` table.

use sqlx::PgPool;
use timeframe_core::target_timeframe::{NewTargetTimeframe, TargetTimeframeUpdate};
use timeframe_core::types::DbId;

use crate::models::target_timeframe::TargetTimeframe;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, target_id, planned_date, actual_date, comments, document_id";

/// Provides CRUD operations for target timeframes.
pub struct TargetTimeframeRepo;

impl TargetTimeframeRepo {
    /// Insert a new target timeframe, returning the created row with its
    /// store-assigned `id`.
    pub async fn create(
        pool: &PgPool,
        input: &NewTargetTimeframe,
    ) -> Result<TargetTimeframe, sqlx::Error> {
        let query = format!(
            "INSERT INTO targettimeframes (target_id, planned_date, actual_date, comments, document_id) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TargetTimeframe>(&query)
            .bind(input.target_id)
            .bind(input.planned_date)
            .bind(input.actual_date)
            .bind(&input.comments)
            .bind(input.document_id)
            .fetch_one(pool)
            .await
    }

    /// List every target timeframe, ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<TargetTimeframe>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM targettimeframes ORDER BY id");
        sqlx::query_as::<_, TargetTimeframe>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a target timeframe by its id.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<TargetTimeframe>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM targettimeframes WHERE id = $1");
        sqlx::query_as::<_, TargetTimeframe>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all timeframes recorded against a target, ordered by id.
    ///
    /// An unknown `target_id` yields an empty vec.
    pub async fn list_by_target(
        pool: &PgPool,
        target_id: DbId,
    ) -> Result<Vec<TargetTimeframe>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM targettimeframes WHERE target_id = $1 ORDER BY id");
        sqlx::query_as::<_, TargetTimeframe>(&query)
            .bind(target_id)
            .fetch_all(pool)
            .await
    }

    /// Apply a partial update in a single statement.
    ///
    /// Each nullable column is paired with a bound "supplied" flag: unsupplied
    /// columns keep their value, supplied ones take the bound value (which may
    /// be `NULL`). `target_id` is never nulled.
    ///
    /// Returns `false` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &TargetTimeframeUpdate,
    ) -> Result<bool, sqlx::Error> {
        if input.is_empty() {
            return Self::exists(pool, id).await;
        }

        let result = sqlx::query(
            "UPDATE targettimeframes SET \
                target_id = COALESCE($2, target_id), \
                planned_date = CASE WHEN $3 THEN $4 ELSE planned_date END, \
                actual_date = CASE WHEN $5 THEN $6 ELSE actual_date END, \
                comments = CASE WHEN $7 THEN $8 ELSE comments END, \
                document_id = CASE WHEN $9 THEN $10 ELSE document_id END \
             WHERE id = $1",
        )
        .bind(id)
        .bind(input.target_id)
        .bind(input.planned_date.is_supplied())
        .bind(input.planned_date.value().copied())
        .bind(input.actual_date.is_supplied())
        .bind(input.actual_date.value().copied())
        .bind(input.comments.is_supplied())
        .bind(input.comments.value().cloned())
        .bind(input.document_id.is_supplied())
        .bind(input.document_id.value().copied())
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Hard-delete a target timeframe. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM targettimeframes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM targettimeframes WHERE id = $1)")
                .bind(id)
                .fetch_one(pool)
                .await?;
        Ok(exists)
    }
}
