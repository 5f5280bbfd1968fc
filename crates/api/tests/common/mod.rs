//! Shared helpers for API integration tests.
//!
//! Tests drive the real router through `tower::ServiceExt::oneshot`, backed
//! either by Postgres (`#[sqlx::test]`) or by one of the in-process stores
//! below.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use timeframe_api::config::ServerConfig;
use timeframe_api::router::build_app_router;
use timeframe_api::services::TimeframeService;
use timeframe_api::state::AppState;
use timeframe_core::target_timeframe::{NewTargetTimeframe, TargetTimeframeUpdate};
use timeframe_core::types::DbId;
use timeframe_db::models::target_timeframe::TargetTimeframe;
use timeframe_db::store::{PgTargetTimeframeStore, TargetTimeframeStore};

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: String::new(),
        db_max_connections: 1,
    }
}

/// Build the full application router around any record store.
pub fn build_app_with_store(store: Arc<dyn TargetTimeframeStore>) -> Router {
    let config = test_config();
    let state = AppState {
        timeframes: TimeframeService::new(store),
    };
    build_app_router(state, &config)
}

/// Build the full application router backed by Postgres.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_with_store(Arc::new(PgTargetTimeframeStore::new(pool)))
}

// ---------------------------------------------------------------------------
// In-process stores
// ---------------------------------------------------------------------------

/// Map-backed store with BIGSERIAL-like id assignment.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<MemoryState>,
}

#[derive(Default)]
struct MemoryState {
    last_id: DbId,
    rows: BTreeMap<DbId, TargetTimeframe>,
}

impl MemoryStore {
    /// Insert directly, bypassing the HTTP layer (test fixtures).
    pub fn seed(&self, input: NewTargetTimeframe) -> TargetTimeframe {
        let mut state = self.inner.lock().unwrap();
        state.last_id += 1;
        let row = row_from_new(state.last_id, &input);
        state.rows.insert(row.id, row.clone());
        row
    }

    pub fn row(&self, id: DbId) -> Option<TargetTimeframe> {
        self.inner.lock().unwrap().rows.get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().rows.len()
    }
}

#[async_trait]
impl TargetTimeframeStore for MemoryStore {
    async fn insert(&self, input: &NewTargetTimeframe) -> Result<TargetTimeframe, sqlx::Error> {
        Ok(self.seed(input.clone()))
    }

    async fn select_all(&self) -> Result<Vec<TargetTimeframe>, sqlx::Error> {
        Ok(self.inner.lock().unwrap().rows.values().cloned().collect())
    }

    async fn select_by_id(&self, id: DbId) -> Result<Option<TargetTimeframe>, sqlx::Error> {
        Ok(self.row(id))
    }

    async fn select_by_target(
        &self,
        target_id: DbId,
    ) -> Result<Vec<TargetTimeframe>, sqlx::Error> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .rows
            .values()
            .filter(|row| row.target_id == target_id)
            .cloned()
            .collect())
    }

    async fn update_by_id(
        &self,
        id: DbId,
        changes: &TargetTimeframeUpdate,
    ) -> Result<bool, sqlx::Error> {
        let mut state = self.inner.lock().unwrap();
        match state.rows.get_mut(&id) {
            Some(row) => {
                apply_update(row, changes.clone());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_by_id(&self, id: DbId) -> Result<bool, sqlx::Error> {
        Ok(self.inner.lock().unwrap().rows.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        Ok(())
    }
}

/// The row a successful insert of `input` would produce.
pub fn row_from_new(id: DbId, input: &NewTargetTimeframe) -> TargetTimeframe {
    TargetTimeframe {
        id,
        target_id: input.target_id,
        planned_date: input.planned_date,
        actual_date: input.actual_date,
        comments: input.comments.clone(),
        document_id: input.document_id,
    }
}

/// Apply an update in place the way the SQL `UPDATE` does.
pub fn apply_update(row: &mut TargetTimeframe, update: TargetTimeframeUpdate) {
    if let Some(target_id) = update.target_id {
        row.target_id = target_id;
    }
    row.planned_date = update.planned_date.apply(row.planned_date);
    row.actual_date = update.actual_date.apply(row.actual_date);
    row.comments = update.comments.apply(row.comments.take());
    row.document_id = update.document_id.apply(row.document_id);
}

/// Store whose every call fails as if the database were unreachable.
pub struct FailingStore;

#[async_trait]
impl TargetTimeframeStore for FailingStore {
    async fn insert(&self, _: &NewTargetTimeframe) -> Result<TargetTimeframe, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn select_all(&self) -> Result<Vec<TargetTimeframe>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn select_by_id(&self, _: DbId) -> Result<Option<TargetTimeframe>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn select_by_target(&self, _: DbId) -> Result<Vec<TargetTimeframe>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn update_by_id(
        &self,
        _: DbId,
        _: &TargetTimeframeUpdate,
    ) -> Result<bool, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn delete_by_id(&self, _: DbId) -> Result<bool, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::POST, uri, body.to_string()).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::PUT, uri, body.to_string()).await
}

/// Send an arbitrary (possibly malformed) JSON body.
pub async fn send_json(app: Router, method: Method, uri: &str, body: String) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
