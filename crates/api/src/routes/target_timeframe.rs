//! Route definitions for target timeframes.

use axum::routing::get;
use axum::Router;

use crate::handlers::target_timeframe;
use crate::state::AppState;

/// Routes mounted at `/targettimeframes`.
///
/// ```text
/// GET    /                     -> list
/// POST   /                     -> create
/// GET    /{id}                 -> get_by_id
/// PUT    /{id}                 -> update
/// DELETE /{id}                 -> delete
/// GET    /target/{target_id}   -> list_by_target
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(target_timeframe::list).post(target_timeframe::create),
        )
        .route(
            "/{id}",
            get(target_timeframe::get_by_id)
                .put(target_timeframe::update)
                .delete(target_timeframe::delete),
        )
        .route(
            "/target/{target_id}",
            get(target_timeframe::list_by_target),
        )
}
