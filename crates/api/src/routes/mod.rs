pub mod health;
pub mod target_timeframe;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /targettimeframes                      list, create
/// /targettimeframes/{id}                 get, update, delete
/// /targettimeframes/target/{target_id}   list by target
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/targettimeframes", target_timeframe::router())
}
