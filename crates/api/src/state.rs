use crate::services::TimeframeService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the service holds its store behind an `Arc`).
/// Configuration is consumed at router construction and not kept here.
#[derive(Clone)]
pub struct AppState {
    /// Target timeframe service, holding the injected record store.
    pub timeframes: TimeframeService,
}
