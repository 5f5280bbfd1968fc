//! Repository layer: one zero-sized struct per table with static async
//! methods taking a `&PgPool`.

pub mod target_timeframe_repo;

pub use target_timeframe_repo::TargetTimeframeRepo;
