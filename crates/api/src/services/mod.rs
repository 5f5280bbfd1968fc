//! Orchestration between request handlers and the record store.

pub mod target_timeframe;

pub use target_timeframe::TimeframeService;
