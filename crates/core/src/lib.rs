//! Domain types, errors, and payload validation for target timeframes.
//!
//! This crate performs no I/O. Everything here is usable from the store
//! adapter, the service layer, and tests alike.

pub mod error;
pub mod target_timeframe;
pub mod types;
