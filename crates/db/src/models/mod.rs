//! Domain model structs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the database row. Input DTOs come from `timeframe_core`, where they are
//! produced by validation.

pub mod target_timeframe;
