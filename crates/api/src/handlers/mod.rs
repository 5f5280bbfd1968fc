pub mod target_timeframe;
