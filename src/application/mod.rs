//! Application services (use cases).
//!
//! Services here coordinate ports without knowing which adapters sit
//! behind them.

pub mod query_log;
