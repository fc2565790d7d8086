//! Lightweight in-process metrics (dependency-free).
//!
//! Counters and histograms are stored as atomics and rendered by the
//! `/metrics` handler in Prometheus text format.

pub mod metrics;

pub use metrics::{GatewayMetrics, Outcome};
