//! Cache metrics (feature `metrics`).
//!
//! Counters are recorded inline in the `get` path and cost one integer
//! increment each; [`FillCache::metrics_snapshot`] captures them together
//! with the gauges of the moment.
//!
//! [`FillCache::metrics_snapshot`]: crate::cache::FillCache::metrics_snapshot

pub mod metrics_impl;
pub mod snapshot;

pub use metrics_impl::FillMetrics;
pub use snapshot::FillMetricsSnapshot;
