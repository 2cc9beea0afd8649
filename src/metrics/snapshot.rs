/// Point-in-time view of the recorded counters.
///
/// Produced by
/// [`FillCache::metrics_snapshot`](crate::cache::FillCache::metrics_snapshot).
#[derive(Debug, Default, Clone, Copy)]
pub struct FillMetricsSnapshot {
    pub get_calls: u64,
    pub get_hits: u64,
    pub get_misses: u64,

    pub fill_calls: u64,
    pub fill_errors: u64,

    pub evicted_entries: u64,
    pub promotions: u64,

    // gauges captured at snapshot time
    pub cache_len: usize,
    pub capacity: usize,
}

impl FillMetricsSnapshot {
    /// Hit rate over all `get` calls so far, in `[0.0, 1.0]`.
    ///
    /// Returns 0.0 before the first call.
    pub fn hit_rate(&self) -> f64 {
        if self.get_calls == 0 {
            return 0.0;
        }
        self.get_hits as f64 / self.get_calls as f64
    }
}
