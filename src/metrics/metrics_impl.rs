/// Counters recorded by [`FillCache`](crate::cache::FillCache).
///
/// All recording happens on `&mut self` paths of the cache, so plain
/// integer fields suffice.
#[derive(Debug, Default)]
pub struct FillMetrics {
    pub get_calls: u64,
    pub get_hits: u64,
    pub get_misses: u64,
    pub fill_calls: u64,
    pub fill_errors: u64,
    pub evicted_entries: u64,
    pub promotions: u64,
}

impl FillMetrics {
    #[inline]
    pub fn record_get_call(&mut self) {
        self.get_calls += 1;
    }

    #[inline]
    pub fn record_get_hit(&mut self) {
        self.get_hits += 1;
    }

    #[inline]
    pub fn record_get_miss(&mut self) {
        self.get_misses += 1;
    }

    #[inline]
    pub fn record_fill_call(&mut self) {
        self.fill_calls += 1;
    }

    #[inline]
    pub fn record_fill_error(&mut self) {
        self.fill_errors += 1;
    }

    #[inline]
    pub fn record_eviction(&mut self) {
        self.evicted_entries += 1;
    }

    #[inline]
    pub fn record_promotion(&mut self) {
        self.promotions += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let metrics = FillMetrics::default();
        assert_eq!(metrics.get_calls, 0);
        assert_eq!(metrics.fill_errors, 0);
        assert_eq!(metrics.evicted_entries, 0);
    }

    #[test]
    fn test_record_increments() {
        let mut metrics = FillMetrics::default();
        metrics.record_get_call();
        metrics.record_get_call();
        metrics.record_get_hit();
        metrics.record_promotion();

        assert_eq!(metrics.get_calls, 2);
        assert_eq!(metrics.get_hits, 1);
        assert_eq!(metrics.promotions, 1);
    }
}
