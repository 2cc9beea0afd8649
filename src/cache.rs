//! Bounded fill-through cache with FIFO eviction and optional keep-hot
//! promotion.
//!
//! Composes a key→value map with an eviction-order index and pulls missing
//! values through a consumer-supplied fill source. Meant to be embedded in
//! any type that memoizes an expensive, deterministic-per-key computation
//! under a fixed entry budget.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      FillCache<K, V, F> Layout                      │
//! │                                                                     │
//! │   map: FxHashMap<K, V>              order: OrderIndex<K>            │
//! │        key → cached value                  eviction order           │
//! │                                                                     │
//! │   ┌──────────┬───────┐              ┌───────────────────────┐       │
//! │   │   Key    │ Value │              │ front         back    │       │
//! │   ├──────────┼───────┤              ├───────────────────────┤       │
//! │   │   "c"    │  v3   │              │ [c]  [b]  [a]         │       │
//! │   │   "b"    │  v2   │              │  ↑         ↑          │       │
//! │   │   "a"    │  v1   │              │ newest   victim       │       │
//! │   └──────────┴───────┘              └───────────────────────┘       │
//! │                                                                     │
//! │   kind: CacheKind { capacity, keep_hot }        fill: F             │
//! └─────────────────────────────────────────────────────────────────────┘
//!
//! Hit Flow
//! ────────
//!
//!   get("cached_key"):
//!     1. Found in map
//!     2. keep_hot enabled? move key to front of order index
//!     3. Return &value (fill is never invoked)
//!
//! Miss Flow
//! ─────────
//!
//!   get("new_key"):
//!     1. Not in map
//!     2. value = fill(key)?        ← an Err here leaves no trace
//!     3. Insert (key, value) into map
//!     4. Prepend key to order index
//!     5. Index over capacity? pop the back key, remove it from map
//! ```
//!
//! ## Operations
//!
//! | Operation     | Time   | Notes                                      |
//! |---------------|--------|--------------------------------------------|
//! | `get` (hit)   | O(1)   | O(n) when keep-hot promotes                |
//! | `get` (miss)  | O(1)*  | *plus the fill call; at most one eviction  |
//! | `peek`        | O(1)   | no promotion, no fill                      |
//! | `contains`    | O(1)   | map lookup only                            |
//!
//! ## Eviction
//!
//! Strict FIFO on insertion order. With keep-hot enabled every hit also
//! moves its key to the front, which approximates LRU. Eviction runs after
//! the new entry is inserted, never preemptively, and removes exactly one
//! entry per miss: the key at the back of the order index.
//!
//! There is no remove, invalidate, or clear: entries leave the cache only
//! by eviction, and both structures live exactly as long as the cache.
//!
//! ## Thread Safety
//!
//! Not thread-safe, designed for single-threaded use; there is no internal
//! locking. Concurrent access without external synchronization is a caller
//! bug, not a supported mode.

use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::ds::OrderIndex;
use crate::kind::CacheKind;
use crate::traits::{Fill, NoFill, ReadOnlyCache};

#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::FillMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::FillMetricsSnapshot;

/// A bounded fill-through cache.
///
/// Misses invoke the fill source `F` exactly once and cache whatever it
/// returns; hits never invoke it. When the entry count exceeds the kind's
/// capacity, the key at the back of the eviction order is dropped. With
/// keep-hot enabled, hits promote their key to the front.
///
/// # Type Parameters
///
/// - `K`: key type, `Eq + Hash + Clone`
/// - `V`: value type; cached verbatim, absence markers such as
///   `Option::None` included
/// - `F`: fill source; defaults to [`NoFill`], which fails every `get`
///
/// # Example
///
/// ```
/// use std::convert::Infallible;
/// use memokit::kind::CacheKind;
///
/// let kind = CacheKind::new().with_capacity(2);
/// let mut cache = kind.build(|key: &u32| Ok::<u64, Infallible>(u64::from(*key) * 10));
///
/// assert_eq!(cache.get(&1), Ok(&10));
/// assert_eq!(cache.get(&2), Ok(&20));
/// assert_eq!(cache.get(&3), Ok(&30)); // evicts key 1
///
/// assert_eq!(cache.len(), 2);
/// assert!(!cache.contains(&1));
/// ```
pub struct FillCache<K, V, F = NoFill> {
    /// Maps key to cached value
    map: FxHashMap<K, V>,
    /// Eviction order over the cached keys
    order: OrderIndex<K>,
    /// Policy shared with every other instance of this cache's kind
    kind: CacheKind,
    /// Fill source invoked on misses
    fill: F,
    #[cfg(feature = "metrics")]
    metrics: FillMetrics,
}

impl<K, V> FillCache<K, V> {
    /// Creates a cache of the given kind with no fill capability.
    ///
    /// Every `get` on the returned cache fails with
    /// [`UnimplementedFill`](crate::error::UnimplementedFill); a fill
    /// source can only be supplied at construction, via [`new`] or
    /// [`CacheKind::build`].
    ///
    /// [`new`]: FillCache::new
    pub fn unfilled(kind: CacheKind) -> Self
    where
        K: PartialEq,
    {
        Self::new(kind, NoFill)
    }
}

impl<K, V, F> FillCache<K, V, F> {
    /// Creates a cache of `kind` that fills misses from `fill`.
    ///
    /// Both structures start empty; memory for the configured capacity is
    /// allocated up front.
    pub fn new(kind: CacheKind, fill: F) -> Self
    where
        K: PartialEq,
    {
        Self {
            map: FxHashMap::with_capacity_and_hasher(kind.capacity(), Default::default()),
            order: OrderIndex::with_capacity(kind.capacity()),
            kind,
            fill,
            #[cfg(feature = "metrics")]
            metrics: FillMetrics::default(),
        }
    }

    /// Returns the policy this cache was built from.
    #[inline]
    pub fn kind(&self) -> CacheKind {
        self.kind
    }

    /// Returns the number of cached entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if nothing is cached yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns the maximum number of entries.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.kind.capacity()
    }
}

impl<K, V, F> FillCache<K, V, F>
where
    K: Eq + Hash + Clone,
    F: Fill<K, V>,
{
    /// Fetches the value for `key`, computing and caching it on a miss.
    ///
    /// - **Hit**: returns the cached value; the fill source is not
    ///   invoked. With keep-hot enabled the key moves to the front of the
    ///   eviction order.
    /// - **Miss**: invokes the fill source exactly once, caches its value
    ///   (absence markers included), and returns it. If the cache now
    ///   exceeds capacity, the key at the back of the eviction order is
    ///   evicted. A fill error propagates unchanged and leaves the cache
    ///   exactly as it was: nothing cached, nothing evicted.
    ///
    /// # Example
    ///
    /// ```
    /// use std::cell::Cell;
    /// use std::convert::Infallible;
    /// use memokit::kind::CacheKind;
    ///
    /// let fills = Cell::new(0);
    /// let mut cache = CacheKind::new().with_capacity(8).build(|key: &u32| {
    ///     fills.set(fills.get() + 1);
    ///     Ok::<_, Infallible>(key * key)
    /// });
    ///
    /// assert_eq!(cache.get(&3), Ok(&9)); // miss: fill runs
    /// assert_eq!(cache.get(&3), Ok(&9)); // hit: it does not
    /// assert_eq!(fills.get(), 1);
    /// ```
    pub fn get(&mut self, key: &K) -> Result<&V, F::Error> {
        #[cfg(feature = "metrics")]
        self.metrics.record_get_call();

        if self.map.contains_key(key) {
            #[cfg(feature = "metrics")]
            self.metrics.record_get_hit();

            if self.kind.keep_hot() {
                self.order.promote(key);

                #[cfg(feature = "metrics")]
                self.metrics.record_promotion();
            }

            return Ok(&self.map[key]);
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_get_miss();

        self.fill_miss(key)
    }

    /// Computes, stores, and returns the value for an uncached `key`.
    fn fill_miss(&mut self, key: &K) -> Result<&V, F::Error> {
        #[cfg(feature = "metrics")]
        self.metrics.record_fill_call();

        // Fill runs before either structure is touched, so an Err returns
        // with the cache in its pre-call state.
        let value = match self.fill.fill(key) {
            Ok(value) => value,
            Err(err) => {
                #[cfg(feature = "metrics")]
                self.metrics.record_fill_error();

                return Err(err);
            },
        };

        self.map.insert(key.clone(), value);
        self.order.push_front(key.clone());

        // Post-insert eviction: the index grew by exactly one key, so at
        // most one victim restores the bound. With capacity >= 1 the back
        // key is never the key just prepended.
        if self.order.len() > self.kind.capacity() {
            if let Some(victim) = self.order.pop_back() {
                self.map.remove(&victim);

                #[cfg(feature = "metrics")]
                self.metrics.record_eviction();
            }
        }

        #[cfg(debug_assertions)]
        self.validate_invariants();

        Ok(&self.map[key])
    }

    /// Returns `true` if `key` is cached.
    ///
    /// Does not promote the key and does not invoke the fill source.
    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    /// Returns the cached value for `key` without promoting it or
    /// invoking the fill source.
    ///
    /// # Example
    ///
    /// ```
    /// use std::convert::Infallible;
    /// use memokit::kind::CacheKind;
    ///
    /// let mut cache = CacheKind::new().with_capacity(4).build(|key: &u32| {
    ///     Ok::<_, Infallible>(key + 1)
    /// });
    ///
    /// assert_eq!(cache.peek(&1), None); // peek never fills
    /// let _ = cache.get(&1);
    /// assert_eq!(cache.peek(&1), Some(&2));
    /// ```
    #[inline]
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.map.get(key)
    }

    /// Returns the entry next in line for eviction.
    pub fn peek_victim(&self) -> Option<(&K, &V)> {
        let key = self.order.back()?;
        let value = self.map.get(key)?;
        Some((key, value))
    }

    /// Returns the cached keys in eviction order, front (most recently
    /// inserted or promoted) to back (next victim).
    pub fn ordered_keys(&self) -> impl Iterator<Item = &K> {
        self.order.iter()
    }

    /// Validates internal data structure invariants.
    ///
    /// Checks that:
    /// - Map and order index track the same number of keys
    /// - The entry count never exceeds capacity
    /// - Every key in the map is in the order index and vice versa
    /// - No key appears twice in the order index
    ///
    /// Only runs when debug assertions are enabled.
    #[cfg(debug_assertions)]
    fn validate_invariants(&self) {
        debug_assert_eq!(
            self.map.len(),
            self.order.len(),
            "map and order index have different sizes"
        );
        debug_assert!(
            self.order.len() <= self.kind.capacity(),
            "entry count exceeds capacity"
        );

        for key in self.map.keys() {
            debug_assert!(
                self.order.contains(key),
                "key in map not found in order index"
            );
        }

        for key in self.order.iter() {
            debug_assert!(
                self.map.contains_key(key),
                "key in order index not found in map"
            );
        }

        self.order.debug_validate_invariants();
    }
}

#[cfg(feature = "metrics")]
impl<K, V, F> FillCache<K, V, F> {
    /// Captures a point-in-time snapshot of the recorded counters.
    pub fn metrics_snapshot(&self) -> FillMetricsSnapshot {
        FillMetricsSnapshot {
            get_calls: self.metrics.get_calls,
            get_hits: self.metrics.get_hits,
            get_misses: self.metrics.get_misses,
            fill_calls: self.metrics.fill_calls,
            fill_errors: self.metrics.fill_errors,
            evicted_entries: self.metrics.evicted_entries,
            promotions: self.metrics.promotions,
            cache_len: self.map.len(),
            capacity: self.kind.capacity(),
        }
    }
}

// Debug implementation; deliberately skips the fill source, which has no
// Debug bound.
impl<K, V, F> std::fmt::Debug for FillCache<K, V, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FillCache")
            .field("kind", &self.kind)
            .field("len", &self.map.len())
            .finish_non_exhaustive()
    }
}

impl<K, V, F> ReadOnlyCache<K, V> for FillCache<K, V, F>
where
    K: Eq + Hash,
{
    #[inline]
    fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    #[inline]
    fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.kind.capacity()
    }
}
