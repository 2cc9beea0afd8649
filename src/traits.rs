//! # Fill and introspection traits
//!
//! This module defines the two capability seams of the crate: the fill
//! contract a cache pulls missing values through, and the read-only
//! introspection surface every cache exposes.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────┐        ┌──────────────────────────────┐
//!   │         Fill<K, V>           │        │      ReadOnlyCache<K, V>     │
//!   │                              │        │                              │
//!   │  type Error                  │        │  contains(&, &K) → bool      │
//!   │  fill(&mut, &K)              │        │  len(&) → usize              │
//!   │      → Result<V, Error>      │        │  is_empty(&) → bool          │
//!   └──────────────┬───────────────┘        │  capacity(&) → usize         │
//!                  │                        └──────────────────────────────┘
//!       ┌──────────┴──────────┐
//!       ▼                     ▼
//!   any FnMut(&K)          NoFill
//!   → Result<V, E>         (every call fails with UnimplementedFill)
//! ```
//!
//! ## Trait Summary
//!
//! | Trait           | Purpose                                        |
//! |-----------------|------------------------------------------------|
//! | `Fill`          | Computes the value for a missed key, may fail  |
//! | `ReadOnlyCache` | Introspection that cannot corrupt cache state  |
//!
//! A fill source is supplied once, at cache construction; the cache calls
//! it at most once per miss and never on a hit. Whatever it returns is
//! cached verbatim, absence markers included, and the cache does not verify
//! that it is deterministic; that is the supplier's contract.

use crate::error::UnimplementedFill;

/// A source of values for cache misses.
///
/// Implementors map a key to a value, or fail. The cache treats the value
/// as opaque and the call as potentially side-effecting (I/O included);
/// latency and determinism are entirely the source's business.
///
/// Any `FnMut(&K) -> Result<V, E>` closure or function is a fill source via
/// the blanket impl, so most callers never implement this trait by hand.
///
/// # Example
///
/// ```
/// use std::convert::Infallible;
/// use memokit::kind::CacheKind;
///
/// let kind = CacheKind::new().with_capacity(16);
/// let mut cache = kind.build(|key: &u32| Ok::<String, Infallible>(key.to_string()));
///
/// assert_eq!(cache.get(&7).map(String::as_str), Ok("7"));
/// ```
pub trait Fill<K, V> {
    /// Error surfaced, unchanged, to the caller of
    /// [`FillCache::get`](crate::cache::FillCache::get) when a fill fails.
    type Error;

    /// Computes the value for `key`.
    ///
    /// Receives the missed key unmodified. Called at most once per miss.
    fn fill(&mut self, key: &K) -> Result<V, Self::Error>;
}

/// Any `FnMut(&K) -> Result<V, E>` closure is a fill source.
impl<K, V, E, F> Fill<K, V> for F
where
    F: FnMut(&K) -> Result<V, E>,
{
    type Error = E;

    #[inline]
    fn fill(&mut self, key: &K) -> Result<V, E> {
        self(key)
    }
}

/// The fill source of a cache kind that never defined one.
///
/// This is the default fill parameter of
/// [`FillCache`](crate::cache::FillCache): every call fails with
/// [`UnimplementedFill`], so a cache built without a fill capability fails
/// on every access rather than only the first.
///
/// # Example
///
/// ```
/// use memokit::traits::{Fill, NoFill};
///
/// let mut source = NoFill;
/// let result: Result<i32, _> = source.fill(&"key");
/// assert!(result.is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoFill;

impl<K, V> Fill<K, V> for NoFill {
    type Error = UnimplementedFill;

    fn fill(&mut self, _key: &K) -> Result<V, UnimplementedFill> {
        Err(UnimplementedFill::new())
    }
}

/// Read-only cache introspection.
///
/// Everything here observes state without touching it (not even a keep-hot
/// promotion), so callers cannot corrupt cache invariants through this
/// surface.
///
/// # Example
///
/// ```
/// use std::convert::Infallible;
/// use memokit::kind::CacheKind;
/// use memokit::traits::ReadOnlyCache;
///
/// fn describe<K, V, C: ReadOnlyCache<K, V>>(cache: &C) -> String {
///     format!("{}/{} entries", cache.len(), cache.capacity())
/// }
///
/// let mut cache = CacheKind::new().with_capacity(4).build(|key: &u32| {
///     Ok::<_, Infallible>(*key)
/// });
/// let _ = cache.get(&1);
/// assert_eq!(describe(&cache), "1/4 entries");
/// ```
pub trait ReadOnlyCache<K, V> {
    /// Returns `true` if `key` is cached.
    fn contains(&self, key: &K) -> bool;

    /// Returns the number of cached entries.
    fn len(&self) -> usize;

    /// Returns `true` if nothing is cached.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the maximum number of entries.
    fn capacity(&self) -> usize;
}
