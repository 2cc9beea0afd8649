//! Error types for the memokit library.
//!
//! ## Key Components
//!
//! - [`UnimplementedFill`]: Returned on every access to a cache kind that
//!   never defined a fill capability.
//!
//! Failures raised by a configured fill source are not wrapped: they leave
//! [`FillCache::get`](crate::cache::FillCache::get) as the source's own
//! error type, with the cache untouched.
//!
//! ## Example Usage
//!
//! ```
//! use memokit::cache::FillCache;
//! use memokit::error::UnimplementedFill;
//! use memokit::kind::CacheKind;
//!
//! // A cache kind with no fill capability fails on every access,
//! // not just the first.
//! let mut cache: FillCache<&str, i32> = FillCache::unfilled(CacheKind::new());
//! assert_eq!(cache.get(&"key"), Err(UnimplementedFill::new()));
//! assert_eq!(cache.get(&"key"), Err(UnimplementedFill::new()));
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// UnimplementedFill
// ---------------------------------------------------------------------------

/// Error returned when a cache kind has no fill capability defined.
///
/// Produced by [`NoFill`](crate::traits::NoFill), the default fill source of
/// [`FillCache`](crate::cache::FillCache). Surfaces on every `get`, not just
/// the first; the only fix is supplying a single-argument `fill(key)` source
/// at construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnimplementedFill;

impl UnimplementedFill {
    /// Creates a new `UnimplementedFill`.
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &'static str {
        "a fill(key) capability must be defined for this cache kind"
    }
}

impl fmt::Display for UnimplementedFill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for UnimplementedFill {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
