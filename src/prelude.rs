pub use crate::cache::FillCache;
pub use crate::ds::OrderIndex;
pub use crate::error::UnimplementedFill;
pub use crate::kind::CacheKind;
pub use crate::traits::{Fill, NoFill, ReadOnlyCache};

#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::FillMetricsSnapshot;
