pub mod order_index;

pub use order_index::OrderIndex;
