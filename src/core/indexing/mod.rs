pub mod order_stats;
pub mod range_tree;

pub use range_tree::{RangeTree, RangeTreeError};
