#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::panic)]
#![warn(clippy::cast_possible_truncation)]
#![warn(clippy::cast_sign_loss)]
#![forbid(unsafe_code)]
#![deny(warnings)]
#![warn(clippy::missing_const_for_fn, clippy::all)]

//! # rangetree2d: dynamic 2D range trees
//!
//! An in-memory index answering orthogonal range-counting queries over a
//! growing set of 2D points:
//! - Weight-balanced (BB[α]) primary tree on `x`, one secondary tree on `y`
//!   per primary node
//! - Amortized rebalancing by rebuilding subtrees that fall out of balance
//! - Duplicate keys stored once per node, never as extra tree levels
//! - A benchmarking harness replaying text command streams and reporting
//!   visited-node statistics
//!
//! ```
//! use rangetree2d::{Point, RangeTree};
//!
//! let mut tree = RangeTree::new(0.75).unwrap();
//! for (x, y) in [(1, 5), (2, 3), (3, 8), (4, 1)] {
//!     tree.insert(Point::new(x, y));
//! }
//! assert_eq!(tree.range_count(&Point::new(1, 1), &Point::new(3, 8)), 3);
//! ```

pub mod core;

// Re-export key types for easier use by library consumers
pub use crate::core::common::RangeIndexError;
pub use crate::core::config::{Config, OutputFormat};
pub use crate::core::geometry::{Axis, Coord, Point, Rectangle};
pub use crate::core::harness::{Harness, RunReport, TreeSummary};
pub use crate::core::indexing::{RangeTree, RangeTreeError};

/// Core result type for the library
pub type Result<T> = std::result::Result<T, RangeIndexError>;

#[cfg(test)]
mod tests {
    use crate::{Harness, Point, RangeTree, Rectangle};
    use std::fs;
    use std::io::{BufReader, Write};
    use tempfile::NamedTempFile;

    #[test]
    fn basic_range_tree_operations() {
        let mut tree = RangeTree::new(0.6).unwrap();
        for i in 0..100 {
            tree.insert(Point::new(i % 10, i / 10));
        }
        assert_eq!(tree.len(), 100);
        assert_eq!(tree.range_count(&Point::new(0, 0), &Point::new(4, 4)), 25);
        assert_eq!(tree.range_count_rect(&Rectangle::from_corners(Point::new(9, 9), Point::new(5, 0))), 50);
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn harness_reads_and_writes_files() {
        let mut input = NamedTempFile::new().unwrap();
        writeln!(input, "# 3").unwrap();
        writeln!(input, "I 1 1").unwrap();
        writeln!(input, "I 2 2").unwrap();
        writeln!(input, "I 3 3").unwrap();
        writeln!(input, "C 1 1 2 2").unwrap();

        let output = NamedTempFile::new().unwrap();
        let reader = BufReader::new(fs::File::open(input.path()).unwrap());
        let writer = fs::File::create(output.path()).unwrap();

        let mut harness = Harness::new(crate::Config::default()).unwrap();
        let report = harness.run(reader, writer).unwrap();
        assert_eq!(report.trees, 1);

        let written = fs::read_to_string(output.path()).unwrap();
        assert!(written.starts_with("3 "));
        assert_eq!(written.lines().count(), 1);
    }
}
