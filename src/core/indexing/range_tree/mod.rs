// src/core/indexing/range_tree/mod.rs

//! Dynamic two-dimensional range tree for orthogonal range counting.
//!
//! The primary tree is keyed on `x`. Every primary node owns a secondary
//! tree keyed on `y` holding exactly the points of that node's subtree, so a
//! query that has settled the `x` bound for a whole subtree can finish in the
//! secondary tree. Both levels are weight-balanced (BB[α]): an insertion that
//! pushes a node past the balance bound rebuilds that node's subtree, nested
//! secondary trees included, into perfectly balanced shape.
//!
//! Points with equal keys do not become separate tree nodes; they are kept in
//! a bucket on the node owning that key.

pub use self::error::RangeTreeError;

use self::level::PrimaryTree;
use crate::core::geometry::{Axis, Coord, Point, Rectangle};
use crate::core::indexing::order_stats;

mod error;
mod level;
mod node;
mod tree;


/// `RangeTree`: public entry point to the two-level index.
///
/// Not internally synchronized; callers that share a tree across threads
/// supply their own locking.
#[derive(Debug)]
pub struct RangeTree<T: Coord> {
    primary: PrimaryTree<T>,
    // Nodes touched by the most recent traced operation.
    last_visited: u64,
}

impl<T: Coord> RangeTree<T> {
    /// Creates an empty tree with balance factor `alpha`.
    ///
    /// # Errors
    /// Returns [`RangeTreeError::InvalidAlpha`] unless `0 < alpha < 1`.
    pub fn new(alpha: f64) -> Result<Self, RangeTreeError> {
        if !(alpha > 0.0 && alpha < 1.0) {
            return Err(RangeTreeError::InvalidAlpha(alpha));
        }
        Ok(Self { primary: PrimaryTree::new(alpha), last_visited: 0 })
    }

    /// Builds a balanced tree over `points` in one pass.
    ///
    /// # Errors
    /// Returns [`RangeTreeError::InvalidAlpha`] unless `0 < alpha < 1`.
    pub fn from_points<I>(points: I, alpha: f64) -> Result<Self, RangeTreeError>
    where
        I: IntoIterator<Item = Point<T>>,
    {
        let mut tree = Self::new(alpha)?;
        let points_by_y = order_stats::sorted_by_axis(points.into_iter().collect(), Axis::Y);
        let mut visited = 0;
        tree.primary = PrimaryTree::from_sorted_by_y(points_by_y, alpha, &mut visited);
        tree.last_visited = visited;
        Ok(tree)
    }

    pub const fn alpha(&self) -> f64 {
        self.primary.alpha()
    }

    /// Number of stored points, duplicates included.
    pub fn len(&self) -> usize {
        self.primary.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.primary.is_empty()
    }

    /// Height of the primary tree in nodes.
    pub fn height(&self) -> usize {
        self.primary.height()
    }

    /// Inserts a point. Duplicates are kept.
    pub fn insert(&mut self, point: Point<T>) {
        let mut visited = 0;
        self.primary.insert(point, &mut visited);
        self.last_visited = visited;
    }

    /// Counts points `p` with `low.x <= p.x <= high.x` and
    /// `low.y <= p.y <= high.y`.
    ///
    /// A corner pair with `low` above `high` on either coordinate describes
    /// an empty rectangle and counts 0.
    pub fn range_count(&self, low: &Point<T>, high: &Point<T>) -> usize {
        self.range_count_rect(&Rectangle::new(low.clone(), high.clone()))
    }

    pub fn range_count_rect(&self, rect: &Rectangle<T>) -> usize {
        self.count_with_visits(rect).0
    }

    /// Same as [`Self::range_count`], recording the number of visited nodes
    /// for [`Self::last_visited`].
    pub fn range_count_traced(&mut self, low: &Point<T>, high: &Point<T>) -> usize {
        let (count, visited) = self.count_with_visits(&Rectangle::new(low.clone(), high.clone()));
        self.last_visited = visited;
        count
    }

    /// Nodes visited by the last insertion, bulk load or traced query,
    /// nested secondary-tree work and rebuilds included.
    pub const fn last_visited(&self) -> u64 {
        self.last_visited
    }

    /// Stored points in `x` order.
    pub fn points(&self) -> Vec<Point<T>> {
        self.primary.points()
    }

    /// Removes every point; the balance factor is kept.
    pub fn clear(&mut self) {
        self.primary.clear();
        self.last_visited = 0;
    }

    /// Checks every structural invariant of both levels.
    ///
    /// # Errors
    /// Returns [`RangeTreeError::InvariantViolation`] describing the first
    /// broken invariant found.
    pub fn validate(&self) -> Result<(), RangeTreeError> {
        self.primary.validate()
    }

    fn count_with_visits(&self, rect: &Rectangle<T>) -> (usize, u64) {
        if !rect.is_valid() {
            return (0, 0);
        }
        let mut visited = 0;
        let count = self.primary.count_in(rect, &mut visited);
        (count, visited)
    }
}
