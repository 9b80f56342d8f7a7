// src/core/indexing/range_tree/level.rs

//! The two levels of a 2D range tree.
//!
//! A [`BbTree`] is generic over its level. The level fixes which coordinate
//! keys the tree and what every node carries for the points beneath it:
//! x-keyed nodes own a y-keyed [`SecondaryTree`] over their subtree, y-keyed
//! nodes carry nothing. Nesting stops there, so the two-level shape is
//! encoded in the types rather than checked at run time.

use std::cmp::Ordering;
use std::fmt::Debug;

use super::error::RangeTreeError;
use super::tree::BbTree;
use crate::core::geometry::{Axis, Coord, Point, Rectangle};
use crate::core::indexing::order_stats;

/// Tree ordered on `x` whose nodes own a secondary tree.
pub(crate) type PrimaryTree<T> = BbTree<T, ByX>;

/// Tree ordered on `y`, owned by one primary node.
pub(crate) type SecondaryTree<T> = BbTree<T, ByY>;

/// Output of [`Level::split`]: the point promoted to the new node, the other
/// points sharing its key, and the strictly smaller and larger remainders.
/// Both remainders keep the y-order of the input.
#[derive(Debug)]
pub(crate) struct Split<T> {
    pub(crate) pivot: Point<T>,
    pub(crate) siblings: Vec<Point<T>>,
    pub(crate) less: Vec<Point<T>>,
    pub(crate) greater: Vec<Point<T>>,
}

pub(crate) trait Level<T: Coord>: Debug + Sized {
    /// Coordinate the nodes of this level are keyed on.
    const AXIS: Axis;

    /// Per-node structure describing the node's whole subtree.
    type Augment: Debug;

    /// Augmentation of a freshly inserted single-point leaf.
    fn leaf_augment(point: &Point<T>, alpha: f64) -> Self::Augment;

    /// Augmentation of a node built over `points_by_y`, which must be sorted
    /// on `y` and hold every point of the node's subtree.
    fn build_augment(points_by_y: &[Point<T>], alpha: f64, visited: &mut u64) -> Self::Augment;

    /// Mirrors an insertion passing through a node into its augmentation.
    fn insert_augment(augment: &mut Self::Augment, point: &Point<T>, visited: &mut u64);

    /// Counts the points of a canonical subtree inside `rect`. Every point
    /// of the subtree already satisfies `rect` on [`Self::AXIS`].
    fn canonical_count(
        augment: &Self::Augment,
        subtree_size: usize,
        rect: &Rectangle<T>,
        visited: &mut u64,
    ) -> usize;

    /// Chooses the split point of a build over y-sorted, non-empty input.
    fn split(points_by_y: Vec<Point<T>>) -> Option<Split<T>>;

    /// Checks an augmentation against the multiset of its node's subtree.
    fn validate_augment(
        augment: &Self::Augment,
        subtree_points: &[Point<T>],
    ) -> Result<(), RangeTreeError>;
}

/// Primary level, keyed on `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ByX;

/// Secondary level, keyed on `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ByY;

impl<T: Coord> Level<T> for ByX {
    const AXIS: Axis = Axis::X;
    type Augment = SecondaryTree<T>;

    fn leaf_augment(point: &Point<T>, alpha: f64) -> Self::Augment {
        let mut secondary = SecondaryTree::new(alpha);
        secondary.insert(point.clone(), &mut 0);
        secondary
    }

    fn build_augment(points_by_y: &[Point<T>], alpha: f64, visited: &mut u64) -> Self::Augment {
        *visited += points_by_y.len() as u64;
        SecondaryTree::from_sorted_by_y(points_by_y.to_vec(), alpha, visited)
    }

    fn insert_augment(augment: &mut Self::Augment, point: &Point<T>, visited: &mut u64) {
        augment.insert(point.clone(), visited);
    }

    fn canonical_count(
        augment: &Self::Augment,
        _subtree_size: usize,
        rect: &Rectangle<T>,
        visited: &mut u64,
    ) -> usize {
        // x is settled for the whole subtree; the y-keyed tree resolves the rest
        augment.count_in(rect, visited)
    }

    fn split(points_by_y: Vec<Point<T>>) -> Option<Split<T>> {
        let median = order_stats::median_by_axis(&points_by_y, Axis::X)?;

        let mut pivot = None;
        let mut siblings = Vec::new();
        let mut less = Vec::new();
        let mut greater = Vec::new();
        for point in points_by_y {
            match point.x.cmp(&median.x) {
                Ordering::Less => less.push(point),
                Ordering::Greater => greater.push(point),
                Ordering::Equal if pivot.is_none() => pivot = Some(point),
                Ordering::Equal => siblings.push(point),
            }
        }

        pivot.map(|pivot| Split { pivot, siblings, less, greater })
    }

    fn validate_augment(
        augment: &Self::Augment,
        subtree_points: &[Point<T>],
    ) -> Result<(), RangeTreeError> {
        if augment.len() != subtree_points.len() {
            return Err(RangeTreeError::invariant(format!(
                "secondary tree holds {} points, its primary subtree holds {}",
                augment.len(),
                subtree_points.len()
            )));
        }

        let mut mirrored = augment.points();
        let mut expected = subtree_points.to_vec();
        mirrored.sort();
        expected.sort();
        if mirrored != expected {
            return Err(RangeTreeError::invariant(
                "secondary tree point multiset differs from its primary subtree",
            ));
        }

        augment.validate()
    }
}

impl<T: Coord> Level<T> for ByY {
    const AXIS: Axis = Axis::Y;
    type Augment = ();

    fn leaf_augment(_point: &Point<T>, _alpha: f64) -> Self::Augment {}

    fn build_augment(_points_by_y: &[Point<T>], _alpha: f64, _visited: &mut u64) -> Self::Augment {}

    fn insert_augment(_augment: &mut Self::Augment, _point: &Point<T>, _visited: &mut u64) {}

    fn canonical_count(
        _augment: &Self::Augment,
        subtree_size: usize,
        _rect: &Rectangle<T>,
        visited: &mut u64,
    ) -> usize {
        // both coordinates are settled, the whole subtree counts
        *visited += 1;
        subtree_size
    }

    fn split(points_by_y: Vec<Point<T>>) -> Option<Split<T>> {
        debug_assert!(order_stats::is_sorted_by_axis(&points_by_y, Axis::Y));
        let mid = points_by_y.len() / 2;
        let key = points_by_y.get(mid)?.y.clone();

        // the run of keys equal to the midpoint's is contiguous around it
        let lo = points_by_y.partition_point(|p| p.y < key);
        let hi = points_by_y.partition_point(|p| p.y <= key);

        let mut less = points_by_y;
        let greater = less.split_off(hi);
        let mut siblings = less.split_off(lo);
        let pivot = siblings.swap_remove(mid - lo);

        Some(Split { pivot, siblings, less, greater })
    }

    fn validate_augment(
        _augment: &Self::Augment,
        _subtree_points: &[Point<T>],
    ) -> Result<(), RangeTreeError> {
        Ok(())
    }
}
