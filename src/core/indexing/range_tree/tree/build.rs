// src/core/indexing/range_tree/tree/build.rs

//! Construction of perfectly balanced subtrees, used for bulk loading and
//! for rebuilding subtrees that fell out of balance.

use log::debug;

use super::BbTree;
use crate::core::geometry::{Axis, Coord, Point};
use crate::core::indexing::order_stats;
use crate::core::indexing::range_tree::level::{Level, Split};
use crate::core::indexing::range_tree::node::{Node, NodeId, Side};

impl<T: Coord, L: Level<T>> BbTree<T, L> {
    /// Builds a detached balanced subtree over `points_by_y` and returns its
    /// root, or `None` for empty input.
    ///
    /// The input must be sorted on `y` whatever this tree's key is: y-keyed
    /// levels split it by position, x-keyed levels hand the same order down
    /// to every node's secondary tree.
    pub(crate) fn build(&mut self, points_by_y: Vec<Point<T>>, visited: &mut u64) -> Option<NodeId> {
        if points_by_y.len() == 1 {
            let point = points_by_y.into_iter().next()?;
            let augment = L::leaf_augment(&point, self.alpha);
            return Some(self.arena.alloc(Node::new(point, augment)));
        }
        if points_by_y.is_empty() {
            return None;
        }

        let augment = L::build_augment(&points_by_y, self.alpha, visited);
        let Split { pivot, siblings, less, greater } = L::split(points_by_y)?;

        let id = self.arena.alloc(Node::new(pivot, augment));
        self.set_middle_siblings(id, siblings);
        let left = self.build(less, visited);
        self.set_child(id, Side::Left, left);
        let right = self.build(greater, visited);
        self.set_child(id, Side::Right, right);
        Some(id)
    }

    /// Rebuilds the subtree rooted at `id` into balanced shape and splices it
    /// into the slot the old subtree occupied. Returns the new subtree root.
    pub(crate) fn rebuild(&mut self, id: NodeId, visited: &mut u64) -> Option<NodeId> {
        let parent = self.arena[id].parent;
        let mut points = self.points_in_order(id);
        order_stats::sort_by_axis(&mut points, Axis::Y);
        let count = points.len();

        let new_root = self.build(points, visited)?;
        *visited += count as u64;

        match parent.and_then(|p| self.arena[p].side_of(id).map(|side| (p, side))) {
            Some((p, side)) => self.set_child(p, side, Some(new_root)),
            None => {
                self.arena[new_root].parent = None;
                self.root = Some(new_root);
            }
        }
        self.release_subtree(id);

        debug!("rebuilt {:?}-keyed subtree of {} points", L::AXIS, count);
        Some(new_root)
    }
}
