// src/core/indexing/range_tree/tree/validate.rs

use super::BbTree;
use crate::core::geometry::Coord;
use crate::core::indexing::range_tree::error::RangeTreeError;
use crate::core::indexing::range_tree::level::Level;
use crate::core::indexing::range_tree::node::{NodeId, Side};

impl<T: Coord, L: Level<T>> BbTree<T, L> {
    /// Checks every structural invariant of this tree and, through the
    /// level's augmentation, of every nested tree.
    ///
    /// Cost is quadratic in the worst case; this is for tests and debugging
    /// runs, not for production call paths.
    pub(crate) fn validate(&self) -> Result<(), RangeTreeError> {
        let Some(root) = self.root() else {
            if self.arena.live_nodes() != 0 {
                return Err(RangeTreeError::invariant(format!(
                    "empty {:?}-keyed tree still holds {} nodes",
                    L::AXIS,
                    self.arena.live_nodes()
                )));
            }
            return Ok(());
        };

        if self.arena.get(root).is_none() {
            return Err(RangeTreeError::invariant("root id points at a released slot"));
        }
        if let Some(parent) = self.node(root).parent {
            return Err(RangeTreeError::invariant(format!(
                "root has parent link {parent:?}"
            )));
        }

        let nodes = self.nodes_in_order(root);
        if nodes.len() != self.arena.live_nodes() {
            return Err(RangeTreeError::invariant(format!(
                "{} nodes reachable but {} allocated",
                nodes.len(),
                self.arena.live_nodes()
            )));
        }

        for pair in nodes.windows(2) {
            let (a, b) = (self.node(pair[0]), self.node(pair[1]));
            if a.key() >= b.key() {
                return Err(RangeTreeError::invariant(format!(
                    "keys out of order: {:?} before {:?}",
                    a.point, b.point
                )));
            }
        }

        nodes.into_iter().try_for_each(|id| self.validate_node(id))
    }

    fn validate_node(&self, id: NodeId) -> Result<(), RangeTreeError> {
        let node = self.node(id);

        for side in [Side::Left, Side::Right] {
            if let Some(child) = node.child(side) {
                if self.node(child).parent != Some(id) {
                    return Err(RangeTreeError::invariant(format!(
                        "{side:?} child of {:?} does not point back at it",
                        node.point
                    )));
                }
            }
        }

        let expected = 1 + node.siblings.len() + self.size_of(node.left) + self.size_of(node.right);
        if node.size != expected {
            return Err(RangeTreeError::invariant(format!(
                "node {:?} records size {} but holds {}",
                node.point, node.size, expected
            )));
        }

        if let Some(stray) = node.siblings.iter().find(|p| p.coord(L::AXIS) != node.key()) {
            return Err(RangeTreeError::invariant(format!(
                "sibling {stray:?} does not share the key of {:?}",
                node.point
            )));
        }

        if !self.is_balanced(id) {
            return Err(RangeTreeError::invariant(format!(
                "node {:?} out of balance: left {}, right {}, size {}, alpha {}",
                node.point,
                self.size_of(node.left),
                self.size_of(node.right),
                node.size,
                self.alpha
            )));
        }

        L::validate_augment(&node.augment, &self.points_in_order(id))
    }
}
