// src/core/indexing/range_tree/tree/query.rs

//! Orthogonal range counting by canonical decomposition.
//!
//! The search descends to the split node, the first node whose key lies
//! inside the query interval on this tree's coordinate. From there the low
//! bound is swept down the left child and the high bound down the right
//! child. Each sweep step that stays inside the interval hands its inner
//! child over as a canonical subtree, which [`Level::canonical_count`]
//! resolves without further descent on this coordinate.

use super::BbTree;
use crate::core::geometry::{Coord, Rectangle};
use crate::core::indexing::range_tree::level::Level;
use crate::core::indexing::range_tree::node::{Node, NodeId};

impl<T: Coord, L: Level<T>> BbTree<T, L> {
    /// Counts the stored points inside `rect`, bounds inclusive.
    pub(crate) fn count_in(&self, rect: &Rectangle<T>, visited: &mut u64) -> usize {
        let (low, high) = rect.bounds(L::AXIS);
        let mut current = self.root;
        while let Some(id) = current {
            *visited += 1;
            let node = &self.arena[id];
            let key = node.key();
            if key < low {
                current = node.right;
            } else if key > high {
                current = node.left;
            } else {
                let mut count = Self::count_own(node, rect, visited);
                if let Some(left) = node.left {
                    count += self.sweep_low(left, rect, visited);
                }
                if let Some(right) = node.right {
                    count += self.sweep_high(right, rect, visited);
                }
                return count;
            }
        }
        0
    }

    /// Left-hand sweep below the split node: only the low bound can cut.
    fn sweep_low(&self, start: NodeId, rect: &Rectangle<T>, visited: &mut u64) -> usize {
        let (low, _) = rect.bounds(L::AXIS);
        let mut count = 0;
        let mut current = Some(start);
        while let Some(id) = current {
            *visited += 1;
            let node = &self.arena[id];
            if node.key() < low {
                current = node.right;
            } else {
                count += Self::count_own(node, rect, visited);
                if let Some(right) = node.right {
                    count += self.count_canonical(right, rect, visited);
                }
                current = node.left;
            }
        }
        count
    }

    /// Right-hand sweep below the split node: only the high bound can cut.
    fn sweep_high(&self, start: NodeId, rect: &Rectangle<T>, visited: &mut u64) -> usize {
        let (_, high) = rect.bounds(L::AXIS);
        let mut count = 0;
        let mut current = Some(start);
        while let Some(id) = current {
            *visited += 1;
            let node = &self.arena[id];
            if node.key() > high {
                current = node.left;
            } else {
                count += Self::count_own(node, rect, visited);
                if let Some(left) = node.left {
                    count += self.count_canonical(left, rect, visited);
                }
                current = node.right;
            }
        }
        count
    }

    fn count_canonical(&self, id: NodeId, rect: &Rectangle<T>, visited: &mut u64) -> usize {
        let node = &self.arena[id];
        L::canonical_count(&node.augment, node.size, rect, visited)
    }

    /// The node's own point and its siblings, tested on both coordinates.
    fn count_own(node: &Node<T, L>, rect: &Rectangle<T>, visited: &mut u64) -> usize {
        *visited += node.siblings.len() as u64;
        usize::from(rect.contains_point(&node.point))
            + node.siblings.iter().filter(|p| rect.contains_point(p)).count()
    }
}
