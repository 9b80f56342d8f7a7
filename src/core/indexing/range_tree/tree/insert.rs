// src/core/indexing/range_tree/tree/insert.rs

use std::cmp::Ordering;

use super::BbTree;
use crate::core::geometry::{Coord, Point};
use crate::core::indexing::order_stats::cmp_on;
use crate::core::indexing::range_tree::level::Level;
use crate::core::indexing::range_tree::node::{Node, NodeId, Side};

impl<T: Coord, L: Level<T>> BbTree<T, L> {
    /// Inserts `point`, then rebuilds every ancestor found out of balance on
    /// the walk to the root. Every node visited on the way down also receives the point
    /// in its augmentation before the branch is chosen.
    pub(crate) fn insert(&mut self, point: Point<T>, visited: &mut u64) {
        let Some(root) = self.root else {
            *visited += 1;
            let augment = L::leaf_augment(&point, self.alpha);
            self.root = Some(self.arena.alloc(Node::new(point, augment)));
            return;
        };

        let mut current = Some(root);
        let mut parent = root;
        while let Some(id) = current {
            *visited += 1;
            parent = id;
            let node = &mut self.arena[id];
            L::insert_augment(&mut node.augment, &point, visited);
            match cmp_on(L::AXIS, &point, &node.point) {
                Ordering::Greater => {
                    node.size += 1;
                    current = node.right;
                }
                Ordering::Less => {
                    node.size += 1;
                    current = node.left;
                }
                Ordering::Equal => {
                    self.add_middle_sibling(id, point);
                    // the bucket keeps the BST shape, but ancestors grew
                    self.rebalance_from(id, visited);
                    return;
                }
            }
        }

        let side = match cmp_on(L::AXIS, &self.arena[parent].point, &point) {
            Ordering::Greater => Side::Left,
            _ => Side::Right,
        };
        let augment = L::leaf_augment(&point, self.alpha);
        let leaf = self.arena.alloc(Node::new(point, augment));
        // the parent already counted the leaf on the way down
        self.arena[leaf].parent = Some(parent);
        *self.arena[parent].child_slot_mut(side) = Some(leaf);

        self.rebalance_from(parent, visited);
    }

    /// Walks from `start` to the root, rebuilding every node that violates
    /// the balance criterion.
    fn rebalance_from(&mut self, start: NodeId, visited: &mut u64) {
        let mut current = Some(start);
        while let Some(id) = current {
            current = if self.is_balanced(id) {
                self.arena[id].parent
            } else {
                self.rebuild(id, visited).and_then(|new_root| self.arena[new_root].parent)
            };
        }
    }
}
