// src/core/indexing/range_tree/tree/mod.rs

//! Weight-balanced (BB[α]) search tree shared by both range tree levels.

mod build;
mod insert;
mod query;
mod validate;

use super::level::Level;
use super::node::{Node, NodeArena, NodeId, Side};
use crate::core::geometry::{Coord, Point};

/// Child-size bound of a balanced node for a given `alpha`.
///
/// `alpha` and `1 - alpha` describe the same balance class: below one half
/// the bound is read as a lower limit on the lighter child, which is the
/// same constraint as an upper limit of `1 - alpha` on the heavier one.
pub(crate) fn balance_threshold(alpha: f64) -> f64 {
    alpha.max(1.0 - alpha)
}

#[derive(Debug)]
pub(crate) struct BbTree<T: Coord, L: Level<T>> {
    pub(super) arena: NodeArena<T, L>,
    pub(super) root: Option<NodeId>,
    pub(super) alpha: f64,
}

impl<T: Coord, L: Level<T>> BbTree<T, L> {
    /// Creates an empty tree. `alpha` must already be validated.
    pub(crate) const fn new(alpha: f64) -> Self {
        Self { arena: NodeArena::new(), root: None, alpha }
    }

    /// Builds a balanced tree over points sorted on `y`.
    pub(crate) fn from_sorted_by_y(points_by_y: Vec<Point<T>>, alpha: f64, visited: &mut u64) -> Self {
        let mut tree = Self::new(alpha);
        tree.root = tree.build(points_by_y, visited);
        tree
    }

    pub(crate) const fn alpha(&self) -> f64 {
        self.alpha
    }

    pub(crate) const fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node<T, L> {
        &self.arena[id]
    }

    /// Number of points stored.
    pub(crate) fn len(&self) -> usize {
        self.size_of(self.root)
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Drops every node and keeps the balance factor.
    pub(crate) fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    pub(super) fn size_of(&self, id: Option<NodeId>) -> usize {
        id.map_or(0, |id| self.arena[id].size)
    }

    /// BB[α] criterion: neither child holds more than the threshold share of
    /// the node's subtree. Leaves are balanced whatever their sibling count.
    pub(crate) fn is_balanced(&self, id: NodeId) -> bool {
        let node = self.node(id);
        if node.is_leaf() {
            return true;
        }
        let bound = balance_threshold(self.alpha) * node.size as f64;
        self.size_of(node.left) as f64 <= bound && self.size_of(node.right) as f64 <= bound
    }

    /// Replaces a child, moving `id`'s size by the difference and pointing
    /// the new child back at `id`. The old child is not touched.
    pub(crate) fn set_child(&mut self, id: NodeId, side: Side, child: Option<NodeId>) {
        let old_size = self.size_of(self.arena[id].child(side));
        let new_size = self.size_of(child);
        if let Some(child) = child {
            self.arena[child].parent = Some(id);
        }
        let node = &mut self.arena[id];
        *node.child_slot_mut(side) = child;
        node.size = node.size - old_size + new_size;
    }

    /// Replaces the middle-sibling bucket.
    pub(crate) fn set_middle_siblings(&mut self, id: NodeId, siblings: Vec<Point<T>>) {
        let node = &mut self.arena[id];
        node.size = node.size - node.siblings.len() + siblings.len();
        node.siblings = siblings;
    }

    pub(crate) fn add_middle_sibling(&mut self, id: NodeId, point: Point<T>) {
        let node = &mut self.arena[id];
        node.siblings.push(point);
        node.size += 1;
    }

    /// Points of `id`'s subtree: left subtree, the node, its siblings, right
    /// subtree.
    pub(crate) fn points_in_order(&self, id: NodeId) -> Vec<Point<T>> {
        let mut points = Vec::with_capacity(self.arena[id].size);
        for node_id in self.nodes_in_order(id) {
            let node = &self.arena[node_id];
            points.push(node.point.clone());
            points.extend(node.siblings.iter().cloned());
        }
        points
    }

    /// Node ids of `id`'s subtree in key order.
    pub(crate) fn nodes_in_order(&self, id: NodeId) -> Vec<NodeId> {
        let mut ordered = Vec::new();
        let mut stack = Vec::new();
        let mut current = Some(id);
        while current.is_some() || !stack.is_empty() {
            while let Some(node_id) = current {
                stack.push(node_id);
                current = self.arena[node_id].left;
            }
            if let Some(node_id) = stack.pop() {
                ordered.push(node_id);
                current = self.arena[node_id].right;
            }
        }
        ordered
    }

    /// Every stored point, in key order.
    pub(crate) fn points(&self) -> Vec<Point<T>> {
        self.root.map_or_else(Vec::new, |root| self.points_in_order(root))
    }

    /// Releases every node of `id`'s subtree, dropping nested trees with them.
    pub(super) fn release_subtree(&mut self, id: NodeId) {
        let mut pending = vec![id];
        while let Some(node_id) = pending.pop() {
            if let Some(node) = self.arena.release(node_id) {
                pending.extend(node.left);
                pending.extend(node.right);
            }
        }
    }

    /// Height in nodes, 0 for an empty tree.
    pub(crate) fn height(&self) -> usize {
        let mut height = 0;
        let mut level: Vec<NodeId> = self.root.into_iter().collect();
        while !level.is_empty() {
            height += 1;
            level = level
                .iter()
                .flat_map(|&id| {
                    let node = &self.arena[id];
                    node.left.into_iter().chain(node.right)
                })
                .collect();
        }
        height
    }
}
