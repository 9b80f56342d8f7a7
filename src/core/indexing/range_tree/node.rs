// src/core/indexing/range_tree/node.rs

//! Arena-allocated nodes of a weight-balanced tree.
//!
//! Nodes refer to each other by [`NodeId`] rather than by pointer. Replacing
//! a subtree writes a new id into the parent's child slot and releases the
//! old ids back to the arena's free list.

use std::ops::{Index, IndexMut};

use super::level::Level;
use crate::core::geometry::{Coord, Point};

/// Stable index of a node slot within one tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct NodeId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

/// A tree node.
///
/// `siblings` holds the points whose key equals this node's key; they never
/// become nodes of their own. `size` counts this node, its siblings and
/// everything below it.
#[derive(Debug)]
pub(crate) struct Node<T: Coord, L: Level<T>> {
    pub(crate) point: Point<T>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
    pub(crate) siblings: Vec<Point<T>>,
    pub(crate) size: usize,
    pub(crate) augment: L::Augment,
}

impl<T: Coord, L: Level<T>> Node<T, L> {
    pub(crate) fn new(point: Point<T>, augment: L::Augment) -> Self {
        Self {
            point,
            parent: None,
            left: None,
            right: None,
            siblings: Vec::new(),
            size: 1,
            augment,
        }
    }

    /// The coordinate this node is keyed on.
    pub(crate) fn key(&self) -> &T {
        self.point.coord(L::AXIS)
    }

    pub(crate) const fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub(crate) const fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) fn child_slot_mut(&mut self, side: Side) -> &mut Option<NodeId> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Which slot holds `child`, if any.
    pub(crate) fn side_of(&self, child: NodeId) -> Option<Side> {
        if self.left == Some(child) {
            Some(Side::Left)
        } else if self.right == Some(child) {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Slot storage for the nodes of one tree.
#[derive(Debug)]
pub(crate) struct NodeArena<T: Coord, L: Level<T>> {
    slots: Vec<Option<Node<T, L>>>,
    free: Vec<NodeId>,
    live: usize,
}

impl<T: Coord, L: Level<T>> NodeArena<T, L> {
    pub(crate) const fn new() -> Self {
        Self { slots: Vec::new(), free: Vec::new(), live: 0 }
    }

    /// Stores `node`, reusing a released slot when one is available.
    pub(crate) fn alloc(&mut self, node: Node<T, L>) -> NodeId {
        self.live += 1;
        match self.free.pop() {
            Some(id) => {
                self.slots[id.0] = Some(node);
                id
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Takes the node out of its slot and puts the slot on the free list.
    pub(crate) fn release(&mut self, id: NodeId) -> Option<Node<T, L>> {
        let node = self.slots.get_mut(id.0)?.take()?;
        self.free.push(id);
        self.live -= 1;
        Some(node)
    }

    /// Number of occupied slots.
    pub(crate) const fn live_nodes(&self) -> usize {
        self.live
    }

    pub(crate) fn get(&self, id: NodeId) -> Option<&Node<T, L>> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.live = 0;
    }
}

impl<T: Coord, L: Level<T>> Index<NodeId> for NodeArena<T, L> {
    type Output = Node<T, L>;

    fn index(&self, id: NodeId) -> &Self::Output {
        match self.slots.get(id.0) {
            Some(Some(node)) => node,
            _ => panic!("dangling node id {}", id.0),
        }
    }
}

impl<T: Coord, L: Level<T>> IndexMut<NodeId> for NodeArena<T, L> {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        match self.slots.get_mut(id.0) {
            Some(Some(node)) => node,
            _ => panic!("dangling node id {}", id.0),
        }
    }
}
