//! Node storage for [`OrderedTree`][crate::OrderedTree].
//!
//! Every node lives in a single arena owned by its tree and refers to its children and its parent
//! by arena index. Only the arena owns nodes: a child link is "owning" in the sense that the node
//! is reachable from the root through it, while the parent link is a plain back-reference used to
//! climb out of a finished subtree. Dropping the arena releases every node at once, so no link is
//! ever followed during destruction.

use generational_arena::{Arena, Index};

/// Handle to a node inside a tree's arena. Nodes are never removed so a handle stays valid for as
/// long as the tree that produced it.
pub(crate) type NodeId = Index;

/// Which child slot of a parent a node hangs from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

#[derive(Clone, Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
    pub(crate) parent: Option<NodeId>,
}

impl<T> Node<T> {
    fn new(value: T, parent: Option<NodeId>) -> Self {
        Self {
            value,
            left: None,
            right: None,
            parent,
        }
    }

    pub(crate) fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// The arena holding every node of one tree.
///
/// Cloning the arena copies every node while keeping every index (and therefore every child and
/// parent link) pointing at the copied nodes, which is exactly a deep copy of the tree shape.
#[derive(Clone, Debug)]
pub(crate) struct Nodes<T> {
    arena: Arena<Node<T>>,
}

impl<T> Nodes<T> {
    pub(crate) fn new() -> Self {
        Self {
            arena: Arena::new(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.arena.len()
    }

    /// Looks up a node by a handle this arena handed out.
    ///
    /// ## Panics
    ///
    /// When `id` came from a different arena. Handles never dangle otherwise since nodes are only
    /// ever added.
    pub(crate) fn node(&self, id: NodeId) -> &Node<T> {
        &self.arena[id]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        &mut self.arena[id]
    }

    /// Allocates a parentless node. Only used for the root of an empty tree.
    pub(crate) fn push_root(&mut self, value: T) -> NodeId {
        self.arena.insert(Node::new(value, None))
    }

    /// Allocates a node for `value` and hangs it from the empty `side` slot of `parent`.
    pub(crate) fn attach(&mut self, parent: NodeId, side: Side, value: T) -> NodeId {
        let child = self.arena.insert(Node::new(value, Some(parent)));
        let parent = &mut self.arena[parent];
        debug_assert!(parent.child(side).is_none(), "attaching over a live child");
        match side {
            Side::Left => parent.left = Some(child),
            Side::Right => parent.right = Some(child),
        }
        child
    }

    /// Follows left children from `id` until there are none left.
    pub(crate) fn leftmost(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.node(id).left {
            id = left;
        }
        id
    }

    /// Follows right children from `id` until there are none left.
    pub(crate) fn rightmost(&self, mut id: NodeId) -> NodeId {
        while let Some(right) = self.node(id).right {
            id = right;
        }
        id
    }

    /// The node visited right after `id` in an in-order walk, if any.
    ///
    /// With a right subtree that is the subtree's leftmost node. Without one we climb until we
    /// come up out of a left child; that parent is next. Climbing off the root means `id` was the
    /// last node.
    pub(crate) fn successor(&self, id: NodeId) -> Option<NodeId> {
        let node = self.node(id);
        if let Some(right) = node.right {
            return Some(self.leftmost(right));
        }

        let mut child = id;
        let mut parent = node.parent;
        while let Some(p) = parent {
            let parent_node = self.node(p);
            if parent_node.left == Some(child) {
                return Some(p);
            }
            child = p;
            parent = parent_node.parent;
        }
        None
    }
}
