//! Cursors: positions in the in-order sequence of one particular tree.
//!
//! A [`Cursor`] is a plain `Copy` handle. It doesn't borrow the tree, so a caller can hold on to
//! one while inserting more values (positions never move) or while overwriting the value it
//! points at through [`IndexMut`][std::ops::IndexMut].
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree: OrderedTree<_> = [1, 0].into_iter().collect();
//!
//! let mut cursor = tree.begin();
//! assert_eq!(tree[cursor], 0);
//!
//! cursor = tree.successor(cursor);
//! assert_eq!(tree[cursor], 1);
//!
//! cursor = tree.successor(cursor);
//! assert_eq!(cursor, tree.end());
//!
//! // Nothing stops us from breaking the ordering through a cursor...
//! let begin = tree.begin();
//! tree[begin] = 2;
//!
//! // ...but it can be detected.
//! assert!(!tree.check_sorting_invariant());
//! ```

use std::iter::FusedIterator;
use std::ops::{Index, IndexMut};
use std::sync::atomic::{self, AtomicU64};

use crate::node::NodeId;
use crate::tree::OrderedTree;

static NEXT_TREE_ID: AtomicU64 = AtomicU64::new(0);

/// Identity of a single tree. Node handles alone can't tell trees apart (a clone reuses every
/// handle of its source) so cursors carry this too.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct TreeId(u64);

impl TreeId {
    pub(crate) fn fresh() -> Self {
        Self(NEXT_TREE_ID.fetch_add(1, atomic::Ordering::Relaxed))
    }
}

/// A position in an [`OrderedTree`]: either one of its values or the position one past the last
/// value ([`OrderedTree::end`]).
///
/// Two cursors are equal only when they name the same node of the same tree, or are both the end
/// of the same tree. Values are never compared, so two trees holding the same values (a tree and
/// its clone, say) have no cursors in common.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cursor {
    tree: TreeId,
    node: Option<NodeId>,
}

impl Cursor {
    /// Returns `true` if this is the past-the-end position of its tree.
    pub fn is_end(&self) -> bool {
        self.node.is_none()
    }
}

impl<T> OrderedTree<T> {
    pub(crate) fn cursor(&self, node: Option<NodeId>) -> Cursor {
        Cursor {
            tree: self.id,
            node,
        }
    }

    /// The node `cursor` points at, if it is a non-end cursor of this tree.
    fn node_of(&self, cursor: Cursor) -> Option<NodeId> {
        if cursor.tree == self.id {
            cursor.node
        } else {
            None
        }
    }

    /// A cursor to the first value in order. Same as [`min_element`][OrderedTree::min_element].
    pub fn begin(&self) -> Cursor {
        self.min_element()
    }

    /// The past-the-end cursor. There is exactly one per tree and it never points at a value.
    pub fn end(&self) -> Cursor {
        self.cursor(None)
    }

    /// Moves `cursor` to the next value in order, or to [`end`][OrderedTree::end] after the last
    /// one. The end cursor stays where it is.
    ///
    /// This follows the shape of the tree rather than comparing values, so it still visits every
    /// node after a value has been overwritten out of order.
    ///
    /// ## Panics
    ///
    /// When `cursor` belongs to a different tree.
    pub fn successor(&self, cursor: Cursor) -> Cursor {
        assert_eq!(cursor.tree, self.id, "cursor belongs to a different tree");
        self.cursor(cursor.node.and_then(|id| self.nodes.successor(id)))
    }

    /// The value at `cursor`, or `None` for an end cursor or a cursor from another tree.
    pub fn get(&self, cursor: Cursor) -> Option<&T> {
        self.node_of(cursor).map(|id| &self.nodes.node(id).value)
    }

    /// Mutable access to the value at `cursor`, or `None` for an end cursor or a cursor from
    /// another tree.
    ///
    /// The tree does not re-sort itself afterwards. Writing a value that doesn't fit the node's
    /// position breaks the ordering that [`find`][OrderedTree::find] relies on; use
    /// [`check_sorting_invariant`][OrderedTree::check_sorting_invariant] to detect it.
    pub fn get_mut(&mut self, cursor: Cursor) -> Option<&mut T> {
        let id = self.node_of(cursor)?;
        Some(&mut self.nodes.node_mut(id).value)
    }

    /// An iterator over the values in order.
    ///
    /// Calling this again always starts over from the first value.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            tree: self,
            next: self.begin().node,
            remaining: self.len(),
        }
    }

    #[track_caller]
    fn invalid_cursor(&self, cursor: Cursor) -> ! {
        if cursor.tree != self.id {
            panic!("cursor belongs to a different tree");
        }
        panic!("cannot dereference the end cursor");
    }
}

/// ## Panics
///
/// When `cursor` is an end cursor or belongs to a different tree.
impl<T> Index<Cursor> for OrderedTree<T> {
    type Output = T;

    fn index(&self, cursor: Cursor) -> &T {
        let Some(id) = self.node_of(cursor) else {
            self.invalid_cursor(cursor)
        };
        &self.nodes.node(id).value
    }
}

/// ## Panics
///
/// When `cursor` is an end cursor or belongs to a different tree.
impl<T> IndexMut<Cursor> for OrderedTree<T> {
    fn index_mut(&mut self, cursor: Cursor) -> &mut T {
        let Some(id) = self.node_of(cursor) else {
            self.invalid_cursor(cursor)
        };
        &mut self.nodes.node_mut(id).value
    }
}

/// In-order iterator over the values of an [`OrderedTree`], created by [`OrderedTree::iter`].
pub struct Iter<'a, T> {
    tree: &'a OrderedTree<T>,
    next: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            next: self.next,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let node = self.tree.nodes.node(id);
        self.next = self.tree.nodes.successor(id);
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a OrderedTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
