//! The tree itself: construction, insertion and lookups.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&5), tree.end());
//!
//! assert!(tree.insert(5));
//! assert!(tree.insert(7));
//! assert!(tree.insert(3));
//!
//! // Inserting a value that's already present does nothing.
//! assert!(!tree.insert(7));
//! assert_eq!(tree.len(), 3);
//!
//! assert_eq!(tree[tree.min_greater_than(&5)], 7);
//! assert_eq!(tree.min_greater_than(&10), tree.end());
//! ```

use std::cmp::Ordering;
use std::fmt;

use tracing::{instrument, trace};

use crate::cursor::{Cursor, TreeId};
use crate::node::{NodeId, Nodes, Side};

/// An unbalanced Binary Search Tree of distinct values.
///
/// Positions in the tree are named by [`Cursor`]s which stay valid for as long as the tree lives
/// (nothing is ever removed). A cursor can be used to overwrite the value it points at, even in a
/// way that breaks the ordering of the tree; [`check_sorting_invariant`] reports when that has
/// happened.
///
/// [`check_sorting_invariant`]: OrderedTree::check_sorting_invariant
pub struct OrderedTree<T> {
    /// Identity shared by every cursor this tree hands out. Clones get a new one.
    pub(crate) id: TreeId,
    pub(crate) nodes: Nodes<T>,
    pub(crate) root: Option<NodeId>,
}

impl<T> Default for OrderedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Deep copy. The copy has the same shape and values as `self` but shares no nodes with it, and
/// cursors into one never compare equal to cursors into the other.
impl<T> Clone for OrderedTree<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            id: TreeId::fresh(),
            nodes: self.nodes.clone(),
            root: self.root,
        }
    }
}

impl<T> fmt::Debug for OrderedTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedTree")
            .field("len", &self.len())
            .field("height", &self.height())
            .field("values", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

impl<T> FromIterator<T> for OrderedTree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for OrderedTree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> OrderedTree<T> {
    /// Generates a new, empty `OrderedTree`.
    pub fn new() -> Self {
        Self {
            id: TreeId::fresh(),
            nodes: Nodes::new(),
            root: None,
        }
    }

    /// Returns `true` if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of values in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// The number of nodes on the longest path from the root down to a leaf. An empty tree has a
    /// height of 0 and a tree built from strictly increasing values has a height equal to its
    /// length.
    ///
    /// This walks the whole tree.
    #[instrument(level = "trace", skip_all)]
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(NodeId, usize)> =
            self.root.map(|root| (root, 1)).into_iter().collect();

        while let Some((id, depth)) = stack.pop() {
            height = height.max(depth);
            let node = self.nodes.node(id);
            stack.extend(node.left.map(|left| (left, depth + 1)));
            stack.extend(node.right.map(|right| (right, depth + 1)));
        }

        height
    }

    /// Inserts `value` into the tree, returning whether it was added. A value comparing equal to
    /// one already in the tree is not inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    ///
    /// assert!(tree.insert(5));
    /// assert!(!tree.insert(5));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let Some(mut current) = self.root else {
            self.root = Some(self.nodes.push_root(value));
            return true;
        };

        loop {
            let node = self.nodes.node(current);
            let (side, child) = match value.cmp(&node.value) {
                Ordering::Less => (Side::Left, node.left),
                Ordering::Greater => (Side::Right, node.right),
                Ordering::Equal => {
                    trace!(len = self.len(), "value already present, insert ignored");
                    return false;
                }
            };

            match child {
                Some(child) => current = child,
                None => {
                    self.nodes.attach(current, side, value);
                    return true;
                }
            }
        }
    }

    /// Returns a cursor to the node holding a value equal to `value`, or [`end`] if there is none.
    ///
    /// The search descends from the root exactly like [`insert`] does, so after a value has been
    /// overwritten through a cursor only the nodes that descent can still reach are found.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = [5, 10, 15].into_iter().collect();
    /// assert_eq!(tree.find(&5), tree.begin());
    /// assert_eq!(tree.find(&42), tree.end());
    /// ```
    ///
    /// [`end`]: OrderedTree::end
    /// [`insert`]: OrderedTree::insert
    pub fn find(&self, value: &T) -> Cursor
    where
        T: Ord,
    {
        let mut current = self.root;
        while let Some(id) = current {
            let node = self.nodes.node(id);
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return self.cursor(Some(id)),
            };
        }

        self.end()
    }

    /// Returns `true` if [`find`][OrderedTree::find] reaches a node equal to `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        !self.find(value).is_end()
    }

    /// A cursor to the leftmost (smallest) value, or [`end`][OrderedTree::end] when empty.
    pub fn min_element(&self) -> Cursor {
        self.cursor(self.root.map(|root| self.nodes.leftmost(root)))
    }

    /// A cursor to the rightmost (largest) value, or [`end`][OrderedTree::end] when empty.
    pub fn max_element(&self) -> Cursor {
        self.cursor(self.root.map(|root| self.nodes.rightmost(root)))
    }

    /// A cursor to the smallest value strictly greater than `value`, or [`end`] if there is none.
    ///
    /// Every node greater than `value` met on the way down is a candidate and a smaller one can
    /// only be to its left. A node not greater than `value` can only have candidates to its right.
    /// This costs `O(height)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = [5, 7, 3, -1, 0, -2, -3].into_iter().collect();
    ///
    /// assert_eq!(tree[tree.min_greater_than(&-2)], -1);
    /// assert_eq!(tree[tree.min_greater_than(&5)], 7);
    /// assert_eq!(tree.min_greater_than(&7), tree.end());
    /// ```
    ///
    /// [`end`]: OrderedTree::end
    pub fn min_greater_than(&self, value: &T) -> Cursor
    where
        T: Ord,
    {
        let mut candidate = None;
        let mut current = self.root;
        while let Some(id) = current {
            let node = self.nodes.node(id);
            if node.value > *value {
                candidate = Some(id);
                current = node.left;
            } else {
                current = node.right;
            }
        }

        self.cursor(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_of(values: &[i32]) -> OrderedTree<i32> {
        values.iter().copied().collect()
    }

    #[test]
    fn empty() {
        let tree = OrderedTree::<i32>::new();

        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.end(), tree.max_element());
        assert_eq!(tree.end(), tree.min_element());
        assert_eq!(tree.end(), tree.find(&5));
        assert_eq!(tree.end(), tree.min_greater_than(&5));
        assert_eq!(tree.begin(), tree.end());
    }

    #[test]
    fn insert_into_empty() {
        let mut tree = OrderedTree::new();

        assert!(tree.insert(5));

        assert!(!tree.is_empty());
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.height(), 1);
    }

    #[test]
    fn always_adding_right() {
        let tree = tree_of(&[5, 6, 7]);

        assert_eq!(tree.len(), 3);
        assert_eq!(tree.height(), 3);
    }

    #[test]
    fn always_adding_left() {
        let keys = [10, 9, 8, 7, 6, 5, 4, 3, 2, 1];
        let mut inserted = Vec::new();

        let mut tree = OrderedTree::new();
        assert_eq!(tree.find(&10), tree.end());

        for key in keys {
            tree.insert(key);
            inserted.push(key);
            for inserted in &inserted {
                assert_eq!(tree[tree.find(inserted)], *inserted);
            }
        }
        assert_eq!(tree.height(), keys.len());
    }

    #[test]
    fn mixed_inserts() {
        let tree = tree_of(&[5, 6, 4, 2, 0]);

        assert_eq!(tree.len(), 5);
        assert_eq!(tree.height(), 4);
    }

    #[test]
    fn duplicates_are_ignored() {
        let mut tree = tree_of(&[2, 1, 3]);

        assert!(!tree.insert(2));
        assert!(!tree.insert(3));
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.height(), 2);
    }

    #[test]
    fn balanced_insertion_order() {
        let tree = tree_of(&[4, 2, 6, 1, 3, 5, 7]);

        assert_eq!(tree.height(), 3);
    }

    #[test]
    fn find_misses_gaps() {
        let tree = tree_of(&[5, 7, 9]);

        assert_eq!(tree.find(&6), tree.end());
        assert!(!tree.contains(&6));
        assert!(tree.contains(&9));
    }

    #[test]
    fn find_after_overwrite() {
        let mut tree = tree_of(&[5, 10, 15]);

        assert_ne!(tree.find(&5), tree.end());
        assert_eq!(tree.begin(), tree.find(&5));

        let begin = tree.begin();
        tree[begin] = 2;

        assert_eq!(tree.find(&5), tree.end());
        assert_eq!(tree.begin(), tree.find(&2));
    }

    #[test]
    fn min_and_max() {
        let tree = tree_of(&[6, 5, 4, 1, 0]);
        assert_eq!(tree[tree.min_element()], 0);
        assert_eq!(tree[tree.max_element()], 6);

        let tree = tree_of(&[10, 9, 6, 5, 2, 0]);
        assert_eq!(tree[tree.max_element()], 10);

        let tree = tree_of(&[-5, -4, -3, -2, -1, 0]);
        assert_eq!(tree[tree.max_element()], 0);
        assert_eq!(tree[tree.min_element()], -5);
    }

    #[test]
    fn min_greater_than() {
        let tree = tree_of(&[5, 7, 3]);

        assert_eq!(tree[tree.min_greater_than(&5)], 7);
        assert_eq!(tree[tree.min_greater_than(&4)], 5);
        assert_eq!(tree[tree.min_greater_than(&-100)], 3);
        assert_eq!(tree.min_greater_than(&7), tree.end());
        assert_eq!(tree.min_greater_than(&10), tree.end());
    }

    #[test]
    fn min_greater_than_deep() {
        let tree = tree_of(&[5, 7, 3, -1, 0, -2, -3]);

        assert_eq!(tree[tree.min_greater_than(&-2)], -1);
        assert_eq!(tree[tree.min_greater_than(&0)], 3);
        assert_eq!(tree[tree.min_greater_than(&-3)], -2);
    }

    #[test]
    fn clone_is_deep() {
        let tree = tree_of(&[5, 7, 3]);
        let mut copy = tree.clone();

        assert_eq!(copy.len(), tree.len());
        assert_eq!(copy.height(), tree.height());

        let mut x = tree.begin();
        let mut y = copy.begin();
        while x != tree.end() && y != copy.end() {
            assert_eq!(tree[x], copy[y]);
            assert_ne!(x, y);
            x = tree.successor(x);
            y = copy.successor(y);
        }
        assert_eq!(x, tree.end());
        assert_eq!(y, copy.end());

        let begin = copy.begin();
        copy[begin] = 100;
        assert_eq!(tree[tree.begin()], 3);
        assert!(tree.check_sorting_invariant());
        assert!(!copy.check_sorting_invariant());
    }

    #[test]
    fn clone_empty() {
        let tree = OrderedTree::<i32>::new();
        let copy = tree.clone();

        assert!(copy.is_empty());
        assert_eq!(copy.len(), 0);
        assert_eq!(copy.height(), 0);
        assert_ne!(copy.end(), tree.end());
    }

    #[test]
    fn clone_then_grow_independently() {
        let mut tree = tree_of(&[50, 75, 25]);
        let mut copy = tree.clone();

        tree.insert(10);
        copy.insert(90);

        assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [10, 25, 50, 75]);
        assert_eq!(copy.iter().copied().collect::<Vec<_>>(), [25, 50, 75, 90]);
    }

    #[test]
    fn debug_lists_values() {
        let tree = tree_of(&[2, 1]);

        assert_eq!(
            format!("{:?}", tree),
            "OrderedTree { len: 2, height: 2, values: [1, 2] }"
        );
    }
}
