//! This crate exposes an unbalanced Binary Search Tree with cursor based access, mostly for
//! educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to insert and find stored
//! values. BSTs are typically defined recursively using the notion of a `Node`. A `Node` stores a
//! value and sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a value less than its
//!    own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a value greater than
//!    its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). This tree does no rebalancing, so the height
//! depends entirely on insertion order: inserting sorted values gives a tree as tall as it is
//! long. BSTs also naturally support sorted iteration by visiting the left subtree, then the
//! subtree root, then the right subtree.
//!
//! ## Cursors
//!
//! Positions in an [`OrderedTree`] are [`Cursor`]s: there is a
//! [`begin`][OrderedTree::begin] and a past-the-end [`end`][OrderedTree::end], a cursor can be
//! moved to its [`successor`][OrderedTree::successor], and the value under it can be read or
//! overwritten by indexing the tree. Overwriting can break the invariants above.
//! [`check_sorting_invariant`][OrderedTree::check_sorting_invariant] detects that.
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//! tree.insert(5);
//! tree.insert(7);
//! tree.insert(3);
//!
//! assert_eq!(tree.to_string(), "[ 3 5 7 ]");
//! assert_eq!(tree.height(), 2);
//!
//! let begin = tree.begin();
//! tree[begin] = 6;
//! assert!(!tree.check_sorting_invariant());
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod cursor;
mod invariant;
mod node;
mod traverse;
mod tree;

pub use cursor::{Cursor, Iter};
pub use invariant::InvariantViolation;
pub use tree::OrderedTree;
