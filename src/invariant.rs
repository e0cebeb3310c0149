//! Checking the sorting invariant on demand.
//!
//! The tree keeps its values ordered as long as they only arrive through
//! [`insert`][OrderedTree::insert]. Values overwritten through a cursor can break that, and nothing
//! notices until [`check_sorting_invariant`][OrderedTree::check_sorting_invariant] (or
//! [`validate`][OrderedTree::validate]) is asked.

use thiserror::Error;
use tracing::{debug, instrument};

use crate::node::NodeId;
use crate::tree::OrderedTree;

/// The first problem [`OrderedTree::validate`] found. Depths count the root as depth 1.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantViolation {
    /// A node in the left subtree of some ancestor is not less than that ancestor.
    #[error("node at depth {depth} is not less than an ancestor it is left of")]
    NotLessThanAncestor {
        /// Depth of the offending node.
        depth: usize,
    },
    /// A node in the right subtree of some ancestor is not greater than that ancestor.
    #[error("node at depth {depth} is not greater than an ancestor it is right of")]
    NotGreaterThanAncestor {
        /// Depth of the offending node.
        depth: usize,
    },
    /// A node's parent link doesn't point at the node holding it as a child.
    #[error("node at depth {depth} does not link back to its parent")]
    BrokenParentLink {
        /// Depth of the offending node.
        depth: usize,
    },
}

/// A node still to be checked along with the tightest bounds its ancestors put on it.
struct Pending<'a, T> {
    id: NodeId,
    parent: Option<NodeId>,
    depth: usize,
    /// Greatest ancestor this node is right of.
    lower: Option<&'a T>,
    /// Smallest ancestor this node is left of.
    upper: Option<&'a T>,
}

impl<T> OrderedTree<T> {
    /// Returns `true` if every node is strictly greater than everything in its left subtree and
    /// strictly less than everything in its right subtree. Empty and single node trees always
    /// pass.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree: OrderedTree<_> = [1, 0, 5, 6].into_iter().collect();
    /// assert!(tree.check_sorting_invariant());
    ///
    /// let begin = tree.begin();
    /// tree[begin] = 2;
    /// assert!(!tree.check_sorting_invariant());
    /// ```
    pub fn check_sorting_invariant(&self) -> bool
    where
        T: Ord,
    {
        self.validate().is_ok()
    }

    /// Like [`check_sorting_invariant`][OrderedTree::check_sorting_invariant] but reports which
    /// rule was broken, and also checks every parent link.
    ///
    /// Each node is compared against the bounds inherited from all of its ancestors, not just its
    /// parent, so a value that only conflicts with a grandparent is still caught.
    #[instrument(level = "trace", skip_all)]
    pub fn validate(&self) -> Result<(), InvariantViolation>
    where
        T: Ord,
    {
        let result = self.find_violation();
        if let Err(violation) = &result {
            debug!(%violation, len = self.len(), "sorting invariant violated");
        }
        result
    }

    fn find_violation(&self) -> Result<(), InvariantViolation>
    where
        T: Ord,
    {
        let mut stack: Vec<Pending<'_, T>> = Vec::new();
        if let Some(root) = self.root {
            stack.push(Pending {
                id: root,
                parent: None,
                depth: 1,
                lower: None,
                upper: None,
            });
        }

        while let Some(pending) = stack.pop() {
            let node = self.nodes.node(pending.id);
            let depth = pending.depth;

            if node.parent != pending.parent {
                return Err(InvariantViolation::BrokenParentLink { depth });
            }
            if pending.lower.map_or(false, |lower| node.value <= *lower) {
                return Err(InvariantViolation::NotGreaterThanAncestor { depth });
            }
            if pending.upper.map_or(false, |upper| node.value >= *upper) {
                return Err(InvariantViolation::NotLessThanAncestor { depth });
            }

            if let Some(right) = node.right {
                stack.push(Pending {
                    id: right,
                    parent: Some(pending.id),
                    depth: depth + 1,
                    lower: Some(&node.value),
                    upper: pending.upper,
                });
            }
            if let Some(left) = node.left {
                stack.push(Pending {
                    id: left,
                    parent: Some(pending.id),
                    depth: depth + 1,
                    lower: pending.lower,
                    upper: Some(&node.value),
                });
            }
        }

        Ok(())
    }
}
