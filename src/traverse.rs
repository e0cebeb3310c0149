//! Writing the tree out: in-order and pre-order traversals, `Display`, and a shape dump.
//!
//! None of these recurse. A tree built from sorted input is a single long chain and would
//! otherwise need a stack frame per value.

use std::fmt::{self, Write};

use tracing::instrument;

use crate::node::{NodeId, Side};
use crate::tree::OrderedTree;

impl<T> OrderedTree<T> {
    /// Writes every value in order (left subtree, node, right subtree), each followed by a single
    /// space. An empty tree writes nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = [5, 7, 3].into_iter().collect();
    ///
    /// let mut out = String::new();
    /// tree.traverse_inorder(&mut out).unwrap();
    /// assert_eq!(out, "3 5 7 ");
    /// ```
    #[instrument(level = "trace", skip_all)]
    pub fn traverse_inorder<W>(&self, sink: &mut W) -> fmt::Result
    where
        W: Write + ?Sized,
        T: fmt::Display,
    {
        for value in self.iter() {
            write!(sink, "{} ", value)?;
        }
        Ok(())
    }

    /// Writes every value in pre-order (node, left subtree, right subtree), each followed by a
    /// single space. An empty tree writes nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = [5, 7, 3].into_iter().collect();
    ///
    /// let mut out = String::new();
    /// tree.traverse_preorder(&mut out).unwrap();
    /// assert_eq!(out, "5 3 7 ");
    /// ```
    #[instrument(level = "trace", skip_all)]
    pub fn traverse_preorder<W>(&self, sink: &mut W) -> fmt::Result
    where
        W: Write + ?Sized,
        T: fmt::Display,
    {
        for (_, _, id) in self.preorder() {
            write!(sink, "{} ", self.nodes.node(id).value)?;
        }
        Ok(())
    }

    /// Renders the shape of the tree, one node per line in pre-order. Each line is indented two
    /// spaces per level and children are tagged with the side they hang from.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = [5, 3, 4, 7].into_iter().collect();
    ///
    /// assert_eq!(tree.to_tree_string(), "5\n  L: 3\n    R: 4\n  R: 7\n");
    /// ```
    pub fn to_tree_string(&self) -> String
    where
        T: fmt::Display,
    {
        let mut out = String::new();
        for (depth, side, id) in self.preorder() {
            let tag = match side {
                Some(Side::Left) => "L: ",
                Some(Side::Right) => "R: ",
                None => "",
            };
            let indent = "  ".repeat(depth);
            out.push_str(&format!("{}{}{}\n", indent, tag, self.nodes.node(id).value));
        }
        out
    }

    /// Pre-order walk yielding each node with its depth below the root and the side of its parent
    /// it hangs from.
    fn preorder(&self) -> impl Iterator<Item = (usize, Option<Side>, NodeId)> + '_ {
        let mut stack: Vec<(usize, Option<Side>, NodeId)> =
            self.root.map(|root| (0, None, root)).into_iter().collect();

        std::iter::from_fn(move || {
            let (depth, side, id) = stack.pop()?;
            let node = self.nodes.node(id);
            // Right goes on first so the left subtree comes off the stack first.
            stack.extend(node.right.map(|right| (depth + 1, Some(Side::Right), right)));
            stack.extend(node.left.map(|left| (depth + 1, Some(Side::Left), left)));
            Some((depth, side, id))
        })
    }
}

/// Formats as `[ ` followed by every value in order and a space, then `]`.
///
/// ```
/// use ordered_tree::OrderedTree;
///
/// let tree: OrderedTree<_> = [2, 1, 3].into_iter().collect();
/// assert_eq!(tree.to_string(), "[ 1 2 3 ]");
/// assert_eq!(OrderedTree::<i32>::new().to_string(), "[ ]");
/// ```
impl<T> fmt::Display for OrderedTree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[ ")?;
        self.traverse_inorder(f)?;
        f.write_str("]")
    }
}
