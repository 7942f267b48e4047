//! Teardown of the tree.

use crate::chars::KeyChar;
use crate::nodes::Node;

/// Free the given tree without recursion, returning the number of leaves
/// it held.
///
/// A work stack replaces recursion for the same reason copying uses one:
/// the trie can be as deep as its longest key. The leaf count lets the
/// container cross-check its entry accounting during teardown.
pub(crate) fn deallocate_tree<C: KeyChar>(root: Node<C>) -> usize {
    let mut leaf_count = 0;
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        match node {
            Node::Leaf(_) => leaf_count += 1,
            Node::Inner(inner) => stack.extend(inner.children.into_values()),
        }
    }
    leaf_count
}
