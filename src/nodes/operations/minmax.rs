use crate::chars::KeyChar;
use crate::nodes::{LeafNode, Node};

/// Descend to the leaf with the minimum key, by lexicographic ordering.
///
/// # Panics
///
/// Panics if an inner node has no children, which only a malformed tree
/// can produce.
pub(crate) fn minimum<C: KeyChar>(root: &Node<C>) -> &LeafNode<C> {
    let mut current = root;
    loop {
        match current {
            Node::Leaf(leaf) => return leaf,
            Node::Inner(inner) => {
                current = inner
                    .children
                    .values()
                    .next()
                    .expect("an inner node always has at least two children");
            }
        }
    }
}

/// Descend to the leaf with the maximum key, by lexicographic ordering.
///
/// # Panics
///
/// Panics if an inner node has no children, which only a malformed tree
/// can produce.
pub(crate) fn maximum<C: KeyChar>(root: &Node<C>) -> &LeafNode<C> {
    let mut current = root;
    loop {
        match current {
            Node::Leaf(leaf) => return leaf,
            Node::Inner(inner) => {
                current = inner
                    .children
                    .values()
                    .next_back()
                    .expect("an inner node always has at least two children");
            }
        }
    }
}
