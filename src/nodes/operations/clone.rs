//! Deep copy of the tree.

use std::collections::btree_map;
use std::collections::BTreeMap;

use crate::chars::KeyChar;
use crate::nodes::{InnerNode, Node};

/// One in-progress inner node copy on the work stack.
struct Frame<'a, C: KeyChar> {
    /// Edge under which the rebuilt node hangs off its parent frame.
    edge: C,
    source: &'a InnerNode<C>,
    pending: btree_map::Iter<'a, C, Node<C>>,
    rebuilt: BTreeMap<C, Node<C>>,
}

impl<'a, C: KeyChar> Frame<'a, C> {
    fn new(edge: C, source: &'a InnerNode<C>) -> Self {
        Frame {
            edge,
            source,
            pending: source.children.iter(),
            rebuilt: BTreeMap::new(),
        }
    }

    fn finish(self) -> Node<C> {
        Node::Inner(InnerNode {
            compare_index: self.source.compare_index,
            path: self.source.path.clone(),
            children: self.rebuilt,
        })
    }
}

/// Deep-copy the tree rooted at `root`.
///
/// Copying is driven by an explicit frame stack instead of recursion; the
/// trie can be as deep as its longest key. Each frame rebuilds one inner
/// node's children map entry by entry and is folded into its parent frame
/// once exhausted.
pub(crate) fn clone_tree<C: KeyChar>(root: &Node<C>) -> Node<C> {
    let root_inner = match root {
        Node::Leaf(leaf) => return Node::Leaf(leaf.clone()),
        Node::Inner(inner) => inner,
    };

    // The root frame's edge is never read; any character will do.
    let mut stack = vec![Frame::new(C::RESERVED, root_inner)];
    loop {
        let next = stack
            .last_mut()
            .expect("the stack is non-empty until the root is rebuilt")
            .pending
            .next();
        match next {
            Some((&edge, Node::Leaf(leaf))) => {
                stack
                    .last_mut()
                    .expect("a child implies a current frame")
                    .rebuilt
                    .insert(edge, Node::Leaf(leaf.clone()));
            }
            Some((&edge, Node::Inner(inner))) => stack.push(Frame::new(edge, inner)),
            None => {
                let frame = stack
                    .pop()
                    .expect("the stack is non-empty until the root is rebuilt");
                let edge = frame.edge;
                let rebuilt = frame.finish();
                match stack.last_mut() {
                    Some(parent) => {
                        parent.rebuilt.insert(edge, rebuilt);
                    }
                    None => return rebuilt,
                }
            }
        }
    }
}
