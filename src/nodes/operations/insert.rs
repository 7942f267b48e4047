use std::mem;

use crate::chars::KeyChar;
use crate::nodes::{descend_mut, first_difference, search_path, InnerNode, LeafNode, Node};

/// Where an insertion mutates the tree.
enum InsertPoint {
    /// The terminal inner node already branches at the key's first
    /// difference; the new leaf hangs directly under it.
    AtTerminal {
        /// Number of edges from the root to the terminal node.
        depth: usize,
    },
    /// A new inner node must be spliced in, displacing the deepest
    /// visited node whose parent branches before the first difference.
    NewBranch {
        /// Number of edges from the root to the displaced node.
        depth: usize,
    },
}

/// Insert the terminated `key` into the tree rooted at `root`.
///
/// Returns `true` when the key was not previously present. The tree is
/// left untouched for a duplicate key.
pub(crate) fn insert_key<C: KeyChar>(root: &mut Option<Node<C>>, key: &[C]) -> bool {
    let Some(root_node) = root else {
        *root = Some(Node::Leaf(LeafNode::new(key)));
        return true;
    };

    // Read-only phase: walk the search path, find the branch position and
    // decide where the mutation lands.
    let (branch_index, insert_point) = {
        let path = search_path(root_node, key);
        let terminal = *path.last().expect("the path contains at least the root");

        let branch_index = match (first_difference(key, terminal.string()), terminal) {
            (Some(index), _) => index,
            // Equal as far as both extend. Against an inner node the
            // branch happens at the terminator position; against a leaf
            // the key is already present.
            (None, Node::Inner(_)) => key.len() - 1,
            (None, Node::Leaf(_)) => return false,
        };

        match terminal {
            Node::Inner(inner) if branch_index == inner.compare_index => (
                branch_index,
                InsertPoint::AtTerminal {
                    depth: path.len() - 1,
                },
            ),
            _ => {
                let depth = path
                    .iter()
                    .position(|node| match node {
                        Node::Leaf(_) => true,
                        Node::Inner(inner) => inner.compare_index >= branch_index,
                    })
                    .expect("the terminal node always qualifies");
                if depth > 0 {
                    let Node::Inner(parent) = path[depth - 1] else {
                        unreachable!("only the last path node can be a leaf")
                    };
                    debug_assert!(
                        parent.compare_index < branch_index,
                        "the displaced node's parent must branch before the new node"
                    );
                }
                (branch_index, InsertPoint::NewBranch { depth })
            }
        }
    };

    match insert_point {
        InsertPoint::AtTerminal { depth } => {
            let Node::Inner(inner) = descend_mut(root_node, key, depth) else {
                unreachable!("this insert terminated at an inner node")
            };
            debug_assert_eq!(inner.compare_index, branch_index);
            let previous = inner
                .children
                .insert(key[branch_index], Node::Leaf(LeafNode::new(key)));
            debug_assert!(
                previous.is_none(),
                "the search stopped here because this edge was missing"
            );
        }
        InsertPoint::NewBranch { depth } => {
            let slot = descend_mut(root_node, key, depth);
            let displaced_edge = slot.string()[branch_index];
            debug_assert_ne!(
                displaced_edge, key[branch_index],
                "the displaced subtree and the new leaf must take distinct edges"
            );

            let displaced = mem::replace(slot, Node::Inner(InnerNode::new(key, branch_index)));
            let Node::Inner(branch) = slot else {
                unreachable!("the branch node was just installed")
            };
            branch.children.insert(displaced_edge, displaced);
            branch
                .children
                .insert(key[branch_index], Node::Leaf(LeafNode::new(key)));
        }
    }

    true
}
