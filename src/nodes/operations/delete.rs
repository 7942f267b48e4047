use crate::chars::KeyChar;
use crate::nodes::{descend_mut, search_path, Node};

/// Remove the terminated `key` from the tree rooted at `root`.
///
/// Returns `true` when the key was present. An absent key leaves the tree
/// untouched; removing it is not an error.
///
/// Erasing a leaf can leave its parent with a single child, which the
/// invariant on inner nodes forbids; such a parent is collapsed by
/// promoting the surviving child into its slot.
pub(crate) fn remove_key<C: KeyChar>(root: &mut Option<Node<C>>, key: &[C]) -> bool {
    let Some(root_node) = root.as_mut() else {
        return false;
    };

    // Read-only phase: the candidate must be a leaf holding exactly `key`.
    let depth = {
        let path = search_path(root_node, key);
        match path.last().expect("the path contains at least the root") {
            Node::Leaf(leaf) if leaf.key.as_ref() == key => path.len() - 1,
            _ => return false,
        }
    };

    if depth == 0 {
        *root = None;
        return true;
    }

    if depth == 1 {
        let Node::Inner(parent) = &mut *root_node else {
            unreachable!("a leaf at depth one hangs under an inner root")
        };
        let removed = parent.children.remove(&key[parent.compare_index]);
        debug_assert!(removed.is_some(), "the search path ended at this leaf");
        debug_assert!(
            !parent.children.is_empty(),
            "an inner node never loses its last child"
        );
        if parent.children.len() == 1 {
            let (_, survivor) = parent.children.pop_first().expect("length was checked");
            *root_node = survivor;
        }
        return true;
    }

    let Node::Inner(grandparent) = descend_mut(root_node, key, depth - 2) else {
        unreachable!("interior path nodes are inner nodes")
    };
    let parent_edge = key[grandparent.compare_index];
    let Some(Node::Inner(parent)) = grandparent.children.get_mut(&parent_edge) else {
        unreachable!("the search path took this edge through an inner node")
    };

    let removed = parent.children.remove(&key[parent.compare_index]);
    debug_assert!(removed.is_some(), "the search path ended at this leaf");
    debug_assert!(
        !parent.children.is_empty(),
        "an inner node never loses its last child"
    );
    if parent.children.len() == 1 {
        // Promote the survivor into the parent's slot under the same edge.
        let (_, survivor) = parent.children.pop_first().expect("length was checked");
        grandparent.children.insert(parent_edge, survivor);
    }

    true
}
