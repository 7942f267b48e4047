use crate::chars::KeyChar;
use crate::nodes::Node;

/// Descend from `root` to the terminal node for the terminated `key`.
///
/// The descent follows the child edge selected by the key character at
/// each inner node's compare index, and stops at a leaf, at a node whose
/// compare index lies beyond the key, or at a missing child edge. The
/// returned node is a candidate only: the descent never compares the
/// characters it skips over, so callers must compare the candidate's
/// string to decide equality or prefix membership.
pub(crate) fn search_terminal<'a, C: KeyChar>(root: &'a Node<C>, key: &[C]) -> &'a Node<C> {
    let mut current = root;
    loop {
        let Node::Inner(inner) = current else {
            return current;
        };
        // Normalized keys keep the compare index in bounds; stopping on an
        // out-of-range index guards against un-normalized callers.
        let Some(edge) = key.get(inner.compare_index) else {
            return current;
        };
        match inner.children.get(edge) {
            Some(child) => current = child,
            None => return current,
        }
    }
}

/// Like [`search_terminal`], but records every visited node in order. The
/// last element is the terminal node.
pub(crate) fn search_path<'a, C: KeyChar>(root: &'a Node<C>, key: &[C]) -> Vec<&'a Node<C>> {
    let mut path = vec![root];
    loop {
        let current = *path.last().expect("the path starts with the root");
        let Node::Inner(inner) = current else {
            return path;
        };
        let Some(edge) = key.get(inner.compare_index) else {
            return path;
        };
        match inner.children.get(edge) {
            Some(child) => path.push(child),
            None => return path,
        }
    }
}

/// Index of the first position at which the two strings differ, or `None`
/// when they agree over the length of the shorter one.
///
/// Two distinct terminated keys always differ at an index strictly below
/// the shorter length, because the terminator appears nowhere else.
pub(crate) fn first_difference<C: KeyChar>(a: &[C], b: &[C]) -> Option<usize> {
    a.iter().zip(b).position(|(x, y)| x != y)
}

/// Retrace a recorded search path mutably for `steps` edges.
///
/// The edges are recomputed from the key and the compare indices, which
/// is exactly how the read-only descent chose them.
pub(crate) fn descend_mut<'a, C: KeyChar>(
    root: &'a mut Node<C>,
    key: &[C],
    steps: usize,
) -> &'a mut Node<C> {
    let mut current = root;
    for _ in 0..steps {
        current = match current {
            Node::Inner(inner) => inner
                .children
                .get_mut(&key[inner.compare_index])
                .expect("the retraced search path took this edge"),
            Node::Leaf(_) => unreachable!("a search path only descends through inner nodes"),
        };
    }
    current
}
