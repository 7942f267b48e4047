use std::ops::Bound;

use crate::chars::KeyChar;
use crate::nodes::{maximum, minimum, search_path, Node};

/// The stored key that is the strict lexicographic successor of the
/// terminated `key`, or `None` when no stored key is greater.
///
/// The query does not require `key` to be stored. The search path is
/// unwound from the terminal node upward: the candidate at each step is
/// the least leaf of the terminal subtree, then of each next-greater
/// sibling subtree, and the first candidate comparing strictly greater
/// than `key` is the answer. A candidate that fails the comparison rules
/// out its whole subtree, because the keys below one child edge compare
/// to `key` uniformly once the shared prefix has diverged.
pub(crate) fn successor_of<'a, C: KeyChar>(root: &'a Node<C>, key: &[C]) -> Option<&'a [C]> {
    let path = search_path(root, key);

    let terminal = *path.last().expect("the path contains at least the root");
    let least: &[C] = &minimum(terminal).key;
    if least > key {
        return Some(least);
    }

    for node in path.into_iter().rev() {
        let Node::Inner(inner) = node else { continue };
        let Some(&edge) = key.get(inner.compare_index) else {
            continue;
        };
        let next_greater = inner
            .children
            .range((Bound::Excluded(edge), Bound::Unbounded))
            .next();
        if let Some((_, subtree)) = next_greater {
            let candidate: &[C] = &minimum(subtree).key;
            if candidate > key {
                return Some(candidate);
            }
        }
    }

    None
}

/// The stored key that is the strict lexicographic predecessor of the
/// terminated `key`, or `None` when no stored key is smaller.
///
/// Mirror image of [`successor_of`]: greatest leaves, next-smaller
/// sibling subtrees, strictly-less comparison.
pub(crate) fn predecessor_of<'a, C: KeyChar>(root: &'a Node<C>, key: &[C]) -> Option<&'a [C]> {
    let path = search_path(root, key);

    let terminal = *path.last().expect("the path contains at least the root");
    let greatest: &[C] = &maximum(terminal).key;
    if greatest < key {
        return Some(greatest);
    }

    for node in path.into_iter().rev() {
        let Node::Inner(inner) = node else { continue };
        let Some(&edge) = key.get(inner.compare_index) else {
            continue;
        };
        let next_smaller = inner.children.range(..edge).next_back();
        if let Some((_, subtree)) = next_smaller {
            let candidate: &[C] = &maximum(subtree).key;
            if candidate < key {
                return Some(candidate);
            }
        }
    }

    None
}

/// Locate the subtree holding exactly the stored keys that begin with the
/// un-terminated `prefix`, or `None` when no stored key does.
///
/// The descent stops as soon as a node's compare index reaches the prefix
/// length: past that point every key below the node agrees on all the
/// prefix positions, so the node's own string decides the match. Stopping
/// there (rather than following the terminator edge) keeps a stored key
/// that other keys extend from hiding its extensions.
pub(crate) fn prefix_subtree<'a, C: KeyChar>(root: &'a Node<C>, prefix: &[C]) -> Option<&'a Node<C>> {
    let mut current = root;
    loop {
        match current {
            Node::Leaf(leaf) => return leaf.key.starts_with(prefix).then_some(current),
            Node::Inner(inner) => {
                if inner.compare_index >= prefix.len() {
                    return inner.path.starts_with(prefix).then_some(current);
                }
                match inner.children.get(&prefix[inner.compare_index]) {
                    Some(child) => current = child,
                    None => return None,
                }
            }
        }
    }
}
