use thiserror::Error;

use crate::chars::KeyChar;
use crate::nodes::Node;
use crate::TreeSet;

/// An issue with the well-formed-ness of the tree. See the documentation
/// on [`WellFormedChecker`] for more context.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedTreeError<C: KeyChar> {
    /// An inner node had fewer than two children.
    #[error("inner node at {path:?} has {num_children} children, expected at least 2")]
    WrongChildrenCount {
        /// The path string identifying the inner node.
        path: Vec<C>,
        /// The number of children found.
        num_children: usize,
    },
    /// An inner node's path string disagreed with its compare index, did
    /// not end with the reserved character, or contained an interior
    /// reserved character.
    #[error("inner node at {path:?} has a malformed path string for compare index {compare_index}")]
    MalformedPathString {
        /// The offending path string.
        path: Vec<C>,
        /// The node's compare index.
        compare_index: usize,
    },
    /// Compare indices failed to strictly increase along a root-to-leaf
    /// path.
    #[error(
        "inner node at {path:?} has compare index {compare_index}, not above its parent's {parent_compare_index}"
    )]
    NonIncreasingCompareIndex {
        /// The path string identifying the inner node.
        path: Vec<C>,
        /// The node's compare index.
        compare_index: usize,
        /// The parent's compare index.
        parent_compare_index: usize,
    },
    /// A child hung under an edge character that disagrees with the
    /// child's string at the parent's compare index.
    #[error("child at {child:?} hangs under edge {edge:?} but disagrees at the branch position")]
    EdgeMismatch {
        /// The child's identifying string.
        child: Vec<C>,
        /// The edge character the child was found under.
        edge: C,
    },
    /// A child's string did not extend its parent's path prefix.
    #[error("child at {child:?} does not share its parent's path prefix {parent_path:?}")]
    PrefixMismatch {
        /// The child's identifying string.
        child: Vec<C>,
        /// The parent's path string.
        parent_path: Vec<C>,
    },
    /// A leaf key was empty, unterminated, or contained an interior
    /// reserved character.
    #[error("leaf key {key:?} is not a terminated, reserved-free string")]
    MalformedLeafKey {
        /// The offending key.
        key: Vec<C>,
    },
    /// The recorded entry count disagreed with the number of leaves.
    #[error("the tree records {recorded} entries but holds {actual} leaves")]
    WrongEntryCount {
        /// The entry count the container reports.
        recorded: usize,
        /// The number of leaves actually reachable from the root.
        actual: usize,
    },
}

/// A structural check of the radix tree.
///
/// In this context, well-formed means that in the tree:
///  1. every inner node has at least two children
///  2. every inner node's path string is its compare index's worth of
///     shared characters plus the reserved terminator, with no interior
///     reserved character
///  3. compare indices strictly increase along every root-to-leaf path
///  4. every leaf key ends with the reserved character and contains no
///     other occurrence of it
///  5. the recorded entry count equals the number of leaves
///  6. every child agrees with the edge character it hangs under, and
///     extends its parent's path prefix
///
/// Mutating operations maintain all of this by construction; the checker
/// exists to sanity check the tree in unit tests and after bulk edits.
/// Only a single issue is reported at a time: a tree is well-formed (by
/// the definition above) exactly when the check returns `Ok`.
#[derive(Debug)]
pub struct WellFormedChecker;

impl WellFormedChecker {
    /// Traverse the given tree and check that it is well-formed. Returns
    /// the number of nodes in the tree.
    ///
    /// The traversal keeps an explicit work stack; the trie can be as
    /// deep as its longest key.
    ///
    /// # Errors
    ///
    /// Returns an error if the given tree is not well-formed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use patset::{visitor::WellFormedChecker, TreeSet};
    ///
    /// let mut set = TreeSet::<u8>::new();
    /// set.insert("cat").unwrap();
    /// set.insert("car").unwrap();
    ///
    /// assert_eq!(WellFormedChecker::check(&set), Ok(3));
    /// ```
    pub fn check<C: KeyChar>(set: &TreeSet<C>) -> Result<usize, MalformedTreeError<C>> {
        let Some(root) = set.root.as_ref() else {
            return if set.len() == 0 {
                Ok(0)
            } else {
                Err(MalformedTreeError::WrongEntryCount {
                    recorded: set.len(),
                    actual: 0,
                })
            };
        };

        let mut node_count = 0;
        let mut leaf_count = 0;
        // (node, edge and compare index and path of the parent)
        let mut stack: Vec<(&Node<C>, Option<(C, usize, &[C])>)> = vec![(root, None)];

        while let Some((node, parent)) = stack.pop() {
            node_count += 1;

            if let Some((edge, parent_index, parent_path)) = parent {
                let string = node.string();
                if string.get(parent_index).copied() != Some(edge) {
                    return Err(MalformedTreeError::EdgeMismatch {
                        child: string.to_vec(),
                        edge,
                    });
                }
                if string[..parent_index] != parent_path[..parent_index] {
                    return Err(MalformedTreeError::PrefixMismatch {
                        child: string.to_vec(),
                        parent_path: parent_path.to_vec(),
                    });
                }
            }

            match node {
                Node::Leaf(leaf) => {
                    leaf_count += 1;
                    let key = leaf.key.as_ref();
                    let key_is_valid = key.len() >= 2
                        && key.last() == Some(&C::RESERVED)
                        && !key[..key.len() - 1].contains(&C::RESERVED);
                    if !key_is_valid {
                        return Err(MalformedTreeError::MalformedLeafKey { key: key.to_vec() });
                    }
                }
                Node::Inner(inner) => {
                    let path_is_valid = inner.path.len() == inner.compare_index + 1
                        && inner.path.last() == Some(&C::RESERVED)
                        && !inner.path[..inner.compare_index].contains(&C::RESERVED);
                    if !path_is_valid {
                        return Err(MalformedTreeError::MalformedPathString {
                            path: inner.path.to_vec(),
                            compare_index: inner.compare_index,
                        });
                    }
                    if let Some((_, parent_index, _)) = parent {
                        if inner.compare_index <= parent_index {
                            return Err(MalformedTreeError::NonIncreasingCompareIndex {
                                path: inner.path.to_vec(),
                                compare_index: inner.compare_index,
                                parent_compare_index: parent_index,
                            });
                        }
                    }
                    if inner.children.len() < 2 {
                        return Err(MalformedTreeError::WrongChildrenCount {
                            path: inner.path.to_vec(),
                            num_children: inner.children.len(),
                        });
                    }
                    for (edge, child) in &inner.children {
                        stack.push((child, Some((*edge, inner.compare_index, &inner.path[..]))));
                    }
                }
            }
        }

        if leaf_count != set.len() {
            return Err(MalformedTreeError::WrongEntryCount {
                recorded: set.len(),
                actual: leaf_count,
            });
        }

        Ok(node_count)
    }
}
