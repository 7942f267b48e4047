#![deny(missing_docs, deprecated_in_future)]
#![forbid(unsafe_code)]

//! An ordered, in-memory set of strings stored in a PATRICIA (radix)
//! trie.
//!
//! Keys are non-empty strings over a caller-chosen character unit (see
//! [`KeyChar`]); one reserved unit value is appended internally as a key
//! terminator, which guarantees that no stored key is a proper prefix of
//! another. Besides membership, the trie answers ordered navigation
//! queries: strict [`successor`][TreeSet::successor] /
//! [`predecessor`][TreeSet::predecessor] neighbors and ordered
//! [`prefix`][TreeSet::prefix] ranges. All operations run in time
//! proportional to the key length, independent of the set size.
//!
//! # References
//!
//!  - Morrison, D. R. (1968). PATRICIA - Practical Algorithm To Retrieve
//!    Information Coded in Alphanumeric. Journal of the ACM, 15(4),
//!    514-534.
//!
//! # Examples
//!
//! ```rust
//! use patset::TreeSet;
//!
//! let mut set = TreeSet::<u8>::new();
//! set.insert("apple").unwrap();
//! set.insert("apply").unwrap();
//! set.insert("apricot").unwrap();
//!
//! let matches: Vec<&[u8]> = set.prefix("app").unwrap().collect();
//! assert_eq!(matches, [b"apple".as_slice(), b"apply"]);
//!
//! assert_eq!(set.successor("apple").unwrap(), Some(b"apply".as_slice()));
//! assert_eq!(set.predecessor("apple").unwrap(), None);
//! ```

mod chars;
mod collections;
mod nodes;
pub mod visitor;

#[doc(hidden)]
pub mod tests_common;

#[cfg(test)]
mod proptests;

pub use chars::{AsChars, InvalidKeyError, KeyChar};
pub use collections::set::{Iter, Prefix, TreeSet};
