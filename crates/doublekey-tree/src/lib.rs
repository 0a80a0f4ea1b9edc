//! Red-black index keyed by `f64`, with a one-shot conversion into a sorted
//! doubly linked list.
//!
//! Nodes live in an arena ([`NodeStore`]); every link is an `Option<u32>`
//! index into it, so rotations are plain index updates and nothing points
//! back into freed memory. Keys are unique, payloads are opaque to the tree.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Node`] and [`KeyedNode`] traits |
//! [`store`] | [`NodeStore`]: single nodes, pre-linked pools, spare chain |
//! [`red_black`] | insertion engine, lookup, invariant checker, printer |
//! [`linked`] | destructive linearizer and list-consistency checker |
//! [`util`] | `first`, `next`, `size`, `height` … over the tree links |
//! [`tree`] | [`DoubleKeyTree`] / [`SortedList`] owning wrappers |
//!
//! ```
//! use doublekey_tree::DoubleKeyTree;
//!
//! let mut tree = DoubleKeyTree::new();
//! for (key, name) in [(5.0, "five"), (2.0, "two"), (8.0, "eight")] {
//!     tree.insert(key, name).unwrap();
//! }
//! assert_eq!(tree.lookup(2.0), Some(&"two"));
//! assert!(tree.insert(5.0, "again").is_err());
//!
//! let list = tree.into_sorted_list().unwrap();
//! let keys: Vec<f64> = list.ascending().map(|(k, _)| k).collect();
//! assert_eq!(keys, vec![2.0, 5.0, 8.0]);
//! ```

pub mod linked;
pub mod red_black;
pub mod store;
pub mod tree;
pub mod types;
pub mod util;

pub use linked::{check_sorted_list, convert_to_sorted_linked, LinearizeError, ListViolation, SortedLinks};
pub use red_black::{
    check_invariants, find, insert, insert_large, insert_small, lookup, Color, DkNode, InsertError,
    InvariantViolation, RbNodeLike, Side,
};
pub use store::{AllocError, NodeStore};
pub use tree::{DoubleKeyTree, Rejected, SortedList};
pub use types::{KeyedNode, Node};
