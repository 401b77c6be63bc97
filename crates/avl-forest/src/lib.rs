//! Arena-based AVL ordered set.
//!
//! Keys are kept in a height-balanced binary search tree ordered by a
//! caller-supplied comparator (`Fn(&K, &K) -> i32`, negative / zero /
//! positive). Besides exact lookup the tree answers nearest-neighbour
//! queries ([`OrderedTree::floor`], [`OrderedTree::ceiling`]) and exposes
//! structural diagnostics for rendering its shape.
//!
//! Nodes live in a `Vec` arena owned by the tree; every "pointer" is an
//! `Option<u32>` index into that arena. A node is referenced by exactly one
//! parent link (or is the root), so each subtree is exclusively owned.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Node`] and [`KeyNode`] traits |
//! [`util`] | `first`, `last`, `size`, `find` and in-order [`util::Iter`] |
//! [`avl`] | [`AvlNode`], rotations, insertion, floor/ceiling, [`OrderedTree`] |
//! [`print`] | key listing, [`ShapeEntry`] tuples and connector rendering |
//!
//! # Example
//!
//! ```
//! use avl_forest::OrderedTree;
//!
//! let mut tree = OrderedTree::<i32>::new();
//! for k in [5, 3, 8, 1, 4, 7, 9] {
//!     tree.insert(k).unwrap();
//! }
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 3, 4, 5, 7, 8, 9]);
//! assert_eq!(tree.floor(&6), Some(&5));
//! assert_eq!(tree.ceiling(&6), Some(&7));
//! assert_eq!(tree.floor(&0), None);
//! ```

pub mod avl;
pub mod error;
pub mod print;
pub mod types;
pub mod util;

pub use avl::{AvlNode, OrderedTree};
pub use error::ForestError;
pub use print::{render, shape, show, ShapeEntry, Side};
pub use types::{KeyNode, Node};
