//! AVL tree: node layout, rotations, insertion and nearest-neighbour search.

#[path = "OrderedTree.rs"]
pub mod ordered_tree;
pub mod types;
pub mod util;

pub use ordered_tree::OrderedTree;
pub use types::{AvlNode, AvlNodeLike, EMPTY_HEIGHT};
pub use util::{
    assert_avl_tree, ceiling, floor, height, insert, insert_leaf, print, rotate_left,
    rotate_right,
};
