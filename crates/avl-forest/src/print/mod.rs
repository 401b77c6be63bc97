//! Presentation helpers: key listing and tree-shape rendering.
//!
//! [`shape`] flattens a tree into pre-order [`ShapeEntry`] tuples and
//! [`render`] draws connector glyphs from those tuples alone, so any other
//! renderer can be driven from the same data.

pub mod show;

use std::fmt::Display;

use crate::avl::OrderedTree;

pub use show::{render, shape, show, ShapeEntry, Side};

/// Keys in ascending order, one per line.
pub fn list<K, C>(tree: &OrderedTree<K, C>) -> String
where
    K: Display,
    C: Fn(&K, &K) -> i32,
{
    let mut out = String::new();
    for k in tree.iter() {
        out.push_str(&k.to_string());
        out.push('\n');
    }
    out
}
