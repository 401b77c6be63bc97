use std::fmt::{Display, Write};

use serde::Serialize;

use crate::avl::OrderedTree;
use crate::error::{ForestError, MAX_SHOW_HEIGHT};

/// Which link of its parent a node hangs from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Root,
    Left,
    Right,
}

/// One node of a pre-order shape dump.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ShapeEntry<K> {
    pub key: K,
    pub height: i32,
    pub depth: usize,
    pub side: Side,
}

/// Flattens the tree into pre-order entries: node, left subtree, right subtree.
pub fn shape<K, C>(tree: &OrderedTree<K, C>) -> Vec<ShapeEntry<&K>>
where
    C: Fn(&K, &K) -> i32,
{
    let mut out = Vec::with_capacity(tree.size());
    let mut stack: Vec<(u32, usize, Side)> = Vec::new();
    if let Some(root) = tree.root() {
        stack.push((root, 0, Side::Root));
    }
    while let Some((i, depth, side)) = stack.pop() {
        let node = tree.node(i);
        out.push(ShapeEntry {
            key: &node.k,
            height: node.height,
            depth,
            side,
        });
        if let Some(r) = node.r {
            stack.push((r, depth + 1, Side::Right));
        }
        if let Some(l) = node.l {
            stack.push((l, depth + 1, Side::Left));
        }
    }
    out
}

fn has_right_sibling<K>(entries: &[ShapeEntry<K>], i: usize) -> bool {
    let depth = entries[i].depth;
    for e in &entries[i + 1..] {
        if e.depth < depth {
            return false;
        }
        if e.depth == depth {
            return e.side == Side::Right;
        }
    }
    false
}

/// Draws a pre-order shape dump with connector glyphs.
///
/// Bit `j` of `arms` is set while the ancestor at depth `j + 1` is a left
/// child whose right sibling has not been drawn yet.
pub fn render<K: Display>(entries: &[ShapeEntry<K>]) -> Result<String, ForestError> {
    let mut out = String::new();
    let mut arms: u64 = 0;

    for (i, e) in entries.iter().enumerate() {
        if e.depth as i32 >= MAX_SHOW_HEIGHT {
            return Err(ForestError::TooTall {
                height: e.depth as i32,
            });
        }
        if e.depth > 0 {
            let level = e.depth - 1;
            for j in 0..level {
                out.push_str(if arms & (1 << j) != 0 { "│     " } else { "      " });
            }
            if e.side == Side::Left && has_right_sibling(entries, i) {
                out.push_str("┝━╸L: ");
                arms |= 1 << level;
            } else {
                out.push_str(if e.side == Side::Left { "┕━╸L: " } else { "┕━╸R: " });
                arms &= !(1 << level);
            }
        }
        let _ = writeln!(out, "{} (height: {})", e.key, e.height);
    }

    Ok(out)
}

/// Renders the tree structure, refusing trees of height 64 or more.
pub fn show<K, C>(tree: &OrderedTree<K, C>) -> Result<String, ForestError>
where
    K: Display,
    C: Fn(&K, &K) -> i32,
{
    let height = tree.height();
    if height >= MAX_SHOW_HEIGHT {
        return Err(ForestError::TooTall { height });
    }
    render(&shape(tree))
}
