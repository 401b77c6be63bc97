use std::fmt;

use crate::error::ForestError;
use crate::types::default_comparator;
use crate::util::{find, first, last, Iter};

use super::types::AvlNode;
use super::util::{
    assert_avl_tree, ceiling, floor, height, insert, insert_leaf, print, rotate_left,
    rotate_right,
};

/// AVL-balanced ordered set.
///
/// Keys are unique under the comparator: inserting a key equal to a stored
/// one leaves the tree unchanged. There is no single-key removal; the whole
/// tree is released on drop or [`OrderedTree::clear`].
pub struct OrderedTree<K, C = fn(&K, &K) -> i32>
where
    C: Fn(&K, &K) -> i32,
{
    root: Option<u32>,
    comparator: C,
    arena: Vec<AvlNode<K>>,
}

impl<K> OrderedTree<K, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }
}

impl<K> Default for OrderedTree<K, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C> OrderedTree<K, C>
where
    C: Fn(&K, &K) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            root: None,
            comparator,
            arena: Vec::new(),
        }
    }

    fn push_node(&mut self, key: K) -> Result<u32, ForestError> {
        let len = self.arena.len();
        if len >= u32::MAX as usize {
            return Err(ForestError::ArenaFull(len));
        }
        self.arena.try_reserve(1)?;
        self.arena.push(AvlNode::new(key));
        Ok(len as u32)
    }

    /// Inserts `key` unless an equal key is already stored.
    ///
    /// Returns `Ok(true)` if the key was added, `Ok(false)` for a duplicate.
    pub fn insert(&mut self, key: K) -> Result<bool, ForestError> {
        if self.has(&key) {
            return Ok(false);
        }
        let node = self.push_node(key)?;
        self.root = Some(insert(&mut self.arena, self.root, node, &self.comparator));
        Ok(true)
    }

    /// Inserts `key` as a new leaf without rebalancing.
    ///
    /// Heights stay accurate but the AVL balance may be broken. Meant for
    /// exercising rotations and diagnostics on hand-shaped trees.
    pub fn insert_leaf(&mut self, key: K) -> Result<bool, ForestError> {
        if self.has(&key) {
            return Ok(false);
        }
        let node = self.push_node(key)?;
        self.root = Some(insert_leaf(
            &mut self.arena,
            self.root,
            node,
            &self.comparator,
        ));
        Ok(true)
    }

    pub fn rotate_left_at_root(&mut self) {
        if let Some(root) = self.root {
            self.root = Some(rotate_left::<K, _>(&mut self.arena, root));
        }
    }

    pub fn rotate_right_at_root(&mut self) {
        if let Some(root) = self.root {
            self.root = Some(rotate_right::<K, _>(&mut self.arena, root));
        }
    }

    pub fn has(&self, key: &K) -> bool {
        find(&self.arena, self.root, key, &self.comparator).is_some()
    }

    /// Greatest stored key that is `<= key`.
    pub fn floor(&self, key: &K) -> Option<&K> {
        floor(&self.arena, self.root, key, &self.comparator).map(|i| self.key(i))
    }

    /// Least stored key that is `>= key`.
    pub fn ceiling(&self, key: &K) -> Option<&K> {
        ceiling(&self.arena, self.root, key, &self.comparator).map(|i| self.key(i))
    }

    pub fn first(&self) -> Option<&K> {
        first(&self.arena, self.root).map(|i| self.key(i))
    }

    pub fn last(&self) -> Option<&K> {
        last(&self.arena, self.root).map(|i| self.key(i))
    }

    pub fn size(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the whole tree: `-1` when empty, `0` for a single key.
    pub fn height(&self) -> i32 {
        height::<K, _>(&self.arena, self.root)
    }

    /// Keys in ascending order. Each call starts a fresh traversal.
    pub fn iter(&self) -> Iter<'_, K, AvlNode<K>> {
        Iter::new(&self.arena, self.root, self.arena.len())
    }

    /// Alias of [`OrderedTree::iter`].
    pub fn list(&self) -> Iter<'_, K, AvlNode<K>> {
        self.iter()
    }

    pub fn clear(&mut self) {
        self.root = None;
        self.arena.clear();
    }

    pub fn assert_valid(&self) -> Result<(), String> {
        assert_avl_tree(&self.arena, self.root, &self.comparator)
    }

    pub fn root(&self) -> Option<u32> {
        self.root
    }

    pub fn node(&self, idx: u32) -> &AvlNode<K> {
        &self.arena[idx as usize]
    }

    pub fn key(&self, idx: u32) -> &K {
        &self.arena[idx as usize].k
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }
}

impl<'a, K, C> IntoIterator for &'a OrderedTree<K, C>
where
    C: Fn(&K, &K) -> i32,
{
    type Item = &'a K;
    type IntoIter = Iter<'a, K, AvlNode<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, C> fmt::Debug for OrderedTree<K, C>
where
    K: fmt::Debug,
    C: Fn(&K, &K) -> i32,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&print::<K, _>(&self.arena, self.root, ""))
    }
}
