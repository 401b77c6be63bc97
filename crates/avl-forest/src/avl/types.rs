use crate::types::{KeyNode, Node};

/// Height of an absent subtree; a single node has height `0`.
pub const EMPTY_HEIGHT: i32 = -1;

/// AVL tree node stored in the tree's arena.
#[derive(Clone, Debug)]
pub struct AvlNode<K> {
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: K,
    /// `1 + max(height(l), height(r))`; leaves are `0`.
    pub height: i32,
}

impl<K> AvlNode<K> {
    pub fn new(k: K) -> Self {
        Self {
            l: None,
            r: None,
            k,
            height: 0,
        }
    }
}

impl<K> Node for AvlNode<K> {
    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

impl<K> KeyNode<K> for AvlNode<K> {
    fn key(&self) -> &K {
        &self.k
    }
}

/// AVL-specific node behavior.
pub trait AvlNodeLike<K>: KeyNode<K> {
    fn height(&self) -> i32;
    fn set_height(&mut self, height: i32);
}

impl<K> AvlNodeLike<K> for AvlNode<K> {
    fn height(&self) -> i32 {
        self.height
    }

    fn set_height(&mut self, height: i32) {
        self.height = height;
    }
}
