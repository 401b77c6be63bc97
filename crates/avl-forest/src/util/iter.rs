use std::marker::PhantomData;

use crate::types::{KeyNode, Node};

use super::get_l;

/// In-order (ascending) traversal over an arena tree.
///
/// Without parent links the path back up is kept on an explicit stack, so a
/// traversal holds at most `height + 1` indices.
pub struct Iter<'a, K, N> {
    arena: &'a [N],
    stack: Vec<u32>,
    remaining: usize,
    _key: PhantomData<&'a K>,
}

impl<'a, K, N> Iter<'a, K, N>
where
    N: KeyNode<K>,
{
    pub fn new(arena: &'a [N], root: Option<u32>, len: usize) -> Self {
        let mut it = Self {
            arena,
            stack: Vec::new(),
            remaining: len,
            _key: PhantomData,
        };
        it.push_left(root);
        it
    }

    fn push_left(&mut self, mut curr: Option<u32>) {
        while let Some(i) = curr {
            self.stack.push(i);
            curr = get_l(self.arena, i);
        }
    }
}

impl<'a, K: 'a, N> Iterator for Iter<'a, K, N>
where
    N: KeyNode<K>,
{
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let i = self.stack.pop()?;
        let arena = self.arena;
        let node = &arena[i as usize];
        self.push_left(node.r());
        self.remaining = self.remaining.saturating_sub(1);
        Some(node.key())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K: 'a, N> ExactSizeIterator for Iter<'a, K, N> where N: KeyNode<K> {}

impl<'a, K: 'a, N> std::iter::FusedIterator for Iter<'a, K, N> where N: KeyNode<K> {}
