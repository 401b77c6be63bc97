use std::fmt::Debug;

use crate::types::KeyNode;
use crate::util::{get_l, get_r, set_l, set_r, size, Iter};

use super::types::{AvlNodeLike, EMPTY_HEIGHT};

#[inline]
fn key<K, N>(arena: &[N], i: u32) -> &K
where
    N: AvlNodeLike<K>,
{
    arena[i as usize].key()
}

/// Height of the subtree rooted at `node`, `-1` for an absent subtree.
#[inline]
pub fn height<K, N>(arena: &[N], node: Option<u32>) -> i32
where
    N: AvlNodeLike<K>,
{
    node.map_or(EMPTY_HEIGHT, |i| arena[i as usize].height())
}

#[inline]
fn update_height<K, N>(arena: &mut [N], i: u32)
where
    N: AvlNodeLike<K>,
{
    let lh = height::<K, N>(arena, get_l(arena, i));
    let rh = height::<K, N>(arena, get_r(arena, i));
    arena[i as usize].set_height(1 + lh.max(rh));
}

/// `height(l) - height(r)` from the stored child heights.
#[inline]
fn balance<K, N>(arena: &[N], i: u32) -> i32
where
    N: AvlNodeLike<K>,
{
    height::<K, N>(arena, get_l(arena, i)) - height::<K, N>(arena, get_r(arena, i))
}

/// Rotates the subtree at `n` left and returns its new root.
///
/// A node without a right child is returned unchanged.
pub fn rotate_left<K, N>(arena: &mut [N], n: u32) -> u32
where
    N: AvlNodeLike<K>,
{
    let Some(a) = get_r(arena, n) else {
        return n;
    };
    let b = get_l(arena, a);

    set_l(arena, a, Some(n));
    set_r(arena, n, b);
    update_height::<K, N>(arena, n);
    update_height::<K, N>(arena, a);
    a
}

/// Rotates the subtree at `n` right and returns its new root.
///
/// A node without a left child is returned unchanged.
pub fn rotate_right<K, N>(arena: &mut [N], n: u32) -> u32
where
    N: AvlNodeLike<K>,
{
    let Some(a) = get_l(arena, n) else {
        return n;
    };
    let b = get_r(arena, a);

    set_r(arena, a, Some(n));
    set_l(arena, n, b);
    update_height::<K, N>(arena, n);
    update_height::<K, N>(arena, a);
    a
}

/// Restores height and balance at `curr` after node `n` was inserted below it.
fn rebalance<K, N, C>(arena: &mut [N], curr: u32, n: u32, comparator: &C) -> u32
where
    N: AvlNodeLike<K>,
    C: Fn(&K, &K) -> i32,
{
    update_height::<K, N>(arena, curr);
    let bf = balance::<K, N>(arena, curr);

    if bf > 1 {
        if let Some(l) = get_l(arena, curr) {
            if comparator(key::<K, N>(arena, n), key::<K, N>(arena, l)) > 0 {
                let l = rotate_left::<K, N>(arena, l);
                set_l(arena, curr, Some(l));
            }
        }
        return rotate_right::<K, N>(arena, curr);
    }

    if bf < -1 {
        if let Some(r) = get_r(arena, curr) {
            if comparator(key::<K, N>(arena, n), key::<K, N>(arena, r)) < 0 {
                let r = rotate_right::<K, N>(arena, r);
                set_r(arena, curr, Some(r));
            }
        }
        return rotate_left::<K, N>(arena, curr);
    }

    curr
}

fn insert_at<K, N, C>(arena: &mut [N], curr: Option<u32>, n: u32, comparator: &C) -> u32
where
    N: AvlNodeLike<K>,
    C: Fn(&K, &K) -> i32,
{
    let Some(curr) = curr else {
        return n;
    };

    let cmp = comparator(key::<K, N>(arena, n), key::<K, N>(arena, curr));
    if cmp < 0 {
        let l = insert_at(arena, get_l(arena, curr), n, comparator);
        set_l(arena, curr, Some(l));
    } else if cmp > 0 {
        let r = insert_at(arena, get_r(arena, curr), n, comparator);
        set_r(arena, curr, Some(r));
    } else {
        return curr;
    }

    rebalance(arena, curr, n, comparator)
}

/// Links the detached node `n` into the tree and rebalances every ancestor on
/// the insertion path. Returns the new root.
///
/// `n` must not be reachable from `root`. If its key is already present the
/// tree is left as is and `n` stays detached.
pub fn insert<K, N, C>(arena: &mut [N], root: Option<u32>, n: u32, comparator: &C) -> u32
where
    N: AvlNodeLike<K>,
    C: Fn(&K, &K) -> i32,
{
    insert_at(arena, root, n, comparator)
}

fn insert_leaf_at<K, N, C>(arena: &mut [N], curr: Option<u32>, n: u32, comparator: &C) -> u32
where
    N: AvlNodeLike<K>,
    C: Fn(&K, &K) -> i32,
{
    let Some(curr) = curr else {
        return n;
    };

    let cmp = comparator(key::<K, N>(arena, n), key::<K, N>(arena, curr));
    if cmp < 0 {
        let l = insert_leaf_at(arena, get_l(arena, curr), n, comparator);
        set_l(arena, curr, Some(l));
    } else if cmp > 0 {
        let r = insert_leaf_at(arena, get_r(arena, curr), n, comparator);
        set_r(arena, curr, Some(r));
    }
    update_height::<K, N>(arena, curr);
    curr
}

/// Plain BST insertion: heights are maintained, balance is not.
pub fn insert_leaf<K, N, C>(arena: &mut [N], root: Option<u32>, n: u32, comparator: &C) -> u32
where
    N: AvlNodeLike<K>,
    C: Fn(&K, &K) -> i32,
{
    insert_leaf_at(arena, root, n, comparator)
}

/// Greatest node whose key is `<= key`.
pub fn floor<K, N, C>(arena: &[N], root: Option<u32>, key: &K, comparator: &C) -> Option<u32>
where
    N: AvlNodeLike<K>,
    C: Fn(&K, &K) -> i32,
{
    let mut best = None;
    let mut curr = root;
    while let Some(i) = curr {
        let cmp = comparator(arena[i as usize].key(), key);
        if cmp == 0 {
            return Some(i);
        }
        if cmp < 0 {
            best = Some(i);
            curr = get_r(arena, i);
        } else {
            curr = get_l(arena, i);
        }
    }
    best
}

/// Least node whose key is `>= key`.
pub fn ceiling<K, N, C>(arena: &[N], root: Option<u32>, key: &K, comparator: &C) -> Option<u32>
where
    N: AvlNodeLike<K>,
    C: Fn(&K, &K) -> i32,
{
    let mut best = None;
    let mut curr = root;
    while let Some(i) = curr {
        let cmp = comparator(arena[i as usize].key(), key);
        if cmp == 0 {
            return Some(i);
        }
        if cmp > 0 {
            best = Some(i);
            curr = get_l(arena, i);
        } else {
            curr = get_r(arena, i);
        }
    }
    best
}

pub fn assert_avl_tree<K, N, C>(arena: &[N], root: Option<u32>, comparator: &C) -> Result<(), String>
where
    N: AvlNodeLike<K>,
    C: Fn(&K, &K) -> i32,
{
    fn validate_heights<K, N>(arena: &[N], node: Option<u32>) -> Result<i32, String>
    where
        N: AvlNodeLike<K>,
    {
        let Some(i) = node else {
            return Ok(EMPTY_HEIGHT);
        };
        let lh = validate_heights::<K, N>(arena, get_l(arena, i))?;
        let rh = validate_heights::<K, N>(arena, get_r(arena, i))?;
        let expected = 1 + lh.max(rh);
        let actual = arena[i as usize].height();
        if actual != expected {
            return Err(format!(
                "Height mismatch at node {i}: expected {expected}, got {actual}"
            ));
        }
        if !(-1..=1).contains(&(lh - rh)) {
            return Err(format!("AVL balance violated at node {i}: {}", lh - rh));
        }
        Ok(expected)
    }

    validate_heights::<K, N>(arena, root)?;

    let mut prev: Option<&K> = None;
    for k in Iter::<K, N>::new(arena, root, size(arena, root)) {
        if let Some(prev) = prev {
            if comparator(prev, k) >= 0 {
                return Err("Node order violated".to_string());
            }
        }
        prev = Some(k);
    }

    Ok(())
}

/// Debug printer for AVL trees.
pub fn print<K, N>(arena: &[N], node: Option<u32>, tab: &str) -> String
where
    K: Debug,
    N: AvlNodeLike<K>,
{
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i as usize];
            let left = print::<K, N>(arena, get_l(arena, i), &format!("{tab}  "));
            let right = print::<K, N>(arena, get_r(arena, i), &format!("{tab}  "));
            format!(
                "Node[{i}] [h={}] {{ {:?} }}\n{tab}L={left}\n{tab}R={right}",
                n.height(),
                n.key()
            )
        }
    }
}
