//! Node trait definitions.
//!
//! Nodes are stored in a [`Vec`]-backed arena and link to their children by
//! `Option<u32>` index. There are no parent links: rebalancing happens on the
//! unwind of a recursive descent, so the path back to the root is the call
//! stack. All tree-manipulation functions take the arena as a slice and work
//! with indices.

/// Child links (`l`, `r`).
pub trait Node {
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Keyed node interface.
pub trait KeyNode<K>: Node {
    fn key(&self) -> &K;
}

/// Default comparator for any `PartialOrd` key.
///
/// Incomparable values (e.g. `NaN`) compare as greater.
pub fn default_comparator<K: PartialOrd>(a: &K, b: &K) -> i32 {
    if a == b {
        0
    } else if a < b {
        -1
    } else {
        1
    }
}
