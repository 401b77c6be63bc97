use std::collections::TryReserveError;

use thiserror::Error;

/// Tallest tree the connector renderer accepts; arm state is a `u64` bitmask.
pub const MAX_SHOW_HEIGHT: i32 = 64;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ForestError {
    #[error("insufficient memory: {0}")]
    OutOfMemory(#[from] TryReserveError),
    #[error("node arena is full ({0} nodes)")]
    ArenaFull(usize),
    #[error("tree is too tall to show (height {height}, limit 64)")]
    TooTall { height: i32 },
}
