//! `forest-cli` — command-script harness for the tree and the queue.
//!
//! Provides the logic behind the binary entry points:
//! - `forest-tree`  — drive an [`avl_forest::OrderedTree`] of `i64` keys
//! - `forest-queue` — drive a [`ring_queue::RingQueue`] of `i64` items
//!
//! Both read a script from stdin, one command per line. Blank lines and lines
//! starting with `#` are skipped.

pub mod error;
pub mod queue_script;
pub mod script;
pub mod tree_script;

pub use error::CliError;
pub use queue_script::run_queue_script;
pub use tree_script::run_tree_script;
