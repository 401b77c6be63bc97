//! `forest-tree` commands.
//!
//! | Command | Output |
//! |---------|--------|
//! | `insert <k>...` | — |
//! | `leaf <k>...` | — (unbalanced insertion) |
//! | `floor <k>` / `ceiling <k>` | key or `none` |
//! | `has <k>` | `true` / `false` |
//! | `size` / `height` | number |
//! | `list` | keys, one per line |
//! | `show` | connector rendering |
//! | `shape` | JSON array of shape entries |
//! | `rotate-left` / `rotate-right` | — (rotation at the root) |
//! | `check` | `ok` or `invalid: <reason>` |

use std::fmt::Write;

use avl_forest::print::list;
use avl_forest::{shape, show, OrderedTree};

use crate::error::CliError;
use crate::script::parse;

fn push_opt(out: &mut String, key: Option<&i64>) {
    match key {
        Some(k) => {
            let _ = writeln!(out, "{k}");
        }
        None => out.push_str("none\n"),
    }
}

/// Runs a tree script against a fresh tree and returns everything it printed.
pub fn run_tree_script(input: &str) -> Result<String, CliError> {
    let mut tree = OrderedTree::<i64>::new();
    let mut out = String::new();

    for cmd in parse(input) {
        let forest_err = |source| CliError::Forest {
            line: cmd.line,
            source,
        };
        match cmd.name {
            "insert" => {
                for k in cmd.numbers()? {
                    tree.insert(k).map_err(forest_err)?;
                }
            }
            "leaf" => {
                for k in cmd.numbers()? {
                    tree.insert_leaf(k).map_err(forest_err)?;
                }
            }
            "floor" => push_opt(&mut out, tree.floor(&cmd.one_number()?)),
            "ceiling" => push_opt(&mut out, tree.ceiling(&cmd.one_number()?)),
            "has" => {
                let _ = writeln!(out, "{}", tree.has(&cmd.one_number()?));
            }
            "size" => {
                cmd.no_args()?;
                let _ = writeln!(out, "{}", tree.size());
            }
            "height" => {
                cmd.no_args()?;
                let _ = writeln!(out, "{}", tree.height());
            }
            "list" => {
                cmd.no_args()?;
                out.push_str(&list(&tree));
            }
            "show" => {
                cmd.no_args()?;
                out.push_str(&show(&tree).map_err(forest_err)?);
            }
            "shape" => {
                cmd.no_args()?;
                out.push_str(&serde_json::to_string(&shape(&tree))?);
                out.push('\n');
            }
            "rotate-left" => {
                cmd.no_args()?;
                tree.rotate_left_at_root();
            }
            "rotate-right" => {
                cmd.no_args()?;
                tree.rotate_right_at_root();
            }
            "check" => {
                cmd.no_args()?;
                match tree.assert_valid() {
                    Ok(()) => out.push_str("ok\n"),
                    Err(reason) => {
                        let _ = writeln!(out, "invalid: {reason}");
                    }
                }
            }
            _ => return Err(cmd.unknown()),
        }
    }

    Ok(out)
}
