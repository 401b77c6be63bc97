//! `forest-tree` — run a tree command script.
//!
//! Usage:
//!   forest-tree < script.txt
//!
//! The script is read from stdin; see [`forest_cli::tree_script`] for the
//! command set.

use forest_cli::run_tree_script;
use std::io::{self, Read, Write};

fn main() {
    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match run_tree_script(&buf) {
        Ok(output) => {
            if let Err(e) = io::stdout().write_all(output.as_bytes()) {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
