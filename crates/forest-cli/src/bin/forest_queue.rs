//! `forest-queue` — run a queue command script.
//!
//! Usage:
//!   forest-queue < script.txt
//!
//! The script is read from stdin; see [`forest_cli::queue_script`] for the
//! command set.

use forest_cli::run_queue_script;
use std::io::{self, Read, Write};

fn main() {
    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match run_queue_script(&buf) {
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
