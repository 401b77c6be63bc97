//! `forest-queue` commands.
//!
//! | Command | Output |
//! |---------|--------|
//! | `enqueue <v>...` | — |
//! | `dequeue [n]` | each removed item on its own line |
//! | `front` | front item |
//! | `size` / `capacity` | number |
//! | `dump` | items front to back, space separated |

use std::fmt::Write;

use ring_queue::RingQueue;

use crate::error::CliError;
use crate::script::parse;

/// Runs a queue script against a fresh default-capacity queue.
pub fn run_queue_script(input: &str) -> Result<String, CliError> {
    let mut queue = RingQueue::<i64>::new()?;
    let mut out = String::new();

    for cmd in parse(input) {
        let queue_err = |source| CliError::Queue {
            line: cmd.line,
            source,
        };
        match cmd.name {
            "enqueue" => {
                for v in cmd.numbers()? {
                    queue.enqueue(v).map_err(queue_err)?;
                }
            }
            "dequeue" => {
                for _ in 0..cmd.count()? {
                    let v = queue.dequeue().map_err(queue_err)?;
                    let _ = writeln!(out, "{v}");
                }
            }
            "front" => {
                cmd.no_args()?;
                let v = queue.front().map_err(queue_err)?;
                let _ = writeln!(out, "{v}");
            }
            "size" => {
                cmd.no_args()?;
                let _ = writeln!(out, "{}", queue.size());
            }
            "capacity" => {
                cmd.no_args()?;
                let _ = writeln!(out, "{}", queue.capacity());
            }
            "dump" => {
                cmd.no_args()?;
                let _ = writeln!(out, "{queue}");
            }
            _ => return Err(cmd.unknown()),
        }
    }

    Ok(out)
}
