use std::num::ParseIntError;

use avl_forest::ForestError;
use ring_queue::QueueError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("line {line}: unknown command `{command}`")]
    UnknownCommand { line: usize, command: String },
    #[error("line {line}: `{command}` expects {expected}")]
    BadArity {
        line: usize,
        command: String,
        expected: &'static str,
    },
    #[error("line {line}: invalid number `{token}`")]
    InvalidNumber {
        line: usize,
        token: String,
        #[source]
        source: ParseIntError,
    },
    #[error("line {line}: {source}")]
    Forest { line: usize, source: ForestError },
    #[error("line {line}: {source}")]
    Queue { line: usize, source: QueueError },
    #[error(transparent)]
    QueueSetup(#[from] QueueError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
