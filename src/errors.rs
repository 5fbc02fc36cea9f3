//! Typed errors for the postprocessor core.
//!
//! Malformed lines are never errors; they are skipped where they are read.
//! Only contract violations from the surrounding wrapper and I/O failures on
//! the record channels surface here.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PostprocessError {
    #[error("Unknown solver '{0}'")]
    UnknownSolver(String),

    #[error("Unknown decomposer '{0}'")]
    UnknownDecomposer(String),

    #[error("Solver {solver} requires exactly one reported pid, found {count}")]
    PidContract { solver: String, count: usize },

    #[error("Solver {solver} reported pid {pid}, which has no signalable successor")]
    PidOutOfRange { solver: String, pid: i32 },

    #[error("I/O error on record stream: {0}")]
    Io(#[from] std::io::Error),
}
