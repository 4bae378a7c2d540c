//! Error types
//!
//! Expected algorithm outcomes ("Element not found", "No solution found.") are
//! terminal steps, not errors. The enums here cover what the step generators
//! cannot express: input the soft parser cannot repair, a full step log, a
//! missing interpreter, and failures of the binary itself.

use thiserror::Error;

/// Input that survives lenient parsing but still cannot be simulated.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("At least one process is required")]
    EmptyProcessList,
    #[error("Time quantum must be at least 1")]
    InvalidQuantum,
    #[error("Board size must be between 1 and {max}, got {size}")]
    BoardSize { size: i64, max: usize },
    #[error("Matrix must be square: row {row} has {len} cells, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("Matrix must have at least one row")]
    EmptyMatrix,
    #[error("Graph must have at least one node")]
    EmptyGraph,
    #[error("Unknown start node '{0}'")]
    UnknownNode(String),
    #[error("City count must be between {min} and {max}, got {count}")]
    CityCount { count: i64, min: usize, max: usize },
}

/// Failures while materializing a trace.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TraceError {
    #[error("Step history limit exceeded: {limit} steps")]
    StepLimitExceeded { limit: usize },
}

/// Failures of the code execution collaborator itself (not of the program it runs).
#[derive(Debug, Error)]
pub enum ExecError {
    #[error("Failed to start interpreter '{program}'")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Interpreter pipe failed")]
    Pipe(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Terminal operation failed")]
    Terminal(#[from] std::io::Error),
    #[error("Logging initialization failed")]
    Initialization,
}
