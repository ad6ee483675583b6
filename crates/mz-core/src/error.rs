//! Error types for maze construction, carving and solving

use thiserror::Error;

/// Errors reported by the maze core.
///
/// Indexing outside the grid is not represented here: it is a defect in
/// neighbour computation and panics instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid state: {0}")]
    InvalidState(&'static str),

    #[error("No path from entrance to exit after {steps} steps")]
    Unsolvable { steps: usize },
}

pub type Result<T> = std::result::Result<T, MazeError>;
