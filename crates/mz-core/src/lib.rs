//! mz-core: perfect maze carving and wall-following solving
//!
//! A [`Maze`] owns a dense [`Grid`] of [`CellState`]s. Generation carves a
//! spanning tree of passages with a randomized depth-first walk and opens an
//! entrance and an exit on the border; solving walks from the entrance to the
//! exit with a wall follower, marking the path and the dead ends it explored.
//!
//! This crate does no I/O apart from emitting `log` records.

pub mod generator;
pub mod solver;

mod cell;
mod error;
mod grid;
mod maze;
mod position;
mod rng;

pub use cell::CellState;
pub use error::{MazeError, Result};
pub use generator::Carving;
pub use grid::{Grid, MIN_DIMENSION};
pub use maze::{Maze, Phase};
pub use position::{Direction, Position, Side};
pub use rng::MazeRng;
pub use solver::{Solution, Step};
