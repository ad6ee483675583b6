//! Maze carving
//!
//! Randomized depth-first search with an explicit stack: pop a cell, and if
//! it still has uncarved neighbours push it back, knock down the wall to one
//! of them picked at random and push that neighbour. Every carve joins a
//! visited cell to an unvisited one, so the passages form a spanning tree.

use log::{debug, trace};

use crate::cell::CellState;
use crate::error::{MazeError, Result};
use crate::grid::{Grid, MIN_DIMENSION};
use crate::position::{Position, Side};
use crate::rng::MazeRng;

/// Fixed entrance on the top border, above the first carved cell
pub const ENTRANCE: Position = Position::new(1, 0);

/// Carved cell the walk starts from
pub const START_CELL: Position = Position::new(1, 1);

/// Outcome of carving a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carving {
    /// Stack pops performed while carving
    pub steps: usize,
    pub entrance: Position,
    pub exit: Position,
}

/// Carve a perfect maze into an all-wall grid and place entrance and exit.
///
/// The dimension must be odd and at least [`MIN_DIMENSION`], otherwise the
/// walk would reach the border; that is [`MazeError::InvalidArgument`].
/// A grid holding anything but walls gives [`MazeError::InvalidState`].
/// The grid is left untouched in both cases.
pub fn generate(grid: &mut Grid, rng: &mut MazeRng) -> Result<Carving> {
    let dimension = grid.dimension();
    if dimension < MIN_DIMENSION || dimension % 2 == 0 {
        return Err(MazeError::InvalidArgument(format!(
            "grid dimension {} must be odd and at least {}",
            dimension, MIN_DIMENSION
        )));
    }
    if grid.count(CellState::Wall) != dimension * dimension {
        return Err(MazeError::InvalidState("grid has already been carved"));
    }

    grid.set(ENTRANCE, CellState::Entrance);
    let steps = carve_from(grid, START_CELL, rng);
    let exit = choose_exit(grid, ENTRANCE, rng);
    grid.set(exit, CellState::Exit);

    debug!(
        "carved {}x{} maze in {} steps, exit at ({}, {})",
        grid.dimension(),
        grid.dimension(),
        steps,
        exit.x,
        exit.y
    );

    Ok(Carving {
        steps,
        entrance: ENTRANCE,
        exit,
    })
}

/// Iterative depth-first carving from `start`; returns the number of pops
fn carve_from(grid: &mut Grid, start: Position, rng: &mut MazeRng) -> usize {
    let capacity = grid.dimension() * grid.dimension() / 4;
    let mut stack = Vec::with_capacity(capacity);
    let mut steps = 0;

    grid.set(start, CellState::Path);
    stack.push(start);

    while let Some(current) = stack.pop() {
        steps += 1;

        let mut candidates = [Position::default(); 4];
        let mut q = 0;
        for pos in unvisited_neighbours(grid, current) {
            candidates[q] = pos;
            q += 1;
        }

        if let Some(&next) = rng.choose(&candidates[..q]) {
            stack.push(current);
            grid.set(current.midpoint(next), CellState::Path);
            grid.set(next, CellState::Path);
            stack.push(next);
        }
    }

    steps
}

/// Carved cells two steps away from `cell` that are still solid
fn unvisited_neighbours(grid: &Grid, cell: Position) -> impl Iterator<Item = Position> + '_ {
    grid.neighbourhood(cell, 2)
        .filter(move |&pos| pos != cell && grid.get(pos) == CellState::Wall)
}

/// Pick a border coordinate for the exit.
///
/// A side is drawn at random, then a carved-cell offset along it. The top
/// and left sides meet at the entrance corner, so offsets there start a
/// quarter of the way along. A candidate is rejected when it is the entrance
/// or when the interior coordinate behind it is not carved.
fn choose_exit(grid: &Grid, entrance: Position, rng: &mut MazeRng) -> Position {
    let dimension = grid.dimension();
    let cells_per_side = (dimension - 1) / 2;

    loop {
        let side = Side::ALL[rng.below(Side::ALL.len())];
        let first = match side {
            Side::Top | Side::Left => dimension / 4,
            Side::Bottom | Side::Right => 0,
        };
        let k = rng.range(first, cells_per_side);
        let offset = (2 * k + 1) as i32;
        let (candidate, inner) = side.border_cell(dimension as i32, offset);

        if candidate == entrance || grid.get(inner) != CellState::Path {
            trace!(
                "rejected exit candidate ({}, {}) on {} side",
                candidate.x,
                candidate.y,
                side
            );
            continue;
        }
        return candidate;
    }
}
