//! Wall-following solver
//!
//! Walks from the entrance keeping a stack of steps. While the current
//! coordinate still touches an open neighbour it is marked as part of the
//! solution, pushed, and the walker turns through the four directions in a
//! fixed cycle until it finds somewhere to go. A coordinate with nothing open
//! around it is a dead end: it is marked as such and the walker backs up to
//! the previous step.

use log::{debug, warn};

use crate::cell::CellState;
use crate::error::{MazeError, Result};
use crate::grid::Grid;
use crate::position::{Direction, Position};

/// Direction the walker faces when it stands on the entrance
pub const START_DIRECTION: Direction = Direction::Down;

/// Turns tried before giving up on a step
const MAX_TURNS: usize = 4;

/// A position together with the last direction tried from it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub position: Position,
    pub direction: Direction,
}

impl Step {
    pub const fn new(position: Position, direction: Direction) -> Self {
        Self {
            position,
            direction,
        }
    }
}

/// Result of a successful walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// Coordinates from the entrance to the exit, both included
    pub path: Vec<Position>,
    /// Loop iterations taken by the walker
    pub steps: usize,
    /// Coordinates marked as dead ends
    pub dead_ends: usize,
}

/// Find a path from the entrance to the exit, marking the grid on the way.
///
/// Returns [`MazeError::InvalidState`] without touching the grid when no
/// entrance or exit can be found, and [`MazeError::Unsolvable`] when the
/// walker runs out of steps to back up to.
pub fn solve(grid: &mut Grid) -> Result<Solution> {
    let entrance = grid
        .find_on_border(CellState::Entrance)
        .ok_or(MazeError::InvalidState("maze has no entrance"))?;
    if grid.count(CellState::Exit) == 0 {
        return Err(MazeError::InvalidState("maze has no exit"));
    }

    let mut stack: Vec<Step> = Vec::new();
    let mut current = Step::new(entrance, START_DIRECTION);
    let mut steps = 0;
    let mut dead_ends = 0;

    loop {
        if grid.get(current.position) == CellState::Wall {
            // The turn limit ran out on the previous step
            match stack.pop() {
                Some(prev) => current = prev,
                None => break,
            }
        } else if has_open_neighbour(grid, current.position) {
            mark(grid, current.position, CellState::SolvedPath);
            stack.push(current);
            current = next_step(grid, current);
        } else {
            mark(grid, current.position, CellState::DeadEnd);
            dead_ends += 1;
            match stack.pop() {
                Some(prev) => current = prev,
                None => break,
            }
        }
        steps += 1;

        if grid.get(current.position) == CellState::Exit || stack.is_empty() {
            break;
        }
    }

    if grid.get(current.position) != CellState::Exit {
        warn!("solver exhausted its stack after {} steps", steps);
        return Err(MazeError::Unsolvable { steps });
    }

    let mut path: Vec<Position> = stack.iter().map(|step| step.position).collect();
    path.push(current.position);

    debug!(
        "solved in {} steps: path of {} coordinates, {} dead ends",
        steps,
        path.len(),
        dead_ends
    );

    Ok(Solution {
        path,
        steps,
        dead_ends,
    })
}

/// Whether the 3×3 block around `pos`, corners excluded, holds a path or
/// the exit. `pos` itself counts, so a freshly entered coordinate always
/// qualifies once.
fn has_open_neighbour(grid: &Grid, pos: Position) -> bool {
    grid.neighbourhood(pos, 1).any(|p| grid.get(p).is_open())
}

/// Mark a coordinate; the entrance keeps its state
fn mark(grid: &mut Grid, pos: Position, state: CellState) {
    if grid.get(pos) != CellState::Entrance {
        grid.set(pos, state);
    }
}

/// Turn from the last direction until the step lands on a path or the exit,
/// at most [`MAX_TURNS`] times. After the last turn the candidate is returned
/// whatever it is, possibly a wall. A step off the grid stays in place.
fn next_step(grid: &Grid, from: Step) -> Step {
    let mut next = from;

    for _ in 0..MAX_TURNS {
        next.direction = next.direction.rotate();
        let target = from.position.step(next.direction);
        next.position = if grid.in_bounds(target) {
            target
        } else {
            from.position
        };

        if grid.get(next.position).is_open() {
            break;
        }
    }

    next
}
