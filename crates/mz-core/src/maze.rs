//! Maze object owning the grid through generation and solving

use log::debug;

use crate::error::{MazeError, Result};
use crate::generator::{self, Carving};
use crate::grid::Grid;
use crate::rng::MazeRng;
use crate::solver::{self, Solution};

/// Lifecycle of a maze
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Grid allocated, all walls
    Empty,
    /// Passages carved, entrance and exit placed
    Generated,
    /// Solver has run, successfully or not
    Solved,
}

/// A square maze of `size` × `size` carved cells
#[derive(Debug, Clone)]
pub struct Maze {
    size: usize,
    grid: Grid,
    rng: MazeRng,
    phase: Phase,
    carving: Option<Carving>,
    generation_steps: usize,
    solve_steps: usize,
}

impl Maze {
    /// Create an empty maze seeded from entropy
    pub fn new(size: usize) -> Result<Self> {
        Self::with_rng(size, MazeRng::from_entropy())
    }

    /// Create an empty maze with a fixed seed
    pub fn with_seed(size: usize, seed: u64) -> Result<Self> {
        Self::with_rng(size, MazeRng::new(seed))
    }

    pub fn with_rng(size: usize, rng: MazeRng) -> Result<Self> {
        let dimension = grid_dimension(size)?;
        debug!("new maze of size {} (seed {})", size, rng.seed());
        Ok(Self {
            size,
            grid: Grid::new(dimension),
            rng,
            phase: Phase::Empty,
            carving: None,
            generation_steps: 0,
            solve_steps: 0,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Read-only view of the grid
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Entrance and exit placement, once generated
    pub fn carving(&self) -> Option<&Carving> {
        self.carving.as_ref()
    }

    pub fn generation_steps(&self) -> usize {
        self.generation_steps
    }

    pub fn solve_steps(&self) -> usize {
        self.solve_steps
    }

    /// Carve the maze. Only valid once, on an empty maze.
    pub fn generate(&mut self) -> Result<()> {
        if self.phase != Phase::Empty {
            return Err(MazeError::InvalidState("maze has already been generated"));
        }
        let carving = generator::generate(&mut self.grid, &mut self.rng)?;
        self.generation_steps = carving.steps;
        self.carving = Some(carving);
        self.phase = Phase::Generated;
        Ok(())
    }

    /// Solve the maze, overlaying the walk on the grid.
    ///
    /// Fails with [`MazeError::InvalidState`] before generation or after a
    /// previous solve, leaving the grid untouched.
    pub fn solve(&mut self) -> Result<Solution> {
        match self.phase {
            Phase::Empty => return Err(MazeError::InvalidState("maze has not been generated")),
            Phase::Solved => return Err(MazeError::InvalidState("maze has already been solved")),
            Phase::Generated => {}
        }

        let result = solver::solve(&mut self.grid);
        self.phase = Phase::Solved;
        self.solve_steps = match &result {
            Ok(solution) => solution.steps,
            Err(MazeError::Unsolvable { steps }) => *steps,
            Err(_) => 0,
        };
        result
    }
}

/// Side of the grid holding `size` carved cells per row
fn grid_dimension(size: usize) -> Result<usize> {
    if size == 0 {
        return Err(MazeError::InvalidArgument(
            "maze size must be positive".to_string(),
        ));
    }
    size.checked_mul(2)
        .and_then(|d| d.checked_add(1))
        .filter(|&d| d <= i32::MAX as usize && d.checked_mul(d).is_some())
        .ok_or_else(|| MazeError::InvalidArgument(format!("maze size {} is too large", size)))
}
