//! Cell states stored in the maze grid

use strum::{Display, EnumIter};

/// State of a single grid coordinate, cell or wall slot alike
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
#[repr(u8)]
pub enum CellState {
    #[default]
    Wall = 0,
    Path = 1,
    Entrance = 2,
    Exit = 3,
    SolvedPath = 4,
    DeadEnd = 5,
}

impl CellState {
    /// Check if the solver may still step here
    pub const fn is_open(&self) -> bool {
        matches!(self, CellState::Path | CellState::Exit)
    }

    /// Check if this is anything but wall
    pub const fn is_passable(&self) -> bool {
        !matches!(self, CellState::Wall)
    }

    /// Get the single-character symbol for this state
    pub const fn symbol(&self) -> char {
        match self {
            CellState::Wall => '#',
            CellState::Path => ' ',
            CellState::Entrance => 'S',
            CellState::Exit => 'E',
            CellState::SolvedPath => '*',
            CellState::DeadEnd => '.',
        }
    }

    /// Inverse of [`CellState::symbol`]
    pub const fn from_symbol(c: char) -> Option<Self> {
        match c {
            '#' => Some(CellState::Wall),
            ' ' => Some(CellState::Path),
            'S' => Some(CellState::Entrance),
            'E' => Some(CellState::Exit),
            '*' => Some(CellState::SolvedPath),
            '.' => Some(CellState::DeadEnd),
            _ => None,
        }
    }
}
