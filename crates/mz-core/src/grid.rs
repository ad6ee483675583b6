//! Dense square grid of cell states
//!
//! Carved cells sit at odd (x, y) coordinates, the wall slot between two
//! neighbouring cells sits at the coordinate between them and the outer ring
//! is the border. A maze of size `n` is stored in a grid of side `2n + 1`.

use crate::cell::CellState;
use crate::error::{MazeError, Result};
use crate::position::Position;

/// Smallest grid that can hold a carved cell and its border
pub const MIN_DIMENSION: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    dimension: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Create a grid of side `dimension` filled with walls.
    ///
    /// Callers validate the dimension; see [`crate::Maze::new`].
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            cells: vec![CellState::Wall; dimension * dimension],
        }
    }

    /// Build a grid from row-major cell states
    pub fn from_cells(dimension: usize, cells: Vec<CellState>) -> Result<Self> {
        if dimension < MIN_DIMENSION {
            return Err(MazeError::InvalidArgument(format!(
                "grid dimension {} is below {}",
                dimension, MIN_DIMENSION
            )));
        }
        if cells.len() != dimension * dimension {
            return Err(MazeError::InvalidArgument(format!(
                "expected {} cells for dimension {}, got {}",
                dimension * dimension,
                dimension,
                cells.len()
            )));
        }
        Ok(Self { dimension, cells })
    }

    /// Build a grid from rows of [`CellState::symbol`] characters
    pub fn from_symbols(rows: &[&str]) -> Result<Self> {
        let dimension = rows.len();
        let mut cells = Vec::with_capacity(dimension * dimension);
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != dimension {
                return Err(MazeError::InvalidArgument(format!(
                    "row {} has {} symbols, expected {}",
                    y,
                    row.chars().count(),
                    dimension
                )));
            }
            for c in row.chars() {
                let state = CellState::from_symbol(c).ok_or_else(|| {
                    MazeError::InvalidArgument(format!("unknown symbol {:?} in row {}", c, y))
                })?;
                cells.push(state);
            }
        }
        Self::from_cells(dimension, cells)
    }

    /// Side length of the grid
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Check whether `pos` addresses a coordinate of this grid
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && (pos.x as usize) < self.dimension
            && (pos.y as usize) < self.dimension
    }

    /// Check whether `pos` lies on the outer ring
    pub fn is_border(&self, pos: Position) -> bool {
        let last = self.dimension as i32 - 1;
        self.in_bounds(pos) && (pos.x == 0 || pos.y == 0 || pos.x == last || pos.y == last)
    }

    /// True iff `pos` shares the row or the column of `center`
    pub fn is_on_same_line(center: Position, pos: Position) -> bool {
        pos.x == center.x || pos.y == center.y
    }

    fn index(&self, pos: Position) -> usize {
        if !self.in_bounds(pos) {
            panic!("Invalid position {:?} for grid of dimension {}", pos, self.dimension);
        }
        pos.y as usize * self.dimension + pos.x as usize
    }

    pub fn get(&self, pos: Position) -> CellState {
        self.cells[self.index(pos)]
    }

    pub fn set(&mut self, pos: Position, state: CellState) {
        let index = self.index(pos);
        self.cells[index] = state;
    }

    /// Row slices, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks(self.dimension)
    }

    /// Every coordinate with its state, row by row
    pub fn iter(&self) -> impl Iterator<Item = (Position, CellState)> + '_ {
        let dimension = self.dimension;
        self.cells.iter().enumerate().map(move |(i, &state)| {
            (
                Position::new((i % dimension) as i32, (i / dimension) as i32),
                state,
            )
        })
    }

    /// Number of coordinates holding `state`
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&s| s == state).count()
    }

    /// Carved-cell coordinates (odd x and odd y), row by row
    pub fn carved_cells(&self) -> impl Iterator<Item = Position> + '_ {
        let end = self.dimension as i32;
        (1..end)
            .step_by(2)
            .flat_map(move |y| (1..end).step_by(2).map(move |x| Position::new(x, y)))
    }

    /// Border coordinates: top row, bottom row, then left and right columns
    pub fn border_positions(&self) -> impl Iterator<Item = Position> + '_ {
        let last = self.dimension as i32 - 1;
        let rows = [0, last]
            .into_iter()
            .flat_map(move |y| (0..=last).map(move |x| Position::new(x, y)));
        let cols = [0, last]
            .into_iter()
            .flat_map(move |x| (0..=last).map(move |y| Position::new(x, y)));
        rows.chain(cols)
    }

    /// First border coordinate holding `state`, in [`Grid::border_positions`] order
    pub fn find_on_border(&self, state: CellState) -> Option<Position> {
        self.border_positions().find(|&pos| self.get(pos) == state)
    }

    /// In-bounds coordinates `distance` steps from `center` in the square
    /// neighbourhood that share its row or column.
    ///
    /// `center` itself is part of the neighbourhood. Distance 1 scans the
    /// 3×3 block around a coordinate, distance 2 the carved cells around a
    /// carved cell. Order is row by row, left to right.
    pub fn neighbourhood(
        &self,
        center: Position,
        distance: i32,
    ) -> impl Iterator<Item = Position> + '_ {
        let offsets = [-distance, 0, distance];
        offsets
            .into_iter()
            .flat_map(move |dy| {
                offsets
                    .into_iter()
                    .map(move |dx| Position::new(center.x + dx, center.y + dy))
            })
            .filter(move |&pos| self.in_bounds(pos) && Self::is_on_same_line(center, pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_all_walls() {
        let grid = Grid::new(5);
        assert_eq!(grid.dimension(), 5);
        assert_eq!(grid.count(CellState::Wall), 25);
        assert_eq!(grid.rows().count(), 5);
    }

    #[test]
    fn test_get_set() {
        let mut grid = Grid::new(5);
        let pos = Position::new(3, 1);
        grid.set(pos, CellState::Path);
        assert_eq!(grid.get(pos), CellState::Path);
        // Row-major: (3, 1) is in the second row
        assert_eq!(grid.rows().nth(1).unwrap()[3], CellState::Path);
        assert_eq!(grid.get(Position::new(1, 3)), CellState::Wall);
    }

    #[test]
    #[should_panic(expected = "Invalid position")]
    fn test_out_of_bounds_get_panics() {
        let grid = Grid::new(3);
        grid.get(Position::new(3, 0));
    }

    #[test]
    #[should_panic(expected = "Invalid position")]
    fn test_negative_set_panics() {
        let mut grid = Grid::new(3);
        grid.set(Position::new(0, -1), CellState::Path);
    }

    #[test]
    fn test_bounds_and_border() {
        let grid = Grid::new(5);
        assert!(grid.in_bounds(Position::new(0, 0)));
        assert!(grid.in_bounds(Position::new(4, 4)));
        assert!(!grid.in_bounds(Position::new(5, 0)));
        assert!(!grid.in_bounds(Position::new(-1, 2)));
        assert!(grid.is_border(Position::new(4, 2)));
        assert!(!grid.is_border(Position::new(2, 2)));
        assert_eq!(grid.border_positions().filter(|&p| grid.is_border(p)).count(), 20);
    }

    #[test]
    fn test_same_line() {
        let center = Position::new(3, 3);
        assert!(Grid::is_on_same_line(center, Position::new(3, 1)));
        assert!(Grid::is_on_same_line(center, Position::new(5, 3)));
        assert!(!Grid::is_on_same_line(center, Position::new(5, 5)));
    }

    #[test]
    fn test_neighbourhood_excludes_corners() {
        let grid = Grid::new(7);
        let around: Vec<Position> = grid.neighbourhood(Position::new(3, 3), 2).collect();
        assert_eq!(
            around,
            vec![
                Position::new(3, 1),
                Position::new(1, 3),
                Position::new(3, 3),
                Position::new(5, 3),
                Position::new(3, 5),
            ]
        );

        // Clipped at the edge
        let corner: Vec<Position> = grid.neighbourhood(Position::new(0, 0), 1).collect();
        assert_eq!(
            corner,
            vec![Position::new(0, 0), Position::new(1, 0), Position::new(0, 1)]
        );
    }

    #[test]
    fn test_carved_cells() {
        let grid = Grid::new(5);
        let cells: Vec<Position> = grid.carved_cells().collect();
        assert_eq!(
            cells,
            vec![
                Position::new(1, 1),
                Position::new(3, 1),
                Position::new(1, 3),
                Position::new(3, 3),
            ]
        );
    }

    #[test]
    fn test_find_on_border_prefers_rows() {
        let grid = Grid::from_symbols(&["#####", "#   S", "# # #", "#   #", "##S##"]).unwrap();
        // Bottom row is scanned before the right column
        assert_eq!(grid.find_on_border(CellState::Entrance), Some(Position::new(2, 4)));
        assert_eq!(grid.find_on_border(CellState::Exit), None);
    }

    #[test]
    fn test_find_on_border_prefers_left_column() {
        let grid = Grid::from_symbols(&["#####", "S   S", "# # #", "#   #", "#####"]).unwrap();
        // No entrance in either row: the left column comes before the right
        assert_eq!(grid.find_on_border(CellState::Entrance), Some(Position::new(0, 1)));
    }

    #[test]
    fn test_from_cells_rejects_bad_input() {
        assert!(matches!(
            Grid::from_cells(3, vec![CellState::Wall; 8]),
            Err(MazeError::InvalidArgument(_))
        ));
        assert!(matches!(
            Grid::from_cells(1, vec![CellState::Wall]),
            Err(MazeError::InvalidArgument(_))
        ));
        assert!(matches!(
            Grid::from_symbols(&["###", "#?#", "###"]),
            Err(MazeError::InvalidArgument(_))
        ));
        assert!(matches!(
            Grid::from_symbols(&["###", "# ", "###"]),
            Err(MazeError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_iter_positions() {
        let grid = Grid::from_symbols(&["#S#", "# #", "#E#"]).unwrap();
        let open: Vec<(Position, CellState)> =
            grid.iter().filter(|(_, s)| s.is_passable()).collect();
        assert_eq!(
            open,
            vec![
                (Position::new(1, 0), CellState::Entrance),
                (Position::new(1, 1), CellState::Path),
                (Position::new(1, 2), CellState::Exit),
            ]
        );
    }
}
