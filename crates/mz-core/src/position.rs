//! Grid coordinates, directions and border sides

use strum::{Display, EnumIter};

/// An addressable grid coordinate, cell or wall slot
///
/// `x` is the column and `y` the row. Coordinates are signed so that
/// neighbour candidates just outside the grid can be formed and rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position moved one step in `dir`
    pub const fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    /// Coordinate halfway between two positions (the wall between two cells)
    pub const fn midpoint(self, other: Position) -> Self {
        Self::new((self.x + other.x) / 2, (self.y + other.y) / 2)
    }
}

/// Solver facing direction
///
/// The discriminants fix the rotation order used by the wall follower.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[repr(u8)]
pub enum Direction {
    Up = 0,
    Left = 1,
    Down = 2,
    Right = 3,
}

impl Direction {
    /// Next direction in the cyclic order Up, Left, Down, Right
    pub const fn rotate(self) -> Self {
        match self {
            Direction::Up => Direction::Left,
            Direction::Left => Direction::Down,
            Direction::Down => Direction::Right,
            Direction::Right => Direction::Up,
        }
    }

    /// (dx, dy) offset of one step; `y` grows downwards
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Down => (0, 1),
            Direction::Right => (1, 0),
        }
    }
}

/// One of the four outer walls of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Side {
    Top,
    Left,
    Bottom,
    Right,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Left, Side::Bottom, Side::Right];

    /// Border coordinate at `offset` along this side of a grid of side
    /// `dimension`, paired with the interior coordinate next to it.
    pub const fn border_cell(self, dimension: i32, offset: i32) -> (Position, Position) {
        let last = dimension - 1;
        match self {
            Side::Top => (Position::new(offset, 0), Position::new(offset, 1)),
            Side::Bottom => (Position::new(offset, last), Position::new(offset, last - 1)),
            Side::Left => (Position::new(0, offset), Position::new(1, offset)),
            Side::Right => (Position::new(last, offset), Position::new(last - 1, offset)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_is_cyclic() {
        let mut dir = Direction::Down;
        let mut seen = Vec::new();
        for _ in 0..4 {
            dir = dir.rotate();
            seen.push(dir);
        }
        assert_eq!(
            seen,
            vec![Direction::Right, Direction::Up, Direction::Left, Direction::Down]
        );
    }

    #[test]
    fn test_step_and_midpoint() {
        let p = Position::new(3, 3);
        assert_eq!(p.step(Direction::Up), Position::new(3, 2));
        assert_eq!(p.step(Direction::Right), Position::new(4, 3));
        assert_eq!(p.midpoint(Position::new(5, 3)), Position::new(4, 3));
    }

    #[test]
    fn test_border_cell() {
        assert_eq!(
            Side::Right.border_cell(7, 3),
            (Position::new(6, 3), Position::new(5, 3))
        );
        assert_eq!(
            Side::Top.border_cell(7, 5),
            (Position::new(5, 0), Position::new(5, 1))
        );
    }
}
