use std::fmt;

/// The state of a single grid cell.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    #[default]
    Wall,
    Open,
}

/// A grid coordinate, 0-indexed from the top left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: u8,
    pub col: u8,
}

impl Cell {
    pub const fn new(row: u8, col: u8) -> Self {
        Cell { row, col }
    }

    /// The cell `distance` steps away in `direction`.
    /// Returns `None` if the coordinate would leave the `u8` range. Grid bounds are not checked here.
    pub fn step(self, direction: Direction, distance: u8) -> Option<Cell> {
        let Cell { row, col } = self;
        let cell = match direction {
            Direction::Up => Cell::new(row.checked_sub(distance)?, col),
            Direction::Down => Cell::new(row.checked_add(distance)?, col),
            Direction::Left => Cell::new(row, col.checked_sub(distance)?),
            Direction::Right => Cell::new(row, col.checked_add(distance)?),
        };
        Some(cell)
    }

    /// Whether `other` shares an edge with this cell.
    pub fn is_adjacent(self, other: Cell) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

impl From<(u8, u8)> for Cell {
    fn from((row, col): (u8, u8)) -> Self {
        Cell::new(row, col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four cardinal directions. `Up` decreases the row, `Left` decreases the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Base order shuffled by the generator at every carved cell.
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
    ];

    /// Neighbor enumeration order for graph searches: East, South, North, West.
    pub const SEARCH_ORDER: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::Up,
        Direction::Left,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_within_range() {
        let cell = Cell::new(3, 3);
        assert_eq!(cell.step(Direction::Up, 1), Some(Cell::new(2, 3)));
        assert_eq!(cell.step(Direction::Down, 2), Some(Cell::new(5, 3)));
        assert_eq!(cell.step(Direction::Left, 2), Some(Cell::new(3, 1)));
        assert_eq!(cell.step(Direction::Right, 1), Some(Cell::new(3, 4)));
    }

    #[test]
    fn test_step_underflow_and_overflow() {
        assert_eq!(Cell::new(1, 0).step(Direction::Up, 2), None);
        assert_eq!(Cell::new(0, 0).step(Direction::Left, 1), None);
        assert_eq!(Cell::new(u8::MAX, 0).step(Direction::Down, 1), None);
        assert_eq!(Cell::new(0, u8::MAX - 1).step(Direction::Right, 2), None);
    }

    #[test]
    fn test_adjacency() {
        let cell = Cell::new(2, 2);
        assert!(cell.is_adjacent(Cell::new(1, 2)));
        assert!(cell.is_adjacent(Cell::new(2, 3)));
        assert!(!cell.is_adjacent(Cell::new(3, 3)));
        assert!(!cell.is_adjacent(cell));
    }
}
