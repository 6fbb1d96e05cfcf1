use crate::error::MazeError;

use super::cell::{Cell, CellState, Direction};

/// A square matrix of wall/open cells. The size is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    data: Box<[CellState]>,
    size: u8,
}

impl Grid {
    pub fn new(size: u8, state: CellState) -> Self {
        let data = vec![state; size as usize * size as usize].into_boxed_slice();
        Grid { data, size }
    }

    /// Number of rows (and columns) of the grid.
    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row < self.size && cell.col < self.size
    }

    fn ravel_index(&self, cell: Cell) -> usize {
        cell.row as usize * self.size as usize + cell.col as usize
    }

    pub fn get(&self, cell: Cell) -> Result<CellState, MazeError> {
        if !self.in_bounds(cell) {
            return Err(MazeError::OutOfRange {
                cell,
                size: self.size,
            });
        }
        Ok(self.data[self.ravel_index(cell)])
    }

    pub fn set(&mut self, cell: Cell, state: CellState) -> Result<(), MazeError> {
        if !self.in_bounds(cell) {
            return Err(MazeError::OutOfRange {
                cell,
                size: self.size,
            });
        }
        let idx = self.ravel_index(cell);
        self.data[idx] = state;
        Ok(())
    }

    /// True iff the cell is in bounds and open.
    pub fn is_open(&self, cell: Cell) -> bool {
        matches!(self.get(cell), Ok(CellState::Open))
    }

    /// Open cells sharing an edge with `cell`, in East, South, North, West order.
    pub fn open_neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        Direction::SEARCH_ORDER
            .into_iter()
            .filter_map(move |direction| cell.step(direction, 1))
            .filter(move |&neighbor| self.is_open(neighbor))
    }

    pub fn count_open(&self) -> usize {
        self.data.iter().filter(|&&s| s == CellState::Open).count()
    }

    /// All cells in row-major order with their state.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, CellState)> + '_ {
        let size = self.size as usize;
        self.data.iter().enumerate().map(move |(idx, &state)| {
            // Both quotient and remainder are below `size`, which fits in u8
            (Cell::new((idx / size) as u8, (idx % size) as u8), state)
        })
    }

    /// Build a grid from rows of `#` (wall) and `.` (open) characters.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: &[&str]) -> Self {
        let size = rows.len() as u8;
        let mut grid = Grid::new(size, CellState::Wall);
        for (row, line) in rows.iter().enumerate() {
            assert_eq!(line.len(), rows.len(), "Grid rows must form a square");
            for (col, ch) in line.chars().enumerate() {
                let state = match ch {
                    '.' => CellState::Open,
                    '#' => CellState::Wall,
                    other => panic!("Unexpected grid character {other:?}"),
                };
                grid.set(Cell::new(row as u8, col as u8), state).unwrap();
            }
        }
        grid
    }
}

impl std::ops::Index<Cell> for Grid {
    type Output = CellState;

    /// Panics on out-of-range cells: callers are expected to check [`Grid::in_bounds`] first.
    fn index(&self, cell: Cell) -> &Self::Output {
        assert!(
            self.in_bounds(cell),
            "Cell {} is out of range for a {}x{} grid",
            cell,
            self.size,
            self.size
        );
        &self.data[self.ravel_index(cell)]
    }
}
