pub mod cell;
pub mod grid;

use std::fmt;

pub use cell::{Cell, CellState, Direction};
pub use grid::Grid;

use crate::error::MazeError;

/// Smallest grid that can hold both a start and an end cell.
pub const MIN_GRID_SIZE: u8 = 2;

/// A carved grid with its fixed start and end cells.
///
/// The grid is only reachable through a shared reference, so a maze is immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    grid: Grid,
    start: Cell,
    end: Cell,
}

impl Maze {
    /// Wraps a carved grid, placing the start at (0, 0) and the end at (size - 2, size - 1).
    /// Both cells are forced open regardless of what the grid holds.
    pub fn new(mut grid: Grid) -> Result<Self, MazeError> {
        let size = grid.size();
        if size < MIN_GRID_SIZE {
            return Err(MazeError::InvalidConfiguration {
                grid_size: size,
                min: MIN_GRID_SIZE,
            });
        }
        let start = Maze::start_cell();
        let end = Maze::end_cell(size);
        grid.set(start, CellState::Open)?;
        grid.set(end, CellState::Open)?;
        Ok(Maze { grid, start, end })
    }

    pub const fn start_cell() -> Cell {
        Cell::new(0, 0)
    }

    /// End cell for a grid of the given size. Only meaningful for `size >= 2`.
    pub const fn end_cell(size: u8) -> Cell {
        Cell::new(size - 2, size - 1)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn size(&self) -> u8 {
        self.grid.size()
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn end(&self) -> Cell {
        self.end
    }

    pub fn is_open(&self, cell: Cell) -> bool {
        self.grid.is_open(cell)
    }
}

impl fmt::Display for Maze {
    /// Plain text rendering, two characters per cell. Used for debug logs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size() {
            for col in 0..self.size() {
                let cell = Cell::new(row, col);
                let symbol = if cell == self.start {
                    "S "
                } else if cell == self.end {
                    "E "
                } else {
                    match self.grid[cell] {
                        CellState::Wall => "##",
                        CellState::Open => "  ",
                    }
                };
                f.write_str(symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
