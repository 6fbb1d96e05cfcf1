use crate::maze::Cell;

/// Errors raised by the maze core.
///
/// Unsolvable mazes and rejected player moves are not errors: they are reported through
/// `Option` and [`MoveResult`](crate::session::MoveResult) respectively.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// The requested grid is too small to hold a maze.
    #[error("Invalid configuration: grid size {grid_size} is below the minimum of {min}")]
    InvalidConfiguration { grid_size: u8, min: u8 },

    /// A cell outside the grid was read or written.
    #[error("Cell {cell} is out of range for a {size}x{size} grid")]
    OutOfRange { cell: Cell, size: u8 },
}
