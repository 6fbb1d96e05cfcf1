use rand::{Rng, SeedableRng, rngs::StdRng};

mod recur_backtrack;

use recur_backtrack::recursive_backtrack;

use crate::{
    error::MazeError,
    maze::{CellState, Grid, MIN_GRID_SIZE, Maze},
};

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Generate a perfect maze of `grid_size` x `grid_size` cells.
/// The same seed and size always produce the same maze; `None` draws a seed from the OS.
pub fn generate(grid_size: u8, seed: Option<u64>) -> Result<Maze, MazeError> {
    let mut rng = get_rng(seed);
    generate_with_rng(grid_size, &mut rng)
}

/// Generate a perfect maze drawing every shuffle from `rng`.
pub fn generate_with_rng<R: Rng + ?Sized>(grid_size: u8, rng: &mut R) -> Result<Maze, MazeError> {
    if grid_size < MIN_GRID_SIZE {
        return Err(MazeError::InvalidConfiguration {
            grid_size,
            min: MIN_GRID_SIZE,
        });
    }

    let mut grid = Grid::new(grid_size, CellState::Wall);
    recursive_backtrack(&mut grid, rng)?;
    let maze = Maze::new(grid)?;

    tracing::debug!(
        "[generate] Carved a {}x{} maze with {} open cells\n{}",
        grid_size,
        grid_size,
        maze.grid().count_open(),
        maze
    );
    Ok(maze)
}
