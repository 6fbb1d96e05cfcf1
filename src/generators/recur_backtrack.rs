use rand::{Rng, seq::SliceRandom};

use crate::{
    error::MazeError,
    maze::{Cell, CellState, Direction, Grid},
};

/// Distance between two rooms of the coarse lattice. The cell in between is the wall separating them.
const ROOM_STEP: u8 = 2;

/// A cell being carved from, with the directions it still has to try.
struct Frame {
    cell: Cell,
    directions: [Direction; 4],
    next: usize,
}

impl Frame {
    fn enter<R: Rng + ?Sized>(cell: Cell, rng: &mut R) -> Self {
        let mut directions = Direction::ALL;
        directions.shuffle(rng);
        Frame {
            cell,
            directions,
            next: 0,
        }
    }
}

/// Carve a perfect maze into `grid` by depth-first backtracking over the rooms at even coordinates,
/// starting from (0, 0).
///
/// Every cell entered shuffles its four directions once, then tries them in that order, descending
/// into the first room that is still a wall before trying the next direction. The frame stack
/// replaces call recursion so large grids cannot overflow the call stack.
pub fn recursive_backtrack<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> Result<(), MazeError> {
    // Initialize the grid with walls
    (0..grid.size()).try_for_each(|row| {
        (0..grid.size()).try_for_each(|col| grid.set(Cell::new(row, col), CellState::Wall))
    })?;

    let start = Cell::new(0, 0);
    grid.set(start, CellState::Open)?;
    let mut stack = vec![Frame::enter(start, rng)];

    while let Some(frame) = stack.last_mut() {
        let Some(&direction) = frame.directions.get(frame.next) else {
            // Every direction tried, backtrack
            stack.pop();
            continue;
        };
        frame.next += 1;
        let cell = frame.cell;

        let (Some(between), Some(target)) =
            (cell.step(direction, 1), cell.step(direction, ROOM_STEP))
        else {
            continue;
        };
        // Out of bounds and already carved rooms are both skipped here
        if grid.get(target) != Ok(CellState::Wall) {
            continue;
        }

        grid.set(target, CellState::Open)?;
        grid.set(between, CellState::Open)?;
        stack.push(Frame::enter(target, rng));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::get_rng;
    use std::collections::{HashSet, VecDeque};

    /// Number of 4-adjacent open pairs in the grid.
    fn count_open_edges(grid: &Grid) -> usize {
        grid.cells()
            .filter(|&(_, state)| state == CellState::Open)
            .map(|(cell, _)| {
                [Direction::Right, Direction::Down]
                    .into_iter()
                    .filter_map(|d| cell.step(d, 1))
                    .filter(|&n| grid.is_open(n))
                    .count()
            })
            .sum()
    }

    fn reachable_from(grid: &Grid, start: Cell) -> HashSet<Cell> {
        let mut seen = HashSet::from([start]);
        let mut queue = VecDeque::from([start]);
        while let Some(cell) = queue.pop_front() {
            for n in grid.open_neighbors(cell) {
                if seen.insert(n) {
                    queue.push_back(n);
                }
            }
        }
        seen
    }

    #[test]
    fn test_carving_is_a_spanning_tree() {
        for size in 2..=24 {
            for seed in 0..5 {
                let mut grid = Grid::new(size, CellState::Wall);
                recursive_backtrack(&mut grid, &mut get_rng(Some(seed))).unwrap();

                let open = grid.count_open();
                // A tree has exactly one edge less than it has nodes
                assert_eq!(count_open_edges(&grid), open - 1, "size {size} seed {seed}");
                // ... and is connected
                assert_eq!(reachable_from(&grid, Cell::new(0, 0)).len(), open);

                // Every room of the coarse lattice is carved
                for row in (0..size).step_by(2) {
                    for col in (0..size).step_by(2) {
                        assert!(grid.is_open(Cell::new(row, col)));
                    }
                }
                // Cells with two odd coordinates are never carved
                for row in (1..size).step_by(2) {
                    for col in (1..size).step_by(2) {
                        assert!(!grid.is_open(Cell::new(row, col)));
                    }
                }
            }
        }
    }

    #[test]
    fn test_resets_existing_grid() {
        let mut grid = Grid::new(9, CellState::Open);
        recursive_backtrack(&mut grid, &mut get_rng(Some(3))).unwrap();
        let mut fresh = Grid::new(9, CellState::Wall);
        recursive_backtrack(&mut fresh, &mut get_rng(Some(3))).unwrap();
        assert_eq!(grid, fresh);
    }

    #[test]
    fn test_different_seeds_differ() {
        let carve = |seed| {
            let mut grid = Grid::new(21, CellState::Wall);
            recursive_backtrack(&mut grid, &mut get_rng(Some(seed))).unwrap();
            grid
        };
        assert_ne!(carve(1), carve(2));
    }
}
