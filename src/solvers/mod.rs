use std::rc::Rc;

mod bfs;
mod dfs;

pub use bfs::solve_bfs;
pub use dfs::solve_dfs;

use crate::maze::{Cell, Maze};

/// A search node that remembers how it was reached.
/// Frontier entries share their common prefix through the parent links.
struct TrackedCell {
    /// Coordinates of the cell in the maze
    coord: Cell,
    /// The cell from which this cell was discovered
    parent: Option<Rc<TrackedCell>>,
}

impl TrackedCell {
    fn root(coord: Cell) -> Rc<Self> {
        Rc::new(TrackedCell {
            coord,
            parent: None,
        })
    }

    fn child(parent: &Rc<TrackedCell>, coord: Cell) -> Rc<Self> {
        Rc::new(TrackedCell {
            coord,
            parent: Some(Rc::clone(parent)),
        })
    }

    /// Walk the parent links back to the root and return the cells in start-to-here order.
    fn into_path(self: Rc<Self>) -> Path {
        let mut cells = vec![self.coord];
        let mut current = self;
        while let Some(parent) = current.parent.clone() {
            cells.push(parent.coord);
            current = parent;
        }
        cells.reverse();
        Path(cells)
    }
}

/// A start-to-end route through a maze. Consecutive cells are adjacent and open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path(Vec<Cell>);

impl Path {
    pub fn cells(&self) -> &[Cell] {
        &self.0
    }

    /// Number of cells on the path, both ends included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn start(&self) -> Option<Cell> {
        self.0.first().copied()
    }

    pub fn end(&self) -> Option<Cell> {
        self.0.last().copied()
    }

    /// Check that the path runs from the maze start to its end over adjacent open cells.
    pub fn is_valid_for(&self, maze: &Maze) -> bool {
        self.start() == Some(maze.start())
            && self.end() == Some(maze.end())
            && self.0.iter().all(|&cell| maze.is_open(cell))
            && self.0.windows(2).all(|pair| pair[0].is_adjacent(pair[1]))
    }
}

impl From<Vec<Cell>> for Path {
    fn from(cells: Vec<Cell>) -> Self {
        Path(cells)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Solver {
    Bfs,
    Dfs,
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::Bfs => write!(f, "Breadth-First Search (BFS)"),
            Solver::Dfs => write!(f, "Depth-First Search (DFS)"),
        }
    }
}

/// Solve the maze with the given algorithm. `None` means the end is unreachable from the start.
pub fn solve_maze(maze: &Maze, solver: Solver) -> Option<Path> {
    let path = match solver {
        Solver::Bfs => solve_bfs(maze),
        Solver::Dfs => solve_dfs(maze),
    };
    match &path {
        Some(path) => tracing::info!("[solve] {} found a path of {} cells", solver, path.len()),
        None => tracing::info!("[solve] {} found no path to {}", solver, maze.end()),
    }
    path
}
