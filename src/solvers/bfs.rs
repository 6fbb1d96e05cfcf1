use std::collections::{HashSet, VecDeque};

use super::{Path, TrackedCell};
use crate::maze::Maze;

/// Breadth-first search from the maze start. The returned path has the fewest possible steps.
pub fn solve_bfs(maze: &Maze) -> Option<Path> {
    let (start, goal) = (maze.start(), maze.end());

    let mut queue = VecDeque::from([TrackedCell::root(start)]);
    // Cells are marked on discovery so none is queued twice
    let mut visited = HashSet::from([start]);

    while let Some(current) = queue.pop_front() {
        if current.coord == goal {
            tracing::debug!("[solve] BFS reached the goal after visiting {} cells", visited.len());
            return Some(current.into_path());
        }

        for neighbor in maze.grid().open_neighbors(current.coord) {
            if visited.insert(neighbor) {
                queue.push_back(TrackedCell::child(&current, neighbor));
            }
        }
    }

    tracing::debug!("[solve] BFS frontier exhausted after visiting {} cells", visited.len());
    None
}
