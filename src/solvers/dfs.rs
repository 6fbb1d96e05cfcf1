use std::collections::HashSet;

use super::{Path, TrackedCell};
use crate::maze::Maze;

/// Depth-first search from the maze start.
///
/// Neighbors are pushed East, South, North, West, so the West neighbor is expanded first. The
/// route found depends only on that order, not on its length.
pub fn solve_dfs(maze: &Maze) -> Option<Path> {
    let (start, goal) = (maze.start(), maze.end());

    let mut stack = vec![TrackedCell::root(start)];
    let mut visited = HashSet::from([start]);

    while let Some(current) = stack.pop() {
        if current.coord == goal {
            tracing::debug!("[solve] DFS reached the goal after visiting {} cells", visited.len());
            return Some(current.into_path());
        }

        for neighbor in maze.grid().open_neighbors(current.coord) {
            if visited.insert(neighbor) {
                stack.push(TrackedCell::child(&current, neighbor));
            }
        }
    }

    tracing::debug!("[solve] DFS frontier exhausted after visiting {} cells", visited.len());
    None
}
