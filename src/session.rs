use crate::maze::{Cell, Direction, Maze};

/// Outcome of a single move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// The player stepped onto the given cell
    Moved(Cell),
    /// The target is a wall or outside the grid; the player did not move
    Rejected,
    /// The session is not running (goal already reached)
    Ignored,
}

/// One player walking one maze.
///
/// Both keyboard input and solution playback go through this type, so the player can never stand
/// on a wall cell.
pub struct PlayerSession {
    /// The maze being played
    maze: Maze,
    /// Tracks where the player currently is
    position: Cell,
    /// False once the goal has been reached
    running: bool,
    /// Number of position changes since the last reset
    moves: usize,
}

impl PlayerSession {
    /// Start a session with the player on the maze start cell.
    pub fn new(maze: Maze) -> Self {
        let position = maze.start();
        PlayerSession {
            maze,
            position,
            running: true,
            moves: 0,
        }
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn moves(&self) -> usize {
        self.moves
    }

    /// Attempt to move the player one cell in `direction`.
    pub fn attempt_move(&mut self, direction: Direction) -> MoveResult {
        if !self.running {
            return MoveResult::Ignored;
        }

        match self.position.step(direction, 1) {
            Some(candidate) if self.maze.is_open(candidate) => {
                tracing::debug!("[session] Moving {:?} to {}", direction, candidate);
                self.position = candidate;
                self.moves += 1;
                MoveResult::Moved(candidate)
            }
            _ => {
                tracing::debug!("[session] Move {:?} from {} rejected", direction, self.position);
                MoveResult::Rejected
            }
        }
    }

    /// Put the player directly on `cell`. Used for replaying an already validated path.
    pub fn place(&mut self, cell: Cell) {
        debug_assert!(self.maze.is_open(cell), "Cannot place the player on {cell}");
        if cell != self.position {
            self.moves += 1;
        }
        self.position = cell;
    }

    /// Whether the player stands on the end cell. Reaching it stops the session; further calls
    /// keep returning true without changing anything else.
    pub fn check_goal(&mut self) -> bool {
        let reached = self.position == self.maze.end();
        if reached && self.running {
            tracing::info!("[session] Goal reached after {} moves", self.moves);
            self.running = false;
        }
        reached
    }

    /// Restart the session from `start`.
    pub fn reset(&mut self, start: Cell) {
        tracing::debug!("[session] Reset to {}", start);
        self.position = start;
        self.running = true;
        self.moves = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        generators::{generate, get_rng},
        solvers::tests::single_route_maze,
    };
    use rand::seq::IndexedRandom;

    #[test]
    fn test_moves_along_route() {
        let mut session = PlayerSession::new(single_route_maze());
        assert_eq!(session.position(), Cell::new(0, 0));

        assert_eq!(session.attempt_move(Direction::Right), MoveResult::Moved(Cell::new(0, 1)));
        assert!(!session.check_goal());
        assert_eq!(session.attempt_move(Direction::Down), MoveResult::Moved(Cell::new(1, 1)));
        assert_eq!(session.attempt_move(Direction::Right), MoveResult::Moved(Cell::new(1, 2)));
        assert_eq!(session.attempt_move(Direction::Down), MoveResult::Moved(Cell::new(2, 2)));
        assert_eq!(session.attempt_move(Direction::Right), MoveResult::Moved(Cell::new(2, 3)));
        assert_eq!(session.moves(), 5);
        assert!(session.check_goal());
        assert!(!session.is_running());
    }

    #[test]
    fn test_rejects_walls_and_edges() {
        let mut session = PlayerSession::new(single_route_maze());
        // Above and left of the start lie outside the grid
        assert_eq!(session.attempt_move(Direction::Up), MoveResult::Rejected);
        assert_eq!(session.attempt_move(Direction::Left), MoveResult::Rejected);
        // Below the start is a wall
        assert_eq!(session.attempt_move(Direction::Down), MoveResult::Rejected);
        assert_eq!(session.position(), Cell::new(0, 0));
        assert_eq!(session.moves(), 0);
        assert!(session.is_running());
    }

    #[test]
    fn test_check_goal_idempotent_and_moves_ignored() {
        let mut session = PlayerSession::new(single_route_maze());
        session.place(Cell::new(2, 3));
        assert!(session.check_goal());
        assert!(!session.is_running());
        assert!(session.check_goal());
        assert!(!session.is_running());

        assert_eq!(session.attempt_move(Direction::Left), MoveResult::Ignored);
        assert_eq!(session.position(), Cell::new(2, 3));
    }

    #[test]
    fn test_reset_restarts_session() {
        let mut session = PlayerSession::new(single_route_maze());
        session.place(Cell::new(2, 3));
        assert!(session.check_goal());

        session.reset(session.maze().start());
        assert!(session.is_running());
        assert_eq!(session.position(), Cell::new(0, 0));
        assert_eq!(session.moves(), 0);
        assert!(!session.check_goal());
        assert_eq!(session.attempt_move(Direction::Right), MoveResult::Moved(Cell::new(0, 1)));
    }

    #[test]
    fn test_random_walk_stays_on_open_cells() {
        let directions = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];
        let mut rng = get_rng(Some(11));
        for size in [2, 5, 10, 15, 20] {
            let mut session = PlayerSession::new(generate(size, Some(size as u64)).unwrap());
            for _ in 0..2000 {
                let direction = *directions.choose(&mut rng).unwrap();
                let before = session.position();
                match session.attempt_move(direction) {
                    MoveResult::Moved(cell) => assert!(before.is_adjacent(cell)),
                    MoveResult::Rejected => assert_eq!(session.position(), before),
                    MoveResult::Ignored => unreachable!("goal is never checked during the walk"),
                }
                assert!(session.maze().is_open(session.position()));
            }
        }
    }
}
