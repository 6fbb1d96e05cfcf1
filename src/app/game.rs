use std::{
    io::{Stdout, Write},
    time::{Duration, Instant},
};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    style::{Color, Stylize},
};

use super::{
    renderer::{self, HELP_PROMPT, Renderer},
    select_from_menu,
};
use crate::{
    animator::{AnimationStatus, PathAnimator},
    clock::SessionClock,
    config::{GameConfig, GridSize, SOLVERS},
    generators::generate,
    maze::{Cell, Direction, Maze},
    session::{MoveResult, PlayerSession},
    solvers::{Solver, solve_maze},
};

/// How a game run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GameExit {
    /// Play another maze of the same size
    NewMaze,
    /// Go back to the difficulty menu
    Menu,
}

/// One maze on screen: the player session plus everything the host layers on top of it.
struct Game<'a> {
    config: &'a GameConfig,
    title: String,
    session: PlayerSession,
    clock: SessionClock,
    /// Solution playback in progress. Arrow keys are ignored while this is set.
    animator: Option<PathAnimator>,
    renderer: Renderer,
    /// Last time the clock line was drawn
    clock_drawn_at: Instant,
}

impl<'a> Game<'a> {
    fn new(config: &'a GameConfig, grid_size: GridSize, seed: Option<u64>) -> std::io::Result<Self> {
        let maze = generate(grid_size.cells(), seed).map_err(std::io::Error::other)?;
        Ok(Game::with_maze(config, renderer::title_line(grid_size), maze))
    }

    fn with_maze(config: &'a GameConfig, title: String, maze: Maze) -> Self {
        Game {
            config,
            title,
            renderer: Renderer::new(maze.size()),
            session: PlayerSession::new(maze),
            clock: SessionClock::start(),
            animator: None,
            clock_drawn_at: Instant::now(),
        }
    }

    fn draw_all<W: Write>(&mut self, out: &mut W) -> std::io::Result<()> {
        self.renderer.draw_all(out, &self.title, &self.session)?;
        self.draw_clock(out)
    }

    fn draw_clock<W: Write>(&mut self, out: &mut W) -> std::io::Result<()> {
        self.clock_drawn_at = Instant::now();
        self.renderer.draw_clock(out, self.clock.elapsed())
    }

    /// Redraw the cells the player left and entered.
    fn draw_player_move<W: Write>(&self, out: &mut W, from: Cell, to: Cell) -> std::io::Result<()> {
        self.renderer.draw_cell(out, &self.session, from)?;
        self.renderer.draw_cell(out, &self.session, to)
    }

    /// How long the event loop may block before the animation or the clock needs attention.
    fn poll_timeout(&self, now: Instant) -> Duration {
        let clock_due = if self.clock.is_running() {
            self.clock_drawn_at + self.config.clock_tick
        } else {
            now + self.config.clock_tick
        };
        let due = match self.animator.as_ref().and_then(PathAnimator::next_due) {
            Some(step_due) => step_due.min(clock_due),
            None => clock_due,
        };
        due.saturating_duration_since(now)
    }

    /// Handle a key press. Returns `Some` when the game should end.
    fn handle_key<W: Write>(&mut self, out: &mut W, code: KeyCode) -> std::io::Result<Option<GameExit>> {
        let direction = match code {
            KeyCode::Esc => return Ok(Some(GameExit::Menu)),
            KeyCode::Char('n') => return Ok(Some(GameExit::NewMaze)),
            KeyCode::Char('h') => {
                self.open_help(out)?;
                return Ok(None);
            }
            KeyCode::Up => Direction::Up,
            KeyCode::Down => Direction::Down,
            KeyCode::Left => Direction::Left,
            KeyCode::Right => Direction::Right,
            _ => return Ok(None),
        };

        if self.animator.is_some() {
            return Ok(None);
        }
        let from = self.session.position();
        if let MoveResult::Moved(to) = self.session.attempt_move(direction) {
            self.draw_player_move(out, from, to)?;
            if self.session.check_goal() {
                self.on_goal(out)?;
            }
        }
        Ok(None)
    }

    /// Pause the clock and let the player pick a solver.
    fn open_help<W: Write>(&mut self, out: &mut W) -> std::io::Result<()> {
        self.clock.pause();
        execute!(out, cursor::MoveTo(0, self.renderer.menu_row()))?;
        let choice = select_from_menu(out, HELP_PROMPT, &SOLVERS)?;
        self.close_help(out, choice)
    }

    /// Act on the solver menu result. Closing it without a choice resumes the clock only while
    /// the maze is still unsolved.
    fn close_help<W: Write>(&mut self, out: &mut W, choice: Option<Solver>) -> std::io::Result<()> {
        match choice {
            Some(solver) => self.start_solve(out, solver)?,
            None if self.session.is_running() => self.clock.resume(),
            None => {}
        }
        Ok(())
    }

    /// Send the player back to the start, restart the clock, and animate the solver's path.
    fn start_solve<W: Write>(&mut self, out: &mut W, solver: Solver) -> std::io::Result<()> {
        if let Some(mut animator) = self.animator.take() {
            animator.cancel();
        }

        let from = self.session.position();
        let start = self.session.maze().start();
        self.session.reset(start);
        self.clock.restart();
        self.draw_player_move(out, from, start)?;
        self.draw_clock(out)?;

        match solve_maze(self.session.maze(), solver) {
            Some(path) => {
                self.renderer.draw_message(
                    out,
                    Some(renderer::solving_message(solver, path.len()).with(Color::Blue)),
                )?;
                self.animator = Some(PathAnimator::play(path, self.config.step_delay));
            }
            None => {
                self.renderer.draw_message(
                    out,
                    Some(renderer::no_path_message(solver).with(Color::Red).bold()),
                )?;
            }
        }
        Ok(())
    }

    /// Advance the animation and refresh the clock when due.
    fn tick<W: Write>(&mut self, out: &mut W, now: Instant) -> std::io::Result<()> {
        if let Some(animator) = self.animator.as_mut() {
            let from = self.session.position();
            let mut stepped = None;
            let status = animator.poll(now, &mut self.session, |cell| stepped = Some(cell));
            if let Some(to) = stepped {
                self.draw_player_move(out, from, to)?;
            }
            match status {
                AnimationStatus::Finished { goal_reached } => {
                    self.animator = None;
                    if goal_reached {
                        self.on_goal(out)?;
                    }
                }
                AnimationStatus::Cancelled => self.animator = None,
                AnimationStatus::Waiting | AnimationStatus::Stepped(_) => {}
            }
        }

        if self.clock.is_running() && now >= self.clock_drawn_at + self.config.clock_tick {
            self.draw_clock(out)?;
        }
        Ok(())
    }

    fn on_goal<W: Write>(&mut self, out: &mut W) -> std::io::Result<()> {
        self.clock.pause();
        let elapsed = self.clock.elapsed();
        tracing::info!(
            "[game] Goal reached in {:.2} sec after {} moves",
            elapsed.as_secs_f64(),
            self.session.moves()
        );
        self.draw_clock(out)?;
        self.renderer.draw_message(
            out,
            Some(renderer::goal_message(elapsed).with(Color::Green).bold()),
        )
    }
}

/// Play one maze of the given size until the player leaves it.
///
/// Everything runs on the calling thread: the loop blocks on terminal input for at most the time
/// until the next animation step or clock refresh, then advances whatever is due.
pub(crate) fn run(
    stdout: &mut Stdout,
    config: &GameConfig,
    grid_size: GridSize,
    seed: Option<u64>,
) -> std::io::Result<GameExit> {
    let mut game = Game::new(config, grid_size, seed)?;
    tracing::info!("[game] Starting a {} game with seed {:?}", grid_size, seed);
    game.draw_all(stdout)?;

    loop {
        let timeout = game.poll_timeout(Instant::now());
        if event::poll(timeout)?
            && let Event::Key(KeyEvent { code, kind, .. }) = event::read()?
            && kind == KeyEventKind::Press
            && let Some(exit) = game.handle_key(stdout, code)?
        {
            tracing::debug!("[game] Leaving game: {:?}", exit);
            return Ok(exit);
        }
        game.tick(stdout, Instant::now())?;
    }
}
