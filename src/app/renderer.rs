use std::{fmt, io::Write, time::Duration};

use crossterm::{
    cursor, queue,
    style::{self, Color, StyledContent, Stylize},
    terminal::{self, ClearType},
};
use unicode_truncate::UnicodeTruncateStr;
use unicode_width::UnicodeWidthStr;

use crate::{
    config::{GridSize, SOLVERS},
    maze::{Cell, CellState},
    session::PlayerSession,
    solvers::Solver,
};

/// What a single maze cell looks like on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Tile {
    Wall,
    Open,
    Start,
    End,
    Player,
}

impl Tile {
    /// The width of each tile when rendered, in character widths.
    pub(crate) const WIDTH: u16 = 2;

    /// Tile for `cell`, with the player drawn over everything else.
    pub(crate) fn at(session: &PlayerSession, cell: Cell) -> Tile {
        let maze = session.maze();
        if cell == session.position() {
            Tile::Player
        } else if cell == maze.start() {
            Tile::Start
        } else if cell == maze.end() {
            Tile::End
        } else {
            match maze.grid()[cell] {
                CellState::Wall => Tile::Wall,
                CellState::Open => Tile::Open,
            }
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = match self {
            Tile::Wall => "██".with(Color::Cyan),
            Tile::Open => "  ".on(Color::DarkYellow),
            Tile::Start => "🟩".with(Color::Green),
            Tile::End => "🟥".with(Color::Red),
            Tile::Player => "🔵".with(Color::Blue),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                Tile::WIDTH as usize,
                "Each tile must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}

/// Key bindings shown under the maze.
pub(crate) const CONTROLS: &str = "←→↑↓: move  h: solve  n: new  Esc: menu";
/// Prompt of the solver menu opened with `h`.
pub(crate) const HELP_PROMPT: &str = "Pick a solver (↑↓ Enter, Esc to close):";

pub(crate) fn title_line(grid_size: GridSize) -> String {
    format!("Maze Run | {}", grid_size)
}

pub(crate) fn clock_line(elapsed: Duration) -> String {
    format!("Time: {} sec", elapsed.as_secs())
}

pub(crate) fn goal_message(elapsed: Duration) -> String {
    format!("Solved in {:.2}s! n: new, Esc: menu", elapsed.as_secs_f64())
}

pub(crate) fn solving_message(solver: Solver, path_len: usize) -> String {
    format!("{}: {} cells", solver, path_len)
}

pub(crate) fn no_path_message(solver: Solver) -> String {
    format!("{}: no path", solver)
}

/// Screen layout of one game: a title line, the maze, then status lines below it.
///
/// Every status line is cut to `width` columns so it never wraps onto the rows below.
pub(crate) struct Renderer {
    size: u16,
    width: u16,
}

impl Renderer {
    /// Rows taken by the title line
    const MAZE_TOP: u16 = 1;
    /// Rows below the maze: blank, clock, message, controls, blank
    const NUM_STATUS_ROWS: u16 = 5;
    /// Rows reserved for the help menu
    pub(crate) const NUM_MENU_ROWS: u16 = 4;

    pub(crate) fn new(grid_size: u8) -> Self {
        Renderer {
            size: grid_size as u16,
            width: Self::required_terminal_size(grid_size).0,
        }
    }

    /// Widest line that is always drawn in full: controls, solver menu prompt and options.
    fn widest_fixed_line() -> u16 {
        let labels = SOLVERS.map(|solver| solver.to_string());
        [CONTROLS, HELP_PROMPT]
            .into_iter()
            .chain(labels.iter().map(String::as_str))
            .map(UnicodeWidthStr::width)
            .max()
            .unwrap_or(0) as u16
    }

    /// Terminal (columns, rows) needed to show a game of the given grid size.
    pub(crate) fn required_terminal_size(grid_size: u8) -> (u16, u16) {
        let size = grid_size as u16;
        (
            (size * Tile::WIDTH).max(Self::widest_fixed_line()),
            Self::MAZE_TOP + size + Self::NUM_STATUS_ROWS + Self::NUM_MENU_ROWS,
        )
    }

    fn clock_row(&self) -> u16 {
        Self::MAZE_TOP + self.size + 1
    }

    fn message_row(&self) -> u16 {
        self.clock_row() + 1
    }

    fn controls_row(&self) -> u16 {
        self.message_row() + 1
    }

    /// First row available to menus drawn under the game.
    pub(crate) fn menu_row(&self) -> u16 {
        self.controls_row() + 2
    }

    /// Clear the screen and draw title, maze and controls.
    pub(crate) fn draw_all<W: Write>(
        &self,
        out: &mut W,
        title: &str,
        session: &PlayerSession,
    ) -> std::io::Result<()> {
        queue!(
            out,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0),
            style::PrintStyledContent(title.with(Color::Yellow).bold()),
        )?;
        for row in 0..session.maze().size() {
            queue!(out, cursor::MoveTo(0, Self::MAZE_TOP + row as u16))?;
            for col in 0..session.maze().size() {
                queue!(out, style::Print(Tile::at(session, Cell::new(row, col))))?;
            }
        }
        self.draw_line(
            out,
            self.controls_row(),
            Some(CONTROLS.with(Color::Cyan)),
        )?;
        out.flush()
    }

    /// Redraw one maze cell.
    pub(crate) fn draw_cell<W: Write>(
        &self,
        out: &mut W,
        session: &PlayerSession,
        cell: Cell,
    ) -> std::io::Result<()> {
        queue!(
            out,
            cursor::MoveTo(
                cell.col as u16 * Tile::WIDTH,
                Self::MAZE_TOP + cell.row as u16
            ),
            style::Print(Tile::at(session, cell))
        )?;
        out.flush()
    }

    pub(crate) fn draw_clock<W: Write>(&self, out: &mut W, elapsed: Duration) -> std::io::Result<()> {
        self.draw_line(
            out,
            self.clock_row(),
            Some(clock_line(elapsed).with(Color::White).bold()),
        )
    }

    pub(crate) fn draw_message<W: Write, D: fmt::Display>(
        &self,
        out: &mut W,
        message: Option<StyledContent<D>>,
    ) -> std::io::Result<()> {
        self.draw_line(out, self.message_row(), message)
    }

    /// Clear `row` and print `line` on it, if any, cut to the layout width.
    fn draw_line<W: Write, D: fmt::Display>(
        &self,
        out: &mut W,
        row: u16,
        line: Option<StyledContent<D>>,
    ) -> std::io::Result<()> {
        queue!(
            out,
            cursor::MoveTo(0, row),
            terminal::Clear(ClearType::CurrentLine)
        )?;
        if let Some(line) = line {
            let text = line.content().to_string();
            let (fitted, _) = text.unicode_truncate(self.width as usize);
            queue!(
                out,
                style::PrintStyledContent(StyledContent::new(*line.style(), fitted))
            )?;
        }
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{generators::generate, maze::Direction, session::MoveResult};

    #[test]
    fn test_tiles_render_two_columns() {
        for tile in [Tile::Wall, Tile::Open, Tile::Start, Tile::End, Tile::Player] {
            // Display asserts the width in debug builds
            assert!(!tile.to_string().is_empty());
        }
    }

    #[test]
    fn test_tile_priority() {
        let mut session = PlayerSession::new(generate(10, Some(1)).unwrap());
        assert_eq!(Tile::at(&session, Cell::new(0, 0)), Tile::Player);
        assert_eq!(Tile::at(&session, Cell::new(8, 9)), Tile::End);
        // Odd-odd cells are never carved
        assert_eq!(Tile::at(&session, Cell::new(1, 1)), Tile::Wall);

        let moved = [Direction::Right, Direction::Down]
            .into_iter()
            .any(|d| matches!(session.attempt_move(d), MoveResult::Moved(_)));
        assert!(moved);
        assert_eq!(Tile::at(&session, Cell::new(0, 0)), Tile::Start);
    }

    #[test]
    fn test_draw_into_buffer() {
        let session = PlayerSession::new(generate(4, Some(0)).unwrap());
        let renderer = Renderer::new(4);
        let mut buf = Vec::new();
        renderer
            .draw_all(&mut buf, &title_line(GridSize::Small), &session)
            .unwrap();
        renderer.draw_cell(&mut buf, &session, Cell::new(2, 3)).unwrap();
        renderer
            .draw_clock(&mut buf, Duration::from_millis(3700))
            .unwrap();
        renderer
            .draw_message(&mut buf, Some("Solved".with(Color::Green)))
            .unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Maze Run | Easy (10x10)"));
        assert!(text.contains("Time: 3 sec"));
        assert!(text.contains("Solved"));
        assert!(text.contains("🟥"));
    }

    #[test]
    fn test_layout_fits_required_size() {
        let renderer = Renderer::new(20);
        let (cols, rows) = Renderer::required_terminal_size(20);
        assert_eq!(cols, 40);
        assert!(renderer.menu_row() + Renderer::NUM_MENU_ROWS <= rows);
        // Prompt, one row per solver, then the row the cursor ends on
        assert!(1 + SOLVERS.len() as u16 + 1 <= Renderer::NUM_MENU_ROWS);
    }

    #[test]
    fn test_status_lines_fit_required_width() {
        let slow = Duration::from_millis(3_599_990);
        for size in [GridSize::Small, GridSize::Medium, GridSize::Large] {
            let cols = Renderer::required_terminal_size(size.cells()).0 as usize;
            let mut lines = vec![
                CONTROLS.to_string(),
                HELP_PROMPT.to_string(),
                title_line(size),
                clock_line(slow),
                goal_message(slow),
            ];
            for solver in SOLVERS {
                lines.push(solver.to_string());
                lines.push(solving_message(solver, 400));
                lines.push(no_path_message(solver));
            }
            for line in lines {
                assert!(line.width() <= cols, "{line:?} is wider than {cols} columns");
            }
        }
    }

    #[test]
    fn test_long_lines_are_cut_to_width() {
        let renderer = Renderer::new(10);
        let width = Renderer::required_terminal_size(10).0 as usize;
        let long = "x".repeat(width + 15);
        let mut buf = Vec::new();
        renderer
            .draw_message(&mut buf, Some(long.as_str().with(Color::Red)))
            .unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains(&"x".repeat(width)));
        assert!(!text.contains(&"x".repeat(width + 1)));
    }
}
