mod game;
mod renderer;

use std::io::{Stdout, Write};

use crossterm::{
    ExecutableCommand, QueueableCommand, cursor,
    event::{self, KeyCode},
    queue,
    style::{self, Attribute, Color, Stylize},
    terminal::{self, ClearType},
};

use crate::config::{GRID_SIZES, GameConfig};
use game::GameExit;
use renderer::Renderer;

pub struct App {
    config: GameConfig,
}

impl App {
    pub fn new(config: GameConfig) -> Self {
        App { config }
    }

    /// Set a panic hook to restore terminal state on panic
    /// This ensures that the terminal is not left in raw mode or alternate screen on panic
    fn set_panic_hook() {
        let hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = App::restore_terminal(&mut std::io::stdout()); // ignore any errors as we are already failing
            hook(panic_info);
        }));
    }

    /// Setup terminal in raw mode and enter alternate screen
    /// Also sets a panic hook to restore terminal on panic
    pub fn setup_terminal(stdout: &mut Stdout) -> std::io::Result<()> {
        terminal::enable_raw_mode()?;
        App::set_panic_hook();
        queue!(
            stdout,
            terminal::EnterAlternateScreen,
            terminal::Clear(ClearType::All),
            cursor::Hide,
            cursor::MoveTo(0, 0)
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Restore terminal to original state
    /// Leave alternate screen and disable raw mode
    pub fn restore_terminal(stdout: &mut Stdout) -> std::io::Result<()> {
        queue!(stdout, terminal::LeaveAlternateScreen, cursor::Show)?;
        stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Main application loop: pick a difficulty, play mazes of that size, repeat until Esc.
    pub fn run(&self, stdout: &mut Stdout) -> std::io::Result<()> {
        tracing::info!("Started main app loop with {:?}", self.config);
        // Number of mazes generated so far, used to derive per-maze seeds
        let mut round = 0;
        loop {
            queue!(
                stdout,
                terminal::Clear(ClearType::All),
                cursor::MoveTo(0, 0),
                style::SetAttribute(Attribute::Reverse),
                style::PrintStyledContent("Maze Run\r\n".with(Color::Yellow)),
                style::SetAttribute(Attribute::NoReverse),
            )?;

            let grid_size = match select_from_menu(
                stdout,
                "Select difficulty level (use arrow keys and Enter, or Esc to exit):",
                &GRID_SIZES,
            )? {
                Some(grid_size) => grid_size,
                None => break,
            };

            if !App::check_terminal_size(stdout, grid_size.cells())? {
                continue;
            }

            loop {
                let seed = self.config.seed_for(round);
                round += 1;
                if game::run(stdout, &self.config, grid_size, seed)? != GameExit::NewMaze {
                    break;
                }
                tracing::info!("[game] New maze requested");
            }
        }
        tracing::info!("Exiting main app loop");
        Ok(())
    }

    /// Check that the terminal can show a maze of `grid_size` cells.
    /// If not, ask the user to resize and wait for Esc before returning `Ok(false)`.
    fn check_terminal_size(stdout: &mut Stdout, grid_size: u8) -> std::io::Result<bool> {
        let (term_width, term_height) = terminal::size()?;
        let (width, height) = Renderer::required_terminal_size(grid_size);
        if term_width >= width && term_height >= height {
            return Ok(true);
        }

        tracing::info!(
            "Terminal {}x{} too small for a {}x{} maze",
            term_width,
            term_height,
            grid_size,
            grid_size
        );
        let msg = format!(
            "Terminal size is too small ({}x{}) for this maze, it needs {}x{}. Please resize the terminal.\r\n",
            term_width, term_height, width, height
        );
        queue!(
            stdout,
            style::PrintStyledContent(msg.with(Color::Yellow).attribute(Attribute::Bold)),
            style::PrintStyledContent(
                "Press Esc to go back...\r\n"
                    .with(Color::Blue)
                    .attribute(Attribute::Bold)
            )
        )?;
        stdout.flush()?;
        wait_for_esc()?;
        Ok(false)
    }
}

/// Wait for the user to press the Esc key
/// This function blocks until Esc is pressed
fn wait_for_esc() -> std::io::Result<()> {
    loop {
        if let event::Event::Key(event::KeyEvent { code, kind, .. }) = event::read()?
            && code == KeyCode::Esc
            && kind == event::KeyEventKind::Press
        {
            break;
        }
    }
    Ok(())
}

/// Present a menu of options at the cursor and let the user select one using arrow keys
/// Returns None if user cancels input with Esc
/// Returns Some(T) if user selects an option and presses Enter
fn select_from_menu<W: Write, T: std::fmt::Display + Copy>(
    stdout: &mut W,
    prompt: &str,
    options: &[T],
) -> std::io::Result<Option<T>> {
    if options.is_empty() {
        return Ok(None);
    }

    // Save cursor position so we can restore / redraw
    queue!(stdout, cursor::Hide, cursor::SavePosition)?;

    let mut selected = 0;

    let selected_option = loop {
        // Re-render prompt line
        queue!(
            stdout,
            cursor::RestorePosition,
            terminal::Clear(ClearType::FromCursorDown)
        )?;

        // Print prompt
        stdout.queue(style::PrintStyledContent(prompt.with(Color::Yellow)))?;

        // Print options
        for (i, option) in options.iter().enumerate() {
            if i == selected {
                stdout.queue(style::SetAttribute(Attribute::Reverse))?;
            }
            stdout.queue(style::Print(format!("\r\n{}", option)))?;
            if i == selected {
                stdout.queue(style::SetAttribute(Attribute::NoReverse))?;
            }
        }
        stdout.queue(style::Print("\r\n"))?;

        stdout.flush()?;

        // Wait for key event
        if let event::Event::Key(event::KeyEvent { code, kind, .. }) = event::read()? {
            if kind != event::KeyEventKind::Press {
                // Only handle key press events
                continue;
            }
            match code {
                KeyCode::Up => {
                    selected = match selected {
                        0 => options.len() - 1,
                        _ => selected - 1,
                    };
                }
                KeyCode::Down => {
                    selected = if selected >= options.len() - 1 {
                        0
                    } else {
                        selected + 1
                    };
                }
                KeyCode::Enter => {
                    break Some(options[selected]);
                }
                KeyCode::Esc => {
                    // User cancelled input
                    break None;
                }
                _ => {}
            }
        }
    };
    // Cleanup
    queue!(
        stdout,
        cursor::RestorePosition,
        terminal::Clear(ClearType::FromCursorDown),
    )?;
    stdout.execute(style::ResetColor)?;

    Ok(selected_option)
}
