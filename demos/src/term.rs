//! Crossterm rendering of a search in progress.
//!
//! [`TerminalView`] is an [`Observer`]: after every step it redraws only the
//! cells reported by [`SearchView::changes`], sleeps for the configured
//! delay, and turns a `q`/`Esc` key press into a cancellation request.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute, queue,
    style::{Color as CtColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use gridsearch_core::{CellState, Grid, Point};
use gridsearch_paths::{CancelToken, Observer, SearchView};

const COL_BACKGROUND: CtColor = CtColor::Rgb { r: 255, g: 255, b: 255 };
const COL_OBSTACLE: CtColor = CtColor::Rgb { r: 0, g: 0, b: 0 };
const COL_START: CtColor = CtColor::Rgb { r: 14, g: 41, b: 84 };
const COL_END: CtColor = CtColor::Rgb { r: 46, g: 138, b: 153 };
const COL_PATH: CtColor = CtColor::Rgb { r: 155, g: 205, b: 210 };
const COL_VISITED: CtColor = CtColor::Rgb { r: 255, g: 222, b: 222 };
const COL_FRONTIER: CtColor = CtColor::Rgb { r: 255, g: 133, b: 81 };

/// Maps a cell state to its background colour.
fn state_color(state: CellState) -> CtColor {
    match state {
        CellState::Unvisited => COL_BACKGROUND,
        CellState::Frontier => COL_FRONTIER,
        CellState::Visited => COL_VISITED,
        CellState::Path => COL_PATH,
        CellState::Start => COL_START,
        CellState::End => COL_END,
    }
}

/// Terminal column of a grid cell (each cell is two characters wide).
#[inline]
fn screen_pos(p: Point) -> (u16, u16) {
    ((p.col * 2) as u16, p.row as u16)
}

/// Keys the visualizer reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Run(usize),
    NewGrid,
    ClearObstacles,
}

/// Map a key to a [`Command`].
pub fn to_command(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char(c @ '1'..='4') => Some(Command::Run(c as usize - '1' as usize)),
        KeyCode::Char('n') => Some(Command::NewGrid),
        KeyCode::Char('c') => Some(Command::ClearObstacles),
        _ => None,
    }
}

/// Observer that animates a search on stdout.
pub struct TerminalView {
    out: Stdout,
    delay: Duration,
    cancel: CancelToken,
    status_row: u16,
    failed: Option<io::Error>,
}

impl TerminalView {
    /// Switch the terminal to raw mode on the alternate screen.
    pub fn open(delay: Duration) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        Ok(Self {
            out,
            delay,
            cancel: CancelToken::new(),
            status_row: 0,
            failed: None,
        })
    }

    /// Token polled by the running search.
    pub fn token(&self) -> &CancelToken {
        &self.cancel
    }

    /// Draw the grid with no search state: obstacles and the endpoints.
    pub fn draw_grid(&mut self, grid: &Grid, start: Point, end: Point) -> io::Result<()> {
        queue!(self.out, terminal::Clear(ClearType::All))?;
        for cell in grid {
            let color = if cell.is_obstacle() {
                COL_OBSTACLE
            } else if cell.pos() == start {
                COL_START
            } else if cell.pos() == end {
                COL_END
            } else {
                COL_BACKGROUND
            };
            self.paint(cell.pos(), color)?;
        }
        self.status_row = grid.side() as u16 + 1;
        queue!(self.out, ResetColor)?;
        self.out.flush()
    }

    /// Write a line of text below the grid.
    pub fn status(&mut self, text: &str) -> io::Result<()> {
        queue!(
            self.out,
            cursor::MoveTo(0, self.status_row),
            terminal::Clear(ClearType::CurrentLine),
            ResetColor,
            SetForegroundColor(CtColor::Reset),
            Print(text)
        )?;
        self.out.flush()
    }

    /// Block until a key mapped to a [`Command`] is pressed.
    pub fn wait_command(&mut self) -> io::Result<Command> {
        loop {
            if let Event::Key(KeyEvent { code, kind, .. }) = event::read()? {
                if kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(cmd) = to_command(code) {
                    return Ok(cmd);
                }
            }
        }
    }

    /// The first I/O error raised while observing, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.failed.take()
    }

    /// Restore the terminal.
    pub fn close(&mut self) {
        let _ = execute!(self.out, ResetColor, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }

    fn paint(&mut self, p: Point, color: CtColor) -> io::Result<()> {
        let (x, y) = screen_pos(p);
        queue!(
            self.out,
            cursor::MoveTo(x, y),
            SetBackgroundColor(color),
            Print("  ")
        )
    }

    fn render_step(&mut self, view: &SearchView<'_>) -> io::Result<()> {
        for (p, state) in view.changes() {
            self.paint(p, state_color(state))?;
        }
        queue!(self.out, ResetColor)?;
        self.out.flush()?;

        // Non-blocking poll for a cancel key while the delay elapses.
        if event::poll(self.delay)? {
            if let Event::Key(KeyEvent { code, kind, .. }) = event::read()? {
                if kind == KeyEventKind::Press && to_command(code) == Some(Command::Quit) {
                    self.cancel.cancel();
                }
            }
        }
        Ok(())
    }
}

impl Observer for TerminalView {
    fn observe(&mut self, view: &SearchView<'_>) {
        if let Err(e) = self.render_step(view) {
            log::warn!("terminal update failed: {e}");
            self.failed.get_or_insert(e);
            self.cancel.cancel();
        }
    }

    fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl Drop for TerminalView {
    fn drop(&mut self) {
        self.close();
    }
}
