//! Terminal setup and management

use crate::error::Result;
use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use tracing::{debug, warn};

/// Runs `step` and calls `rollback` if it fails, so a half finished setup
/// never outlives its error.
fn with_rollback<T>(step: impl FnOnce() -> Result<T>, rollback: impl FnOnce()) -> Result<T> {
    let result = step();
    if result.is_err() {
        rollback();
    }
    result
}

/// Owns the real terminal for the lifetime of the dashboard and puts it
/// back the way it was on drop, including on early return or panic unwind.
pub struct TerminalManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalManager {
    /// Switch to raw mode and the alternate screen.
    ///
    /// If any step after raw mode fails, the terminal is restored before the
    /// error is returned.
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;
        let terminal = with_rollback(Self::enter, Self::restore)?;
        debug!("Terminal initialized");
        Ok(Self { terminal })
    }

    fn enter() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, Hide)?;
        Ok(Terminal::new(CrosstermBackend::new(stdout))?)
    }

    /// Best effort; every step runs even if an earlier one fails.
    fn restore() {
        if let Err(e) = disable_raw_mode() {
            warn!("Failed to leave raw mode: {}", e);
        }
        let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
    }

    /// Get mutable reference to terminal
    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Clear terminal
    pub fn clear(&mut self) -> Result<()> {
        self.terminal.clear()?;
        Ok(())
    }
}

impl Drop for TerminalManager {
    fn drop(&mut self) {
        Self::restore();
        debug!("Terminal restored");
    }
}
