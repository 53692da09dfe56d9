//! Ownership of the player's terminal for the length of a session.

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::stderr;

/// Puts the terminal in raw mode on the alternate screen and restores it on
/// drop. Only the steps that succeeded are undone, so a failure halfway
/// through [`TerminalGuard::acquire`] still leaves the terminal usable.
pub struct TerminalGuard {
    raw_mode: bool,
    alternate_screen: bool,
}

impl TerminalGuard {
    pub fn acquire() -> Result<Self> {
        let mut guard = Self {
            raw_mode: false,
            alternate_screen: false,
        };

        enable_raw_mode().context("Failed to enable raw mode")?;
        guard.raw_mode = true;

        execute!(stderr(), EnterAlternateScreen).context("Failed to enter alternate screen")?;
        guard.alternate_screen = true;

        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Errors here have nowhere to go; the process is on its way out
        if self.alternate_screen {
            let _ = execute!(stderr(), LeaveAlternateScreen, Show);
        }
        if self.raw_mode {
            let _ = disable_raw_mode();
        }
    }
}
