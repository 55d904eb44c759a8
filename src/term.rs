use std::io::{stdout, Stdout, Write};

use anyhow::{Context, Result};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue, style, terminal};

use crate::Coords;

/// Owns the process-wide terminal state: raw mode, the alternate screen and
/// cursor visibility. `setup` acquires all three; `restore` puts them back
/// and also runs from Drop, so every exit path releases the terminal.
pub struct TermManager {
    stdout: Stdout,
    raw: bool,
}

impl TermManager {
    pub fn new() -> Self {
        TermManager { stdout: stdout(), raw: false }
    }

    pub fn setup(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("enabling raw mode")?;
        self.raw = true;
        execute!(self.stdout, EnterAlternateScreen, cursor::Hide)
            .context("entering alternate screen")?;
        Ok(())
    }

    pub fn restore(&mut self) -> Result<()> {
        if !self.raw {
            return Ok(());
        }
        self.raw = false;

        execute!(self.stdout, cursor::Show, LeaveAlternateScreen)
            .context("leaving alternate screen")?;
        terminal::disable_raw_mode().context("disabling raw mode")?;
        Ok(())
    }

    /// Current terminal size, or None when probing fails (the caller falls
    /// back to the default board and surfaces a diagnostic).
    pub fn probe_size(&self) -> Option<Coords> {
        terminal::size().ok()
    }

    pub fn clear(&mut self) -> Result<()> {
        execute!(
            self.stdout,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )
        .context("clearing the screen")?;
        Ok(())
    }

    /// Writes a full frame in one pass. The cursor is homed to the top-left
    /// instead of clearing, so successive frames overwrite each other
    /// without flicker.
    pub fn draw_frame(&mut self, rows: &[String]) -> Result<()> {
        for (y, row) in rows.iter().enumerate() {
            queue!(self.stdout, cursor::MoveTo(0, y as u16), style::Print(row))?;
        }

        self.stdout.flush().context("flushing a frame")?;
        Ok(())
    }
}

impl Drop for TermManager {
    fn drop(&mut self) {
        // Nothing sensible to do with a failure while unwinding.
        let _ = self.restore();
    }
}
