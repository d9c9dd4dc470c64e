//! Console I/O.
//!
//! The narrator talks to the user only through [`Console`], so it can be
//! driven by a script in tests and by the terminal at runtime.

use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{self, Clear, ClearType};
use std::io::{BufRead, Stdout, Write};
use std::time::Duration;
use trebuchet_error::{ConsoleError, TrebuchetResult};
use tracing::{debug, instrument};

/// Line and keypress I/O with the user.
pub trait Console {
    /// Writes `text` followed by a newline.
    fn print(&mut self, text: &str) -> TrebuchetResult<()>;

    /// Reads one line, including its line ending if there was one.
    ///
    /// # Errors
    ///
    /// Returns a console error at end of input.
    fn read_line(&mut self) -> TrebuchetResult<String>;

    /// Waits for a single keypress.
    fn read_key(&mut self) -> TrebuchetResult<char>;

    /// Waits for `duration`.
    fn pause(&mut self, duration: Duration);

    /// Clears the screen and homes the cursor.
    fn clear_screen(&mut self) -> TrebuchetResult<()>;
}

/// [`Console`] on the process's stdin and stdout.
#[derive(Debug)]
pub struct TerminalConsole {
    out: Stdout,
}

impl TerminalConsole {
    /// Creates a console on stdin and stdout.
    pub fn new() -> Self {
        Self {
            out: std::io::stdout(),
        }
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for TerminalConsole {
    fn print(&mut self, text: &str) -> TrebuchetResult<()> {
        writeln!(self.out, "{}", text).map_err(ConsoleError::from)?;
        self.out.flush().map_err(ConsoleError::from)?;
        Ok(())
    }

    #[instrument(skip(self))]
    fn read_line(&mut self) -> TrebuchetResult<String> {
        let mut line = String::new();
        let read = std::io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(ConsoleError::from)?;

        if read == 0 {
            return Err(ConsoleError::new("Input closed while waiting for a line").into());
        }
        debug!(bytes = read, "Line read");
        Ok(line)
    }

    #[instrument(skip(self))]
    fn read_key(&mut self) -> TrebuchetResult<char> {
        let _raw = RawMode::enable()?;

        loop {
            let Event::Key(key) = event::read().map_err(ConsoleError::from)? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Err(ConsoleError::new("Interrupted").into());
            }

            debug!(code = ?key.code, "Key read");
            return Ok(key_char(key.code));
        }
    }

    fn pause(&mut self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }

    fn clear_screen(&mut self) -> TrebuchetResult<()> {
        execute!(self.out, Clear(ClearType::All), MoveTo(0, 0)).map_err(ConsoleError::from)?;
        Ok(())
    }
}

/// Raw mode for the lifetime of the guard.
struct RawMode;

impl RawMode {
    fn enable() -> TrebuchetResult<Self> {
        terminal::enable_raw_mode().map_err(ConsoleError::from)?;
        Ok(Self)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        if let Err(e) = terminal::disable_raw_mode() {
            tracing::error!(error = %e, "Failed to leave raw mode");
        }
    }
}

/// The character a key stands for. Keys without one map to NUL.
fn key_char(code: KeyCode) -> char {
    match code {
        KeyCode::Char(c) => c,
        KeyCode::Enter => '\n',
        KeyCode::Tab => '\t',
        KeyCode::Backspace => '\u{8}',
        KeyCode::Esc => '\u{1b}',
        _ => '\0',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_char() {
        assert_eq!(key_char(KeyCode::Char('f')), 'f');
        assert_eq!(key_char(KeyCode::Enter), '\n');
        assert_eq!(key_char(KeyCode::F(1)), '\0');
    }
}
