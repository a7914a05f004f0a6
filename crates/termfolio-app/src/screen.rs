//! Full-screen session surface on the host terminal.
//!
//! Entering puts the terminal in raw mode on the alternate screen. Leaving
//! happens on drop and also from a panic hook, so a crash still hands the
//! user back a cooked shell with the panic message visible.

use std::io::{self, Write};
use std::sync::Once;

use crossterm::cursor::{MoveTo, Show};
use crossterm::execute;
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
};

static INSTALL_PANIC_RESTORE: Once = Once::new();

/// The alternate screen in raw mode. Restored when dropped.
pub struct Screen {
    _private: (),
}

impl Screen {
    /// Switch the host terminal into session mode.
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let screen = Self { _private: () };
        execute!(io::stdout(), EnterAlternateScreen, Clear(ClearType::All), MoveTo(0, 0))?;
        INSTALL_PANIC_RESTORE.call_once(|| {
            let previous = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                restore();
                previous(info);
            }));
        });
        log::debug!("Entered alternate screen");
        Ok(screen)
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        restore();
    }
}

/// Escape sequences that undo [`Screen::enter`]'s screen changes.
fn write_leave(out: &mut impl Write) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, Show)
}

/// Best effort: there is nowhere left to report a failure.
fn restore() {
    let _ = write_leave(&mut io::stdout());
    let _ = disable_raw_mode();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leave_returns_to_main_screen_with_cursor() {
        let mut buf = Vec::new();
        write_leave(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("\x1b[?1049l"));
        assert!(text.contains("\x1b[?25h"));
    }
}
