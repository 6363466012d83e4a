use std::io;

use crossterm::{
    cursor, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};

type Step = fn() -> io::Result<()>;

/// Raw mode plus the alternate screen, undone on drop.
///
/// Armed as soon as raw mode is on, including when a later setup step fails.
pub struct TerminalGuard {
    restore: Step,
}

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        Self::acquire(enable_raw_mode, enter_alternate_screen, restore_terminal)
    }

    fn acquire(raw_mode: Step, screen: Step, restore: Step) -> io::Result<Self> {
        raw_mode()?;
        let guard = Self { restore };
        screen()?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = (self.restore)() {
            tracing::warn!("failed to restore terminal: {e}");
        }
    }
}

fn enter_alternate_screen() -> io::Result<()> {
    execute!(io::stdout(), EnterAlternateScreen)
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)
}
