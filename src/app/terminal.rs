use std::{
    io::{self, Stdout},
    ops::{Deref, DerefMut},
    sync::atomic::{AtomicBool, Ordering},
};

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

static HOOK_INSTALLED: AtomicBool = AtomicBool::new(false);

/// Owns the terminal for the lifetime of the UI: raw mode plus the
/// alternate screen on construction, restored on drop and on panic.
pub struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    pub fn new() -> Result<Self> {
        enable_raw_mode().context("enabling raw mode")?;
        execute!(io::stdout(), EnterAlternateScreen).context("entering alternate screen")?;
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))
            .context("initializing the terminal backend")?;
        if !HOOK_INSTALLED.swap(true, Ordering::SeqCst) {
            let inner = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                leave_terminal();
                inner(info);
            }));
        }
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Show may fail if the backend is already gone; restoring the
        // screen still matters more than reporting that.
        let _ = self.terminal.show_cursor();
        leave_terminal();
    }
}

impl Deref for TerminalGuard {
    type Target = Terminal<CrosstermBackend<Stdout>>;

    fn deref(&self) -> &Self::Target {
        &self.terminal
    }
}

impl DerefMut for TerminalGuard {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.terminal
    }
}

fn leave_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
}
