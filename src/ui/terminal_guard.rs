//! Terminal state guard for guaranteed cleanup.
//!
//! RAII guard that returns the terminal to its normal state on any exit
//! path: normal return, early `?` propagation, or panic (via the hook).

use std::io::{self, Write};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, LeaveAlternateScreen},
};

/// Guard that restores terminal state when dropped.
pub struct TerminalGuard {
    active: bool,
}

impl TerminalGuard {
    /// Create the guard after raw mode and the alternate screen are active,
    /// so Drop knows to undo them.
    pub fn new() -> Self {
        Self { active: true }
    }

    /// Explicit cleanup with error reporting. Drop becomes a no-op after.
    pub fn cleanup(&mut self) -> anyhow::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        restore_terminal()
    }
}

impl Default for TerminalGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.active {
            // Best effort - errors cannot propagate from Drop.
            if let Err(err) = restore_terminal() {
                tracing::debug!(error = %err, "terminal cleanup failed in Drop");
            }
        }
    }
}

fn restore_terminal() -> anyhow::Result<()> {
    disable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, LeaveAlternateScreen)?;
    stdout.flush()?;
    Ok(())
}

/// Install a panic hook that restores the terminal before the panic message
/// prints. Call early in `main()`, before any terminal setup.
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        if let Err(err) = restore_terminal() {
            tracing::debug!(error = %err, "terminal restore failed in panic hook");
        }
        original_hook(panic_info);
    }));
}
