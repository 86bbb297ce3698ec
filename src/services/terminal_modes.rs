//! Terminal setup and teardown.
//!
//! [`TerminalModes::enable`] switches the terminal into the state the
//! portfolio draws in. Every mode that was switched on is remembered, and
//! [`TerminalModes::undo`] (or `Drop`) switches them off in reverse order.

use anyhow::Result;
use crossterm::{
    cursor::{Hide, Show},
    event::{DisableMouseCapture, EnableMouseCapture},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use std::io::{self, stdout, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    RawMode,
    AlternateScreen,
    /// Clicks on the ID card
    MouseCapture,
    /// The caret is drawn by the view
    HiddenCursor,
}

impl Mode {
    /// Order of activation. Raw mode and the alternate screen are required.
    const SEQUENCE: [Mode; 4] = [
        Mode::RawMode,
        Mode::AlternateScreen,
        Mode::MouseCapture,
        Mode::HiddenCursor,
    ];

    fn is_required(self) -> bool {
        matches!(self, Mode::RawMode | Mode::AlternateScreen)
    }

    fn switch_on(self) -> io::Result<()> {
        match self {
            Mode::RawMode => enable_raw_mode(),
            Mode::AlternateScreen => stdout().execute(EnterAlternateScreen).map(drop),
            Mode::MouseCapture => stdout().execute(EnableMouseCapture).map(drop),
            Mode::HiddenCursor => stdout().execute(Hide).map(drop),
        }
    }

    fn switch_off(self) -> io::Result<()> {
        match self {
            Mode::RawMode => disable_raw_mode(),
            Mode::AlternateScreen => stdout().execute(LeaveAlternateScreen).map(drop),
            Mode::MouseCapture => stdout().execute(DisableMouseCapture).map(drop),
            Mode::HiddenCursor => stdout().execute(Show).map(drop),
        }
    }
}

/// The modes currently switched on, oldest first.
#[derive(Debug, Default)]
pub struct TerminalModes {
    active: Vec<Mode>,
}

impl TerminalModes {
    /// Switch every mode on. Optional modes that fail are skipped with a
    /// warning; if a required one fails, everything already enabled is
    /// undone and the error returned.
    pub fn enable() -> Result<Self> {
        let mut modes = Self::default();

        for mode in Mode::SEQUENCE {
            match mode.switch_on() {
                Ok(()) => {
                    tracing::debug!(?mode, "terminal mode on");
                    modes.active.push(mode);
                }
                Err(e) if mode.is_required() => {
                    tracing::error!(?mode, "failed to enable terminal mode: {}", e);
                    modes.undo();
                    return Err(e.into());
                }
                Err(e) => tracing::warn!(?mode, "skipping terminal mode: {}", e),
            }
        }

        Ok(modes)
    }

    pub fn is_active(&self, mode: Mode) -> bool {
        self.active.contains(&mode)
    }

    /// Switch off everything `enable` switched on, newest first.
    ///
    /// Safe to call more than once.
    pub fn undo(&mut self) {
        while let Some(mode) = self.active.pop() {
            if let Err(e) = mode.switch_off() {
                tracing::warn!(?mode, "failed to restore terminal mode: {}", e);
            }
        }
        let _ = stdout().flush();
    }
}

impl Drop for TerminalModes {
    fn drop(&mut self) {
        self.undo();
    }
}

/// Switch every mode off without knowing which are on.
///
/// For the panic hook, which cannot reach the `TerminalModes` owned by
/// `main`.
pub fn emergency_cleanup() {
    for mode in Mode::SEQUENCE.iter().rev() {
        let _ = mode.switch_off();
    }
    let _ = stdout().flush();
}
