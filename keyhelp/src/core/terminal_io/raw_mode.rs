// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Raw mode lets a single key press be read as soon as it is typed, without line
//! buffering and without echoing it back to the display.
//!
//! Prefer [`RawModeGuard`] over calling [`crossterm::terminal::enable_raw_mode()`]
//! directly, so that the terminal is always restored, including when an error is
//! returned with `?` or a panic unwinds.

use crate::{CommonResult, KeyHelpError};

/// RAII guard that enables raw mode when created and disables it when dropped.
#[derive(Debug)]
pub struct RawModeGuard;

impl RawModeGuard {
    /// Create a new guard and enable raw mode.
    ///
    /// # Errors
    ///
    /// Returns [`KeyHelpError::TerminalIoUnavailable`] if raw mode can't be enabled,
    /// eg: when stdin is not a TTY.
    pub fn new() -> CommonResult<Self> {
        crossterm::terminal::enable_raw_mode().map_err(KeyHelpError::terminal_io)?;
        tracing::trace!(message = "Raw mode enabled");
        Ok(RawModeGuard)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        drop(crossterm::terminal::disable_raw_mode());
        tracing::trace!(message = "Raw mode disabled");
    }
}
