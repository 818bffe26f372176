// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::{Arc, MutexGuard, PoisonError};

use crate::{CommonResult, KeyHelpError, SafeRawTerminal, SendRawTerminal, StdMutex};

pub type LockedOutputDevice<'a> = &'a mut dyn std::io::Write;

/// Macro to simplify locking and getting a mutable reference to the output device.
/// Don't call this again in the same scope, it will deadlock! A safe approach is
/// to use this macro in a separate block scope.
///
/// Usage example:
/// ```
/// use keyhelp::{lock_output_device_as_mut, OutputDevice, LockedOutputDevice};
/// let device = OutputDevice::new_stdout();
/// { // Start a new block scope to avoid deadlock.
///     let mut_ref: LockedOutputDevice<'_> = lock_output_device_as_mut!(device);
///     let _ = mut_ref.write_all(b"Hello, world!\n");
/// } // The lock is released here.
/// ```
#[macro_export]
macro_rules! lock_output_device_as_mut {
    ($device:expr) => {
        &mut *$device.lock()
    };
}

/// This struct represents an output device that can be used to write to the terminal.
/// - It is safe to clone.
/// - To write to it, see [`Self::write_line()`], [`Self::lock()`] or the
///   [`lock_output_device_as_mut`] macro.
#[derive(Clone)]
#[allow(missing_debug_implementations)]
pub struct OutputDevice {
    pub resource: SafeRawTerminal,
    pub is_mock: bool,
}

impl Default for OutputDevice {
    fn default() -> Self { Self::new_stdout() }
}

impl OutputDevice {
    #[must_use]
    pub fn new_stdout() -> Self {
        Self {
            resource: Arc::new(StdMutex::new(std::io::stdout())),
            is_mock: false,
        }
    }
}

impl OutputDevice {
    /// Locks the output device for writing.
    ///
    /// A poisoned mutex is recovered rather than propagated: the inner writer holds no
    /// invariants that a panicking writer could have broken.
    pub fn lock(&self) -> MutexGuard<'_, SendRawTerminal> {
        self.resource.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Write `line` followed by `\n`, then flush.
    ///
    /// # Errors
    ///
    /// Returns [`KeyHelpError::TerminalIoUnavailable`] if the write or flush fails.
    pub fn write_line(&self, line: &str) -> CommonResult<()> {
        let locked_output_device: LockedOutputDevice<'_> =
            lock_output_device_as_mut!(self);
        writeln!(locked_output_device, "{line}").map_err(KeyHelpError::terminal_io)?;
        locked_output_device
            .flush()
            .map_err(KeyHelpError::terminal_io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OutputDeviceExt;

    #[test]
    fn test_stdout_output_device_is_not_mock() {
        let device = OutputDevice::new_stdout();
        assert!(!device.is_mock);
    }

    #[test]
    fn test_write_line_appends_newline() {
        let (device, stdout_mock) = OutputDevice::new_mock();
        device.write_line("first").unwrap();
        device.write_line("").unwrap();
        device.write_line("third").unwrap();
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "first\n\nthird\n");
    }

    #[test]
    fn test_clones_share_the_same_writer() {
        let (device, stdout_mock) = OutputDevice::new_mock();
        let clone = device.clone();
        device.write_line("a").unwrap();
        clone.write_line("b").unwrap();
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "a\nb\n");
    }
}
