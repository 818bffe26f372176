// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{BlockingInputSource, CommonResult, CrosstermEventResult, KeyHelpError};

/// This struct represents an input device that can be used to read from the terminal.
/// See [`crate::InputDeviceExtMock`] for testing features.
///
/// Reads are blocking: [`InputDevice::next()`] suspends the calling thread until the
/// terminal delivers an event. There is no timeout and no cancellation.
#[allow(missing_debug_implementations)]
pub struct InputDevice {
    pub resource: BlockingInputSource<CrosstermEventResult>,
    /// When `true` the events don't come from a real terminal, so raw mode must not be
    /// touched.
    pub is_mock: bool,
}

impl InputDevice {
    /// Each pull blocks on [`crossterm::event::read()`].
    #[must_use]
    pub fn new_crossterm_event_source() -> InputDevice {
        InputDevice {
            resource: Box::new(std::iter::repeat_with(crossterm::event::read)),
            is_mock: false,
        }
    }
}

impl Default for InputDevice {
    fn default() -> Self { Self::new_crossterm_event_source() }
}

impl InputDevice {
    /// Block until the next event arrives.
    ///
    /// # Errors
    ///
    /// Returns [`KeyHelpError::TerminalIoUnavailable`] if the read fails or if the
    /// input source has no more events.
    pub fn next(&mut self) -> CommonResult<crossterm::event::Event> {
        match self.resource.next() {
            Some(Ok(event)) => Ok(event),
            Some(Err(error)) => Err(KeyHelpError::terminal_io(error).into()),
            None => Err(KeyHelpError::input_exhausted().into()),
        }
    }
}
